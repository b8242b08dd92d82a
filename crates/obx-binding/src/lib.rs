// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(missing_docs)]

//! # obx-binding
//!
//! One crate, all features. Re-exports:
//! - the entity model from `obx-core` ([`Binding`], [`Entity`],
//!   [`Property`], [`ObType`], [`FbType`], [`ObFlag`])
//! - discovery from `obx-discover` ([`discover`], [`discover_source`],
//!   [`FrontendConfig`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use obx_binding::{FrontendConfig, discover_source};
//!
//! let binding = discover_source(
//!     r#"
//!     pub struct User {
//!         pub id: u64,
//!         #[objectbox("unique")]
//!         pub email: String,
//!     }
//!     "#,
//!     &FrontendConfig::default().with_package("model")
//! )?;
//!
//! let user = binding.entity("User").unwrap();
//! assert_eq!(user.id_property().unwrap().name, "id");
//! ```

pub use obx_core::*;
pub use obx_discover::{FrontendConfig, ast, discover, discover_source, frontend, load_file, parse};
