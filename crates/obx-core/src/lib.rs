// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity/property model for generated database bindings.
//!
//! This crate holds the normalized model produced by entity discovery and
//! consumed by code templates. It has no knowledge of source syntax.
//!
//! # Overview
//!
//! ```text
//! Binding
//! ├── package: String
//! └── entities: Vec<Entity>
//!     └── Entity
//!         ├── name, id, uid, last_property_id
//!         ├── id_property (position)
//!         └── properties: Vec<Property>
//!             └── Property
//!                 ├── name, ob_name, id, uid
//!                 ├── annotations: name -> Annotation
//!                 ├── ob_type: ObType, fb_type: FbType, host_type
//!                 ├── ob_flags: Vec<ObFlag>
//!                 ├── relation: Option<Relation>
//!                 └── index: Option<Index>
//! ```
//!
//! # Template Queries
//!
//! - [`Binding::uses_fb_utils`] — any string/byte-vector property present
//! - [`Entity::has_non_id_property`] — anything besides the identity field
//! - [`Property::fb_slot`] / [`Property::fbv_table_offset`] — buffer layout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod entity;
pub mod error;
pub mod id;
pub mod prelude;
pub mod property;
pub mod types;

pub use binding::Binding;
pub use entity::Entity;
pub use error::{Error, PropertyError, Result};
pub use id::{Id, IdUid, Uid};
pub use property::{Annotation, Annotations, Index, Property, Relation};
pub use types::{FbType, ObFlag, ObType};
