// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity discovery for generated database bindings.
//!
//! Walks the syntax tree of one source unit, finds named struct
//! declarations, and turns each into a validated [`Entity`](obx_core::Entity)
//! with resolved types, storage flags and index metadata.
//!
//! # Pipeline
//!
//! ```text
//! syntax tree ──► walk ──► parse::build_entity ──┬─► parse_tag
//!                                                ├─► resolve_type
//!                                                └─► derive_flags
//!                      Property ──► Entity ──► Binding
//! ```
//!
//! # Field Tags
//!
//! ```text
//! type User struct {
//!     Id    uint64
//!     Email string `unique`
//!     Name  string `index:"hash" nameInDb:"full_name"`
//!     Group int64  `link:"Group"`
//!     Seen  int64  `date`
//!     Cache string `transient`
//! }
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use obx_discover::{FrontendConfig, discover, frontend};
//!
//! let file = frontend::parse_source(source, &FrontendConfig::default())?;
//! let binding = discover(&file)?;
//! ```
//!
//! The first error aborts the pass; see [`Error`](obx_core::Error).

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod ast;
pub mod config;
pub mod frontend;
pub mod parse;
mod walk;

pub use config::FrontendConfig;
use obx_core::{Binding, Result};
pub use walk::{discover, load_file};

/// Parse Rust source text and discover its entities.
///
/// # Errors
///
/// Returns [`Error::Frontend`](obx_core::Error::Frontend) for source that
/// does not parse, otherwise the first discovery error.
pub fn discover_source(source: &str, config: &FrontendConfig) -> Result<Binding> {
    let file = frontend::parse_source(source, config)?;
    discover(&file)
}
