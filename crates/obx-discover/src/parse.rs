// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-declaration parsing for entity discovery.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── annotation.rs - Field tag mini-language → Annotations
//! ├── types.rs      - Declared type text → (ObType, FbType), date/link
//! ├── flags.rs      - Annotations + relation → storage flags, index
//! └── entity/       - Struct declaration → validated Entity
//! ```
//!
//! Data flows strictly upward: the entity builder calls the other three for
//! every field and owns all entity-level invariants.

mod annotation;
mod entity;
mod flags;
mod types;

pub use annotation::parse_tag;
pub use entity::build_entity;
pub use flags::derive_flags;
pub use types::{ResolvedType, map_type_name, resolve_type};
