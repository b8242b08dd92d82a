// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type resolution.
//!
//! Maps the canonical text of a declared field type to the storage engine
//! logical type and the binary buffer encoding, then applies the `date` and
//! `link` refinements.
//!
//! # Type Mapping Table
//!
//! | Declared type | [`ObType`] | [`FbType`] |
//! |---------------|------------|------------|
//! | `string` | `String` | `UOffsetT` |
//! | `int`, `int64` | `Long` | `Int64` |
//! | `uint`, `uint64` | `Long` | `Uint64` |
//! | `int32`, `rune` | `Int` | `Int32` |
//! | `uint32` | `Int` | `Uint32` |
//! | `int16` | `Short` | `Int16` |
//! | `uint16` | `Short` | `Uint16` |
//! | `int8` | `Byte` | `Int8` |
//! | `uint8` | `Byte` | `Uint8` |
//! | `byte` | `Byte` | `Byte` |
//! | `[]byte` | `ByteVector` | `UOffsetT` |
//! | `float64` | `Double` | `Float64` |
//! | `float32` | `Float` | `Float32` |
//! | `bool` | `Bool` | `Bool` |
//!
//! Matching is exact: `*int64`, `[]string` or `Int64` are unknown types.
//!
//! # Refinements
//!
//! Both refinements require the base type to be `Long`, signed or unsigned:
//!
//! - `date` turns `Long` into `Date`
//! - `link:"Target"` turns `Long` into `Relation` and records the target
//!
//! `date` is applied first, so a field carrying both fails the `link` check.

use obx_core::{Annotations, FbType, ObType, PropertyError, Relation};

use crate::ast::Expr;

/// Outcome of resolving one field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Canonical declared type text.
    pub host_type: String,
    /// Storage engine logical type, after refinements.
    pub ob_type:   ObType,
    /// Binary buffer encoding.
    pub fb_type:   FbType,
    /// Relation record for `link` fields.
    pub relation:  Option<Relation>
}

/// Look up the base type pair for canonical type text.
///
/// Returns `None` for unsupported types.
#[must_use]
pub fn map_type_name(text: &str) -> Option<(ObType, FbType)> {
    let pair = match text {
        "string" => (ObType::String, FbType::UOffsetT),
        "int" | "int64" => (ObType::Long, FbType::Int64),
        "uint" | "uint64" => (ObType::Long, FbType::Uint64),
        "int32" | "rune" => (ObType::Int, FbType::Int32),
        "uint32" => (ObType::Int, FbType::Uint32),
        "int16" => (ObType::Short, FbType::Int16),
        "uint16" => (ObType::Short, FbType::Uint16),
        "int8" => (ObType::Byte, FbType::Int8),
        "uint8" => (ObType::Byte, FbType::Uint8),
        "byte" => (ObType::Byte, FbType::Byte),
        "[]byte" => (ObType::ByteVector, FbType::UOffsetT),
        "float64" => (ObType::Double, FbType::Float64),
        "float32" => (ObType::Float, FbType::Float32),
        "bool" => (ObType::Bool, FbType::Bool),
        _ => return None
    };
    Some(pair)
}

/// Resolve a field type with its annotations.
///
/// # Errors
///
/// - [`PropertyError::UnknownType`] if the type text has no mapping
/// - [`PropertyError::InvalidDateType`] for `date` on a non-`Long` type
/// - [`PropertyError::InvalidRelationType`] for `link` on a non-`Long` type
pub fn resolve_type(
    ty: &Expr,
    annotations: &Annotations
) -> Result<ResolvedType, PropertyError> {
    let host_type = ty.to_string();
    let (mut ob_type, fb_type) =
        map_type_name(&host_type).ok_or_else(|| PropertyError::UnknownType(host_type.clone()))?;

    if annotations.contains_key("date") {
        if ob_type != ObType::Long {
            return Err(PropertyError::InvalidDateType(ob_type));
        }
        ob_type = ObType::Date;
    }

    let relation = match annotations.get("link") {
        Some(link) => {
            if ob_type != ObType::Long {
                return Err(PropertyError::InvalidRelationType(ob_type));
            }
            ob_type = ObType::Relation;
            Some(Relation {
                target: link.value.clone()
            })
        }
        None => None
    };

    Ok(ResolvedType {
        host_type,
        ob_type,
        fb_type,
        relation
    })
}
