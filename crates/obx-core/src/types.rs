// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type tags and storage flags.
//!
//! Every persisted property carries two parallel type descriptions:
//!
//! | Tag | Meaning | Example |
//! |-----|---------|---------|
//! | [`ObType`] | Storage engine logical type | `Long`, `String`, `Relation` |
//! | [`FbType`] | Binary buffer field encoding | `Int64`, `UOffsetT` |
//!
//! plus an ordered list of [`ObFlag`]s describing identity and indexing.
//!
//! All three serialize as their canonical names so a template can use them
//! verbatim when choosing serialization calls.

use std::fmt;

use serde::Serialize;

/// Storage engine logical type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObType {
    /// UTF-8 string.
    String,
    /// 64-bit integer (signed or unsigned).
    Long,
    /// 32-bit integer.
    Int,
    /// 16-bit integer.
    Short,
    /// 8-bit integer.
    Byte,
    /// Raw byte sequence.
    ByteVector,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// Boolean.
    Bool,
    /// Timestamp stored as a `Long`.
    Date,
    /// To-one relation stored as a `Long` target id.
    Relation
}

impl ObType {
    /// Canonical name as understood by the storage engine.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Long => "Long",
            Self::Int => "Int",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::ByteVector => "ByteVector",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::Relation => "Relation"
        }
    }

    /// Whether values of this type live behind an offset in the buffer.
    ///
    /// Such properties need the buffer helper utilities in generated code.
    #[must_use]
    pub const fn is_offset_backed(self) -> bool {
        matches!(self, Self::String | Self::ByteVector)
    }
}

impl fmt::Display for ObType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary buffer physical encoding of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FbType {
    /// Offset to out-of-line data (strings, byte vectors).
    UOffsetT,
    /// Signed 64-bit.
    Int64,
    /// Unsigned 64-bit.
    Uint64,
    /// Signed 32-bit.
    Int32,
    /// Unsigned 32-bit.
    Uint32,
    /// Signed 16-bit.
    Int16,
    /// Unsigned 16-bit.
    Uint16,
    /// Signed 8-bit.
    Int8,
    /// Unsigned 8-bit.
    Uint8,
    /// Single byte.
    Byte,
    /// 64-bit float.
    Float64,
    /// 32-bit float.
    Float32,
    /// Boolean.
    Bool
}

impl FbType {
    /// Canonical encoding name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UOffsetT => "UOffsetT",
            Self::Int64 => "Int64",
            Self::Uint64 => "Uint64",
            Self::Int32 => "Int32",
            Self::Uint32 => "Uint32",
            Self::Int16 => "Int16",
            Self::Uint16 => "Uint16",
            Self::Int8 => "Int8",
            Self::Uint8 => "Uint8",
            Self::Byte => "Byte",
            Self::Float64 => "Float64",
            Self::Float32 => "Float32",
            Self::Bool => "Bool"
        }
    }
}

impl fmt::Display for FbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage flag attached to a property.
///
/// Flags are append-only and keep the order in which they were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObFlag {
    /// Identity property.
    #[serde(rename = "ID")]
    Id,
    /// Indexed property.
    #[serde(rename = "INDEXED")]
    Indexed,
    /// Value index (`index:"value"`).
    ///
    /// Emitted as requested; the storage engine may not accept it.
    #[serde(rename = "INDEX_VALUE")]
    IndexValue,
    /// 32-bit hash index.
    #[serde(rename = "INDEX_HASH")]
    IndexHash,
    /// 64-bit hash index.
    #[serde(rename = "INDEX_HASH64")]
    IndexHash64,
    /// Unique constraint.
    #[serde(rename = "UNIQUE")]
    Unique
}

impl ObFlag {
    /// Canonical flag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Indexed => "INDEXED",
            Self::IndexValue => "INDEX_VALUE",
            Self::IndexHash => "INDEX_HASH",
            Self::IndexHash64 => "INDEX_HASH64",
            Self::Unique => "UNIQUE"
        }
    }
}

impl fmt::Display for ObFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
