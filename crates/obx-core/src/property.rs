// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property model and binary buffer layout queries.
//!
//! A [`Property`] is one persisted field of an entity. Besides its names and
//! type tags it keeps the parsed [`Annotation`]s it was declared with, its
//! storage flags, and optional [`Relation`] and [`Index`] records.
//!
//! # Buffer Layout
//!
//! Properties are stored in binary buffer tables where each field occupies a
//! slot in the vtable. Both coordinates derive from the persisted identifier:
//!
//! | Id | Slot | VTable offset |
//! |----|------|---------------|
//! | 1  | 0    | 4             |
//! | 2  | 1    | 6             |
//! | n  | n-1  | 4 + 2(n-1)    |
//!
//! The offset is written as a 16-bit value; identifiers whose offset would
//! not fit are rejected instead of being truncated.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    error::{Error, PropertyError, Result},
    id::{Id, Uid},
    types::{FbType, ObFlag, ObType}
};

/// Size of the vtable header preceding the first slot.
const VTABLE_HEADER: u64 = 4;

/// Size of one vtable slot.
const VTABLE_SLOT: u64 = 2;

/// Parsed tag annotation.
///
/// Bare annotations such as `id` have an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Annotation value, trimmed; empty for bare flags.
    pub value: String
}

impl Annotation {
    /// Create an annotation with a value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into()
        }
    }
}

/// Annotations keyed by lowercase name.
pub type Annotations = BTreeMap<String, Annotation>;

/// To-one relation declared with `link:"Target"`.
///
/// The target is kept as written; it is not resolved against other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    /// Target entity name.
    pub target: String
}

/// Index metadata of a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Index {
    /// Index identifier, assigned by the model registry.
    pub id:  Id,
    /// Index unique identifier, assigned by the model registry.
    pub uid: Uid
}

/// One persisted field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Declared field name.
    pub name: String,

    /// Name used by the storage engine.
    ///
    /// Defaults to [`Property::name`], overridden by `nameInDb`.
    pub ob_name: String,

    /// Persisted identifier, assigned by the model registry.
    pub id: Id,

    /// Persisted unique identifier, assigned by the model registry.
    pub uid: Uid,

    /// Annotations parsed from the field tag.
    pub annotations: Annotations,

    /// Storage engine logical type.
    pub ob_type: ObType,

    /// Storage flags in derivation order.
    pub ob_flags: Vec<ObFlag>,

    /// Declared type as canonical source text (e.g. `uint64`, `[]byte`).
    pub host_type: String,

    /// Binary buffer encoding.
    pub fb_type: FbType,

    /// Relation target for `link` properties.
    pub relation: Option<Relation>,

    /// Index record for indexed, unique and relation properties.
    pub index: Option<Index>
}

impl Property {
    /// Create a property with resolved types and no flags.
    ///
    /// The storage name starts out equal to the declared name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host_type: impl Into<String>,
        ob_type: ObType,
        fb_type: FbType
    ) -> Self {
        let name = name.into();
        Self {
            ob_name: name.clone(),
            name,
            id: 0,
            uid: 0,
            annotations: Annotations::new(),
            ob_type,
            ob_flags: Vec::new(),
            host_type: host_type.into(),
            fb_type,
            relation: None,
            index: None
        }
    }

    /// Look up an annotation by lowercase name.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.get(name)
    }

    /// Check whether an annotation is present.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.contains_key(name)
    }

    /// Append a storage flag.
    pub fn add_ob_flag(&mut self, flag: ObFlag) {
        self.ob_flags.push(flag);
    }

    /// Check whether a storage flag is set.
    #[must_use]
    pub fn has_flag(&self, flag: ObFlag) -> bool {
        self.ob_flags.contains(&flag)
    }

    /// Check whether this property carries the `ID` flag.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.has_flag(ObFlag::Id)
    }

    /// Allocate the index record.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::IndexAlreadyDefined`] if the property already
    /// has one.
    pub fn set_index(&mut self) -> Result<(), PropertyError> {
        if self.index.is_some() {
            return Err(PropertyError::IndexAlreadyDefined);
        }
        self.index = Some(Index::default());
        Ok(())
    }

    /// Buffer slot number, `id - 1`.
    ///
    /// Wraps for an unassigned identifier, which makes the offset
    /// computation reject it.
    #[must_use]
    pub const fn fb_slot(&self) -> u32 {
        self.id.wrapping_sub(1)
    }

    /// Buffer vtable offset, `4 + 2 * slot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableOffsetOverflow`] if the offset does not fit 16
    /// bits.
    pub fn try_fbv_table_offset(&self) -> Result<u16> {
        let offset = VTABLE_HEADER + VTABLE_SLOT * u64::from(self.fb_slot());
        u16::try_from(offset).map_err(|_| Error::TableOffsetOverflow {
            property: self.name.clone(),
            id:       self.id
        })
    }

    /// Buffer vtable offset, `4 + 2 * slot`.
    ///
    /// # Panics
    ///
    /// Panics if the offset does not fit 16 bits. The generated code would be
    /// silently wrong otherwise, so there is nothing to recover.
    #[must_use]
    pub fn fbv_table_offset(&self) -> u16 {
        match self.try_fbv_table_offset() {
            Ok(offset) => offset,
            Err(err) => panic!("{err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property_with_id(id: Id) -> Property {
        let mut property = Property::new("Name", "string", ObType::String, FbType::UOffsetT);
        property.id = id;
        property
    }

    #[test]
    fn new_defaults_storage_name() {
        let property = Property::new("Name", "string", ObType::String, FbType::UOffsetT);
        assert_eq!(property.ob_name, "Name");
        assert!(property.ob_flags.is_empty());
        assert!(property.index.is_none());
        assert!(property.relation.is_none());
    }

    #[test]
    fn slots_and_offsets_follow_layout() {
        for (id, slot, offset) in [(1, 0, 4), (2, 1, 6), (3, 2, 8)] {
            let property = property_with_id(id);
            assert_eq!(property.fb_slot(), slot);
            assert_eq!(property.fbv_table_offset(), offset);
        }
    }

    #[test]
    fn largest_offset_fits() {
        // 4 + 2 * 32765 = 65534
        let property = property_with_id(32766);
        assert_eq!(property.fbv_table_offset(), 65534);
    }

    #[test]
    fn offset_overflow_is_an_error() {
        let property = property_with_id(32767);
        assert_eq!(
            property.try_fbv_table_offset(),
            Err(Error::TableOffsetOverflow {
                property: "Name".into(),
                id:       32767
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn offset_overflow_panics() {
        let _ = property_with_id(40000).fbv_table_offset();
    }

    #[test]
    fn unassigned_id_has_no_offset() {
        assert!(property_with_id(0).try_fbv_table_offset().is_err());
    }

    #[test]
    fn set_index_twice_fails() {
        let mut property = property_with_id(1);
        assert!(property.set_index().is_ok());
        assert_eq!(property.set_index(), Err(PropertyError::IndexAlreadyDefined));
    }

    #[test]
    fn flags_keep_order() {
        let mut property = property_with_id(1);
        property.add_ob_flag(ObFlag::Indexed);
        property.add_ob_flag(ObFlag::IndexHash);
        assert_eq!(property.ob_flags, vec![ObFlag::Indexed, ObFlag::IndexHash]);
        assert!(property.has_flag(ObFlag::IndexHash));
        assert!(!property.is_id());
    }
}
