// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage flag derivation.
//!
//! Flags are appended in a fixed order:
//!
//! 1. `id` → `ID`
//! 2. `index` → `INDEXED` plus the kind flag, allocates the index
//! 3. `unique` → `UNIQUE`, allocates the index
//! 4. relation → allocates the index, no flag
//!
//! # Index Kinds
//!
//! | Value | Extra flag |
//! |-------|------------|
//! | `""` | — |
//! | `value` | `INDEX_VALUE` |
//! | `hash` | `INDEX_HASH` |
//! | `hash64` | `INDEX_HASH64` |
//!
//! A property owns at most one index, so any two of `index`, `unique` and
//! `link` on the same field are rejected.

use obx_core::{ObFlag, Property, PropertyError};
use tracing::warn;

/// Map an `index` annotation value to its kind flag.
///
/// # Errors
///
/// Returns [`PropertyError::UnknownIndexType`] for unrecognized values.
fn index_kind(value: &str) -> Result<Option<ObFlag>, PropertyError> {
    match value.to_lowercase().as_str() {
        "" => Ok(None),
        "value" => Ok(Some(ObFlag::IndexValue)),
        "hash" => Ok(Some(ObFlag::IndexHash)),
        "hash64" => Ok(Some(ObFlag::IndexHash64)),
        _ => Err(PropertyError::UnknownIndexType(value.to_string()))
    }
}

/// Derive storage flags and the index record from annotations and relation.
///
/// # Errors
///
/// - [`PropertyError::UnknownIndexType`] for an unsupported `index` value
/// - [`PropertyError::IndexAlreadyDefined`] when two rules allocate an index
pub fn derive_flags(property: &mut Property) -> Result<(), PropertyError> {
    if property.has_annotation("id") {
        property.add_ob_flag(ObFlag::Id);
    }

    let index_value = property.annotation("index").map(|a| a.value.clone());
    if let Some(value) = index_value {
        let kind = index_kind(&value)?;
        property.add_ob_flag(ObFlag::Indexed);
        if let Some(kind) = kind {
            if kind == ObFlag::IndexValue {
                warn!(
                    property = %property.name,
                    "value index requested, the storage engine may not support it"
                );
            }
            property.add_ob_flag(kind);
        }
        property.set_index()?;
    }

    if property.has_annotation("unique") {
        property.add_ob_flag(ObFlag::Unique);
        property.set_index()?;
    }

    if property.relation.is_some() {
        property.set_index()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use obx_core::{Annotation, FbType, ObType, Relation};

    use super::*;

    fn property(pairs: &[(&str, &str)]) -> Property {
        let mut property = Property::new("Field", "int64", ObType::Long, FbType::Int64);
        property.annotations = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), Annotation::new(*value)))
            .collect();
        property
    }

    #[test]
    fn plain_property_has_no_flags() {
        let mut p = property(&[]);
        derive_flags(&mut p).unwrap();
        assert!(p.ob_flags.is_empty());
        assert!(p.index.is_none());
    }

    #[test]
    fn id_flag() {
        let mut p = property(&[("id", "")]);
        derive_flags(&mut p).unwrap();
        assert_eq!(p.ob_flags, vec![ObFlag::Id]);
        assert!(p.index.is_none());
    }

    #[test]
    fn default_index() {
        let mut p = property(&[("index", "")]);
        derive_flags(&mut p).unwrap();
        assert_eq!(p.ob_flags, vec![ObFlag::Indexed]);
        assert!(p.index.is_some());
    }

    #[test]
    fn index_kinds() {
        for (value, flag) in [
            ("value", ObFlag::IndexValue),
            ("hash", ObFlag::IndexHash),
            ("HASH64", ObFlag::IndexHash64)
        ] {
            let mut p = property(&[("index", value)]);
            derive_flags(&mut p).unwrap();
            assert_eq!(p.ob_flags, vec![ObFlag::Indexed, flag]);
        }
    }

    #[test]
    fn unknown_index_kind_fails() {
        let mut p = property(&[("index", "btree")]);
        assert_eq!(derive_flags(&mut p), Err(PropertyError::UnknownIndexType("btree".into())));
    }

    #[test]
    fn unique_allocates_index() {
        let mut p = property(&[("unique", "")]);
        derive_flags(&mut p).unwrap();
        assert_eq!(p.ob_flags, vec![ObFlag::Unique]);
        assert!(p.index.is_some());
    }

    #[test]
    fn relation_allocates_index_without_flag() {
        let mut p = property(&[("link", "User")]);
        p.relation = Some(Relation {
            target: "User".into()
        });
        derive_flags(&mut p).unwrap();
        assert!(p.ob_flags.is_empty());
        assert!(p.index.is_some());
    }

    #[test]
    fn index_and_unique_conflict() {
        let mut p = property(&[("index", ""), ("unique", "")]);
        assert_eq!(derive_flags(&mut p), Err(PropertyError::IndexAlreadyDefined));
    }

    #[test]
    fn unique_relation_conflicts() {
        let mut p = property(&[("unique", ""), ("link", "User")]);
        p.relation = Some(Relation {
            target: "User".into()
        });
        assert_eq!(derive_flags(&mut p), Err(PropertyError::IndexAlreadyDefined));
    }

    #[test]
    fn id_comes_first() {
        let mut p = property(&[("id", ""), ("unique", "")]);
        derive_flags(&mut p).unwrap();
        assert_eq!(p.ob_flags, vec![ObFlag::Id, ObFlag::Unique]);
    }
}
