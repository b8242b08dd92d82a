// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for entity discovery.
//!
//! Errors fall into two layers:
//!
//! - [`PropertyError`] — a problem with one field (tag syntax, type, flags,
//!   naming). The entity builder wraps it into [`Error::Property`] together
//!   with the entity and property names.
//! - [`Error`] — everything that aborts a discovery pass.
//!
//! Every error is final for the pass: the first one encountered stops the
//! tree walk and is the only one reported.

use thiserror::Error;

use crate::ObType;

/// Field-level error, reported without entity context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A `name:value` tag token whose value is not double-quoted.
    #[error("invalid annotation value {value} for {name}, expecting `name:\"value\"` format")]
    InvalidAnnotationValue {
        /// Offending value as written.
        value: String,
        /// Annotation name the value belongs to.
        name:  String
    },

    /// The same annotation appears twice in one tag.
    #[error("duplicate annotation {0}")]
    DuplicateAnnotation(String),

    /// The declared type has no storage mapping.
    #[error("unknown type {0}")]
    UnknownType(String),

    /// `date` applied to a non-`Long` type.
    #[error("invalid underlying type ({0}) for date field")]
    InvalidDateType(ObType),

    /// `link` applied to a non-`Long` type.
    #[error("invalid underlying type ({0}) for relation field")]
    InvalidRelationType(ObType),

    /// `index` with a value outside `value`, `hash`, `hash64`.
    #[error("unknown index type {0}")]
    UnknownIndexType(String),

    /// A second index requested for the same property.
    #[error("index is already defined")]
    IndexAlreadyDefined,

    /// `nameInDb` without a value.
    #[error("nameInDb annotation value must not be empty")]
    EmptyNameInDb,

    /// Storage name collides with an earlier property.
    #[error("duplicate name (note that property names are case insensitive)")]
    DuplicateName
}

/// Discovery error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A struct type definition without a preceding name declaration.
    #[error("encountered a struct without a name")]
    UnnamedStruct,

    /// A field group declaring zero or several names.
    #[error("struct {entity} has a field with an invalid number of names, one expected, got {count}")]
    InvalidFieldNames {
        /// Entity name.
        entity: String,
        /// Number of names found.
        count:  usize
    },

    /// Nothing left to persist after dropping transient fields.
    #[error("there are no properties in the entity {entity}")]
    EmptyEntity {
        /// Entity name.
        entity: String
    },

    /// Two fields annotated with `id`.
    #[error("struct {entity} has multiple ID properties - {first} and {second}")]
    MultipleIds {
        /// Entity name.
        entity: String,
        /// Field that claimed identity first.
        first:  String,
        /// Conflicting field.
        second: String
    },

    /// No `id` annotation and no conventional identity field.
    #[error(
        "id field is missing on entity {entity} - either annotate a field with `id` tag or use a \
         uint64 field named 'Id/id/ID'"
    )]
    MissingId {
        /// Entity name.
        entity: String
    },

    /// Several fields qualify for identity inference.
    #[error(
        "id field is ambiguous on entity {entity} - both {first} and {second} qualify, annotate \
         one of them with `id` tag"
    )]
    AmbiguousId {
        /// Entity name.
        entity: String,
        /// First candidate.
        first:  String,
        /// Second candidate.
        second: String
    },

    /// A field-level error with its context.
    #[error("{source} on property {property}, entity {entity}")]
    Property {
        /// Entity name.
        entity:   String,
        /// Declared property name.
        property: String,
        /// Underlying cause.
        source:   PropertyError
    },

    /// The buffer table offset does not fit the 16-bit field.
    #[error("can't calculate vtable offset: property {property} ID {id} is out of range")]
    TableOffsetOverflow {
        /// Declared property name.
        property: String,
        /// Persisted property identifier.
        id:       u32
    },

    /// The source frontend could not lower its input.
    #[error("frontend error: {0}")]
    Frontend(String)
}

impl Error {
    /// Wrap a field-level error with entity and property context.
    #[must_use]
    pub fn property(
        entity: impl Into<String>,
        property: impl Into<String>,
        source: PropertyError
    ) -> Self {
        Self::Property {
            entity: entity.into(),
            property: property.into(),
            source
        }
    }
}

/// Result alias for discovery operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_error_carries_context() {
        let err = Error::property("User", "Name", PropertyError::UnknownType("complex64".into()));
        assert_eq!(err.to_string(), "unknown type complex64 on property Name, entity User");
    }

    #[test]
    fn invalid_type_mentions_logical_type() {
        let err = PropertyError::InvalidDateType(ObType::String);
        assert_eq!(err.to_string(), "invalid underlying type (String) for date field");
    }

    #[test]
    fn multiple_ids_names_both_fields() {
        let err = Error::MultipleIds {
            entity: "User".into(),
            first:  "Id".into(),
            second: "Key".into()
        };
        let message = err.to_string();
        assert!(message.contains("Id"));
        assert!(message.contains("Key"));
    }
}
