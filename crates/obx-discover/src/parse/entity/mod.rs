// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity building.
//!
//! Turns one named struct declaration into a validated [`Entity`].
//!
//! # Per-Field Steps
//!
//! ```text
//! Field
//!  ├─ exactly one name?            else InvalidFieldNames
//!  ├─ parse tag                    annotation.rs
//!  ├─ transient? ──► dropped, no further checks
//!  ├─ resolve type                 types.rs
//!  ├─ derive flags                 flags.rs
//!  ├─ `id`? ──► identity           second one: MultipleIds
//!  ├─ storage name                 nameInDb or field name
//!  └─ case-insensitive unique name else DuplicateName
//! ```
//!
//! # Entity Checks
//!
//! - at least one property must remain
//! - without an explicit `id`, a `uint64` field named `id` (any case) is
//!   adopted as identity and gets the `ID` flag; none or several such fields
//!   fail the build


use std::collections::HashSet;

use obx_core::{Annotations, Entity, Error, ObFlag, Property, PropertyError, Result};
use tracing::{debug, trace};

use super::{annotation::parse_tag, flags::derive_flags, types::resolve_type};
use crate::ast::{Field, StructType};

/// Accumulates properties of one entity while enforcing its invariants.
struct EntityBuilder {
    entity:   Entity,
    /// Lowercased storage names accepted so far.
    ob_names: HashSet<String>
}

impl EntityBuilder {
    fn new(name: String) -> Self {
        Self {
            entity:   Entity::new(name),
            ob_names: HashSet::new()
        }
    }

    fn property_error(&self, property: &str, source: PropertyError) -> Error {
        Error::property(&self.entity.name, property, source)
    }

    fn add_field(&mut self, field: &Field) -> Result<()> {
        let [name] = field.names.as_slice() else {
            return Err(Error::InvalidFieldNames {
                entity: self.entity.name.clone(),
                count:  field.names.len()
            });
        };

        let annotations = match &field.tag {
            Some(tag) => parse_tag(tag).map_err(|e| self.property_error(name, e))?,
            None => Annotations::new()
        };

        if annotations.contains_key("transient") {
            trace!(entity = %self.entity.name, property = %name, "skipping transient field");
            return Ok(());
        }

        let resolved =
            resolve_type(&field.ty, &annotations).map_err(|e| self.property_error(name, e))?;

        let mut property =
            Property::new(name, resolved.host_type, resolved.ob_type, resolved.fb_type);
        property.annotations = annotations;
        property.relation = resolved.relation;

        derive_flags(&mut property).map_err(|e| self.property_error(name, e))?;

        let is_id = property.has_annotation("id");
        if is_id && let Some(existing) = self.entity.id_property() {
            return Err(Error::MultipleIds {
                entity: self.entity.name.clone(),
                first:  existing.name.clone(),
                second: property.name
            });
        }

        if let Some(name_in_db) = property.annotation("nameindb").map(|a| a.value.clone()) {
            if name_in_db.is_empty() {
                return Err(self.property_error(name, PropertyError::EmptyNameInDb));
            }
            property.ob_name = name_in_db;
        }

        // The storage engine folds names to lowercase.
        if !self.ob_names.insert(property.ob_name.to_lowercase()) {
            return Err(self.property_error(name, PropertyError::DuplicateName));
        }

        trace!(
            entity = %self.entity.name,
            property = %property.name,
            ob_type = %property.ob_type,
            "accepted property"
        );

        let index = self.entity.push_property(property);
        if is_id {
            self.entity.set_id_property(index);
        }

        Ok(())
    }

    /// Adopt the conventional `id` field when none was annotated.
    fn infer_id_property(&mut self) -> Result<()> {
        let candidates: Vec<usize> = self
            .entity
            .properties()
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.name.eq_ignore_ascii_case("id") && p.host_type.eq_ignore_ascii_case("uint64")
            })
            .map(|(i, _)| i)
            .collect();

        match candidates.as_slice() {
            [index] => {
                let index = *index;
                if let Some(property) = self.entity.properties_mut().nth(index) {
                    property.add_ob_flag(ObFlag::Id);
                }
                self.entity.set_id_property(index);
                debug!(
                    entity = %self.entity.name,
                    property = %self.entity.properties()[index].name,
                    "inferred identity property"
                );
                Ok(())
            }
            [] => Err(Error::MissingId {
                entity: self.entity.name.clone()
            }),
            [first, second, ..] => Err(Error::AmbiguousId {
                entity: self.entity.name.clone(),
                first:  self.entity.properties()[*first].name.clone(),
                second: self.entity.properties()[*second].name.clone()
            })
        }
    }

    fn finish(mut self) -> Result<Entity> {
        if self.entity.properties().is_empty() {
            return Err(Error::EmptyEntity {
                entity: self.entity.name
            });
        }

        if self.entity.id_property().is_none() {
            self.infer_id_property()?;
        }

        Ok(self.entity)
    }
}

/// Build a validated entity from a named struct declaration.
///
/// # Errors
///
/// - [`Error::InvalidFieldNames`] for a field group without exactly one name
/// - [`Error::Property`] for tag, type, flag or naming problems of a field
/// - [`Error::MultipleIds`] for two `id` annotated fields
/// - [`Error::EmptyEntity`] when no persisted field remains
/// - [`Error::MissingId`] / [`Error::AmbiguousId`] when identity inference
///   finds no or several candidates
///
/// # Example
///
/// ```rust,ignore
/// let entity = build_entity("User", &struct_type)?;
/// let id = entity.id_property().expect("validated");
/// ```
pub fn build_entity(name: impl Into<String>, st: &StructType) -> Result<Entity> {
    let mut builder = EntityBuilder::new(name.into());

    for field in &st.fields {
        builder.add_field(field)?;
    }

    let entity = builder.finish()?;
    debug!(
        entity = %entity.name,
        properties = entity.properties().len(),
        "discovered entity"
    );
    Ok(entity)
}
