// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity model.
//!
//! An [`Entity`] is one discovered struct declaration. Its properties keep
//! declaration order; the identity property is referenced by position rather
//! than by a back-link so the model stays a plain tree.

use serde::Serialize;

use crate::{
    id::{Id, IdUid, Uid},
    property::Property
};

/// One persisted record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Entity name, taken from the type declaration.
    pub name: String,

    /// Persisted identifier, assigned by the model registry.
    pub id: Id,

    /// Persisted unique identifier, assigned by the model registry.
    pub uid: Uid,

    /// Properties in declaration order.
    properties: Vec<Property>,

    /// Position of the identity property in `properties`.
    id_property: Option<usize>,

    /// Last property identifier handed out, assigned by the model registry.
    pub last_property_id: IdUid
}

impl Entity {
    /// Create an empty entity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:             name.into(),
            id:               0,
            uid:              0,
            properties:       Vec::new(),
            id_property:      None,
            last_property_id: IdUid::default()
        }
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Mutable access for the model registry.
    ///
    /// Properties can be edited in place but not reordered or removed, so the
    /// identity position stays valid.
    pub fn properties_mut(&mut self) -> std::slice::IterMut<'_, Property> {
        self.properties.iter_mut()
    }

    /// Append a property and return its position.
    pub fn push_property(&mut self, property: Property) -> usize {
        self.properties.push(property);
        self.properties.len() - 1
    }

    /// Find a property by declared name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The identity property, once designated.
    #[must_use]
    pub fn id_property(&self) -> Option<&Property> {
        self.id_property.and_then(|i| self.properties.get(i))
    }

    /// Position of the identity property.
    #[must_use]
    pub fn id_property_index(&self) -> Option<usize> {
        self.id_property
    }

    /// Designate the property at `index` as identity.
    ///
    /// Out-of-range positions are ignored.
    pub fn set_id_property(&mut self, index: usize) {
        if index < self.properties.len() {
            self.id_property = Some(index);
        }
    }

    /// Whether any property besides the identity property exists.
    ///
    /// Generated code skips field handling entirely when this is `false`.
    #[must_use]
    pub fn has_non_id_property(&self) -> bool {
        (0..self.properties.len()).any(|i| Some(i) != self.id_property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FbType, ObType};

    fn id_field() -> Property {
        Property::new("Id", "uint64", ObType::Long, FbType::Uint64)
    }

    #[test]
    fn new_entity_is_empty() {
        let entity = Entity::new("User");
        assert!(entity.properties().is_empty());
        assert!(entity.id_property().is_none());
        assert!(!entity.last_property_id.is_assigned());
    }

    #[test]
    fn only_id_property() {
        let mut entity = Entity::new("User");
        let index = entity.push_property(id_field());
        entity.set_id_property(index);
        assert_eq!(entity.id_property().map(|p| p.name.as_str()), Some("Id"));
        assert!(!entity.has_non_id_property());
    }

    #[test]
    fn non_id_property_present() {
        let mut entity = Entity::new("User");
        assert_eq!(entity.push_property(id_field()), 0);
        assert_eq!(
            entity.push_property(Property::new("Name", "string", ObType::String, FbType::UOffsetT)),
            1
        );
        entity.set_id_property(0);
        assert!(entity.has_non_id_property());
        assert!(entity.property("Name").is_some());
        assert!(entity.property("name").is_none());
    }

    #[test]
    fn out_of_range_id_is_ignored() {
        let mut entity = Entity::new("User");
        entity.set_id_property(3);
        assert!(entity.id_property_index().is_none());
    }

    #[test]
    fn registry_edits_keep_identity() {
        let mut entity = Entity::new("User");
        entity.push_property(Property::new("Name", "string", ObType::String, FbType::UOffsetT));
        let index = entity.push_property(id_field());
        entity.set_id_property(index);

        for (i, property) in entity.properties_mut().enumerate() {
            property.id = u32::try_from(i).unwrap() + 1;
        }

        let id = entity.id_property().unwrap();
        assert_eq!(id.name, "Id");
        assert_eq!(id.id, 2);
    }
}
