// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Binding aggregate.
//!
//! A [`Binding`] is the result of one discovery pass over a source unit: the
//! package name plus every entity found, in declaration order. Templates
//! render generated code straight from it.

use serde::Serialize;

use crate::entity::Entity;

/// Discovered entities of one source unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Binding {
    /// Package the source unit belongs to.
    pub package: String,

    /// Entities in declaration order.
    pub entities: Vec<Entity>
}

impl Binding {
    /// Create an empty binding for a package.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package:  package.into(),
            entities: Vec::new()
        }
    }

    /// Entities in declaration order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access for the model registry.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Find an entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Whether generated code needs the buffer offset helpers.
    ///
    /// True as soon as one property is string or byte-vector backed.
    #[must_use]
    pub fn uses_fb_utils(&self) -> bool {
        self.entities
            .iter()
            .flat_map(|e| e.properties())
            .any(|p| p.ob_type.is_offset_backed())
    }
}
