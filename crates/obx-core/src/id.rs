// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persisted identifier pairs.
//!
//! Discovery never assigns identifiers. They are filled in afterwards by the
//! model registry, which keeps them stable across regenerations.

use std::fmt;

use serde::Serialize;

/// Numeric identifier of a model element.
pub type Id = u32;

/// Globally unique identifier of a model element.
pub type Uid = u64;

/// An `(id, uid)` pair as tracked by the model registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IdUid {
    /// Sequential identifier.
    pub id:  Id,
    /// Unique identifier.
    pub uid: Uid
}

impl IdUid {
    /// Create a new pair.
    #[must_use]
    pub const fn new(id: Id, uid: Uid) -> Self {
        Self {
            id,
            uid
        }
    }

    /// Whether the registry has filled this pair in yet.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.id != 0
    }
}

impl fmt::Display for IdUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.uid)
    }
}
