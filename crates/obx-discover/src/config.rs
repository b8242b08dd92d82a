// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Frontend configuration.
//!
//! Discovery itself has no knobs. The Rust source frontend needs two pieces
//! of information a Rust file does not carry in a form discovery expects:
//!
//! | Option | Default | Meaning |
//! |--------|---------|---------|
//! | `package` | `"main"` | Package name recorded in the binding |
//! | `tag_attribute` | `"objectbox"` | Field attribute holding the raw tag |
//!
//! The struct deserializes with serde, missing keys take their defaults:
//!
//! ```rust,ignore
//! let config: FrontendConfig = serde_json::from_str(r#"{"package": "model"}"#)?;
//! assert_eq!(config.tag_attribute, "objectbox");
//! ```

use serde::Deserialize;

/// Default package name for Rust sources.
pub const DEFAULT_PACKAGE: &str = "main";

/// Default field attribute name.
pub const DEFAULT_TAG_ATTRIBUTE: &str = "objectbox";

/// Rust frontend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Package name recorded in the binding.
    pub package: String,

    /// Attribute carrying the tag, e.g. `#[objectbox("id")]`.
    pub tag_attribute: String
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            package:       DEFAULT_PACKAGE.to_string(),
            tag_attribute: DEFAULT_TAG_ATTRIBUTE.to_string()
        }
    }
}

impl FrontendConfig {
    /// Set the package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the tag attribute name.
    #[must_use]
    pub fn with_tag_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.tag_attribute = attribute.into();
        self
    }
}
