// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field tag parsing.
//!
//! A tag is a space-separated list of annotations, optionally wrapped in
//! matching backticks or double quotes. Only the space character separates
//! tokens; runs of spaces are collapsed. Quoted values are trimmed of
//! surrounding whitespace, so a value may be padded with tabs or newlines
//! but not with spaces:
//!
//! ```text
//! `id`
//! `index:"hash" nameInDb:"user_name"`
//! "link:\"Customer\""
//! ```
//!
//! # Supported Annotations
//!
//! | Annotation | Value | Effect |
//! |------------|-------|--------|
//! | `id` | — | Identity property |
//! | `index` | `""`, `value`, `hash`, `hash64` | Indexed property |
//! | `unique` | — | Unique index |
//! | `nameInDb` | storage name | Overrides the storage name |
//! | `transient` | — | Field is not persisted |
//! | `date` | — | `Long` stored as `Date` |
//! | `link` | target entity | `Long` stored as `Relation` |
//!
//! Names are case-insensitive and stored lowercase. Unknown names are kept
//! but have no effect.

use obx_core::{Annotation, Annotations, PropertyError};

/// Strip one pair of matching backtick or double-quote delimiters.
fn strip_delimiters(tag: &str) -> &str {
    let bytes = tag.as_bytes();
    if bytes.len() > 1
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'`' || bytes[0] == b'"')
    {
        &tag[1..tag.len() - 1]
    } else {
        tag
    }
}

/// Parse one `name` or `name:"value"` token.
fn parse_token(token: &str) -> Result<(String, Annotation), PropertyError> {
    let Some((name, raw)) = token.split_once(':') else {
        return Ok((token.to_lowercase(), Annotation::default()));
    };

    let quoted = raw.len() > 1 && raw.starts_with('"') && raw.ends_with('"');
    if !quoted {
        return Err(PropertyError::InvalidAnnotationValue {
            value: raw.to_string(),
            name:  name.to_string()
        });
    }

    let value = raw[1..raw.len() - 1].trim();
    Ok((name.to_lowercase(), Annotation::new(value)))
}

/// Parse a raw tag literal into annotations.
///
/// An empty or blank tag yields no annotations.
///
/// # Errors
///
/// - [`PropertyError::InvalidAnnotationValue`] for a value that is not
///   enclosed in double quotes
/// - [`PropertyError::DuplicateAnnotation`] for a name given twice, in any
///   letter case
///
/// # Example
///
/// ```rust,ignore
/// let annotations = parse_tag(r#"`index:"hash" unique`"#)?;
/// assert_eq!(annotations["index"].value, "hash");
/// assert!(annotations.contains_key("unique"));
/// ```
pub fn parse_tag(tag: &str) -> Result<Annotations, PropertyError> {
    let mut annotations = Annotations::new();
    let body = strip_delimiters(tag);
    if body.trim().is_empty() {
        return Ok(annotations);
    }

    for token in body.split(' ').filter(|t| !t.is_empty()) {
        let (name, annotation) = parse_token(token)?;
        if annotations.contains_key(&name) {
            return Err(PropertyError::DuplicateAnnotation(name));
        }
        annotations.insert(name, annotation);
    }

    Ok(annotations)
}
