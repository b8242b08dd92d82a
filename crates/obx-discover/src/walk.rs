// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tree walking and binding assembly.
//!
//! The walker only descends into nodes that can contain an entity
//! declaration and prunes everything else:
//!
//! | Node | Action |
//! |------|--------|
//! | `File`, `GenDecl` | descend into children |
//! | `TypeSpec` | remember its name, descend into its type |
//! | `StructType` | build an entity from the remembered name, then forget it |
//! | anything else | stop |
//!
//! The first error ends the walk. Entities discovered before it stay in the
//! binding, but the pass as a whole has failed.

use obx_core::{Binding, Error, Result};
use tracing::debug;

use crate::{
    ast::{File, Node},
    parse::build_entity
};

/// Walk state for one source unit.
struct EntityLoader<'b> {
    binding:      &'b mut Binding,
    /// Name of the most recent type declaration not yet consumed by a struct.
    current_name: Option<String>
}

impl EntityLoader<'_> {
    fn visit(&mut self, node: Node<'_>) -> Result<()> {
        match node {
            Node::File(file) => {
                for decl in &file.decls {
                    self.visit(decl.into())?;
                }
            }
            Node::GenDecl(gen_decl) => {
                for spec in &gen_decl.specs {
                    self.visit(spec.into())?;
                }
            }
            Node::TypeSpec(type_spec) => {
                self.current_name = Some(type_spec.name.clone());
                self.visit((&type_spec.ty).into())?;
            }
            Node::StructType(st) => {
                let name = self.current_name.take().ok_or(Error::UnnamedStruct)?;
                let entity = build_entity(name, st)?;
                self.binding.entities.push(entity);
            }
            Node::Other => {}
        }
        Ok(())
    }
}

/// Discover all entities of `file` into `binding`.
///
/// Sets the binding's package name from the file, then appends entities in
/// declaration order.
///
/// # Errors
///
/// Returns the first error encountered; see [`Error`] for the taxonomy.
pub fn load_file(binding: &mut Binding, file: &File) -> Result<()> {
    binding.package = file.package.clone();

    let mut loader = EntityLoader {
        binding,
        current_name: None
    };
    loader.visit(Node::File(file))?;

    debug!(
        package = %binding.package,
        entities = binding.entities.len(),
        "discovery finished"
    );
    Ok(())
}

/// Discover all entities of `file` into a new binding.
///
/// # Errors
///
/// Returns the first error encountered; see [`Error`] for the taxonomy.
///
/// # Example
///
/// ```rust,ignore
/// let binding = discover(&file)?;
/// for entity in binding.entities() {
///     println!("{} has {} properties", entity.name, entity.properties().len());
/// }
/// ```
pub fn discover(file: &File) -> Result<Binding> {
    let mut binding = Binding::default();
    load_file(&mut binding, file)?;
    Ok(binding)
}
