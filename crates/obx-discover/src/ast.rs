// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Syntax tree consumed by discovery.
//!
//! The tree is produced by a source parser (see [`crate::frontend`] for the
//! Rust one) and only models what discovery needs: declarations, type
//! specifications, struct fields with their raw tags, and type expressions.
//!
//! # Shape
//!
//! ```text
//! File
//! └── decls: Vec<Decl>
//!     ├── Decl::Gen(GenDecl)
//!     │   └── specs: Vec<Spec>
//!     │       ├── Spec::Type(TypeSpec { name, ty: Expr })
//!     │       ├── Spec::Value(ValueSpec)
//!     │       └── Spec::Import(ImportSpec)
//!     └── Decl::Func(FuncDecl)
//! ```
//!
//! # Type Rendering
//!
//! [`Expr`] implements [`Display`](fmt::Display) producing canonical type
//! text, which is what the type resolver matches on:
//!
//! | Expression | Text |
//! |------------|------|
//! | `Ident("uint64")` | `uint64` |
//! | `Array { len: None, elem: byte }` | `[]byte` |
//! | `Star(Selector { time, Time })` | `*time.Time` |
//! | `Map { string, int64 }` | `map[string]int64` |

use std::fmt;

/// One source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    /// Package name.
    pub package: String,
    /// Top-level declarations in source order.
    pub decls:   Vec<Decl>
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// Generic declaration holding type, value or import specs.
    Gen(GenDecl),
    /// Function declaration.
    Func(FuncDecl)
}

/// Generic declaration group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenDecl {
    /// Specs in source order.
    pub specs: Vec<Spec>
}

/// Function declaration. Bodies are irrelevant to discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name.
    pub name: String
}

/// Specification inside a [`GenDecl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    /// Named type definition.
    Type(TypeSpec),
    /// Variable or constant.
    Value(ValueSpec),
    /// Import.
    Import(ImportSpec)
}

/// Named type definition, e.g. `type User struct { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Declared type name.
    pub name: String,
    /// Defining type expression.
    pub ty:   Expr
}

/// Variable or constant specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    /// Declared names.
    pub names: Vec<String>,
    /// Declared type, if any.
    pub ty:    Option<Expr>
}

/// Import specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Imported path.
    pub path: String
}

/// Struct type body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    /// Field groups in declaration order.
    pub fields: Vec<Field>
}

/// Field group of a struct.
///
/// A group may declare several names sharing one type (`X, Y int`) or none
/// at all (embedded fields); discovery accepts exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names.
    pub names: Vec<String>,
    /// Field type.
    pub ty:    Expr,
    /// Raw tag literal including its delimiters, if present.
    pub tag:   Option<String>
}

impl Field {
    /// Create a single-name field without a tag.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Expr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            tag: None
        }
    }

    /// Attach a raw tag literal.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Plain identifier, e.g. `int64`.
    Ident(String),
    /// Qualified identifier, e.g. `time.Time`.
    Selector {
        /// Qualifier.
        package: String,
        /// Selected name.
        name:    String
    },
    /// Pointer, e.g. `*T`.
    Star(Box<Expr>),
    /// Array (`[N]T`) or slice (`[]T`, no length).
    Array {
        /// Length expression text.
        len:  Option<String>,
        /// Element type.
        elem: Box<Expr>
    },
    /// Map, e.g. `map[K]V`.
    Map {
        /// Key type.
        key:   Box<Expr>,
        /// Value type.
        value: Box<Expr>
    },
    /// Channel, e.g. `chan T`.
    Chan(Box<Expr>),
    /// Inline struct type.
    Struct(StructType),
    /// Empty interface.
    Interface,
    /// Function type.
    Func {
        /// Parameter types.
        params:  Vec<Expr>,
        /// Result types.
        results: Vec<Expr>
    },
    /// Variadic parameter, e.g. `...T`.
    Ellipsis(Box<Expr>)
}

impl Expr {
    /// Identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Slice of `elem`.
    #[must_use]
    pub fn slice(elem: Expr) -> Self {
        Self::Array {
            len:  None,
            elem: Box::new(elem)
        }
    }

    /// Pointer to `elem`.
    #[must_use]
    pub fn star(elem: Expr) -> Self {
        Self::Star(Box::new(elem))
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Selector {
                package,
                name
            } => write!(f, "{package}.{name}"),
            Self::Star(elem) => write!(f, "*{elem}"),
            Self::Array {
                len,
                elem
            } => write!(f, "[{}]{elem}", len.as_deref().unwrap_or_default()),
            Self::Map {
                key,
                value
            } => write!(f, "map[{key}]{value}"),
            Self::Chan(elem) => write!(f, "chan {elem}"),
            Self::Struct(st) => {
                f.write_str("struct{")?;
                for (i, field) in st.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    if !field.names.is_empty() {
                        write!(f, "{} ", field.names.join(", "))?;
                    }
                    write!(f, "{}", field.ty)?;
                }
                f.write_str("}")
            }
            Self::Interface => f.write_str("interface{}"),
            Self::Func {
                params,
                results
            } => {
                f.write_str("func(")?;
                write_list(f, params)?;
                f.write_str(")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        write_list(f, many)?;
                        f.write_str(")")
                    }
                }
            }
            Self::Ellipsis(elem) => write!(f, "...{elem}")
        }
    }
}

/// Borrowed view of the node kinds the tree walker distinguishes.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Source unit root.
    File(&'a File),
    /// Declaration group.
    GenDecl(&'a GenDecl),
    /// Named type definition.
    TypeSpec(&'a TypeSpec),
    /// Struct type body.
    StructType(&'a StructType),
    /// Anything that cannot contain an entity declaration.
    Other
}

impl<'a> From<&'a Decl> for Node<'a> {
    fn from(decl: &'a Decl) -> Self {
        match decl {
            Decl::Gen(gen_decl) => Node::GenDecl(gen_decl),
            Decl::Func(_) => Node::Other
        }
    }
}

impl<'a> From<&'a Spec> for Node<'a> {
    fn from(spec: &'a Spec) -> Self {
        match spec {
            Spec::Type(type_spec) => Node::TypeSpec(type_spec),
            Spec::Value(_) | Spec::Import(_) => Node::Other
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Struct(st) => Node::StructType(st),
            _ => Node::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_types() {
        assert_eq!(Expr::ident("uint64").to_string(), "uint64");
        assert_eq!(Expr::slice(Expr::ident("byte")).to_string(), "[]byte");
        let time = Expr::Selector {
            package: "time".into(),
            name:    "Time".into()
        };
        assert_eq!(Expr::star(time).to_string(), "*time.Time");
    }

    #[test]
    fn renders_composite_types() {
        let map = Expr::Map {
            key:   Box::new(Expr::ident("string")),
            value: Box::new(Expr::ident("int64"))
        };
        assert_eq!(map.to_string(), "map[string]int64");

        let array = Expr::Array {
            len:  Some("4".into()),
            elem: Box::new(Expr::ident("int32"))
        };
        assert_eq!(array.to_string(), "[4]int32");
        assert_eq!(Expr::Chan(Box::new(Expr::ident("bool"))).to_string(), "chan bool");
        assert_eq!(Expr::Interface.to_string(), "interface{}");
    }

    #[test]
    fn renders_func_and_struct() {
        let func = Expr::Func {
            params:  vec![Expr::ident("int"), Expr::Ellipsis(Box::new(Expr::ident("string")))],
            results: vec![Expr::ident("error")]
        };
        assert_eq!(func.to_string(), "func(int, ...string) error");

        let multi = Expr::Func {
            params:  vec![],
            results: vec![Expr::ident("int"), Expr::ident("bool")]
        };
        assert_eq!(multi.to_string(), "func() (int, bool)");

        let st = Expr::Struct(StructType {
            fields: vec![Field::new("A", Expr::ident("int"))]
        });
        assert_eq!(st.to_string(), "struct{A int}");
    }

    #[test]
    fn node_kinds() {
        let func = Decl::Func(FuncDecl {
            name: "main".into()
        });
        assert!(matches!(Node::from(&func), Node::Other));

        let spec = Spec::Type(TypeSpec {
            name: "User".into(),
            ty:   Expr::Struct(StructType::default())
        });
        assert!(matches!(Node::from(&spec), Node::TypeSpec(_)));

        let ty = Expr::ident("int");
        assert!(matches!(Node::from(&ty), Node::Other));
    }
}
