// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust source frontend.
//!
//! Lowers a file parsed by [`syn`] into the discovery [`ast`](crate::ast),
//! so plain Rust structs can declare entities:
//!
//! ```rust,ignore
//! pub struct User {
//!     pub id: u64,
//!     #[objectbox("unique")]
//!     pub name: String,
//!     #[objectbox(r#"link:"Group""#)]
//!     pub group: i64,
//! }
//! ```
//!
//! # Type Rendering
//!
//! Rust types are rendered to the canonical type names discovery maps:
//!
//! | Rust | Canonical |
//! |------|-----------|
//! | `String`, `&str` | `string` |
//! | `i64` / `u64` | `int64` / `uint64` |
//! | `isize` / `usize` | `int` / `uint` |
//! | `i32` / `u32` / `char` | `int32` / `uint32` / `rune` |
//! | `i16` / `u16`, `i8` / `u8` | `int16` / `uint16`, `int8` / `uint8` |
//! | `f64` / `f32` | `float64` / `float32` |
//! | `Vec<u8>`, `&[u8]` | `[]byte` |
//! | `Vec<T>` | `[]T` |
//! | `Option<T>`, `Box<T>`, `*const T` | `*T` |
//! | `[T; N]` | `[N]T` |
//!
//! Anything else keeps its token text and is later rejected as an unknown
//! type, with the entity and field named in the error.

use obx_core::{Error, Result};
use quote::ToTokens;
use syn::{
    Attribute, Fields, GenericArgument, Ident, Item, LitStr, PathArguments, Type, ext::IdentExt
};

use crate::{
    ast::{
        Decl, Expr, Field, File, FuncDecl, GenDecl, ImportSpec, Spec, StructType, TypeSpec,
        ValueSpec
    },
    config::FrontendConfig
};

/// Path prefixes that do not change what a type means.
const STD_PREFIXES: &[&str] = &["std", "core", "alloc"];

/// Identifier text without the `r#` raw prefix.
fn ident_text(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn frontend_error(err: syn::Error) -> Error {
    Error::Frontend(err.to_string())
}

/// Render tokens as text, e.g. for array lengths and unknown types.
fn token_text(tokens: &impl ToTokens) -> String {
    tokens.to_token_stream().to_string()
}

/// Canonical name of a primitive or well-known scalar.
fn primitive_name(ident: &str) -> Option<&'static str> {
    let name = match ident {
        "String" | "str" => "string",
        "i64" => "int64",
        "u64" => "uint64",
        "isize" => "int",
        "usize" => "uint",
        "i32" => "int32",
        "u32" => "uint32",
        "char" => "rune",
        "i16" => "int16",
        "u16" => "uint16",
        "i8" => "int8",
        "u8" => "uint8",
        "f64" => "float64",
        "f32" => "float32",
        "bool" => "bool",
        _ => return None
    };
    Some(name)
}

/// First generic type argument of a path segment.
fn first_type_arg(arguments: &PathArguments) -> Option<&Type> {
    if let PathArguments::AngleBracketed(args) = arguments {
        return args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None
        });
    }
    None
}

fn is_u8(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("u8"))
}

/// Sequence of `elem`; `u8` sequences become `[]byte`.
fn lower_sequence(elem: &Type) -> Expr {
    if is_u8(elem) {
        Expr::slice(Expr::ident("byte"))
    } else {
        Expr::slice(lower_type(elem))
    }
}

/// Lower a Rust type to a discovery type expression.
#[must_use]
pub fn lower_type(ty: &Type) -> Expr {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segments: Vec<_> = type_path.path.segments.iter().collect();
            let Some((last, prefix)) = segments.split_last() else {
                return Expr::Ident(token_text(ty));
            };

            let std_path = prefix
                .first()
                .is_none_or(|first| STD_PREFIXES.contains(&first.ident.to_string().as_str()));
            if !std_path {
                return match prefix.last() {
                    Some(package) if last.arguments.is_none() => Expr::Selector {
                        package: ident_text(&package.ident),
                        name:    ident_text(&last.ident)
                    },
                    _ => Expr::Ident(token_text(ty))
                };
            }

            let ident = ident_text(&last.ident);
            match (ident.as_str(), first_type_arg(&last.arguments)) {
                ("Vec", Some(elem)) => lower_sequence(elem),
                ("Option" | "Box", Some(inner)) => Expr::star(lower_type(inner)),
                (name, None) => match primitive_name(name) {
                    Some(canonical) => Expr::ident(canonical),
                    None => Expr::Ident(token_text(ty))
                },
                _ => Expr::Ident(token_text(ty))
            }
        }
        Type::Reference(reference) => lower_type(&reference.elem),
        Type::Slice(slice) => lower_sequence(&slice.elem),
        Type::Array(array) => Expr::Array {
            len:  Some(token_text(&array.len)),
            elem: Box::new(lower_type(&array.elem))
        },
        Type::Ptr(pointer) => Expr::star(lower_type(&pointer.elem)),
        Type::Paren(paren) => lower_type(&paren.elem),
        Type::Group(group) => lower_type(&group.elem),
        _ => Expr::Ident(token_text(ty))
    }
}

/// Raw tag from the configured field attribute.
///
/// # Errors
///
/// Fails if the attribute argument is not a single string literal or the
/// attribute is given twice.
fn field_tag(attrs: &[Attribute], config: &FrontendConfig) -> Result<Option<String>> {
    let mut tag = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(&config.tag_attribute)) {
        if tag.is_some() {
            return Err(frontend_error(syn::Error::new_spanned(
                attr,
                format!("duplicate #[{}] attribute", config.tag_attribute)
            )));
        }
        let lit: LitStr = attr.parse_args().map_err(frontend_error)?;
        tag = Some(lit.value());
    }
    Ok(tag)
}

/// Lower struct fields; positional fields carry no name.
fn lower_fields(fields: &Fields, config: &FrontendConfig) -> Result<StructType> {
    let fields = fields
        .iter()
        .map(|field| {
            Ok(Field {
                names: field.ident.iter().map(ident_text).collect(),
                ty:    lower_type(&field.ty),
                tag:   field_tag(&field.attrs, config)?
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StructType {
        fields
    })
}

fn gen_decl(spec: Spec) -> Decl {
    Decl::Gen(GenDecl {
        specs: vec![spec]
    })
}

fn lower_items(items: &[Item], config: &FrontendConfig, decls: &mut Vec<Decl>) -> Result<()> {
    for item in items {
        match item {
            Item::Struct(item) => decls.push(gen_decl(Spec::Type(TypeSpec {
                name: ident_text(&item.ident),
                ty:   Expr::Struct(lower_fields(&item.fields, config)?)
            }))),
            Item::Type(item) => decls.push(gen_decl(Spec::Type(TypeSpec {
                name: ident_text(&item.ident),
                ty:   lower_type(&item.ty)
            }))),
            Item::Const(item) => decls.push(gen_decl(Spec::Value(ValueSpec {
                names: vec![ident_text(&item.ident)],
                ty:    Some(lower_type(&item.ty))
            }))),
            Item::Static(item) => decls.push(gen_decl(Spec::Value(ValueSpec {
                names: vec![ident_text(&item.ident)],
                ty:    Some(lower_type(&item.ty))
            }))),
            Item::Use(item) => decls.push(gen_decl(Spec::Import(ImportSpec {
                path: token_text(&item.tree)
            }))),
            Item::Fn(item) => decls.push(Decl::Func(FuncDecl {
                name: ident_text(&item.sig.ident)
            })),
            Item::Mod(item) => {
                if let Some((_, content)) = &item.content {
                    lower_items(content, config, decls)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Lower a parsed Rust file.
///
/// # Errors
///
/// Returns [`Error::Frontend`] for malformed tag attributes.
pub fn lower_file(file: &syn::File, config: &FrontendConfig) -> Result<File> {
    let mut decls = Vec::new();
    lower_items(&file.items, config, &mut decls)?;
    Ok(File {
        package: config.package.clone(),
        decls
    })
}

/// Parse Rust source text and lower it.
///
/// # Errors
///
/// Returns [`Error::Frontend`] for syntax errors and malformed tag
/// attributes.
pub fn parse_source(source: &str, config: &FrontendConfig) -> Result<File> {
    let file = syn::parse_file(source).map_err(frontend_error)?;
    lower_file(&file, config)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn render(ty: Type) -> String {
        lower_type(&ty).to_string()
    }

    #[test]
    fn renders_primitives() {
        assert_eq!(render(parse_quote!(u64)), "uint64");
        assert_eq!(render(parse_quote!(i64)), "int64");
        assert_eq!(render(parse_quote!(usize)), "uint");
        assert_eq!(render(parse_quote!(char)), "rune");
        assert_eq!(render(parse_quote!(f32)), "float32");
        assert_eq!(render(parse_quote!(String)), "string");
        assert_eq!(render(parse_quote!(&'static str)), "string");
        assert_eq!(render(parse_quote!(std::string::String)), "string");
    }

    #[test]
    fn renders_byte_sequences() {
        assert_eq!(render(parse_quote!(Vec<u8>)), "[]byte");
        assert_eq!(render(parse_quote!(&[u8])), "[]byte");
        assert_eq!(render(parse_quote!(Vec<String>)), "[]string");
    }

    #[test]
    fn renders_wrappers() {
        assert_eq!(render(parse_quote!(Option<i64>)), "*int64");
        assert_eq!(render(parse_quote!(Box<u32>)), "*uint32");
        assert_eq!(render(parse_quote!([i32; 4])), "[4]int32");
    }

    #[test]
    fn renders_foreign_paths() {
        assert_eq!(render(parse_quote!(chrono::DateTime)), "chrono.DateTime");
        assert_eq!(render(parse_quote!(Uuid)), "Uuid");
    }

    #[test]
    fn lowers_struct_with_tags() {
        let file: syn::File = parse_quote! {
            struct User {
                id: u64,
                #[objectbox("unique")]
                name: String
            }
        };
        let lowered = lower_file(&file, &FrontendConfig::default()).unwrap();
        assert_eq!(lowered.package, "main");

        let Decl::Gen(gen_decl) = &lowered.decls[0] else {
            panic!("expected a declaration group");
        };
        let Spec::Type(type_spec) = &gen_decl.specs[0] else {
            panic!("expected a type spec");
        };
        assert_eq!(type_spec.name, "User");
        let Expr::Struct(st) = &type_spec.ty else {
            panic!("expected a struct type");
        };
        assert_eq!(st.fields[0].names, vec!["id".to_string()]);
        assert_eq!(st.fields[0].tag, None);
        assert_eq!(st.fields[1].tag.as_deref(), Some("unique"));
    }

    #[test]
    fn custom_tag_attribute() {
        let file: syn::File = parse_quote! {
            struct User {
                #[db("id")]
                key: u64,
                #[objectbox("unique")]
                other: String
            }
        };
        let config = FrontendConfig::default().with_tag_attribute("db");
        let lowered = lower_file(&file, &config).unwrap();
        let Decl::Gen(gen_decl) = &lowered.decls[0] else {
            panic!("expected a declaration group");
        };
        let Spec::Type(TypeSpec {
            ty: Expr::Struct(st),
            ..
        }) = &gen_decl.specs[0]
        else {
            panic!("expected a struct type spec");
        };
        assert_eq!(st.fields[0].tag.as_deref(), Some("id"));
        assert_eq!(st.fields[1].tag, None);
    }

    #[test]
    fn tuple_struct_fields_have_no_names() {
        let file: syn::File = parse_quote! {
            struct Pair(u64, u64);
        };
        let lowered = lower_file(&file, &FrontendConfig::default()).unwrap();
        let Decl::Gen(gen_decl) = &lowered.decls[0] else {
            panic!("expected a declaration group");
        };
        let Spec::Type(TypeSpec {
            ty: Expr::Struct(st),
            ..
        }) = &gen_decl.specs[0]
        else {
            panic!("expected a struct type spec");
        };
        assert_eq!(st.fields.len(), 2);
        assert!(st.fields.iter().all(|f| f.names.is_empty()));
    }

    #[test]
    fn flattens_inline_modules() {
        let file: syn::File = parse_quote! {
            use std::fmt;
            fn helper() {}
            mod inner {
                pub struct Note { pub id: u64 }
            }
        };
        let lowered = lower_file(&file, &FrontendConfig::default()).unwrap();
        assert_eq!(lowered.decls.len(), 3);
        assert!(matches!(&lowered.decls[1], Decl::Func(f) if f.name == "helper"));
    }

    #[test]
    fn non_string_tag_fails() {
        let file: syn::File = parse_quote! {
            struct User {
                #[objectbox(id)]
                id: u64
            }
        };
        assert!(matches!(
            lower_file(&file, &FrontendConfig::default()),
            Err(Error::Frontend(_))
        ));
    }

    #[test]
    fn duplicate_tag_attribute_fails() {
        let file: syn::File = parse_quote! {
            struct User {
                #[objectbox("id")]
                #[objectbox("unique")]
                id: u64
            }
        };
        let err = lower_file(&file, &FrontendConfig::default()).unwrap_err();
        assert!(err.to_string().contains("duplicate #[objectbox] attribute"));
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        let file: syn::File = parse_quote! {
            struct r#Match {
                id: u64,
                r#type: String
            }
        };
        let lowered = lower_file(&file, &FrontendConfig::default()).unwrap();
        let Decl::Gen(gen_decl) = &lowered.decls[0] else {
            panic!("expected a declaration group");
        };
        let Spec::Type(TypeSpec {
            name,
            ty: Expr::Struct(st)
        }) = &gen_decl.specs[0]
        else {
            panic!("expected a struct type spec");
        };
        assert_eq!(name, "Match");
        assert_eq!(st.fields[1].names, vec!["type".to_string()]);
    }

    #[test]
    fn syntax_errors_are_frontend_errors() {
        assert!(matches!(
            parse_source("struct {", &FrontendConfig::default()),
            Err(Error::Frontend(_))
        ));
    }
}
