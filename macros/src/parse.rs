//! Input model for `#[introspect]`.
//!
//! Parses the annotated `enum` item into the two parallel sequences the
//! core consumes — stringized declarations and value expressions — plus
//! the declared underlying type from `#[repr(...)]`.

use std::collections::HashSet;

use proc_macro2::Span;
use quote::ToTokens;
use syn::{Attribute, Expr, Ident, ItemEnum, Visibility};

/// Underlying types the generator accepts.
const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// One declared constant: `Red` or `Green = 5`.
pub struct Entry {
    /// Attributes forwarded to the generated associated constant.
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    /// Explicit value expression, if the declaration carried one.
    pub value: Option<Expr>,
    /// The declaration as raw text, assignment tail included. This is what
    /// the run-time trimming pipeline operates on.
    pub raw_name: String,
}

/// A fully parsed `#[introspect]` input.
pub struct EnumDecl {
    /// Attributes forwarded to the generated struct (`repr` removed).
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    /// The underlying integer type named by `#[repr(...)]`.
    pub repr: Ident,
    pub entries: Vec<Entry>,
}

impl EnumDecl {
    pub fn from_item(item: ItemEnum) -> syn::Result<Self> {
        let mut repr = None;
        let mut attrs = Vec::new();

        for attr in item.attrs {
            if attr.path().is_ident("repr") {
                let ident: Ident = attr.parse_args()?;
                if !INTEGER_REPRS.contains(&ident.to_string().as_str()) {
                    return Err(syn::Error::new_spanned(
                        &ident,
                        format!(
                            "`#[introspect]` requires a primitive integer repr, \
                             found `{ident}`"
                        ),
                    ));
                }
                repr = Some(ident);
            } else {
                attrs.push(attr);
            }
        }

        let repr = repr.ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "`#[introspect]` requires an explicit `#[repr(...)]` naming the \
                 underlying integer type, e.g. `#[repr(i32)]`",
            )
        })?;

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "`#[introspect]` enums cannot be generic",
            ));
        }

        if item.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "no constants defined in enum type",
            ));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(item.variants.len());
        for variant in item.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "`#[introspect]` constants cannot carry fields",
                ));
            }
            if !seen.insert(variant.ident.to_string()) {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    format!("duplicate constant `{}`", variant.ident),
                ));
            }

            let value = variant.discriminant.map(|(_, expr)| expr);
            // Reconstruct the declaration text; trailing assignments are
            // trimmed again at run time, mirroring the stringization the
            // declarations went through.
            let raw_name = match &value {
                Some(expr) => {
                    format!("{} = {}", variant.ident, expr.to_token_stream())
                }
                None => variant.ident.to_string(),
            };

            entries.push(Entry { attrs: variant.attrs, ident: variant.ident, value, raw_name });
        }

        Ok(EnumDecl { attrs, vis: item.vis, ident: item.ident, repr, entries })
    }
}
