//! Code generation for `#[introspect]`.
//!
//! The annotated enum is replaced wholesale with a transparent newtype over
//! its underlying type, one associated constant per declared entry, the
//! compile-time tables the core operates on, and the `Introspect` impl.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::Index;

use crate::parse::EnumDecl;

pub fn expand_introspect(decl: EnumDecl) -> TokenStream2 {
    let EnumDecl { attrs, vis, ident, repr, entries } = decl;
    let count = entries.len();

    // Resolve values with native enum defaulting: a bare entry continues
    // from the previous one, the first bare entry starts at zero. The fold
    // runs left to right inside a const block, so explicit entries may be
    // arbitrary const expressions of the underlying type.
    let folds = entries.iter().enumerate().map(|(index, entry)| {
        let slot = Index::from(index);
        match (&entry.value, index) {
            (Some(expr), _) => quote! { values[#slot] = #expr; },
            (None, 0) => quote! { values[0] = 0; },
            (None, _) => {
                let previous = Index::from(index - 1);
                quote! { values[#slot] = values[#previous] + 1; }
            }
        }
    });

    let raw_names = entries.iter().map(|entry| &entry.raw_name);

    let constants = entries.iter().enumerate().map(|(index, entry)| {
        let slot = Index::from(index);
        let entry_attrs = &entry.attrs;
        let entry_ident = &entry.ident;
        quote! {
            #(#entry_attrs)*
            #vis const #entry_ident: #ident = #ident(Self::__RAW_VALUES[#slot]);
        }
    });

    let scan = format_ident!("scan_{}", repr);
    let count_valid = format_ident!("count_valid_{}", repr);

    quote! {
        #(#attrs)*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #vis struct #ident(#repr);

        #[allow(non_upper_case_globals, unused)]
        impl #ident {
            #(#constants)*

            #[doc(hidden)]
            const __RAW_VALUES: [#repr; #count] = {
                let mut values = [0; #count];
                #(#folds)*
                values
            };

            #[doc(hidden)]
            const __RAW_NAMES: [&'static str; #count] = [#(#raw_names),*];

            #[doc(hidden)]
            const __BOUNDS: ::enum_lens::range::Bounds =
                ::enum_lens::range::#scan(&Self::__RAW_VALUES, 1, 0, 0);

            /// Wraps an underlying value. Free reinterpretation, no
            /// validation.
            #vis const fn from_repr(value: #repr) -> Self {
                #ident(value)
            }

            /// Unwraps to the underlying value. Free reinterpretation.
            #vis const fn to_repr(self) -> #repr {
                self.0
            }
        }

        impl ::enum_lens::Introspect for #ident {
            type Repr = #repr;

            const RAW_NAMES: &'static [&'static str] = &Self::__RAW_NAMES;
            const RAW_VALUES: &'static [#repr] = &Self::__RAW_VALUES;
            const SIZE: usize =
                ::enum_lens::range::#count_valid(&Self::__RAW_VALUES, 0);
            const MIN_INDEX: usize = Self::__BOUNDS.min;
            const MAX_INDEX: usize = Self::__BOUNDS.max;

            fn from_repr(repr: #repr) -> Self {
                #ident(repr)
            }

            fn to_repr(self) -> #repr {
                self.0
            }

            fn processed_names() -> &'static [&'static str] {
                static PROCESSED: ::enum_lens::once_cell::sync::OnceCell<
                    &'static [&'static str],
                > = ::enum_lens::once_cell::sync::OnceCell::new();
                *PROCESSED.get_or_init(|| {
                    ::enum_lens::trim::process_names(
                        <#ident as ::enum_lens::Introspect>::RAW_NAMES,
                    )
                })
            }
        }

        impl ::enum_lens::FromEntry<#repr> for #ident {
            fn from_entry(entry: &#repr) -> Self {
                #ident(*entry)
            }
        }
    }
}
