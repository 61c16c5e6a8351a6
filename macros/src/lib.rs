//! Procedural macros for the enum-lens introspectable enum generator.
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[introspect]` | enum | Generate an introspectable enum type |
//!
//! ## Example
//!
//! ```ignore
//! use enum_lens::{introspect, Introspect};
//!
//! #[introspect]
//! #[repr(i32)]
//! pub enum Color {
//!     Red,
//!     Green = 5,
//!     Blue,
//! }
//!
//! assert_eq!(Color::find("Blue"), Ok(Color::Blue));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod parse;

/// Generate an introspectable enum type from an `enum` declaration.
///
/// The declaration is replaced with a `#[repr(transparent)]` newtype over
/// the type named by `#[repr(...)]`, carrying one associated constant per
/// declared entry. Unspecified values continue from the previous entry,
/// starting at zero, exactly like a native enum. The generated type
/// implements `enum_lens::Introspect`, giving it `values()`, `names()`,
/// `desc()`, `find()`, `case_find()`, and the `valid_*` queries, plus
/// derived equality, ordering, and hashing over the underlying value.
///
/// # Requirements
///
/// - `#[repr(...)]` must name a primitive integer type.
/// - At least one constant must be declared.
/// - Constants cannot carry fields, and names cannot repeat.
///
/// # Usage
///
/// ```ignore
/// #[introspect]
/// #[repr(u8)]
/// pub enum Status {
///     Idle,
///     Busy = 10,
///     Stopped,
/// }
/// ```
#[proc_macro_attribute]
pub fn introspect(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(attr as syn::parse::Nothing);
    let item = parse_macro_input!(item as syn::ItemEnum);

    match parse::EnumDecl::from_item(item) {
        Ok(decl) => expand::expand_introspect(decl).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
