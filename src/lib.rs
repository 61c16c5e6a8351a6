//! # enum-lens
//!
//! Introspectable C-style enums with zero runtime overhead.
//!
//! **Compile-time generated enum types with run-time name/value lookup.**
//!
//! ## Architecture
//!
//! `enum-lens` turns an ordinary `enum` declaration into a zero-cost tagged
//! representation — a transparent newtype over its underlying integer type,
//! carrying one associated constant per declared entry — plus the tables
//! and operations needed to introspect it at run time.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Generation: #[introspect] (proc-macro)                           |
//! |  - stringized declarations, resolved value fold, repr validation  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Compile time: range analysis (range::scan_*, range::count_*)     |
//! |  - MIN_INDEX / MAX_INDEX / SIZE as const items                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  First use: name processing (trim::process_names, once per type)  |
//! |  - trimmed, process-lifetime name table behind a one-time cell    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Run time: Introspect operations                                  |
//! |  - values(), names(), desc(), find(), case_find(), valid_*()      |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
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
//! assert_eq!(Color::Green.desc(), Ok("Green"));
//! assert_eq!(Color::find("Blue"), Ok(Color::Blue));
//! assert_eq!(Color::case_find("green"), Ok(Color::Green));
//!
//! let all: Vec<Color> = Color::values().into_iter().collect();
//! assert_eq!(all, vec![Color::Red, Color::Green, Color::Blue]);
//! ```
//!
//! ## What the generated type is (and is not)
//!
//! The generated type supports equality, ordering, and name/value lookup
//! over its closed set of constants. It is deliberately not a number:
//! arithmetic, bitwise, and logical operators do not exist on it, and
//! comparing it against anything but itself is a type error. Conversions
//! between the type and its underlying value (`from_repr`/`to_repr`) are
//! free reinterpretations of the same bits.
//!
//! Unknown underlying values are representable (`from_repr` does not
//! validate); `desc` reports them as [`IntrospectError::InvalidValue`].

// Resolve `::enum_lens` paths in macro expansions inside this crate.
extern crate self as enum_lens;

pub mod introspect;
pub mod iter;
pub mod range;
pub mod trim;

// Re-export key types at the crate root.
pub use introspect::{Integral, Introspect, IntrospectError, Names, Signed, Unsigned, Values};
pub use iter::{FromEntry, Iter, Iterable};
pub use range::Bounds;

// Re-export the generator attribute.
pub use macros::introspect;

// The generated impls name this through `::enum_lens::once_cell`.
#[doc(hidden)]
pub use once_cell;

/// Common items for working with generated types.
pub mod prelude {
    pub use crate::introspect::{Introspect, IntrospectError};
    pub use macros::introspect;
}
