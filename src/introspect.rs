//! The core type engine binding the generated tables together.
//!
//! `#[introspect]` implements [`Introspect`] for every generated type. The
//! macro supplies the compile-time tables (raw names, resolved values,
//! range bounds) and the per-type lazy name cache; the operations defined
//! here — iteration, lookup in both directions, validity queries — are
//! provided methods over those tables.

use crate::iter::{FromEntry, Iterable};
use thiserror::Error;

/// Lookup failures raised by [`Introspect`] operations.
///
/// Both variants are local to the call that raised them; there is no
/// cross-call error state. Use the `valid_*` queries to avoid the failure
/// path entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntrospectError {
    /// `desc` was given a value that matches no declared constant.
    #[error("value does not match any declared constant")]
    InvalidValue,
    /// `find`/`case_find` was given a name that matches no declared
    /// constant.
    #[error("name does not match any declared constant")]
    UnknownName,
}

/// Type-level marker for signed underlying types.
pub struct Signed;

/// Type-level marker for unsigned underlying types.
pub struct Unsigned;

/// Primitive integer types usable as an underlying type.
///
/// `Sign` ties each type to [`Signed`] or [`Unsigned`] so that signedness
/// mismatches are rejected by the type system rather than checked at run
/// time (see [`Introspect::valid`]).
pub trait Integral: Copy + Eq {
    type Sign;
}

macro_rules! impl_integral {
    ($sign:ty => $($ty:ty),* $(,)?) => {$(
        impl Integral for $ty {
            type Sign = $sign;
        }
    )*};
}

impl_integral!(Signed => i8, i16, i32, i64, i128, isize);
impl_integral!(Unsigned => u8, u16, u32, u64, u128, usize);

/// Iterable over the values of a generated type.
pub type Values<E> = Iterable<<E as Introspect>::Repr, E>;

/// Iterable over the trimmed names of a generated type.
pub type Names = Iterable<&'static str, &'static str>;

/// Run-time introspection over a compile-time-known set of named integer
/// constants.
///
/// Implemented by `#[introspect]`; not intended for manual implementation.
/// All structural data is fixed at compile time and never mutated. The only
/// run-time state is the trimmed name table, built at most once per type on
/// first use and resident for the rest of the process.
///
/// Lookup operations are linear scans over the declaration-order tables,
/// bounded by the declared constant count.
pub trait Introspect: Copy + Eq + Sized + 'static {
    /// The underlying storage type.
    type Repr: Integral;

    /// Stringized declarations, possibly still carrying `= value` tails.
    const RAW_NAMES: &'static [&'static str];

    /// Resolved values, same order and length as [`Self::RAW_NAMES`].
    const RAW_VALUES: &'static [Self::Repr];

    /// Number of declared constants. Always positive.
    const SIZE: usize;

    /// Index (not value) of the smallest declared value.
    const MIN_INDEX: usize;

    /// Index (not value) of the largest declared value.
    const MAX_INDEX: usize;

    /// Wraps an underlying value. Free reinterpretation, no validation.
    fn from_repr(repr: Self::Repr) -> Self;

    /// Unwraps to the underlying value. Free reinterpretation.
    fn to_repr(self) -> Self::Repr;

    /// The trimmed name table, built on first call and cached for the life
    /// of the process.
    ///
    /// Every call, from any thread, observes the same fully-formed table;
    /// the generated impl guards construction with a one-time cell.
    fn processed_names() -> &'static [&'static str];

    /// Iterable over the declared constants, in declaration order.
    fn values() -> Values<Self>
    where
        Self: FromEntry<Self::Repr>,
    {
        Iterable::new(Self::RAW_VALUES)
    }

    /// Iterable over the trimmed constant names, in declaration order.
    ///
    /// Triggers one-time name processing.
    fn names() -> Names {
        Iterable::new(Self::processed_names())
    }

    /// The name of the first declared constant with this value.
    ///
    /// Fails with [`IntrospectError::InvalidValue`] when no declared
    /// constant has the value.
    fn desc(self) -> Result<&'static str, IntrospectError> {
        let names = Self::processed_names();
        let value = self.to_repr();
        Self::RAW_VALUES
            .iter()
            .position(|candidate| *candidate == value)
            .map(|index| names[index])
            .ok_or(IntrospectError::InvalidValue)
    }

    /// The constant whose trimmed name equals `name`, case-sensitively.
    fn find(name: &str) -> Result<Self, IntrospectError> {
        Self::processed_names()
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| Self::from_repr(Self::RAW_VALUES[index]))
            .ok_or(IntrospectError::UnknownName)
    }

    /// Like [`Introspect::find`], but compares names ASCII
    /// case-insensitively.
    fn case_find(name: &str) -> Result<Self, IntrospectError> {
        Self::processed_names()
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| Self::from_repr(Self::RAW_VALUES[index]))
            .ok_or(IntrospectError::UnknownName)
    }

    /// Whether an integral value is acceptable for this type.
    ///
    /// The argument's signedness must match the underlying type's; a
    /// mismatch is a compile error, not a run-time branch. Currently this
    /// reports `true` for every value of an acceptable type, including
    /// values outside the declared set.
    // TODO: check membership in the declared value set instead of
    // accepting everything of the right signedness.
    fn valid<I>(value: I) -> bool
    where
        I: Integral<Sign = <Self::Repr as Integral>::Sign>,
    {
        let _ = value;
        true
    }

    /// Whether `name` matches a declared constant, case-sensitively.
    fn valid_name(name: &str) -> bool {
        Self::find(name).is_ok()
    }

    /// Whether `name` matches a declared constant, ASCII
    /// case-insensitively.
    fn case_valid_name(name: &str) -> bool {
        Self::case_find(name).is_ok()
    }
}
