//! Value resolution across declaration shapes: explicit bases, negative
//! values, const expressions, duplicate values, and non-default reprs.

use enum_lens::{introspect, Introspect};

#[introspect]
#[repr(usize)]
pub enum Autoincrement {
    A = 1,
    B,
    C,
    D = 20,
    E,
}

#[test]
fn bare_entries_continue_from_the_previous_value() {
    assert_eq!(Autoincrement::A.to_repr(), 1);
    assert_eq!(Autoincrement::B.to_repr(), 2);
    assert_eq!(Autoincrement::C.to_repr(), 3);
    assert_eq!(Autoincrement::D.to_repr(), 20);
    assert_eq!(Autoincrement::E.to_repr(), 21);
    assert_eq!(Autoincrement::MIN_INDEX, 0);
    assert_eq!(Autoincrement::MAX_INDEX, 4);
}

#[introspect]
#[repr(i32)]
enum Depth {
    Bottom = -40,
    Shallow,
    Surface = 0,
}

#[test]
fn negative_values_resolve_with_signed_comparisons() {
    assert_eq!(Depth::Shallow.to_repr(), -39);
    assert_eq!(Depth::MIN_INDEX, 0);
    assert_eq!(Depth::MAX_INDEX, 2);
    assert_eq!(Depth::Bottom.desc(), Ok("Bottom"));
    assert!(Depth::valid(-1));
}

const BASE: u16 = 0x100;

#[introspect]
#[repr(u16)]
enum Offset {
    Zero,
    FromConst = BASE,
    Next,
    Masked = BASE | 0x0F,
}

#[test]
fn explicit_values_may_be_const_expressions() {
    assert_eq!(Offset::FromConst.to_repr(), 0x100);
    assert_eq!(Offset::Next.to_repr(), 0x101);
    assert_eq!(Offset::Masked.to_repr(), 0x10F);
    assert_eq!(Offset::find("FromConst"), Ok(Offset::FromConst));
    // Trimming cuts the declaration at the first `=` or whitespace, no
    // matter what the assigned expression looks like.
    let names: Vec<&str> = Offset::names().into_iter().collect();
    assert_eq!(names, vec!["Zero", "FromConst", "Next", "Masked"]);
}

#[introspect]
#[repr(u8)]
enum Aliased {
    First = 7,
    Second = 7,
    Third = 9,
}

#[test]
fn duplicate_values_resolve_to_the_first_declaration() {
    // desc scans in declaration order, so the shared value reports the
    // first name carrying it.
    assert_eq!(Aliased::Second.desc(), Ok("First"));
    // Lookup by name still reaches the later constant; the two constants
    // compare equal because they share one underlying value.
    assert_eq!(Aliased::find("Second"), Ok(Aliased::First));
    assert_eq!(Aliased::Second, Aliased::First);
    assert_eq!(Aliased::SIZE, 3);
}

#[introspect]
#[repr(isize)]
enum Only {
    Lonely = 3,
}

#[test]
fn single_constant_is_its_own_extreme() {
    assert_eq!(Only::SIZE, 1);
    assert_eq!(Only::MIN_INDEX, 0);
    assert_eq!(Only::MAX_INDEX, 0);
    assert_eq!(Only::values().into_iter().count(), 1);
    assert_eq!(Only::Lonely.desc(), Ok("Lonely"));
}

#[introspect]
#[repr(u64)]
enum Forwarded {
    /// Doc comments on entries are forwarded to the generated constants.
    Keep,
    Drop = 4,
}

#[test]
fn extra_attributes_are_forwarded() {
    assert_eq!(Forwarded::Keep.to_repr(), 0);
    assert_eq!(Forwarded::Drop.to_repr(), 4);
}
