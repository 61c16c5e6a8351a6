//! Read-only iteration over the name and value tables of a generated type.
//!
//! One generic [`Iterable`] serves both `values()` and `names()`: the
//! backing array holds either underlying values or trimmed name strings,
//! and [`FromEntry`] maps an entry to the element the caller sees. For
//! values that mapping is a free reinterpretation of the underlying value
//! as the enum type; for names it is a plain copy of the `&'static str`.
//!
//! The arrays are immutable after construction, so iteration is over a
//! snapshot by definition, restartable, and needs no synchronization.

use core::fmt;
use core::marker::PhantomData;

/// Constructs an iteration element from a backing-array entry.
///
/// Each generated type implements `FromEntry<Repr>` (a zero-cost wrap of
/// the underlying value); name iteration uses the `&'static str` impl
/// below. There is no conversion cost in either case.
pub trait FromEntry<A>: Sized {
    fn from_entry(entry: &A) -> Self;
}

impl FromEntry<&'static str> for &'static str {
    fn from_entry(entry: &&'static str) -> Self {
        *entry
    }
}

/// A read-only view over a name or value array, restricted to the valid
/// index range.
///
/// Returned by each generated type's `values()` and `names()` operations:
///
/// ```ignore
/// for color in Color::values() {
///     // ...
/// }
/// ```
pub struct Iterable<A: 'static, E> {
    array: &'static [A],
    _element: PhantomData<fn(&A) -> E>,
}

impl<A, E> Iterable<A, E> {
    pub(crate) fn new(array: &'static [A]) -> Self {
        Iterable { array, _element: PhantomData }
    }

    /// Number of valid elements — how many times an iterator can be
    /// advanced before it reaches the end.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// An iterator positioned at the first valid index.
    pub fn iter(&self) -> Iter<A, E> {
        Iter { array: self.array, index: 0, _element: PhantomData }
    }
}

impl<A, E> Clone for Iterable<A, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, E> Copy for Iterable<A, E> {}

impl<A: fmt::Debug, E> fmt::Debug for Iterable<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iterable").field("array", &self.array).finish()
    }
}

impl<A, E: FromEntry<A>> IntoIterator for Iterable<A, E> {
    type Item = E;
    type IntoIter = Iter<A, E>;

    fn into_iter(self) -> Iter<A, E> {
        self.iter()
    }
}

impl<A, E: FromEntry<A>> IntoIterator for &Iterable<A, E> {
    type Item = E;
    type IntoIter = Iter<A, E>;

    fn into_iter(self) -> Iter<A, E> {
        self.iter()
    }
}

/// Forward iterator over a name or value array.
///
/// Advancing past the end saturates: once the iterator has reached the end
/// of the array it stays there, and `next()` keeps returning `None` (this
/// is the [`core::iter::FusedIterator`] contract). Two iterators are equal
/// only when they view the same backing array and sit at the same index.
pub struct Iter<A: 'static, E> {
    array: &'static [A],
    index: usize,
    _element: PhantomData<fn(&A) -> E>,
}

impl<A, E: FromEntry<A>> Iterator for Iter<A, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.index < self.array.len() {
            let element = E::from_entry(&self.array[self.index]);
            self.index += 1;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<A, E: FromEntry<A>> ExactSizeIterator for Iter<A, E> {}

impl<A, E: FromEntry<A>> core::iter::FusedIterator for Iter<A, E> {}

impl<A, E> PartialEq for Iter<A, E> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.array, other.array) && self.index == other.index
    }
}

impl<A, E> Eq for Iter<A, E> {}

impl<A, E> Clone for Iter<A, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, E> Copy for Iter<A, E> {}

impl<A: fmt::Debug, E> fmt::Debug for Iter<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("array", &self.array)
            .field("index", &self.index)
            .finish()
    }
}
