//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds `empty` to a [`Semigroup`]. Combining anything with `empty`
//! returns it unchanged, which makes folding over an empty collection total.
//! A computation whose success type is a monoid has an identity computation
//! too: it always succeeds with `empty`.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a      // left identity
//! a.combine(T::empty()) == a      // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use reader_either::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("x")), "x");
//! assert_eq!(Vec::<u8>::combine_all(vec![vec![1], vec![2]]), vec![1, 2]);
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::typeclass::Monoid;
    ///
    /// assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
