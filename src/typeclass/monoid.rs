//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element: a value `empty` such
//! that combining with it on either side leaves the other operand
//! unchanged.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Of the containers in this crate, [`All`] (identity `All(true)`) and
//! [`Sum`] (identity `Sum(A::default())`) are monoids.
//! [`First`](super::First) is not: its left-absorbing combination admits
//! no identity element.

use super::semigroup::Semigroup;
use super::wrappers::{Addable, All, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{All, Monoid, Semigroup};
///
/// assert_eq!(All::empty().combine(All(false)), All(false));
/// assert_eq!(All(true).combine(All::empty()), All(true));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::{All, Monoid, Sum};
    ///
    /// assert_eq!(All::empty(), All(true));
    /// assert_eq!(Sum::<i32>::empty(), Sum(0));
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a
    /// value (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::{Monoid, Sum};
    ///
    /// let values = vec![Sum(1), Sum(2), Sum(3)];
    /// assert_eq!(Sum::combine_all(values), Sum(6));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::combine_all(empty), Sum(0));
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
}

// =============================================================================
// All Implementation
// =============================================================================

/// All forms a monoid with `true` as the identity.
impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

// =============================================================================
// Sum Implementation
// =============================================================================

/// Sum forms a monoid with the inner type's default as the identity
/// (0 for numbers, the empty string for `String`).
impl<A: Addable + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}


// =============================================================================
// Property-Based Tests
// =============================================================================
