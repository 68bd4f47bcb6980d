//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a set together with an associative binary operation. In
//! programming terms, a type `T` is a semigroup if there is a function
//! `combine: (T, T) -> T` that is associative. This is the seam shared by
//! the monoid containers in this crate, instead of each wrapper carrying
//! an ad hoc `concat` of its own shape.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use boxkit::typeclass::{All, First, Semigroup, Sum};
//!
//! assert_eq!(All(true).combine(All(false)), All(false));
//! assert_eq!(First(1).combine(First(2)), First(1));
//! assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
//! ```

use super::wrappers::{Addable, All, First, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::{All, Semigroup};
    ///
    /// assert_eq!(All(true).combine(All(true)), All(true));
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::{Semigroup, Sum};
    ///
    /// let left = Sum(String::from("a"));
    /// let right = Sum(String::from("b"));
    /// assert_eq!(left.combine_ref(&right), Sum(String::from("ab")));
    /// // Original values are still available
    /// assert_eq!(left, Sum(String::from("a")));
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that
    /// returns the identity element for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::{Semigroup, Sum};
    ///
    /// let values = vec![Sum(1), Sum(2), Sum(3)];
    /// assert_eq!(Sum::reduce_all(values), Some(Sum(6)));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// All Implementation
// =============================================================================

/// All forms a semigroup under logical AND.
impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

// =============================================================================
// First Implementation
// =============================================================================

/// First forms a semigroup by keeping the receiver and discarding the
/// argument.
impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

// =============================================================================
// Sum Implementation
// =============================================================================

/// Sum forms a semigroup under the inner type's `+` rule.
impl<A: Addable> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(Addable::add(self.0, other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // All Semigroup Tests
    // =========================================================================

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, false)]
    fn all_combine_is_logical_and(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(All(left).combine(All(right)), All(expected));
    }

    #[rstest]
    fn all_combine_ref_preserves_originals() {
        let left = All(true);
        let right = All(false);
        assert_eq!(left.combine_ref(&right), All(false));
        assert_eq!(left, All(true));
        assert_eq!(right, All(false));
    }

    // =========================================================================
    // First Semigroup Tests
    // =========================================================================

    #[rstest]
    fn first_combine_keeps_receiver() {
        let left = First("blah");
        let right = First("ice cream");
        assert_eq!(left.combine(right), First("blah"));
    }

    #[rstest]
    fn first_combine_chain_keeps_leftmost() {
        let result = First("blah")
            .combine(First("ice cream"))
            .combine(First("meta programming"));
        assert_eq!(result, First("blah"));
    }

    #[rstest]
    fn first_combine_over_numbers() {
        assert_eq!(First(1).combine(First(2)), First(1));
    }

    // =========================================================================
    // Sum Semigroup Tests
    // =========================================================================

    #[rstest]
    fn sum_combine_adds_numbers() {
        assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
    }

    #[rstest]
    fn sum_combine_with_zero() {
        assert_eq!(Sum(42).combine(Sum(0)), Sum(42));
    }

    #[rstest]
    fn sum_combine_negative() {
        assert_eq!(Sum(10).combine(Sum(-3)), Sum(7));
    }

    #[rstest]
    fn sum_combine_concatenates_strings() {
        let result = Sum(String::from("a")).combine(Sum(String::from("b")));
        assert_eq!(result, Sum(String::from("ab")));
    }

    // =========================================================================
    // reduce_all Tests
    // =========================================================================

    #[rstest]
    fn reduce_all_empty_returns_none() {
        let empty: Vec<Sum<i32>> = vec![];
        assert_eq!(Sum::reduce_all(empty), None);
    }

    #[rstest]
    fn reduce_all_single_element() {
        let single = vec![First(7)];
        assert_eq!(First::reduce_all(single), Some(First(7)));
    }

    #[rstest]
    fn reduce_all_multiple_elements() {
        let values = vec![Sum(1), Sum(2), Sum(3)];
        assert_eq!(Sum::reduce_all(values), Some(Sum(6)));
    }

    #[rstest]
    fn reduce_all_over_all() {
        let values = vec![All(true), All(true), All(false)];
        assert_eq!(All::reduce_all(values), Some(All(false)));
    }

    // =========================================================================
    // Associativity Law Tests
    // =========================================================================

    #[rstest]
    fn all_associativity() {
        let left_associated = All(true).combine(All(false)).combine(All(true));
        let right_associated = All(true).combine(All(false).combine(All(true)));
        assert_eq!(left_associated, right_associated);
    }

    #[rstest]
    fn first_associativity() {
        let left_associated = First(1).combine(First(2)).combine(First(3));
        let right_associated = First(1).combine(First(2).combine(First(3)));
        assert_eq!(left_associated, right_associated);
    }

    #[rstest]
    fn sum_associativity() {
        let left_associated = Sum(1).combine(Sum(2)).combine(Sum(3));
        let right_associated = Sum(1).combine(Sum(2).combine(Sum(3)));
        assert_eq!(left_associated, right_associated);
    }

    #[rstest]
    fn sum_string_associativity() {
        let a = || Sum(String::from("a"));
        let b = || Sum(String::from("b"));
        let c = || Sum(String::from("c"));

        let left_associated = a().combine(b()).combine(c());
        let right_associated = a().combine(b().combine(c()));
        assert_eq!(left_associated, right_associated);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
