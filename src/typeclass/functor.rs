//! Functor type class - mapping over container values.
//!
//! A `Functor` is a container whose value(s) can have a function applied
//! to them while the container's shape is preserved. It is the seam every
//! mappable container in this crate implements, instead of each type
//! carrying an ad hoc `map` of its own shape.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use boxkit::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{Boxed, Functor};
///
/// let doubled = Boxed::new(21).fmap(|n| n * 2);
/// assert_eq!(doubled, Boxed::new(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// Consumes the receiver and returns a new functor wrapping the
    /// transformed value; the original is never mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed or the inner type
    /// does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_transforms_some() {
        let value: Option<i32> = Some(5);
        assert_eq!(value.fmap(|n| n + 1), Some(6));
    }

    #[rstest]
    fn option_fmap_preserves_none() {
        let value: Option<i32> = None;
        assert_eq!(value.fmap(|n| n + 1), None);
    }

    #[rstest]
    fn option_fmap_ref_leaves_original() {
        let value: Option<String> = Some(String::from("hello"));
        let length = value.fmap_ref(|s| s.len());
        assert_eq!(length, Some(5));
        assert_eq!(value, Some(String::from("hello")));
    }

    #[rstest]
    fn option_replace_swaps_value() {
        let value: Option<i32> = Some(5);
        assert_eq!(value.replace("done"), Some("done"));
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-7))]
    #[case(None)]
    fn option_identity_law(#[case] value: Option<i32>) {
        assert_eq!(value.fmap(|x| x), value);
    }
}
