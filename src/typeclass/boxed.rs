//! The identity container.
//!
//! [`Boxed`] is the simplest container in this crate: it wraps one value
//! and adds no behavior beyond sequential transformation. Its purpose is
//! to turn a series of ordinary function applications into a linear
//! pipeline that ends in a single extraction point.

use super::TypeConstructor;
use super::functor::Functor;

/// An immutable wrapper around a single value.
///
/// A `Boxed` value is built from a raw value, transformed zero or more
/// times with [`map`](Self::map), and collapsed back to a plain value
/// with the terminal [`fold`](Self::fold). Every operation returns a
/// fresh container; the receiver is consumed, never mutated.
///
/// No error states are modeled: a panic raised by a caller-supplied
/// function propagates uncaught.
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::Boxed;
///
/// let result = Boxed::new(" 64 ")
///     .map(str::trim)
///     .map(|s| s.len())
///     .fold(|n| n * 10);
/// assert_eq!(result, 20);
///
/// // Using the tuple-struct syntax
/// let wrapped = Boxed(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Boxed<A>(pub A);

impl<A> Boxed<A> {
    /// Creates a new `Boxed` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Boxed;
    ///
    /// let x = Boxed::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Applies a function to the wrapped value, returning a new container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Boxed;
    ///
    /// let upper = Boxed::new("abc").map(str::to_uppercase);
    /// assert_eq!(upper, Boxed::new(String::from("ABC")));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> B,
    {
        Boxed(function(self.0))
    }

    /// Terminal operation: applies a function to the wrapped value and
    /// returns the plain result, ending the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Boxed;
    ///
    /// let length = Boxed::new(String::from("hello")).fold(|s| s.len());
    /// assert_eq!(length, 5);
    /// ```
    #[inline]
    pub fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A) -> T,
    {
        function(self.0)
    }

    /// Consumes the `Boxed` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Boxed;
    ///
    /// let x = Boxed::new(String::from("hello"));
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Boxed;
    ///
    /// let x = Boxed::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Boxed<A> {
    type Inner = A;
    type WithType<B> = Boxed<B>;
}

impl<A> Functor for Boxed<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Boxed<B>
    where
        F: FnOnce(&A) -> B,
    {
        Boxed(function(&self.0))
    }
}

impl<A> From<A> for Boxed<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

static_assertions::assert_impl_all!(Boxed<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Boxed<String>: Send, Sync);
