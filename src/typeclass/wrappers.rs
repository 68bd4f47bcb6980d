//! Monoid container types, one per combining rule.
//!
//! This module provides newtype wrappers that each fix a single
//! associative combining rule, so the same underlying value can be
//! combined differently depending on which wrapper it is placed in:
//!
//! - [`All`]: logical AND of wrapped booleans (identity: `true`)
//! - [`First`]: keeps the receiver's value, discards the argument
//! - [`Sum`]: `+` of wrapped values (identity: the type's default)
//!
//! # The Addable Trait
//!
//! [`Addable`] names the `+`-style capability `Sum` combines with. It is
//! implemented for the primitive numeric types (addition) and for
//! `String` (concatenation), so the combining rule follows the operand's
//! own `+` semantics while mismatched combinations stay compile errors.

// =============================================================================
// All Wrapper
// =============================================================================

/// A container that combines wrapped booleans with logical AND.
///
/// When used with `Semigroup`, `All(a).combine(All(b))` equals
/// `All(a && b)`. When used with `Monoid`, the identity element is
/// `All(true)`.
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{All, Semigroup};
///
/// assert_eq!(All(true).combine(All(false)), All(false));
/// assert_eq!(All(true).combine(All(true)), All(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

impl All {
    /// Creates a new `All` wrapping the given boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::All;
    ///
    /// let all = All::new(true);
    /// assert!(all.into_inner());
    /// ```
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Consumes the `All` and returns the inner boolean.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }

    /// Returns a reference to the inner boolean.
    #[inline]
    pub const fn as_inner(&self) -> &bool {
        &self.0
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

// Note: Default is not derived for All because the identity element is
// true, not the boolean default false. Use Monoid::empty instead.

// =============================================================================
// First Wrapper
// =============================================================================

/// A container whose combination always keeps the receiver's value.
///
/// When used with `Semigroup`, `First(a).combine(First(b))` equals
/// `First(a)` for every `b`: the left operand wins. The combination is
/// left-absorbing, so `First` has no identity element and no `Monoid`
/// instance.
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{First, Semigroup};
///
/// let winner = First("blah")
///     .combine(First("ice cream"))
///     .combine(First("meta programming"));
/// assert_eq!(winner, First("blah"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub A);

impl<A> First<A> {
    /// Creates a new `First` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::First;
    ///
    /// let first = First::new(42);
    /// assert_eq!(first.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `First` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for First<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A container that combines wrapped values with `+`.
///
/// When used with `Semigroup`, `Sum(a).combine(Sum(b))` equals
/// `Sum(a + b)` under the inner type's [`Addable`] rule: numeric addition
/// for the primitive number types, concatenation for `String`. When used
/// with `Monoid`, the identity element is `Sum(A::default())` (0 for
/// numbers, the empty string for `String`).
///
/// # Examples
///
/// ```rust
/// use boxkit::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
///
/// let text = Sum(String::from("a")).combine(Sum(String::from("b")));
/// assert_eq!(text, Sum(String::from("ab")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::typeclass::Sum;
    ///
    /// let sum = Sum::new(42);
    /// assert_eq!(sum.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Addable Trait
// =============================================================================

/// A capability trait for types that combine with `+` semantics.
///
/// `Sum` requires its inner type to implement `Addable`. The primitive
/// numeric types combine by addition; `String` combines by
/// concatenation.
///
/// # Implementing Addable
///
/// ```rust
/// use boxkit::typeclass::Addable;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// impl Addable for Meters {
///     fn add(self, other: Self) -> Self {
///         Meters(self.0 + other.0)
///     }
/// }
///
/// assert_eq!(Meters(1.5).add(Meters(2.5)), Meters(4.0));
/// ```
pub trait Addable {
    /// Combines two values with the type's `+` rule.
    #[must_use]
    fn add(self, other: Self) -> Self;
}

impl Addable for i8 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for i16 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for i32 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for i64 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for i128 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for isize {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for u8 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for u16 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for u32 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for u64 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for u128 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for usize {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for f32 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for f64 {
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Addable for String {
    fn add(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

static_assertions::assert_impl_all!(All: Send, Sync, Copy);
static_assertions::assert_impl_all!(First<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Sum<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Sum<String>: Send, Sync);
