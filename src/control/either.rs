//! Either type - a branching container with a failure and a success path.
//!
//! `Either<L, R>` wraps a value tagged with one of two states. By
//! convention `Left` carries the failure path and `Right` the success
//! path. The defining rule is that [`map`](Either::map) transforms only a
//! `Right` value; a `Left` passes through every subsequent `map`
//! untouched, so pipelines short-circuit without explicit branching and
//! the error value reaches the final [`fold`](Either::fold) unchanged.
//!
//! Two helpers lift ordinary Rust values into the container:
//! [`from_nullable`](Either::from_nullable) classifies an `Option`, and
//! [`try_catch`](Either::try_catch) captures the failure of a fallible
//! operation. `try_catch` is the only capture boundary the type offers:
//! exactly one level, no retries.
//!
//! # Examples
//!
//! ```rust
//! use boxkit::control::Either;
//!
//! let success = Either::<String, i32>::Right(3)
//!     .map(|x| x + 1)
//!     .fold(|_| 0, |x| x);
//! assert_eq!(success, 4);
//!
//! let failure = Either::<String, i32>::Left(String::from("missing"))
//!     .map(|x| x + 1)
//!     .fold(|e| e, |x| x.to_string());
//! assert_eq!(failure, "missing");
//! ```

use std::fmt;

use crate::typeclass::{Functor, TypeConstructor};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - the type carried on the failure path
/// * `R` - the type carried on the success path
///
/// # Examples
///
/// ```rust
/// use boxkit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(
///     failure.map(|x| x * 2),
///     Either::Left("error".to_string()),
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant; `map` leaves it untouched.
    Left(L),
    /// The success variant; `map` transforms it.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// On `Right(r)`, returns `Right(function(r))`. On `Left(l)`, returns
    /// the `Left` unchanged, ignoring `function`. Once a pipeline enters
    /// the failure variant, every subsequent `map` is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let halved = Either::<String, i32>::Right(4)
    ///     .map(|x| x + 2)
    ///     .map(|x| x / 2);
    /// assert_eq!(halved, Either::Right(3));
    ///
    /// let skipped = Either::<String, i32>::Left("oops".to_string())
    ///     .map(|x| x + 2);
    /// assert_eq!(skipped, Either::Left("oops".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the failure value.
    ///
    /// On `Left(l)`, returns `Left(function(l))`. On `Right(r)`, returns
    /// the `Right` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let renamed = Either::<i32, String>::Left(404).map_left(|code| code + 100);
    /// assert_eq!(renamed, Either::Left(504));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Terminal operation: collapses the either by applying exactly one
    /// of two functions, chosen by the variant tag.
    ///
    /// This is the only way to extract a plain value from both paths at
    /// once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Lifting Helpers
    // =========================================================================

    /// Executes a fallible operation, capturing its failure as a value.
    ///
    /// An `Ok` result becomes `Right`, an `Err` becomes `Left`. This is
    /// the sole capture boundary the type offers: exactly one level, not
    /// a retry policy. Composing two `try_catch` calls through `map`
    /// yields a nested `Either` that is not auto-flattened; fold the
    /// inner value from inside the outer fold's success handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// let parsed: Either<_, i32> = Either::try_catch(|| "42".parse());
    /// assert_eq!(parsed.fold(|_| 0, |n| n), 42);
    ///
    /// let failed: Either<_, i32> = Either::try_catch(|| "nope".parse());
    /// assert!(failed.is_left());
    /// ```
    #[inline]
    pub fn try_catch<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        match operation() {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<R> Either<(), R> {
    /// Classifies a nullable input: a present value becomes `Right`, an
    /// absent one becomes `Left(())`.
    ///
    /// This lifts ordinary optional lookups into the branching container
    /// so downstream code needs no explicit presence checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxkit::control::Either;
    ///
    /// assert_eq!(Either::from_nullable(Some(5)), Either::Right(5));
    /// assert_eq!(Either::from_nullable(None::<i32>), Either::Left(()));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>) -> Self {
        match value {
            Some(present) => Self::Right(present),
            None => Self::Left(()),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`: `Ok(r)` becomes `Right(r)`,
    /// `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`: `Right(r)` becomes `Ok(r)`,
    /// `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Either<(), i32>: Send, Sync, Copy);
