//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors like `Option<_>` or
//! `Boxed<_>` directly. [`TypeConstructor`] works around this with a GAT:
//! an implementor names its current inner type and how to rebuild itself
//! around a different one. The [`Functor`](super::Functor) trait is
//! defined on top of this.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors such as
/// `Option<_>`, `Boxed<_>`, or `Either<L, _>`.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` should be
/// equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use boxkit::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Boxed<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Boxed<i32>`, `WithType<String>` is
    /// `Boxed<String>`. The constraint keeps the result usable as a type
    /// constructor itself so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
