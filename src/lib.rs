//! # boxkit
//!
//! A minimal algebraic container library providing identity, branching,
//! and monoid containers.
//!
//! ## Overview
//!
//! Every type in this crate is an immutable value wrapper: construct it
//! from a raw value, chain zero or more transformations or combinations,
//! and extract a plain value with a terminal operation. The containers are
//! independent of one another and share only that contract shape.
//!
//! - **[`Boxed`](typeclass::Boxed)**: wraps a single value and supports
//!   sequential transformation (`map`) and extraction (`fold`)
//! - **[`Either`](control::Either)**: a tagged union of a failure path
//!   (`Left`) and a success path (`Right`); transformations apply only on
//!   the success path, so pipelines short-circuit without explicit control
//!   flow
//! - **[`All`](typeclass::All), [`First`](typeclass::First),
//!   [`Sum`](typeclass::Sum)**: monoid containers exposing an associative
//!   `combine` operation
//!
//! The capability seams are traits: [`Functor`](typeclass::Functor) for
//! mapping and [`Semigroup`](typeclass::Semigroup) /
//! [`Monoid`](typeclass::Monoid) for combination.
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits and the monoid containers
//! - `control`: the `Either` branching container
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use boxkit::prelude::*;
//!
//! let shouted = Boxed::new("hello")
//!     .map(str::to_uppercase)
//!     .fold(|s| format!("{s}!"));
//! assert_eq!(shouted, "HELLO!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use boxkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
