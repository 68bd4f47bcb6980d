//! Capability traits and the containers built on them.
//!
//! This module provides the algebraic vocabulary shared by the containers
//! in this crate:
//!
//! - [`Functor`]: mapping over a container's value
//! - [`Semigroup`]: associative binary combination
//! - [`Monoid`]: a semigroup with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what allows `Functor` to be defined once and
//! implemented by [`Boxed`], [`Either`](crate::control::Either), and
//! `Option` alike.
//!
//! ## Containers
//!
//! - [`Boxed`]: the identity container (construct, `map`, `fold`)
//! - [`All`], [`First`], [`Sum`]: monoid containers, each fixing one
//!   combining rule (logical AND, keep-the-receiver, addition)
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use boxkit::typeclass::{All, Semigroup, Sum};
//!
//! assert_eq!(All(true).combine(All(false)), All(false));
//! assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use boxkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod boxed;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use boxed::Boxed;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Addable, All, First, Sum};
