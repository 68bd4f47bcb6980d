//! Control structures for branching computation.
//!
//! This module provides [`Either`], a value that is one of two variants:
//! a failure path (`Left`) and a success path (`Right`). Transformations
//! apply only on the success path, so a pipeline that enters the failure
//! variant carries its error value unchanged to the final fold without
//! any explicit control flow.
//!
//! # Examples
//!
//! ```rust
//! use boxkit::control::Either;
//!
//! let message = Either::<String, i32>::Right(3)
//!     .map(|x| x + 1)
//!     .map(|x| x * 10)
//!     .fold(|error| error, |x| format!("got {x}"));
//! assert_eq!(message, "got 40");
//! ```

mod either;

pub use either::Either;
