//! # reader-either
//!
//! Composable computations that read a shared environment and fail with a
//! typed error.
//!
//! ## Overview
//!
//! A [`ReaderEither<R, E, A>`](effect::ReaderEither) is a pure function from an
//! environment `R` to either a failure `E` or a success `A`. The crate
//! provides:
//!
//! - **Type Classes**: `TypeConstructor`, `Semigroup`, `Monoid`
//! - **Control Structures**: the `Either` sum type
//! - **Effect System**: `Reader`, `ReaderEither`, the `MonadThrow` capability,
//!   accumulating validation instances and `reader_do!` do-notation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: Control structures (`Either`)
//! - `effect`: `Reader`, `ReaderEither` and friends
//! - `serde`: `Serialize` / `Deserialize` for `Either`
//! - `tracing`: `ReaderEither::instrument`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use reader_either::prelude::*;
//!
//! #[derive(Clone)]
//! struct Config { threshold: i32 }
//!
//! let classify = |n: i32| {
//!     ReaderEither::<Config, String, i32>::asks(|c: Config| c.threshold).chain(move |t| {
//!         if n < t {
//!             ReaderEither::right(n * 10)
//!         } else {
//!             ReaderEither::left(format!("bad:{n}"))
//!         }
//!     })
//! };
//!
//! let config = Config { threshold: 3 };
//! let all = ReaderEither::traverse_array(vec![1, 2], classify);
//! assert_eq!(all.run(config.clone()), Either::Right(vec![10, 20]));
//!
//! let stopped = ReaderEither::traverse_array(vec![1, 2, 3], classify);
//! assert_eq!(stopped.run(config), Either::Left("bad:3".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use reader_either::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
