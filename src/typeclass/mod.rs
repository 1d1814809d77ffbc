//! Type class traits shared by the computation types of this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Semigroup`]: associative combination, used to merge failures
//! - [`Monoid`]: a semigroup with an identity element
//!
//! # Examples
//!
//! ```rust
//! use reader_either::typeclass::{Monoid, Semigroup};
//!
//! let errors = vec![String::from("missing host")];
//! let more = vec![String::from("port out of range")];
//! assert_eq!(errors.combine(more).len(), 2);
//!
//! assert_eq!(Vec::<String>::combine_all(Vec::new()), Vec::<String>::empty());
//! ```

mod higher;
mod monoid;
mod semigroup;

pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
