//! Control structures.
//!
//! - [`Either`]: the outcome of a failable computation, `Left` for failure and
//!   `Right` for success
//!
//! # Examples
//!
//! ```rust
//! use reader_either::control::Either;
//!
//! let outcomes = vec![Either::Right(1), Either::Right(2)];
//! let collected: Either<String, Vec<i32>> = outcomes.into_iter().collect();
//! assert_eq!(collected, Either::Right(vec![1, 2]));
//! ```

mod either;

pub use either::Either;
