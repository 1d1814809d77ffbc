//! Environment-dependent computations with typed failure.
//!
//! # Computation Types
//!
//! - [`Reader`]: computations that read a shared environment
//! - [`ReaderEither`]: computations that read a shared environment and either
//!   fail with a typed error or succeed
//!
//! # Capabilities
//!
//! - [`Has`]: access to one capability of a larger environment, used by the
//!   widening (`_w`) combinators
//! - [`MonadThrow`]: `of`, `throw_error` and `chain`, with the helpers in
//!   [`monad_throw`] derived once from them
//!
//! # Failure Policies
//!
//! [`ReaderEither::ap`] and [`ReaderEither::alt`] are fail-fast: the first
//! failure is the one reported. [`ApplicativeValidation`] and
//! [`AltValidation`] combine every failure instead.
//!
//! # Do-Notation with reader_do! Macro
//!
//! ```rust
//! use reader_either::control::Either;
//! use reader_either::effect::ReaderEither;
//! use reader_either::reader_do;
//!
//! let sum: ReaderEither<i32, String, i32> = reader_do! {
//!     x <= ReaderEither::ask();
//!     y <= ReaderEither::right(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(sum.run(5), Either::Right(30));
//! ```

// =============================================================================
// Capabilities
// =============================================================================

mod environment;
pub mod monad_throw;

pub use environment::Has;
pub use monad_throw::MonadThrow;

// =============================================================================
// Computation Types
// =============================================================================

mod reader;
mod reader_either;

pub use reader::Reader;
pub use reader_either::{AltValidation, Append, ApplicativeValidation, ReaderEither};

// =============================================================================
// Do-notation
// =============================================================================

mod reader_do_macro;
