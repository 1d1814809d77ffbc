//! `reader_do!` macro for do-notation over `ReaderEither`.
//!
//! The macro builds a record of named fields step by step. Every step can
//! read the fields bound before it, and the whole block stops at the first
//! failure.
//!
//! # Syntax
//!
//! - `name <= computation;` - Bind: runs a computation and records its success
//!   as `name`
//! - `_ <= computation;` - Runs a computation only for its failure
//! - `let name = expression;` - Records a pure value as `name`
//! - `yield expression` - Final value built from the fields
//! - `computation` - Final computation built from the fields
//!
//! Without a final `yield` or computation the block produces the record
//! itself, a tuple of the fields in binding order.
//!
//! # Examples
//!
//! ```rust
//! use reader_either::control::Either;
//! use reader_either::effect::ReaderEither;
//! use reader_either::reader_do;
//!
//! #[derive(Clone)]
//! struct Config { host: String, port: u16 }
//!
//! let address: ReaderEither<Config, String, String> = reader_do! {
//!     host <= ReaderEither::asks(|c: Config| c.host);
//!     port <= ReaderEither::asks(|c: Config| c.port);
//!     _ <= ReaderEither::from_predicate(port, |p| *p != 0, |p| format!("invalid port {p}"));
//!     yield format!("{host}:{port}")
//! };
//!
//! let config = Config { host: "localhost".into(), port: 8080 };
//! assert_eq!(address.run(config), Either::Right("localhost:8080".to_string()));
//! ```
//!
//! # Implementation Notes
//!
//! The fields live in a tuple that grows through
//! [`ReaderEither::bind`](crate::effect::ReaderEither::bind). Each step
//! destructures a clone of the tuple, so earlier fields are in scope by value.
//! Binding one name twice is rejected at compile time.

#![forbid(unsafe_code)]

/// Do-notation for [`ReaderEither`](crate::effect::ReaderEither).
///
/// # Syntax
///
/// ```text
/// reader_do! {
///     name <= computation;      // Bind (earlier names are in scope)
///     _ <= computation;         // Check, value discarded
///     let name = expression;    // Pure field
///     yield expression          // Final value (or a final computation)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use reader_either::control::Either;
/// use reader_either::effect::ReaderEither;
/// use reader_either::reader_do;
///
/// let record: ReaderEither<i32, String, (i32, i32)> = reader_do! {
///     base <= ReaderEither::ask();
///     let doubled = base * 2;
/// };
/// assert_eq!(record.run(4), Either::Right((4, 8)));
/// ```
#[macro_export]
macro_rules! reader_do {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // The record itself
    (@step [$($bound:ident)*] ($accumulated:expr)) => {
        $accumulated
    };

    // yield expression
    (@step [$($bound:ident)*] ($accumulated:expr) yield $value:expr $(;)?) => {
        $accumulated.map(move |__fields| {
            #[allow(unused_variables)]
            let ($($bound,)*) = __fields;
            $value
        })
    };

    // ==========================================================================
    // Steps
    // ==========================================================================

    // _ <= computation; rest
    (@step [$($bound:ident)*] ($accumulated:expr) _ <= $step:expr ; $($rest:tt)*) => {
        $crate::reader_do!(
            @step [$($bound)*]
            ($accumulated.chain_first(move |__fields| {
                #[allow(unused_variables)]
                let ($($bound,)*) = __fields;
                $step
            }))
            $($rest)*
        )
    };

    // name <= computation; rest
    (@step [$($bound:ident)*] ($accumulated:expr) $name:ident <= $step:expr ; $($rest:tt)*) => {
        $crate::reader_do!(
            @step [$($bound)* $name]
            ($accumulated.bind(move |__fields| {
                #[allow(unused_variables)]
                let ($($bound,)*) = ::core::clone::Clone::clone(__fields);
                $step
            }))
            $($rest)*
        )
    };

    // let name = expression; rest
    (@step [$($bound:ident)*] ($accumulated:expr) let $name:ident = $value:expr ; $($rest:tt)*) => {
        $crate::reader_do!(
            @step [$($bound)* $name]
            ($accumulated.map(move |__fields| {
                let ($($bound,)*) = __fields;
                let $name = $value;
                ($($bound,)* $name,)
            }))
            $($rest)*
        )
    };

    // Final computation
    (@step [$($bound:ident)*] ($accumulated:expr) $step:expr $(;)?) => {
        $accumulated.chain(move |__fields| {
            #[allow(unused_variables)]
            let ($($bound,)*) = __fields;
            $step
        })
    };

    // ==========================================================================
    // Entry
    // ==========================================================================

    ($($body:tt)+) => {
        $crate::reader_do!(@step [] ($crate::effect::ReaderEither::unit()) $($body)+)
    };
}
