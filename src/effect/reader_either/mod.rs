//! `ReaderEither` - environment-dependent computations that can fail.
//!
//! A `ReaderEither<R, E, A>` is a pure function `R -> Either<E, A>`. It reads a
//! shared environment `R` and either fails with a typed `E` or succeeds with an
//! `A`. Running it has no side effects and the same environment always gives
//! the same outcome, so a computation can be run any number of times.
//!
//! Combinators are grouped by capability:
//!
//! - Functor / Bifunctor: [`map`](ReaderEither::map),
//!   [`map_left`](ReaderEither::map_left), [`bimap`](ReaderEither::bimap)
//! - Applicative (fail-fast): [`ap`](ReaderEither::ap),
//!   [`map2`](ReaderEither::map2), [`ap_first`](ReaderEither::ap_first)
//! - Monad: [`chain`](ReaderEither::chain),
//!   [`chain_first`](ReaderEither::chain_first),
//!   [`flatten`](ReaderEither::flatten)
//! - Alt: [`alt`](ReaderEither::alt), [`or_else`](ReaderEither::or_else)
//! - Accumulating instances: [`ApplicativeValidation`], [`AltValidation`]
//! - Do-notation and traversal: [`bind`](ReaderEither::bind),
//!   [`traverse_array`](ReaderEither::traverse_array) and the
//!   [`reader_do!`](crate::reader_do) macro
//!
//! Combinators whose names end in `_w` widen: the environment of the result is
//! any type that [`Has`](super::Has) both inputs' environments, and the failure
//! (or success) type is any type both sides convert `Into`.
//!
//! # Examples
//!
//! ```rust
//! use reader_either::effect::ReaderEither;
//!
//! #[derive(Clone)]
//! struct Config { retries: u32 }
//!
//! let retries: ReaderEither<Config, String, u32> = ReaderEither::asks(|c: Config| c.retries);
//! let checked = retries
//!     .filter_or_else(|n| *n <= 5, |n| format!("too many retries: {n}"))
//!     .map(|n| n * 100);
//!
//! assert_eq!(checked.run_result(Config { retries: 3 }), Ok(300));
//! assert_eq!(
//!     checked.run_result(Config { retries: 9 }),
//!     Err("too many retries: 9".to_string())
//! );
//! ```

#![forbid(unsafe_code)]

mod combinators;
#[cfg(feature = "tracing")]
mod instrument;
mod sequence;
mod validation;

use std::fmt;
use std::rc::Rc;

use super::Reader;
use super::environment::{Has, project};
use super::monad_throw::{self, MonadThrow};
use crate::control::Either;
use crate::typeclass::{Monoid, Semigroup, TypeConstructor};

pub use sequence::Append;
pub use validation::{AltValidation, ApplicativeValidation};

/// A computation that reads an environment `R` and fails with `E` or succeeds
/// with `A`.
///
/// Cloning is cheap: clones share the underlying function.
pub struct ReaderEither<R, E, A> {
    run_function: Rc<dyn Fn(R) -> Either<E, A>>,
}

static_assertions::assert_not_impl_any!(ReaderEither<i32, String, i32>: Send, Sync);

// =============================================================================
// Model
// =============================================================================

impl<R, E, A> ReaderEither<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// Creates a computation from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let half: ReaderEither<i32, String, i32> = ReaderEither::new(|n: i32| {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// });
    /// assert_eq!(half.run(8), Either::Right(4));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> Either<E, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: R) -> Either<E, A> {
        (self.run_function)(environment)
    }

    /// Runs the computation and converts the outcome into a `Result`.
    pub fn run_result(&self, environment: R) -> Result<A, E> {
        self.run(environment).into_result()
    }

    /// Wraps a reader whose value already is an `Either`.
    #[must_use]
    pub fn from_reader(reader: Reader<R, Either<E, A>>) -> Self {
        Self::new(move |environment| reader.run(environment))
    }

    /// Exposes the computation as a plain reader of `Either`.
    #[must_use]
    pub fn into_reader(self) -> Reader<R, Either<E, A>> {
        let inner = self.run_function;
        Reader::new(move |environment| inner(environment))
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// A computation that always fails with `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_| Either::Left(error.clone()))
    }

    /// A computation that always succeeds with `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Either::Right(value.clone()))
    }

    /// Same as [`ReaderEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::right(value)
    }

    /// Same as [`ReaderEither::left`].
    pub fn throw_error(error: E) -> Self
    where
        E: Clone,
    {
        Self::left(error)
    }

    /// Lifts a reader into the success slot.
    #[must_use]
    pub fn right_reader(reader: Reader<R, A>) -> Self {
        Self::new(move |environment| Either::Right(reader.run(environment)))
    }

    /// Lifts a reader into the failure slot.
    #[must_use]
    pub fn left_reader(reader: Reader<R, E>) -> Self {
        Self::new(move |environment| Either::Left(reader.run(environment)))
    }

    /// Succeeds with a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(move |environment| Either::Right(projection(environment)))
    }

    /// Lifts an `Either`-returning function into one returning computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let parse = ReaderEither::<(), String, i32>::from_either_k(|text: &str| {
    ///     text.parse::<i32>().map_err(|error| error.to_string()).into()
    /// });
    /// assert_eq!(parse("12").run(()), Either::Right(12));
    /// ```
    pub fn from_either_k<T, F>(function: F) -> impl Fn(T) -> Self
    where
        F: Fn(T) -> Either<E, A>,
        E: Clone,
        A: Clone,
    {
        move |input| {
            let either = function(input);
            Self::new(move |_| either.clone())
        }
    }

    // =========================================================================
    // Destructors
    // =========================================================================

    /// Eliminates the failure layer with one reader per branch.
    ///
    /// Exactly one continuation runs, and it runs against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::effect::{Reader, ReaderEither};
    ///
    /// let checked: ReaderEither<i32, String, i32> = ReaderEither::asks(|n: i32| n * 2);
    /// let report = checked.fold(
    ///     |error| Reader::of(format!("failed: {error}")),
    ///     |value| Reader::asks(move |n: i32| format!("{n} -> {value}")),
    /// );
    /// assert_eq!(report.run(4), "4 -> 8");
    /// ```
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> Reader<R, B>
    where
        F: Fn(E) -> Reader<R, B> + 'static,
        G: Fn(A) -> Reader<R, B> + 'static,
        R: Clone,
        B: 'static,
    {
        let inner = self.run_function;
        Reader::new(move |environment: R| match inner(environment.clone()) {
            Either::Left(error) => on_left(error).run(environment),
            Either::Right(value) => on_right(value).run(environment),
        })
    }

    /// Recovers every failure with a reader, leaving successes as they are.
    pub fn get_or_else<F>(self, on_left: F) -> Reader<R, A>
    where
        F: Fn(E) -> Reader<R, A> + 'static,
        R: Clone,
    {
        let inner = self.run_function;
        Reader::new(move |environment: R| match inner(environment.clone()) {
            Either::Left(error) => on_left(error).run(environment),
            Either::Right(value) => value,
        })
    }

    /// Like [`ReaderEither::get_or_else`], but the fallback may need another
    /// environment and produce another type.
    pub fn get_or_else_w<R2, B, R3, C, F>(self, on_left: F) -> Reader<R3, C>
    where
        F: Fn(E) -> Reader<R2, B> + 'static,
        R: Clone,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        A: Into<C>,
        B: Into<C> + 'static,
        C: 'static,
    {
        let inner = self.run_function;
        Reader::new(
            move |environment: R3| match inner(project::<R, R3>(&environment)) {
                Either::Left(error) => on_left(error).run(project::<R2, R3>(&environment)).into(),
                Either::Right(value) => value.into(),
            },
        )
    }
}

impl<R, E> ReaderEither<R, E, R>
where
    R: 'static,
    E: 'static,
{
    /// Succeeds with the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let environment: ReaderEither<u8, String, u8> = ReaderEither::ask();
    /// assert_eq!(environment.run(7), Either::Right(7));
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(Either::Right)
    }
}

// =============================================================================
// MonadThrow-derived helpers
// =============================================================================

impl<R, E, A> ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: Clone + 'static,
    A: Clone + 'static,
{
    /// Lifts an `Either`; the environment is ignored.
    pub fn from_either(either: Either<E, A>) -> Self {
        monad_throw::from_either::<Self, A>(either)
    }

    /// Lifts a `Result`; the environment is ignored.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::from_either(result.into())
    }

    /// Lifts an `Option`. `on_none` runs only when the option is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let present = ReaderEither::<(), String, i32>::from_option(Some(1), || "missing".into());
    /// let absent = ReaderEither::<(), String, i32>::from_option(None, || "missing".into());
    /// assert_eq!(present.run(()), Either::Right(1));
    /// assert_eq!(absent.run(()), Either::Left("missing".to_string()));
    /// ```
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        monad_throw::from_option::<Self, A, F>(option, on_none)
    }

    /// Succeeds with `value` when `predicate` holds, otherwise fails with
    /// `on_false(value)`.
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        monad_throw::from_predicate::<Self, A, P, F>(value, predicate, on_false)
    }

    /// Like [`ReaderEither::from_predicate`], but `refine` narrows `T` to `A`.
    pub fn from_refinement<T, P, F>(value: T, refine: P, on_false: F) -> Self
    where
        P: FnOnce(T) -> Result<A, T>,
        F: FnOnce(T) -> E,
    {
        monad_throw::from_refinement::<Self, T, A, P, F>(value, refine, on_false)
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<R, E, A> Clone for ReaderEither<R, E, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, E, A> fmt::Display for ReaderEither<R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<ReaderEither>")
    }
}

impl<R, E, A> TypeConstructor for ReaderEither<R, E, A> {
    type Inner = A;
    type WithType<B> = ReaderEither<R, E, B>;
}

impl<R, E, A> MonadThrow for ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: Clone + 'static,
    A: 'static,
{
    type Error = E;

    fn of<B>(value: B) -> ReaderEither<R, E, B>
    where
        B: Clone + 'static,
    {
        ReaderEither::right(value)
    }

    fn throw_error<B>(error: E) -> ReaderEither<R, E, B>
    where
        B: 'static,
    {
        ReaderEither::left(error)
    }

    fn chain<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        B: 'static,
        F: Fn(A) -> ReaderEither<R, E, B> + 'static,
    {
        Self::chain(self, function)
    }
}

/// The apply semigroup: the left-most failure wins, two successes combine.
///
/// See [`ReaderEither::combine_successes`] for the variant where the left-most
/// success wins.
impl<R, E, A> Semigroup for ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: 'static,
    A: Semigroup + 'static,
{
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

impl<R, E, A> Monoid for ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: 'static,
    A: Monoid + Clone + 'static,
{
    fn empty() -> Self {
        Self::right(A::empty())
    }
}
