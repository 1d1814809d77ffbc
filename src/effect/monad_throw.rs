//! `MonadThrow` type class - failure injection as a reusable capability.
//!
//! A type that can lift a value (`of`), inject a failure (`throw_error`) and
//! sequence a dependent step (`chain`) gets every helper in this module for
//! free. The helpers are written once against the trait and instantiated for
//! [`ReaderEither`](super::ReaderEither), [`Either`] and `Result`.
//!
//! # Laws
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).chain(f) == throw_error(e)
//! ```
//!
//! ## Left Identity Law
//!
//! ```text
//! of(a).chain(f) == f(a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use reader_either::control::Either;
//! use reader_either::effect::monad_throw;
//!
//! fn parse_port<M>(text: &str) -> M::WithType<u16>
//! where
//!     M: monad_throw::MonadThrow<Error = String>,
//! {
//!     monad_throw::from_option::<M, _, _>(text.parse::<u16>().ok(), || format!("bad port: {text}"))
//! }
//!
//! assert_eq!(parse_port::<Either<String, ()>>("80"), Either::Right(80));
//! assert_eq!(parse_port::<Result<(), String>>("x"), Err("bad port: x".to_string()));
//! ```

use crate::control::Either;
use crate::typeclass::TypeConstructor;

// =============================================================================
// MonadThrow Trait
// =============================================================================

/// A computation type that can succeed, fail, and sequence dependent steps.
///
/// The value the implementing type currently carries is irrelevant to the
/// constructors: `of` and `throw_error` build the same constructor applied to
/// any `B`, so a "witness" such as `Either<E, ()>` is enough to name it.
pub trait MonadThrow: TypeConstructor + Sized {
    /// The failure type injected by [`MonadThrow::throw_error`].
    type Error;

    /// Lifts a success value.
    fn of<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Lifts a failure value.
    fn throw_error<B>(error: Self::Error) -> Self::WithType<B>
    where
        B: 'static;

    /// Sequences a dependent step, short-circuiting on failure.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static;
}

// =============================================================================
// Derived helpers
// =============================================================================

/// Lifts an `Either`, `Left` becoming a thrown failure.
pub fn from_either<M, A>(either: Either<M::Error, A>) -> M::WithType<A>
where
    M: MonadThrow,
    A: Clone + 'static,
{
    match either {
        Either::Left(error) => M::throw_error(error),
        Either::Right(value) => M::of(value),
    }
}

/// Lifts an `Option`. `on_none` runs only when the option is empty.
pub fn from_option<M, A, F>(option: Option<A>, on_none: F) -> M::WithType<A>
where
    M: MonadThrow,
    A: Clone + 'static,
    F: FnOnce() -> M::Error,
{
    match option {
        Some(value) => M::of(value),
        None => M::throw_error(on_none()),
    }
}

/// Succeeds with `value` when `predicate` holds, otherwise fails with
/// `on_false(value)`.
pub fn from_predicate<M, A, P, F>(value: A, predicate: P, on_false: F) -> M::WithType<A>
where
    M: MonadThrow,
    A: Clone + 'static,
    P: FnOnce(&A) -> bool,
    F: FnOnce(A) -> M::Error,
{
    if predicate(&value) {
        M::of(value)
    } else {
        M::throw_error(on_false(value))
    }
}

/// Like [`from_predicate`], but `refine` narrows the success type.
///
/// `refine` returns `Ok` with the narrowed value, or hands the original back
/// in `Err` for `on_false`.
pub fn from_refinement<M, A, B, P, F>(value: A, refine: P, on_false: F) -> M::WithType<B>
where
    M: MonadThrow,
    B: Clone + 'static,
    P: FnOnce(A) -> Result<B, A>,
    F: FnOnce(A) -> M::Error,
{
    match refine(value) {
        Ok(narrowed) => M::of(narrowed),
        Err(rejected) => M::throw_error(on_false(rejected)),
    }
}

/// Fails a successful computation whose value does not satisfy `predicate`.
pub fn filter_or_else<M, P, F>(computation: M, predicate: P, on_false: F) -> M::WithType<M::Inner>
where
    M: MonadThrow,
    M::Inner: Clone + 'static,
    P: Fn(&M::Inner) -> bool + 'static,
    F: Fn(M::Inner) -> M::Error + 'static,
{
    computation.chain::<M::Inner, _>(move |value| {
        from_predicate::<M, _, _, _>(value, |candidate| predicate(candidate), |rejected| {
            on_false(rejected)
        })
    })
}

/// Like [`filter_or_else`], but `refine` narrows the success type.
pub fn refine_or_else<M, B, P, F>(computation: M, refine: P, on_false: F) -> M::WithType<B>
where
    M: MonadThrow,
    B: Clone + 'static,
    P: Fn(M::Inner) -> Result<B, M::Inner> + 'static,
    F: Fn(M::Inner) -> M::Error + 'static,
{
    computation.chain::<B, _>(move |value| {
        from_refinement::<M, _, _, _, _>(value, |candidate| refine(candidate), |rejected| {
            on_false(rejected)
        })
    })
}

/// Chains a plain `Either`-returning function.
pub fn chain_either_k<M, B, F>(computation: M, function: F) -> M::WithType<B>
where
    M: MonadThrow,
    B: Clone + 'static,
    F: Fn(M::Inner) -> Either<M::Error, B> + 'static,
{
    computation.chain::<B, _>(move |value| from_either::<M, B>(function(value)))
}

// =============================================================================
// Instances
// =============================================================================

impl<E, A> MonadThrow for Either<E, A> {
    type Error = E;

    fn of<B>(value: B) -> Either<E, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }

    fn throw_error<B>(error: E) -> Either<E, B>
    where
        B: 'static,
    {
        Either::Left(error)
    }

    fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        B: 'static,
        F: Fn(A) -> Either<E, B> + 'static,
    {
        Self::chain(self, function)
    }
}

impl<A, E> MonadThrow for Result<A, E> {
    type Error = E;

    fn of<B>(value: B) -> Result<B, E>
    where
        B: Clone + 'static,
    {
        Ok(value)
    }

    fn throw_error<B>(error: E) -> Result<B, E>
    where
        B: 'static,
    {
        Err(error)
    }

    fn chain<B, F>(self, function: F) -> Result<B, E>
    where
        B: 'static,
        F: Fn(A) -> Result<B, E> + 'static,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    type Witness = Either<String, ()>;

    #[rstest]
    fn throw_short_circuits_chain() {
        let thrown: Either<String, i32> = Witness::throw_error("boom".to_string());
        let chained = MonadThrow::chain(thrown, |value: i32| Either::Right(value + 1));
        assert_eq!(chained, Either::Left("boom".to_string()));
    }

    #[rstest]
    fn from_option_does_not_call_on_none_for_some() {
        let calls = Cell::new(0);
        let lifted = from_option::<Witness, _, _>(Some(3), || {
            calls.set(calls.get() + 1);
            "none".to_string()
        });
        assert_eq!(lifted, Either::Right(3));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(4, Either::Right(4))]
    #[case(-4, Either::Left("negative: -4".to_string()))]
    fn from_predicate_selects_branch(#[case] input: i32, #[case] expected: Either<String, i32>) {
        let lifted = from_predicate::<Witness, _, _, _>(input, |n| *n >= 0, |n| format!("negative: {n}"));
        assert_eq!(lifted, expected);
    }

    #[rstest]
    fn from_refinement_narrows_the_success_type() {
        let narrowed = from_refinement::<Result<(), String>, _, _, _, _>(
            300_i32,
            |n| u8::try_from(n).map_err(|_| n),
            |n| format!("{n} does not fit"),
        );
        assert_eq!(narrowed, Err("300 does not fit".to_string()));
    }

    #[rstest]
    fn filter_or_else_keeps_passing_values() {
        let kept = filter_or_else(Ok::<i32, String>(8), |n| n % 2 == 0, |n| format!("{n} is odd"));
        let rejected = filter_or_else(Ok::<i32, String>(7), |n| n % 2 == 0, |n| format!("{n} is odd"));
        assert_eq!(kept, Ok(8));
        assert_eq!(rejected, Err("7 is odd".to_string()));
    }

    #[rstest]
    fn refine_or_else_passes_failures_through() {
        let failed: Either<String, i32> = Either::Left("earlier".to_string());
        let refined = refine_or_else(failed, |n| u8::try_from(n).map_err(|_| n), |n| format!("{n}"));
        assert_eq!(refined, Either::Left("earlier".to_string()));
    }

    #[rstest]
    fn chain_either_k_lifts_the_step() {
        let halved = chain_either_k(Either::<String, i32>::Right(10), |n| {
            if n % 2 == 0 {
                Either::Right(n / 2)
            } else {
                Either::Left(format!("{n} is odd"))
            }
        });
        assert_eq!(halved, Either::Right(5));
    }
}
