//! Functor, applicative, monad and alt combinators for `ReaderEither`.

use super::ReaderEither;
use crate::control::Either;
use crate::effect::environment::{Has, project};
use crate::effect::monad_throw;
use crate::typeclass::Semigroup;

// =============================================================================
// Functor / Bifunctor
// =============================================================================

impl<R, E, A> ReaderEither<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// Transforms the success value. `function` is not called on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let doubled = ReaderEither::<(), String, i32>::right(21).map(|n| n * 2);
    /// assert_eq!(doubled.run(()), Either::Right(42));
    /// ```
    pub fn map<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| inner(environment).map(&function))
    }

    /// Transforms the failure value. `function` is not called on success.
    pub fn map_left<E2, F>(self, function: F) -> ReaderEither<R, E2, A>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| inner(environment).map_left(&function))
    }

    /// Transforms whichever side is present.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> ReaderEither<R, E2, B>
    where
        F: Fn(E) -> E2 + 'static,
        G: Fn(A) -> B + 'static,
        E2: 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| inner(environment).bimap(&on_left, &on_right))
    }

    /// Exchanges failure and success.
    #[must_use]
    pub fn swap(self) -> ReaderEither<R, A, E> {
        let inner = self.run_function;
        ReaderEither::new(move |environment| inner(environment).swap())
    }

    /// Runs this computation against an environment derived by `modifier`.
    pub fn local<R0, F>(self, modifier: F) -> ReaderEither<R0, E, A>
    where
        F: Fn(R0) -> R + 'static,
        R0: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| inner(modifier(environment)))
    }

    /// Runs this computation inside any environment that has an `R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::{Has, ReaderEither};
    ///
    /// #[derive(Clone)]
    /// struct App { port: u16 }
    ///
    /// impl Has<u16> for App {
    ///     fn capability(&self) -> &u16 { &self.port }
    /// }
    ///
    /// let port: ReaderEither<u16, String, u16> = ReaderEither::ask();
    /// let widened: ReaderEither<App, String, u16> = port.widen();
    /// assert_eq!(widened.run(App { port: 8080 }), Either::Right(8080));
    /// ```
    #[must_use]
    pub fn widen<R3>(self) -> ReaderEither<R3, E, A>
    where
        R3: Has<R> + 'static,
        R: Clone,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment: R3| inner(project(&environment)))
    }
}

// =============================================================================
// Applicative (fail-fast)
// =============================================================================

impl<R, E, A> ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Applies the function this computation produces to the value `argument`
    /// produces.
    ///
    /// Both sides run against the same environment. When the function side
    /// fails its failure is reported and `argument` is not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let function = ReaderEither::<(), String, fn(i32) -> i32>::right(|n| n + 1);
    /// assert_eq!(function.ap(ReaderEither::right(1)).run(()), Either::Right(2));
    ///
    /// let broken = ReaderEither::<(), String, fn(i32) -> i32>::left("function".into());
    /// let argument = ReaderEither::<(), String, i32>::left("argument".into());
    /// assert_eq!(broken.ap(argument).run(()), Either::Left("function".to_string()));
    /// ```
    pub fn ap<B, C>(self, argument: ReaderEither<R, E, B>) -> ReaderEither<R, E, C>
    where
        A: Fn(B) -> C,
        B: 'static,
        C: 'static,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Like [`ReaderEither::ap`], widening environment and failure.
    pub fn ap_w<R2, E2, B, C, R3, E3>(
        self,
        argument: ReaderEither<R2, E2, B>,
    ) -> ReaderEither<R3, E3, C>
    where
        A: Fn(B) -> C,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E: Into<E3>,
        E2: Into<E3> + 'static,
        E3: 'static,
        B: 'static,
        C: 'static,
    {
        let function_side = self.run_function;
        let argument_side = argument.run_function;
        ReaderEither::new(move |environment: R3| {
            match function_side(project::<R, R3>(&environment)) {
                Either::Left(error) => Either::Left(error.into()),
                Either::Right(function) => argument_side(project::<R2, R3>(&environment))
                    .bimap(Into::into, function),
            }
        })
    }

    /// Combines two computations with a binary function, left to right.
    ///
    /// The first failure is reported; `other` is not run when `self` fails.
    pub fn map2<B, C, F>(self, other: ReaderEither<R, E, B>, function: F) -> ReaderEither<R, E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_function;
        let second = other.run_function;
        ReaderEither::new(move |environment: R| match first(environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right(a) => second(environment).map(|b| function(a, b)),
        })
    }

    /// Pairs the successes of two computations.
    #[must_use]
    pub fn product<B>(self, other: ReaderEither<R, E, B>) -> ReaderEither<R, E, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs both, keeping the first success.
    #[must_use]
    pub fn ap_first<B>(self, other: ReaderEither<R, E, B>) -> Self
    where
        B: 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Runs both, keeping the second success.
    #[must_use]
    pub fn ap_second<B>(self, other: ReaderEither<R, E, B>) -> ReaderEither<R, E, B>
    where
        B: 'static,
    {
        self.map2(other, |_, b| b)
    }

    /// The first-success semigroup: the left-most success wins, two successes
    /// combine, and two failures report the first one.
    ///
    /// Unlike [`Semigroup::combine`] on `ReaderEither`, a failure on one side
    /// does not hide a success on the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let failed = ReaderEither::<(), String, String>::left("down".into());
    /// let fallback = ReaderEither::<(), String, String>::right("cached".into());
    /// assert_eq!(
    ///     failed.combine_successes(fallback).run(()),
    ///     Either::Right("cached".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn combine_successes(self, other: Self) -> Self
    where
        A: Semigroup,
    {
        let first = self.run_function;
        let second = other.run_function;
        Self::new(move |environment: R| {
            match (first(environment.clone()), second(environment)) {
                (Either::Right(a), Either::Right(b)) => Either::Right(a.combine(b)),
                (Either::Right(a), Either::Left(_)) => Either::Right(a),
                (Either::Left(_), Either::Right(b)) => Either::Right(b),
                (Either::Left(error), Either::Left(_)) => Either::Left(error),
            }
        })
    }
}

// =============================================================================
// Monad
// =============================================================================

impl<R, E, A> ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Runs a dependent computation against the same environment.
    ///
    /// On failure the failure is propagated and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let limit: ReaderEither<i32, String, i32> = ReaderEither::ask();
    /// let checked = limit.chain(|n| {
    ///     if n > 0 { ReaderEither::right(n) } else { ReaderEither::left(format!("{n} <= 0")) }
    /// });
    /// assert_eq!(checked.run(3), Either::Right(3));
    /// assert_eq!(checked.run(0), Either::Left("0 <= 0".to_string()));
    /// ```
    pub fn chain<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        F: Fn(A) -> ReaderEither<R, E, B> + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment: R| match inner(environment.clone()) {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value).run(environment),
        })
    }

    /// Alias for [`ReaderEither::chain`].
    pub fn and_then<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        F: Fn(A) -> ReaderEither<R, E, B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Like [`ReaderEither::chain`], widening environment and failure.
    pub fn chain_w<R2, E2, B, R3, E3, F>(self, function: F) -> ReaderEither<R3, E3, B>
    where
        F: Fn(A) -> ReaderEither<R2, E2, B> + 'static,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E: Into<E3>,
        E2: Into<E3> + 'static,
        E3: 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment: R3| {
            match inner(project::<R, R3>(&environment)) {
                Either::Left(error) => Either::Left(error.into()),
                Either::Right(value) => function(value)
                    .run(project::<R2, R3>(&environment))
                    .map_left(Into::into),
            }
        })
    }

    /// Runs a dependent computation for its failure only, keeping this
    /// computation's success value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: Fn(A) -> ReaderEither<R, E, B> + 'static,
        A: Clone,
        B: 'static,
    {
        self.chain(move |value: A| {
            let step = function(value.clone());
            step.map(move |_| value.clone())
        })
    }

    /// Like [`ReaderEither::chain_first`], widening environment and failure.
    pub fn chain_first_w<R2, E2, B, R3, E3, F>(self, function: F) -> ReaderEither<R3, E3, A>
    where
        F: Fn(A) -> ReaderEither<R2, E2, B> + 'static,
        A: Clone,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E: Into<E3>,
        E2: Into<E3> + 'static,
        E3: 'static,
        B: 'static,
    {
        self.chain_w(move |value: A| {
            let step = function(value.clone());
            step.map(move |_| value.clone())
        })
    }

    /// Chains a function returning a plain `Either`.
    pub fn chain_either_k<B, F>(self, function: F) -> ReaderEither<R, E, B>
    where
        F: Fn(A) -> Either<E, B> + 'static,
        E: Clone,
        B: Clone + 'static,
    {
        monad_throw::chain_either_k(self, function)
    }

    /// Like [`ReaderEither::chain_either_k`], widening the failure.
    pub fn chain_either_k_w<E2, B, E3, F>(self, function: F) -> ReaderEither<R, E3, B>
    where
        F: Fn(A) -> Either<E2, B> + 'static,
        E: Into<E3>,
        E2: Into<E3>,
        E3: 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| match inner(environment) {
            Either::Left(error) => Either::Left(error.into()),
            Either::Right(value) => function(value).map_left(Into::into),
        })
    }

    /// Fails a success that does not satisfy `predicate`.
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: Fn(&A) -> bool + 'static,
        F: Fn(A) -> E + 'static,
        E: Clone,
        A: Clone,
    {
        monad_throw::filter_or_else(self, predicate, on_false)
    }

    /// Like [`ReaderEither::filter_or_else`], widening the failure.
    pub fn filter_or_else_w<E2, E3, P, F>(self, predicate: P, on_false: F) -> ReaderEither<R, E3, A>
    where
        P: Fn(&A) -> bool + 'static,
        F: Fn(A) -> E2 + 'static,
        E: Into<E3>,
        E2: Into<E3>,
        E3: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment| match inner(environment) {
            Either::Left(error) => Either::Left(error.into()),
            Either::Right(value) if predicate(&value) => Either::Right(value),
            Either::Right(value) => Either::Left(on_false(value).into()),
        })
    }

    /// Like [`ReaderEither::filter_or_else`], but `refine` narrows the success
    /// type, handing the original value back in `Err` when it does not fit.
    pub fn refine_or_else<B, P, F>(self, refine: P, on_false: F) -> ReaderEither<R, E, B>
    where
        P: Fn(A) -> Result<B, A> + 'static,
        F: Fn(A) -> E + 'static,
        E: Clone,
        B: Clone + 'static,
    {
        monad_throw::refine_or_else(self, refine, on_false)
    }

    // =========================================================================
    // Alt
    // =========================================================================

    /// Falls back to `second()` when this computation fails.
    ///
    /// `second` is a thunk: it is only called on failure, once per failing run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let primary = ReaderEither::<(), String, i32>::left("primary down".into());
    /// let recovered = primary.alt(|| ReaderEither::right(0));
    /// assert_eq!(recovered.run(()), Either::Right(0));
    /// ```
    pub fn alt<F>(self, second: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        let inner = self.run_function;
        Self::new(move |environment: R| match inner(environment.clone()) {
            Either::Left(_) => second().run(environment),
            success => success,
        })
    }

    /// Like [`ReaderEither::alt`], widening environment and success. The
    /// failure is the fallback's failure.
    pub fn alt_w<R2, E2, B, R3, C, F>(self, second: F) -> ReaderEither<R3, E2, C>
    where
        F: Fn() -> ReaderEither<R2, E2, B> + 'static,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E2: 'static,
        A: Into<C>,
        B: Into<C> + 'static,
        C: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment: R3| {
            match inner(project::<R, R3>(&environment)) {
                Either::Left(_) => second().run(project::<R2, R3>(&environment)).map(Into::into),
                Either::Right(value) => Either::Right(value.into()),
            }
        })
    }

    /// Recovers from a failure with a computation chosen from the failure value.
    pub fn or_else<E2, F>(self, function: F) -> ReaderEither<R, E2, A>
    where
        F: Fn(E) -> ReaderEither<R, E2, A> + 'static,
        E2: 'static,
    {
        let inner = self.run_function;
        ReaderEither::new(move |environment: R| match inner(environment.clone()) {
            Either::Left(error) => function(error).run(environment),
            Either::Right(value) => Either::Right(value),
        })
    }
}

impl<R, E, A> ReaderEither<R, E, ReaderEither<R, E, A>>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Collapses a computation that produces a computation.
    #[must_use]
    pub fn flatten(self) -> ReaderEither<R, E, A> {
        self.chain(|inner| inner)
    }
}
