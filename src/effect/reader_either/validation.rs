//! Accumulating instances for `ReaderEither`.
//!
//! The default [`ap`](ReaderEither::ap) and [`alt`](ReaderEither::alt) keep
//! only one failure. The instances here keep all of them, merging failures
//! with a combine operation supplied once at construction. They are separate
//! values rather than a mode switch: accumulating `ap` cannot be derived from
//! `chain`, so it cannot live on the monadic type itself.
//!
//! # Examples
//!
//! ```rust
//! use reader_either::control::Either;
//! use reader_either::effect::{ApplicativeValidation, ReaderEither};
//!
//! let validation = ApplicativeValidation::<Vec<String>>::new();
//! let name = ReaderEither::<(), Vec<String>, &str>::left(vec!["name is empty".into()]);
//! let age = ReaderEither::<(), Vec<String>, u8>::left(vec!["age is negative".into()]);
//!
//! let person = validation.map2(name, age, |name, age| (name, age));
//! assert_eq!(
//!     person.run(()),
//!     Either::Left(vec!["name is empty".to_string(), "age is negative".to_string()])
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use super::ReaderEither;
use crate::control::Either;
use crate::typeclass::Semigroup;

type Combine<E> = Rc<dyn Fn(E, E) -> E>;

fn semigroup_combine<E>() -> Combine<E>
where
    E: Semigroup + 'static,
{
    Rc::new(|first: E, second: E| first.combine(second))
}

// =============================================================================
// ApplicativeValidation
// =============================================================================

/// Applicative instance that runs every operand and combines all failures.
///
/// When both sides of [`ap`](Self::ap) fail, the result is
/// `combine(function_failure, argument_failure)`.
pub struct ApplicativeValidation<E> {
    combine: Combine<E>,
}

impl<E> ApplicativeValidation<E>
where
    E: 'static,
{
    /// Uses the [`Semigroup`] instance of `E` to merge failures.
    #[must_use]
    pub fn new() -> Self
    where
        E: Semigroup,
    {
        Self {
            combine: semigroup_combine(),
        }
    }

    /// Uses `combine` to merge failures. It must be associative.
    pub fn with_combine<F>(combine: F) -> Self
    where
        F: Fn(E, E) -> E + 'static,
    {
        Self {
            combine: Rc::new(combine),
        }
    }

    /// Lifts a success value.
    pub fn of<R, A>(&self, value: A) -> ReaderEither<R, E, A>
    where
        R: 'static,
        A: Clone + 'static,
    {
        ReaderEither::right(value)
    }

    /// Transforms the success value.
    pub fn map<R, A, B, F>(&self, computation: ReaderEither<R, E, A>, function: F) -> ReaderEither<R, E, B>
    where
        R: 'static,
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        computation.map(function)
    }

    /// Applies a contained function, combining failures from both sides.
    ///
    /// Both sides always run. Failures combine function side first.
    pub fn ap<R, A, B, F>(
        &self,
        function_side: ReaderEither<R, E, F>,
        argument: ReaderEither<R, E, A>,
    ) -> ReaderEither<R, E, B>
    where
        R: Clone + 'static,
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.map2(function_side, argument, |function, value| function(value))
    }

    /// Combines two computations with a binary function, combining failures
    /// from both sides.
    pub fn map2<R, A, B, C, F>(
        &self,
        first: ReaderEither<R, E, A>,
        second: ReaderEither<R, E, B>,
        function: F,
    ) -> ReaderEither<R, E, C>
    where
        R: Clone + 'static,
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let combine = Rc::clone(&self.combine);
        ReaderEither::new(move |environment: R| {
            match (first.run(environment.clone()), second.run(environment)) {
                (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
                (Either::Left(error), Either::Right(_)) | (Either::Right(_), Either::Left(error)) => {
                    Either::Left(error)
                }
                (Either::Left(first_error), Either::Left(second_error)) => {
                    Either::Left(combine(first_error, second_error))
                }
            }
        })
    }

    /// Maps every input to a computation and collects the successes in input
    /// order. Every computation runs; all failures are combined in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::{ApplicativeValidation, ReaderEither};
    ///
    /// let validation = ApplicativeValidation::<String>::new();
    /// let checked = validation.traverse_array(vec![1, -2, 3, -4], |n: i32| {
    ///     if n > 0 {
    ///         ReaderEither::<(), String, i32>::right(n)
    ///     } else {
    ///         ReaderEither::left(format!("[{n}]"))
    ///     }
    /// });
    /// assert_eq!(checked.run(()), Either::Left("[-2][-4]".to_string()));
    /// ```
    pub fn traverse_array<R, T, A, I, F>(&self, inputs: I, function: F) -> ReaderEither<R, E, Vec<A>>
    where
        R: Clone + 'static,
        A: 'static,
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> ReaderEither<R, E, A>,
    {
        let computations: Vec<ReaderEither<R, E, A>> = inputs.into_iter().map(function).collect();
        let combine = Rc::clone(&self.combine);
        ReaderEither::new(move |environment: R| {
            let mut successes = Vec::with_capacity(computations.len());
            let mut failure: Option<E> = None;
            for computation in &computations {
                match computation.run(environment.clone()) {
                    Either::Right(value) => successes.push(value),
                    Either::Left(error) => {
                        failure = Some(match failure.take() {
                            Some(previous) => combine(previous, error),
                            None => error,
                        });
                    }
                }
            }
            failure.map_or(Either::Right(successes), Either::Left)
        })
    }
}

impl<E> Clone for ApplicativeValidation<E> {
    fn clone(&self) -> Self {
        Self {
            combine: Rc::clone(&self.combine),
        }
    }
}

impl<E> Default for ApplicativeValidation<E>
where
    E: Semigroup + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ApplicativeValidation<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ApplicativeValidation").finish_non_exhaustive()
    }
}

// =============================================================================
// AltValidation
// =============================================================================

/// Alt instance that combines the failures of every alternative tried.
///
/// Alternatives stay lazy: the second branch only runs when the first fails.
pub struct AltValidation<E> {
    combine: Combine<E>,
}

impl<E> AltValidation<E>
where
    E: 'static,
{
    /// Uses the [`Semigroup`] instance of `E` to merge failures.
    #[must_use]
    pub fn new() -> Self
    where
        E: Semigroup,
    {
        Self {
            combine: semigroup_combine(),
        }
    }

    /// Uses `combine` to merge failures. It must be associative.
    pub fn with_combine<F>(combine: F) -> Self
    where
        F: Fn(E, E) -> E + 'static,
    {
        Self {
            combine: Rc::new(combine),
        }
    }

    /// Transforms the success value.
    pub fn map<R, A, B, F>(&self, computation: ReaderEither<R, E, A>, function: F) -> ReaderEither<R, E, B>
    where
        R: 'static,
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        computation.map(function)
    }

    /// Falls back to `second()` when `first` fails. When both fail, the
    /// failures are combined first then second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::{AltValidation, ReaderEither};
    ///
    /// let validation = AltValidation::<String>::new();
    /// let primary = ReaderEither::<(), String, i32>::left("primary;".into());
    /// let both = validation.alt(primary, || ReaderEither::left("replica;".into()));
    /// assert_eq!(both.run(()), Either::Left("primary;replica;".to_string()));
    /// ```
    pub fn alt<R, A, F>(&self, first: ReaderEither<R, E, A>, second: F) -> ReaderEither<R, E, A>
    where
        R: Clone + 'static,
        A: 'static,
        F: Fn() -> ReaderEither<R, E, A> + 'static,
    {
        let combine = Rc::clone(&self.combine);
        ReaderEither::new(move |environment: R| match first.run(environment.clone()) {
            Either::Right(value) => Either::Right(value),
            Either::Left(first_error) => second()
                .run(environment)
                .map_left(|second_error| combine(first_error, second_error)),
        })
    }

    /// Tries `first` then each of `rest` in order, stopping at the first
    /// success. When every alternative fails, all failures are combined in
    /// order.
    pub fn alt_all<R, A, I>(&self, first: ReaderEither<R, E, A>, rest: I) -> ReaderEither<R, E, A>
    where
        R: Clone + 'static,
        A: 'static,
        I: IntoIterator<Item = ReaderEither<R, E, A>>,
    {
        let alternatives: Vec<ReaderEither<R, E, A>> = rest.into_iter().collect();
        let combine = Rc::clone(&self.combine);
        ReaderEither::new(move |environment: R| {
            let mut failure = match first.run(environment.clone()) {
                Either::Right(value) => return Either::Right(value),
                Either::Left(error) => error,
            };
            for alternative in &alternatives {
                match alternative.run(environment.clone()) {
                    Either::Right(value) => return Either::Right(value),
                    Either::Left(error) => failure = combine(failure, error),
                }
            }
            Either::Left(failure)
        })
    }
}

impl<E> Clone for AltValidation<E> {
    fn clone(&self) -> Self {
        Self {
            combine: Rc::clone(&self.combine),
        }
    }
}

impl<E> Default for AltValidation<E>
where
    E: Semigroup + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for AltValidation<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AltValidation").finish_non_exhaustive()
    }
}
