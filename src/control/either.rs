//! Either type - a failure or a success.
//!
//! `Either<E, A>` is the outcome of running a computation: `Left(E)` carries
//! a failure and `Right(A)` carries a success. Exactly one side is ever
//! populated.
//!
//! Besides the usual functor and bifunctor operations it offers the two
//! building blocks the computation layer relies on:
//!
//! - [`Either::ap`]: fail-fast application where the function side wins a tie
//! - [`FromIterator`]: short-circuiting collection into `Either<E, Vec<A>>`
//!
//! # Examples
//!
//! ```rust
//! use reader_either::control::Either;
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(84));
//!
//! let message = doubled.fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(message, "got 84");
//! ```

use std::fmt;

use crate::typeclass::Semigroup;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Examples
///
/// ```rust
/// use reader_either::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("boom".to_string());
///
/// assert!(success.is_right());
/// assert_eq!(failure.swap(), Either::Right("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    /// The failure variant.
    Left(E),
    /// The success variant.
    Right(A),
}

impl<E, A> Either<E, A> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into the failure, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// assert_eq!(Either::<i32, String>::Left(7).left(), Some(7));
    /// assert_eq!(Either::<i32, String>::Right("x".into()).left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Converts into the success, if any.
    #[inline]
    pub fn right(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the success; a failure passes through and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(20);
    /// assert_eq!(right.map(|n| n + 1), Either::Right(21));
    ///
    /// let left: Either<String, i32> = Either::Left("no".into());
    /// assert_eq!(left.map(|n| n + 1), Either::Left("no".into()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the failure; a success passes through.
    #[inline]
    pub fn map_left<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is present. Exactly one function runs.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> Either<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(on_left(error)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the failure and the success.
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Sequences a dependent step; stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) };
    /// assert_eq!(Either::<i32, i32>::Right(8).chain(halve).chain(halve), Either::Right(2));
    /// assert_eq!(Either::<i32, i32>::Right(6).chain(halve).chain(halve), Either::Left(3));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Returns the success, or computes a fallback from the failure.
    #[inline]
    pub fn get_or_else<F>(self, on_left: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => value,
        }
    }

    /// Lifts an `Option`, calling `on_none` only when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), || "none"), Either::Right(1));
    /// assert_eq!(Either::<&str, i32>::from_option(None, || "none"), Either::Left("none"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Self::Right(value),
            None => Self::Left(on_none()),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    /// Returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> E {
        match self {
            Self::Left(error) => error,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the success.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> A {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }
}

impl<E, F> Either<E, F> {
    /// Applies a contained function to a contained argument.
    ///
    /// Fail-fast and left-biased: when `self` is a failure it is returned and
    /// `argument` is ignored, so the function side wins when both sides fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::Right(|n| n + 1);
    /// assert_eq!(function.ap(Either::Right(1)), Either::Right(2));
    ///
    /// let broken: Either<&str, fn(i32) -> i32> = Either::Left("function");
    /// assert_eq!(broken.ap(Either::Left("argument")), Either::Left("function"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Either<E, A>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(function) => argument.map(function),
        }
    }
}

impl<E, A: Semigroup> Semigroup for Either<E, A> {
    /// The left-most failure wins; two successes are combined.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

impl<E, A, V> FromIterator<Either<E, A>> for Either<E, V>
where
    V: FromIterator<A>,
{
    /// Collects successes in order, stopping at the first failure.
    ///
    /// Items after the first `Left` are not pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    ///
    /// let all: Either<&str, Vec<i32>> = vec![Either::Right(1), Either::Right(2)].into_iter().collect();
    /// assert_eq!(all, Either::Right(vec![1, 2]));
    ///
    /// let some: Either<&str, Vec<i32>> =
    ///     vec![Either::Right(1), Either::Left("a"), Either::Left("b")].into_iter().collect();
    /// assert_eq!(some, Either::Left("a"));
    /// ```
    fn from_iter<I: IntoIterator<Item = Either<E, A>>>(iterator: I) -> Self {
        let mut failure = None;
        let values: V = iterator
            .into_iter()
            .map_while(|item| match item {
                Either::Left(error) => {
                    failure = Some(error);
                    None
                }
                Either::Right(value) => Some(value),
            })
            .collect();

        match failure {
            Some(error) => Self::Left(error),
            None => Self::Right(values),
        }
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn exactly_one_side_is_populated() {
        let left: Either<i32, String> = Either::Left(1);
        let right: Either<i32, String> = Either::Right("a".into());
        assert!(left.is_left() && !left.is_right());
        assert!(right.is_right() && !right.is_left());
    }

    #[rstest]
    fn map_does_not_call_function_on_left() {
        let calls = Cell::new(0);
        let left: Either<&str, i32> = Either::Left("e");
        let result = left.map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(result, Either::Left("e"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Either::Left(2), Either::Left(4))]
    #[case(Either::Right("ab"), Either::Right(2))]
    fn bimap_applies_exactly_one_side(
        #[case] input: Either<i32, &'static str>,
        #[case] expected: Either<i32, usize>,
    ) {
        assert_eq!(input.bimap(|n| n * 2, str::len), expected);
    }

    #[rstest]
    fn ap_reports_function_side_when_both_fail() {
        let function: Either<&str, fn(i32) -> i32> = Either::Left("function");
        assert_eq!(function.ap(Either::Left("argument")), Either::Left("function"));
    }

    #[rstest]
    fn ap_reports_argument_failure() {
        let function: Either<&str, fn(i32) -> i32> = Either::Right(|n| n);
        assert_eq!(function.ap(Either::Left("argument")), Either::Left("argument"));
    }

    #[rstest]
    fn from_option_is_lazy_for_some() {
        let calls = Cell::new(0);
        let result = Either::from_option(Some(5), || {
            calls.set(calls.get() + 1);
            "none"
        });
        assert_eq!(result, Either::Right(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn collect_stops_pulling_after_first_failure() {
        let pulled = Cell::new(0);
        let items = vec![Either::Right(1), Either::Left("bad"), Either::Right(3)];
        let collected: Either<&str, Vec<i32>> = items
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();
        assert_eq!(collected, Either::Left("bad"));
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn semigroup_combines_successes_and_keeps_first_failure() {
        let first: Either<&str, String> = Either::Right("a".into());
        let second: Either<&str, String> = Either::Right("b".into());
        assert_eq!(first.combine(second), Either::Right("ab".to_string()));

        let failed: Either<&str, String> = Either::Left("x");
        assert_eq!(failed.combine(Either::Left("y")), Either::Left("x"));
    }

    #[rstest]
    fn result_round_trip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either.into_result(), Ok(42));

        let err: Result<i32, String> = Err("error".into());
        let either: Either<String, i32> = err.into();
        assert_eq!(either.into_result(), Err("error".to_string()));
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn unwrap_right_on_left_panics() {
        let _ = Either::<i32, i32>::Left(1).unwrap_right();
    }
}
