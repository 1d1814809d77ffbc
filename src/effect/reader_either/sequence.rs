//! Sequential accumulation and bulk traversal for `ReaderEither`.
//!
//! Accumulation grows a tuple record one step at a time: [`unit`] starts an
//! empty record, [`bind`] adds a field computed from the fields so far, and
//! [`ap_t`] adds a field computed independently. Named fields on top of this
//! are provided by the [`reader_do!`](crate::reader_do) macro.
//!
//! [`unit`]: ReaderEither::unit
//! [`bind`]: ReaderEither::bind
//! [`ap_t`]: ReaderEither::ap_t
//!
//! [`bind_w`](ReaderEither::bind_w) and [`ap_t_w`](ReaderEither::ap_t_w) add
//! steps that read another capability or fail with another error, widening
//! the record the way [`chain_w`](ReaderEither::chain_w) does.

use super::ReaderEither;
use crate::control::Either;
use crate::effect::environment::{Has, project};

// =============================================================================
// Append
// =============================================================================

/// Appends a value to the end of a tuple.
///
/// Implemented for tuples of up to eleven elements, so records grow up to
/// twelve fields.
///
/// # Examples
///
/// ```rust
/// use reader_either::effect::Append;
///
/// assert_eq!(().append(1), (1,));
/// assert_eq!((1, "two").append(3.0), (1, "two", 3.0));
/// ```
pub trait Append<B> {
    /// The tuple with `B` appended.
    type Output;

    /// Appends `value`.
    fn append(self, value: B) -> Self::Output;
}

macro_rules! impl_append {
    ($($element:ident),*) => {
        impl<$($element,)* Next> Append<Next> for ($($element,)*) {
            type Output = ($($element,)* Next,);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn append(self, value: Next) -> Self::Output {
                let ($($element,)*) = self;
                ($($element,)* value,)
            }
        }
    };
}

impl_append!();
impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, E);
impl_append!(A, B, C, D, E, F);
impl_append!(A, B, C, D, E, F, G);
impl_append!(A, B, C, D, E, F, G, H);
impl_append!(A, B, C, D, E, F, G, H, I);
impl_append!(A, B, C, D, E, F, G, H, I, J);
impl_append!(A, B, C, D, E, F, G, H, I, J, K);

// =============================================================================
// Record accumulation
// =============================================================================

impl<R, E> ReaderEither<R, E, ()>
where
    R: 'static,
    E: 'static,
{
    /// The empty record every accumulation starts from.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(|_| Either::Right(()))
    }
}

impl<R, E, A> ReaderEither<R, E, A>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Starts a positional record holding this computation's success.
    #[must_use]
    pub fn tupled(self) -> ReaderEither<R, E, (A,)> {
        self.map(|value| (value,))
    }

    /// Appends the success of `next` to the record, independently of the
    /// fields so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let record = ReaderEither::<i32, String, ()>::unit()
    ///     .ap_t(ReaderEither::ask())
    ///     .ap_t(ReaderEither::right("label"));
    /// assert_eq!(record.run(5), Either::Right((5, "label")));
    /// ```
    pub fn ap_t<B>(self, next: ReaderEither<R, E, B>) -> ReaderEither<R, E, A::Output>
    where
        A: Append<B>,
        A::Output: 'static,
        B: 'static,
    {
        self.map2(next, Append::append)
    }

    /// Appends a field computed from the fields so far.
    ///
    /// Stops at the first failure: `function` is not called when the record
    /// so far failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let record = ReaderEither::<i32, String, ()>::unit()
    ///     .bind(|()| ReaderEither::ask())
    ///     .bind(|(base,): &(i32,)| ReaderEither::right(base * 10));
    /// assert_eq!(record.run(4), Either::Right((4, 40)));
    /// ```
    pub fn bind<B, F>(self, function: F) -> ReaderEither<R, E, A::Output>
    where
        F: Fn(&A) -> ReaderEither<R, E, B> + 'static,
        A: Append<B> + Clone,
        A::Output: 'static,
        B: 'static,
    {
        self.chain(move |fields: A| {
            let step = function(&fields);
            step.map(move |value| fields.clone().append(value))
        })
    }

    /// Like [`ReaderEither::ap_t`], widening environment and failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let port = ReaderEither::<u16, String, ()>::unit().ap_t(ReaderEither::ask());
    /// let label = ReaderEither::<u16, &str, &str>::right("http");
    /// let record: ReaderEither<u16, String, (u16, &str)> = port.ap_t_w(label);
    /// assert_eq!(record.run(80), Either::Right((80, "http")));
    /// ```
    pub fn ap_t_w<R2, E2, B, R3, E3>(
        self,
        next: ReaderEither<R2, E2, B>,
    ) -> ReaderEither<R3, E3, A::Output>
    where
        A: Append<B>,
        A::Output: 'static,
        B: 'static,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E: Into<E3>,
        E2: Into<E3> + 'static,
        E3: 'static,
    {
        let fields = self.run_function;
        let step = next.run_function;
        ReaderEither::new(move |environment: R3| {
            match fields(project::<R, R3>(&environment)) {
                Either::Left(error) => Either::Left(error.into()),
                Either::Right(record) => step(project::<R2, R3>(&environment))
                    .bimap(Into::into, |value| record.append(value)),
            }
        })
    }

    /// Like [`ReaderEither::bind`], widening environment and failure.
    ///
    /// `function` is not called when the record so far failed.
    pub fn bind_w<R2, E2, B, R3, E3, F>(self, function: F) -> ReaderEither<R3, E3, A::Output>
    where
        F: Fn(&A) -> ReaderEither<R2, E2, B> + 'static,
        A: Append<B>,
        A::Output: 'static,
        B: 'static,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        E: Into<E3>,
        E2: Into<E3> + 'static,
        E3: 'static,
    {
        let fields = self.run_function;
        ReaderEither::new(move |environment: R3| {
            match fields(project::<R, R3>(&environment)) {
                Either::Left(error) => Either::Left(error.into()),
                Either::Right(record) => function(&record)
                    .run(project::<R2, R3>(&environment))
                    .bimap(Into::into, |value| record.append(value)),
            }
        })
    }
}

// =============================================================================
// Traversal
// =============================================================================

impl<R, E, A> ReaderEither<R, E, Vec<A>>
where
    R: Clone + 'static,
    E: 'static,
    A: 'static,
{
    /// Maps every input (with its index) to a computation and collects the
    /// successes in input order.
    ///
    /// One computation per input is built immediately. When run, they run in
    /// input order and the first failure stops the traversal.
    pub fn traverse_array_with_index<T, I, F>(inputs: I, mut function: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(usize, T) -> ReaderEither<R, E, A>,
    {
        let computations: Vec<ReaderEither<R, E, A>> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| function(index, input))
            .collect();
        Self::new(move |environment: R| {
            computations
                .iter()
                .map(|computation| computation.run(environment.clone()))
                .collect()
        })
    }

    /// Like [`ReaderEither::traverse_array_with_index`] without the index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::control::Either;
    /// use reader_either::effect::ReaderEither;
    ///
    /// let scaled = ReaderEither::traverse_array(vec![1, 2, 3], |n: i32| {
    ///     ReaderEither::<i32, String, i32>::asks(move |factor: i32| n * factor)
    /// });
    /// assert_eq!(scaled.run(10), Either::Right(vec![10, 20, 30]));
    /// ```
    pub fn traverse_array<T, I, F>(inputs: I, mut function: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> ReaderEither<R, E, A>,
    {
        Self::traverse_array_with_index(inputs, |_, input| function(input))
    }

    /// Runs every computation in order and collects their successes.
    pub fn sequence_array<I>(computations: I) -> Self
    where
        I: IntoIterator<Item = ReaderEither<R, E, A>>,
    {
        Self::traverse_array(computations, std::convert::identity)
    }
}
