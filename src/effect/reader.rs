//! Reader - computations that read a shared, immutable environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads one
//! environment through every step without passing it by hand. It is the
//! non-failing half of [`ReaderEither`](super::ReaderEither): destructors such
//! as [`ReaderEither::fold`](super::ReaderEither::fold) hand back a `Reader`.
//!
//! # Laws
//!
//! - Functor identity: `reader.map(|x| x) == reader`
//! - Functor composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//! - Left identity: `Reader::of(a).chain(f) == f(a)`
//! - Right identity: `m.chain(Reader::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//! - Ask retrieval: `Reader::ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use reader_either::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config { host: String, port: u16 }
//!
//! let host = Reader::asks(|config: Config| config.host);
//! let port = Reader::asks(|config: Config| config.port);
//! let address = host.map2(port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".into(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use super::environment::{Has, project};

/// A computation that, given an environment `R`, produces an `A`.
pub struct Reader<R, A> {
    /// Shared so that `chain` and `clone` never copy the closure.
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a `Reader` from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation. A reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores its environment and returns `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// A reader that projects a value from the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| function(original(environment)))
    }

    /// Runs a dependent reader against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// let chained = reader.chain(|value| Reader::new(move |environment: i32| value + environment));
    /// assert_eq!(chained.run(10), 20);
    /// ```
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| function(original(environment.clone())).run(environment))
    }

    /// Combines two readers over the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |environment: R| {
            let a = first(environment.clone());
            let b = second(environment);
            function(a, b)
        })
    }

    /// Applies the function produced by `self` to the value produced by `argument`.
    pub fn ap<B, C>(self, argument: Reader<R, B>) -> Reader<R, C>
    where
        A: Fn(B) -> C,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Runs `computation` against an environment derived by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(shifted.run(5), 30);
    /// ```
    pub fn local<R0, F>(modifier: F, computation: Self) -> Reader<R0, A>
    where
        F: Fn(R0) -> R + 'static,
        R0: 'static,
    {
        let inner = computation.run_function;
        Reader::new(move |environment| inner(modifier(environment)))
    }

    /// Runs this reader inside any environment that has an `R`.
    pub fn widen<R3>(self) -> Reader<R3, A>
    where
        R3: Has<R> + 'static,
        R: Clone,
    {
        let inner = self.run_function;
        Reader::new(move |environment: R3| inner(project(&environment)))
    }

    /// Like [`Reader::chain`], but the next reader may need a different
    /// environment. The result needs an environment that has both.
    pub fn chain_w<R2, B, R3, F>(self, function: F) -> Reader<R3, B>
    where
        F: Fn(A) -> Reader<R2, B> + 'static,
        R: Clone,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: R3| {
            let value = original(project::<R, R3>(&environment));
            function(value).run(project::<R2, R3>(&environment))
        })
    }

    /// Like [`Reader::ap`], but the argument may need a different environment.
    pub fn ap_w<R2, B, C, R3>(self, argument: Reader<R2, B>) -> Reader<R3, C>
    where
        A: Fn(B) -> C,
        R: Clone,
        R2: Clone + 'static,
        R3: Has<R> + Has<R2> + 'static,
        B: 'static,
        C: 'static,
    {
        let function_side = self.run_function;
        let argument_side = argument.run_function;
        Reader::new(move |environment: R3| {
            let function = function_side(project::<R, R3>(&environment));
            function(argument_side(project::<R2, R3>(&environment)))
        })
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// A reader that returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
