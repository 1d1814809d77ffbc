//! Tracing support for `ReaderEither`.
//!
//! Available with the `tracing` feature.

use super::ReaderEither;

impl<R, E, A> ReaderEither<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// Wraps the computation in a tracing span.
    ///
    /// The span is entered for every run. When the run finishes a `DEBUG`
    /// event records whether it succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reader_either::effect::ReaderEither;
    ///
    /// let lookup = ReaderEither::<u32, String, u32>::asks(|id: u32| id * 2)
    ///     .instrument(tracing::debug_span!("lookup"));
    /// assert_eq!(lookup.run_result(21), Ok(42));
    /// ```
    #[must_use]
    pub fn instrument(self, span: tracing::Span) -> Self {
        let inner = self.run_function;
        Self::new(move |environment| {
            let _entered = span.enter();
            let outcome = inner(environment);
            tracing::debug!(succeeded = outcome.is_right(), "computation finished");
            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::control::Either;
    use crate::effect::ReaderEither;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn records_success() {
        let computation = ReaderEither::<i32, String, i32>::asks(|n: i32| n + 1)
            .instrument(tracing::info_span!("increment"));
        assert_eq!(computation.run(1), Either::Right(2));
        assert!(logs_contain("computation finished"));
        assert!(logs_contain("succeeded=true"));
    }

    #[traced_test]
    #[test]
    fn records_failure_without_changing_it() {
        let computation = ReaderEither::<i32, String, i32>::left("denied".to_string())
            .instrument(tracing::info_span!("authorize"));
        assert_eq!(computation.run(0), Either::Left("denied".to_string()));
        assert!(logs_contain("succeeded=false"));
    }
}
