//! Capability access for environment widening.
//!
//! A computation states what it needs from its environment through its `R`
//! type parameter. When two computations with different requirements are
//! combined, the result needs an environment that satisfies *both*. Rust has
//! no intersection types, so the requirement is expressed as a bound instead:
//! an application environment implements [`Has`] once per capability it
//! provides, and a combined computation asks for `R3: Has<R1> + Has<R2>`.
//!
//! Every type trivially has itself, so combinators that widen also work when
//! all sides already share one environment type.
//!
//! # Examples
//!
//! ```rust
//! use reader_either::effect::{Has, ReaderEither};
//!
//! #[derive(Clone)]
//! struct Database { url: String }
//!
//! #[derive(Clone)]
//! struct Limits { max_rows: usize }
//!
//! #[derive(Clone)]
//! struct App { database: Database, limits: Limits }
//!
//! impl Has<Database> for App {
//!     fn capability(&self) -> &Database { &self.database }
//! }
//!
//! impl Has<Limits> for App {
//!     fn capability(&self) -> &Limits { &self.limits }
//! }
//!
//! let url: ReaderEither<Database, String, String> = ReaderEither::asks(|db: Database| db.url);
//! let rows: ReaderEither<Limits, String, usize> = ReaderEither::asks(|l: Limits| l.max_rows);
//!
//! let query: ReaderEither<App, String, String> =
//!     url.chain_w(move |url| rows.clone().map(move |max| format!("{url}?limit={max}")));
//!
//! let app = App {
//!     database: Database { url: "db://main".into() },
//!     limits: Limits { max_rows: 50 },
//! };
//! assert_eq!(query.run_result(app), Ok("db://main?limit=50".to_string()));
//! ```

/// Read access to a capability `C` held by an environment.
pub trait Has<C> {
    /// Borrows the capability.
    fn capability(&self) -> &C;
}

impl<T> Has<T> for T {
    fn capability(&self) -> &T {
        self
    }
}

/// Projects capability `C` out of `environment` as an owned value.
#[inline]
pub(crate) fn project<C, R>(environment: &R) -> C
where
    R: Has<C>,
    C: Clone,
{
    <R as Has<C>>::capability(environment).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Port(u16);

    #[derive(Clone)]
    struct Settings {
        port: Port,
    }

    impl Has<Port> for Settings {
        fn capability(&self) -> &Port {
            &self.port
        }
    }

    #[rstest]
    fn every_type_has_itself() {
        let port = Port(80);
        assert_eq!(<Port as Has<Port>>::capability(&port), &Port(80));
    }

    #[rstest]
    fn project_clones_the_capability() {
        let settings = Settings { port: Port(8080) };
        let port: Port = project(&settings);
        assert_eq!(port, Port(8080));
    }
}
