#![cfg(feature = "effect")]
//! Integration tests for `ReaderEither`.
//!
//! Scenarios run small services against an application configuration,
//! covering constructors, destructors and the fail-fast combinators.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use reader_either::control::Either;
use reader_either::effect::{Reader, ReaderEither};
use reader_either::typeclass::{Monoid, Semigroup};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Clone, Debug)]
struct Config {
    base_url: String,
    timeout_seconds: u32,
    users: Vec<(u32, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ServiceError {
    NotFound(u32),
    Timeout(u32),
    Invalid(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(formatter, "user {id} not found"),
            Self::Timeout(seconds) => write!(formatter, "timeout of {seconds}s is too long"),
            Self::Invalid(reason) => write!(formatter, "invalid: {reason}"),
        }
    }
}

impl std::error::Error for ServiceError {}

type Service<A> = ReaderEither<Config, ServiceError, A>;

#[fixture]
fn config() -> Config {
    Config {
        base_url: "https://api.example.com".to_string(),
        timeout_seconds: 30,
        users: vec![(1, "alice".to_string()), (2, "bob".to_string())],
    }
}

fn find_user(id: u32) -> Service<String> {
    ReaderEither::new(move |config: Config| {
        config
            .users
            .iter()
            .find(|(user_id, _)| *user_id == id)
            .map(|(_, name)| name.clone())
            .map_or(Either::Left(ServiceError::NotFound(id)), Either::Right)
    })
}

fn checked_timeout() -> Service<u32> {
    ReaderEither::asks(|config: Config| config.timeout_seconds)
        .filter_or_else(|seconds| *seconds <= 60, ServiceError::Timeout)
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn builds_a_profile_url(config: Config) {
    let url = find_user(2).chain(|name| {
        ReaderEither::asks(move |config: Config| format!("{}/users/{name}", config.base_url))
    });

    assert_eq!(
        url.run_result(config),
        Ok("https://api.example.com/users/bob".to_string())
    );
}

#[rstest]
fn missing_user_stops_the_pipeline(config: Config) {
    let timeout_reads = Rc::new(Cell::new(0));
    let counter = Rc::clone(&timeout_reads);
    let pipeline = find_user(99).chain(move |name| {
        counter.set(counter.get() + 1);
        checked_timeout().map(move |seconds| format!("{name}:{seconds}"))
    });

    assert_eq!(pipeline.run(config), Either::Left(ServiceError::NotFound(99)));
    assert_eq!(timeout_reads.get(), 0);
}

#[rstest]
fn filter_rejects_long_timeouts(mut config: Config) {
    config.timeout_seconds = 120;
    assert_eq!(
        checked_timeout().run(config),
        Either::Left(ServiceError::Timeout(120))
    );
}

#[rstest]
fn errors_render_for_display(config: Config) {
    let error = find_user(7).run(config).unwrap_left();
    assert_eq!(error.to_string(), "user 7 not found");
}

#[rstest]
fn same_environment_gives_same_outcome(config: Config) {
    let service = find_user(1).product(checked_timeout());
    assert_eq!(service.run(config.clone()), service.run(config));
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn alt_falls_back_to_a_default_user(config: Config) {
    let user = find_user(42).alt(|| find_user(1));
    assert_eq!(user.run(config), Either::Right("alice".to_string()));
}

#[rstest]
fn or_else_recovers_only_not_found(config: Config) {
    let recover = |error: ServiceError| match error {
        ServiceError::NotFound(_) => Service::right("guest".to_string()),
        other => Service::left(other),
    };

    assert_eq!(
        find_user(42).or_else(recover).run(config.clone()),
        Either::Right("guest".to_string())
    );

    let invalid: Service<String> = Service::left(ServiceError::Invalid("id".to_string()));
    assert_eq!(
        invalid.or_else(recover).run(config),
        Either::Left(ServiceError::Invalid("id".to_string()))
    );
}

#[rstest]
fn get_or_else_collapses_to_a_reader(config: Config) {
    let name: Reader<Config, String> = find_user(5)
        .get_or_else(|error| Reader::of(format!("<{error}>")));
    assert_eq!(name.run(config), "<user 5 not found>");
}

#[rstest]
fn fold_reports_both_branches(config: Config) {
    let describe = |service: Service<String>| {
        service.fold(
            |error| Reader::of(format!("error: {error}")),
            |name| Reader::asks(move |config: Config| format!("{name}@{}", config.base_url)),
        )
    };

    assert_eq!(
        describe(find_user(1)).run(config.clone()),
        "alice@https://api.example.com"
    );
    assert_eq!(describe(find_user(3)).run(config), "error: user 3 not found");
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn map2_reports_the_first_failure(config: Config) {
    let both = find_user(8).map2(find_user(9), |first, second| format!("{first}+{second}"));
    assert_eq!(both.run(config), Either::Left(ServiceError::NotFound(8)));
}

#[rstest]
fn chain_first_validates_without_replacing(config: Config) {
    let validated = find_user(1).chain_first(|name| {
        ReaderEither::from_predicate(
            name,
            |name| name.len() > 3,
            ServiceError::Invalid,
        )
    });
    assert_eq!(validated.run(config), Either::Right("alice".to_string()));
}

#[rstest]
fn bimap_and_swap(config: Config) {
    let swapped = find_user(4).bimap(|error| error.to_string(), |name| name.len()).swap();
    assert_eq!(swapped.run(config), Either::Right("user 4 not found".to_string()));
}

#[rstest]
fn semigroup_and_monoid_over_names(config: Config) {
    let names = vec![find_user(1), find_user(2)];
    let joined = Service::<String>::combine_all(names);
    assert_eq!(joined.run(config.clone()), Either::Right("alicebob".to_string()));

    let with_missing = find_user(1).combine(find_user(3));
    assert_eq!(with_missing.run(config.clone()), Either::Left(ServiceError::NotFound(3)));

    let first_success = find_user(3).combine_successes(find_user(2));
    assert_eq!(first_success.run(config), Either::Right("bob".to_string()));
}

#[rstest]
fn chain_either_k_lifts_a_parser(config: Config) {
    let parse = |name: String| -> Either<ServiceError, usize> {
        if name.is_empty() {
            Either::Left(ServiceError::Invalid("empty".to_string()))
        } else {
            Either::Right(name.len())
        }
    };

    assert_eq!(find_user(2).chain_either_k(parse).run(config), Either::Right(3));
}

#[rstest]
fn from_either_k_builds_services(config: Config) {
    let lookup = Service::<u32>::from_either_k(|text: &str| match text.parse::<u32>() {
        Ok(id) => Either::Right(id),
        Err(_) => Either::Left(ServiceError::Invalid(text.to_string())),
    });

    assert_eq!(lookup("12").run(config.clone()), Either::Right(12));
    assert_eq!(
        lookup("x").run(config),
        Either::Left(ServiceError::Invalid("x".to_string()))
    );
}

#[rstest]
fn ap_first_keeps_the_user(config: Config) {
    let user = find_user(1).ap_first(checked_timeout());
    assert_eq!(user.run(config), Either::Right("alice".to_string()));
}

#[rstest]
fn display_is_opaque() {
    assert_eq!(find_user(1).to_string(), "<ReaderEither>");
}
