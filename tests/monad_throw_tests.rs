#![cfg(feature = "effect")]
//! Integration tests for the `MonadThrow` capability.
//!
//! The same generic helpers run against `Either`, `Result` and
//! `ReaderEither`.

use reader_either::control::Either;
use reader_either::effect::monad_throw::{self, MonadThrow};
use reader_either::effect::ReaderEither;
use rstest::rstest;

fn parse_port<M>(text: &str) -> M::WithType<u16>
where
    M: MonadThrow<Error = String>,
{
    monad_throw::from_option::<M, _, _>(text.parse::<u16>().ok(), || {
        format!("{text} is not a port")
    })
}

fn unprivileged<M>(port: M) -> M::WithType<u16>
where
    M: MonadThrow<Error = String, Inner = u16>,
{
    monad_throw::filter_or_else(port, |port| *port >= 1024, |port| {
        format!("{port} is privileged")
    })
}

type EitherWitness = Either<String, ()>;
type ResultWitness = Result<(), String>;
type ReaderWitness = ReaderEither<u16, String, ()>;

// =============================================================================
// Carriers
// =============================================================================

#[rstest]
#[case("8080", Either::Right(8080))]
#[case("http", Either::Left("http is not a port".to_string()))]
fn parse_port_into_either(#[case] text: &str, #[case] expected: Either<String, u16>) {
    assert_eq!(parse_port::<EitherWitness>(text), expected);
}

#[rstest]
#[case("443", Err("443 is privileged".to_string()))]
#[case("3000", Ok(3000))]
fn unprivileged_result(#[case] text: &str, #[case] expected: Result<u16, String>) {
    assert_eq!(unprivileged(parse_port::<ResultWitness>(text)), expected);
}

#[rstest]
fn parse_port_into_reader_either_ignores_the_environment() {
    let port = parse_port::<ReaderWitness>("5432");
    assert_eq!(port.run(0), Either::Right(5432));
    assert_eq!(port.run(65535), Either::Right(5432));
}

#[rstest]
fn reader_either_filters_after_reading_the_environment() {
    let configured = ReaderEither::<u16, String, u16>::ask();
    let checked = unprivileged(configured);

    assert_eq!(checked.run(8443), Either::Right(8443));
    assert_eq!(checked.run(80), Either::Left("80 is privileged".to_string()));
}

// =============================================================================
// Derived helpers
// =============================================================================

#[rstest]
fn throw_error_is_a_failure_for_every_carrier() {
    let either: Either<String, i32> = <EitherWitness as MonadThrow>::throw_error("e".to_string());
    let result: Result<i32, String> = <ResultWitness as MonadThrow>::throw_error("e".to_string());
    let reader: ReaderEither<u16, String, i32> =
        <ReaderWitness as MonadThrow>::throw_error("e".to_string());

    assert_eq!(either, Either::Left("e".to_string()));
    assert_eq!(result, Err("e".to_string()));
    assert_eq!(reader.run(1), Either::Left("e".to_string()));
}

#[rstest]
fn from_refinement_narrows_through_reader_either() {
    let narrowed = ReaderEither::<(), String, u8>::from_refinement(
        1000_i32,
        |n| u8::try_from(n).map_err(|_| n),
        |n| format!("{n} does not fit in a byte"),
    );
    assert_eq!(
        narrowed.run(()),
        Either::Left("1000 does not fit in a byte".to_string())
    );
}

#[rstest]
fn refine_or_else_narrows_a_successful_value() {
    let computed = ReaderEither::<i32, String, i32>::asks(|n: i32| n * 2);
    let narrowed = computed.refine_or_else(
        |n| u8::try_from(n).map_err(|_| n),
        |n| format!("{n} does not fit in a byte"),
    );

    assert_eq!(narrowed.run(100), Either::Right(200_u8));
    assert_eq!(
        narrowed.run(200),
        Either::Left("400 does not fit in a byte".to_string())
    );
}

#[rstest]
fn from_option_and_from_result_match_their_sources() {
    let some = ReaderEither::<(), String, i32>::from_option(Some(1), || "none".to_string());
    let none = ReaderEither::<(), String, i32>::from_option(None, || "none".to_string());
    let ok = ReaderEither::<(), String, i32>::from_result(Ok(2));

    assert_eq!(some.run(()), Either::Right(1));
    assert_eq!(none.run(()), Either::Left("none".to_string()));
    assert_eq!(ok.run(()), Either::Right(2));
}

#[rstest]
fn chain_either_k_through_the_trait() {
    let halved = monad_throw::chain_either_k(Ok::<i32, String>(9), |n| {
        if n % 2 == 0 {
            Either::Right(n / 2)
        } else {
            Either::Left(format!("{n} is odd"))
        }
    });
    assert_eq!(halved, Err("9 is odd".to_string()));
}
