//! Unit tests for the severity lattice.

use rstest::rstest;

use super::{Severity, max_severity};

#[rstest]
#[case(Severity::Info, Severity::Warn, Severity::Warn)]
#[case(Severity::Warn, Severity::Info, Severity::Warn)]
#[case(Severity::Err, Severity::Warn, Severity::Err)]
#[case(Severity::Panic, Severity::Err, Severity::Panic)]
#[case(Severity::Info, Severity::Info, Severity::Info)]
fn max_picks_higher_level(#[case] a: Severity, #[case] b: Severity, #[case] expected: Severity) {
    assert_eq!(max_severity(a, b), expected);
}

#[test]
fn all_is_sorted_lowest_first() {
    let mut sorted = Severity::ALL;
    sorted.sort_unstable();
    assert_eq!(sorted, Severity::ALL);
}

#[test]
fn only_panic_is_fatal() {
    let fatal: Vec<_> = Severity::ALL.into_iter().filter(|s| s.is_fatal()).collect();
    assert_eq!(fatal, vec![Severity::Panic]);
}

#[rstest]
#[case("Info", Severity::Info)]
#[case("warn", Severity::Warn)]
#[case("WARNING", Severity::Warn)]
#[case(" error ", Severity::Err)]
#[case("err", Severity::Err)]
#[case("Panic", Severity::Panic)]
fn parses_level_names(#[case] input: &str, #[case] expected: Severity) {
    assert_eq!(input.parse::<Severity>(), Ok(expected));
}

#[test]
fn rejects_unknown_names() {
    let err = "fatal"
        .parse::<Severity>()
        .expect_err("fatal is not a level");
    assert_eq!(err.input(), "fatal");
    assert!(err.to_string().contains("'fatal'"));
}

#[test]
fn display_round_trips_through_parse() {
    for level in Severity::ALL {
        assert_eq!(level.to_string().parse::<Severity>(), Ok(level));
    }
}
