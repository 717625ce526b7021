//! Property tests for the severity lattice and the aggregation combinators.

use outcome_algebra::{
    Failure, MergeOptions, Outcome, Severity, flatten, get_failures, max_severity, merge,
    remove_failures,
};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn failure_node() -> impl Strategy<Value = Failure<u8>> {
    (severity(), "[a-z]{0,6}", any::<u8>()).prop_map(|(level, message, payload)| {
        Failure::new(payload).with_level(level).with_message(message)
    })
}

fn outcome() -> impl Strategy<Value = Outcome<u16, u8>> {
    prop_oneof![
        any::<u16>().prop_map(Ok),
        failure_node().prop_map(Err),
    ]
}

proptest! {
    #[test]
    fn max_is_commutative(a in severity(), b in severity()) {
        prop_assert_eq!(max_severity(a, b), max_severity(b, a));
    }

    #[test]
    fn max_is_associative(a in severity(), b in severity(), c in severity()) {
        prop_assert_eq!(
            max_severity(max_severity(a, b), c),
            max_severity(a, max_severity(b, c)),
        );
    }

    #[test]
    fn max_is_idempotent(a in severity()) {
        prop_assert_eq!(max_severity(a, a), a);
    }

    #[test]
    fn merge_level_is_max_and_never_lower(a in failure_node(), b in failure_node()) {
        let expected = max_severity(a.level(), b.level());
        let (a_level, b_level) = (a.level(), b.level());
        let swapped = merge(b.clone(), a.clone(), MergeOptions::new());
        let merged = merge(a, b, MergeOptions::new());
        prop_assert_eq!(merged.level(), expected);
        prop_assert_eq!(merged.level(), swapped.level());
        prop_assert!(merged.level() >= a_level && merged.level() >= b_level);
    }

    #[test]
    fn merge_level_is_associative(a in failure_node(), b in failure_node(), c in failure_node()) {
        let left = merge(merge(a.clone(), b.clone(), MergeOptions::new()), c.clone(), MergeOptions::new());
        let right = merge(a, merge(b, c, MergeOptions::new()), MergeOptions::new());
        prop_assert_eq!(left.level(), right.level());
        prop_assert_eq!(left.message(), right.message());
    }

    #[test]
    fn flatten_matches_partition(outcomes in prop::collection::vec(outcome(), 0..12)) {
        let values = remove_failures(outcomes.clone());
        let failures = get_failures(outcomes.clone());
        prop_assert_eq!(values.len() + failures.len(), outcomes.len());

        match flatten(outcomes, MergeOptions::new()) {
            Ok(flat) => {
                prop_assert!(failures.is_empty());
                prop_assert_eq!(flat, values);
            }
            Err(aggregated) => {
                let top = failures.iter().map(Failure::level).max();
                prop_assert_eq!(Some(aggregated.level()), top);
                let messages: Vec<&str> = failures.iter().map(Failure::message).collect();
                prop_assert_eq!(aggregated.message(), messages.join("\n  "));
                prop_assert_eq!(Some(aggregated.payload()), failures.first().map(Failure::payload));
            }
        }
    }

    #[test]
    fn partition_keeps_relative_order(outcomes in prop::collection::vec(outcome(), 0..12)) {
        let expected_values: Vec<u16> = outcomes.iter().filter_map(|o| o.as_ref().ok().copied()).collect();
        let expected_failures: Vec<Failure<u8>> = outcomes.iter().filter_map(|o| o.as_ref().err().cloned()).collect();
        prop_assert_eq!(remove_failures(outcomes.clone()), expected_values);
        prop_assert_eq!(get_failures(outcomes), expected_failures);
    }
}
