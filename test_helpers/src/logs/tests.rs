//! Unit tests for log capture helpers.

use super::{capture, capture_panic};

#[test]
fn captures_events_and_fields() {
    let ((), output) = capture(|| tracing::error!(code = 7, "went wrong"));
    assert!(output.contains("ERROR"));
    assert!(output.contains("went wrong"));
    assert!(output.contains("code=7"));
}

#[test]
fn empty_when_nothing_logged() {
    let (value, output) = capture(|| 1 + 1);
    assert_eq!(value, 2);
    assert!(output.is_empty());
}

#[test]
fn captures_formatted_panic_message_and_prior_logs() {
    let (message, output) = capture_panic(|| -> u8 {
        tracing::info!("about to fail");
        panic!("failed with {}", 42);
    });
    assert_eq!(message.as_deref(), Some("failed with 42"));
    assert!(output.contains("about to fail"));
}

#[test]
fn captures_static_panic_message() {
    let (message, _) = capture_panic(|| -> u8 { panic!("static") });
    assert_eq!(message.as_deref(), Some("static"));
}

#[test]
fn none_when_closure_returns() {
    let (message, _) = capture_panic(|| 5);
    assert!(message.is_none());
}
