//! Pairwise merging of failures and the applicative combine built on it.

use crate::{Failure, MergeOptions, Outcome};

/// Merges two failures into one.
///
/// The result has the higher of the two severities, the message
/// `a ++ separator ++ b` (preceded once by `header ++ separator` when a header
/// is set) and the override payload if one was given, otherwise `a`'s.
/// Children of `a` are kept as they are; `b`'s are dropped along with the
/// rest of `b`'s structure.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Failure, MergeOptions, Severity, merge};
///
/// let merged = merge(
///     Failure::new("a").with_level(Severity::Warn).with_message("x"),
///     Failure::new("b").with_level(Severity::Err).with_message("y"),
///     MergeOptions::new(),
/// );
/// assert_eq!(merged.level(), Severity::Err);
/// assert_eq!(merged.message(), "x\n  y");
/// assert_eq!(*merged.payload(), "a");
/// ```
#[must_use]
pub fn merge<P>(a: Failure<P>, b: Failure<P>, options: MergeOptions<P>) -> Failure<P> {
    let (separator, header, payload) = options.into_parts();
    finish(
        a.join(&b, &separator),
        &separator,
        header.as_deref(),
        payload,
    )
}

/// Merges any number of failures left to right, applying the header once.
///
/// Returns `None` when `failures` is empty. A single failure is returned
/// with only the header and payload override applied.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Failure, MergeOptions, merge_all};
///
/// let merged = merge_all(
///     ["a", "b", "c"].map(|m| Failure::new(()).with_message(m)),
///     MergeOptions::new().with_separator(", "),
/// );
/// assert_eq!(merged.map(|f| f.message().to_owned()), Some("a, b, c".to_owned()));
/// ```
#[must_use]
pub fn merge_all<P, I>(failures: I, options: MergeOptions<P>) -> Option<Failure<P>>
where
    I: IntoIterator<Item = Failure<P>>,
{
    let (separator, header, payload) = options.into_parts();
    failures
        .into_iter()
        .reduce(|acc, next| acc.join(&next, &separator))
        .map(|merged| finish(merged, &separator, header.as_deref(), payload))
}

/// Applies a wrapped function to a wrapped argument.
///
/// Both sides are always inspected, so two independent failures are both
/// reported: when both are failures they are merged with the function side
/// as the left operand. A single failure is returned unchanged and `options`
/// is not used.
///
/// # Errors
///
/// Returns the failure of whichever side failed, or their merge.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{MergeOptions, Outcome, Severity, apply, failure, success};
///
/// let add_one: Outcome<fn(i32) -> i32, ()> = success(|x| x + 1);
/// assert_eq!(apply(add_one, success(41), MergeOptions::new()), Ok(42));
///
/// let bad_fn: Outcome<fn(i32) -> i32, ()> = failure(Severity::Warn, "no fn", ());
/// let bad_arg: Outcome<i32, ()> = failure(Severity::Err, "no arg", ());
/// let merged = apply(bad_fn, bad_arg, MergeOptions::new()).expect_err("both failed");
/// assert_eq!(merged.render(), "[Err] no fn\n  no arg");
/// ```
pub fn apply<A, B, F, P>(
    function: Outcome<F, P>,
    argument: Outcome<A, P>,
    options: MergeOptions<P>,
) -> Outcome<B, P>
where
    F: FnOnce(A) -> B,
{
    match (function, argument) {
        (Ok(f), Ok(value)) => Ok(f(value)),
        (Err(failure), Ok(_)) | (Ok(_), Err(failure)) => Err(failure),
        (Err(left), Err(right)) => Err(merge(left, right, options)),
    }
}

/// Pairs two independent outcomes, merging their failures if both failed.
///
/// # Errors
///
/// Returns the failure of whichever side failed, or their merge.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{MergeOptions, Outcome, zip};
///
/// let name: Outcome<&str, ()> = Ok("ada");
/// let age: Outcome<u8, ()> = Ok(36);
/// assert_eq!(zip(name, age, MergeOptions::new()), Ok(("ada", 36)));
/// ```
pub fn zip<A, B, P>(
    left: Outcome<A, P>,
    right: Outcome<B, P>,
    options: MergeOptions<P>,
) -> Outcome<(A, B), P> {
    let pair = left.map(|a| move |b: B| (a, b));
    apply(pair, right, options)
}

pub(super) fn finish<P>(
    merged: Failure<P>,
    separator: &str,
    header: Option<&str>,
    payload: Option<P>,
) -> Failure<P> {
    let grouped = match header {
        Some(title) => merged.under_header(title, separator),
        None => merged,
    };
    grouped.replace_payload(payload)
}
