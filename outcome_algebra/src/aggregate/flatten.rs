//! Collapsing a sequence of outcomes into one.

use crate::{Failure, MergeOptions, Outcome};

use super::merge::finish;

/// Running state of the flatten fold. Once it holds a failure it never goes
/// back to collecting values.
enum Fold<T, P> {
    Values(Vec<T>),
    Failed(Failure<P>),
}

impl<T, P> Fold<T, P> {
    fn step(self, outcome: Outcome<T, P>, separator: &str) -> Self {
        match (self, outcome) {
            (Self::Values(mut values), Ok(value)) => {
                values.push(value);
                Self::Values(values)
            }
            (Self::Values(_), Err(failure)) => Self::Failed(failure),
            (Self::Failed(acc), Ok(_)) => Self::Failed(acc),
            (Self::Failed(acc), Err(failure)) => Self::Failed(acc.join(&failure, separator)),
        }
    }
}

/// Turns a sequence of outcomes into an outcome over a sequence.
///
/// If every input succeeds the values are returned in input order. Otherwise
/// every failure is merged left to right into one: the severity is the
/// maximum seen, messages are joined by the separator, the group header is
/// prepended once to the whole message, and the first failure's payload
/// survives unless the options override it. An empty input succeeds with an
/// empty vector.
///
/// # Errors
///
/// Returns the aggregated [`Failure`] when at least one input failed.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{MergeOptions, Outcome, Severity, failure, flatten, success};
///
/// let all_ok: Vec<Outcome<i32, ()>> = vec![success(1), success(2), success(3)];
/// assert_eq!(flatten(all_ok, MergeOptions::new()), Ok(vec![1, 2, 3]));
///
/// let mixed: Vec<Outcome<i32, ()>> = vec![
///     success(1),
///     failure(Severity::Warn, "x", ()),
///     success(2),
///     failure(Severity::Err, "y", ()),
/// ];
/// let failed = flatten(mixed, MergeOptions::new().with_header("2 problems"))
///     .expect_err("two inputs failed");
/// assert_eq!(failed.level(), Severity::Err);
/// assert_eq!(failed.message(), "2 problems\n  x\n  y");
/// ```
pub fn flatten<T, P, I>(outcomes: I, options: MergeOptions<P>) -> Outcome<Vec<T>, P>
where
    I: IntoIterator<Item = Outcome<T, P>>,
{
    let (separator, header, payload) = options.into_parts();
    let iter = outcomes.into_iter();
    let initial = Fold::Values(Vec::with_capacity(iter.size_hint().0));
    match iter.fold(initial, |acc, outcome| acc.step(outcome, &separator)) {
        Fold::Values(values) => Ok(values),
        Fold::Failed(failure) => Err(finish(failure, &separator, header.as_deref(), payload)),
    }
}
