//! Splitting outcomes into successes and failures without merging.

use crate::{Failure, Outcome};

/// Success values and failures of a sequence, each in input order.
///
/// Collect into it directly from an iterator of outcomes:
///
/// ```
/// use outcome_algebra::{Outcome, Partitioned, Severity, failure, success};
///
/// let outcomes: Vec<Outcome<u8, ()>> = vec![success(1), failure(Severity::Warn, "w", ()), success(2)];
/// let split: Partitioned<u8, ()> = outcomes.into_iter().collect();
/// assert_eq!(split.successes(), &[1, 2]);
/// assert_eq!(split.failures().len(), 1);
/// assert!(!split.is_clean());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T, P> {
    successes: Vec<T>,
    failures: Vec<Failure<P>>,
}

impl<T, P> Default for Partitioned<T, P> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T, P> Partitioned<T, P> {
    /// An empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Success values in input order.
    #[must_use]
    pub fn successes(&self) -> &[T] {
        &self.successes
    }

    /// Failures in input order.
    #[must_use]
    pub fn failures(&self) -> &[Failure<P>] {
        &self.failures
    }

    /// `true` when no input failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Splits into `(successes, failures)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<Failure<P>>) {
        (self.successes, self.failures)
    }

    fn push(&mut self, outcome: Outcome<T, P>) {
        match outcome {
            Ok(value) => self.successes.push(value),
            Err(failure) => self.failures.push(failure),
        }
    }
}

impl<T, P> FromIterator<Outcome<T, P>> for Partitioned<T, P> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, P>>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut acc, outcome| {
            acc.push(outcome);
            acc
        })
    }
}

impl<T, P> Extend<Outcome<T, P>> for Partitioned<T, P> {
    fn extend<I: IntoIterator<Item = Outcome<T, P>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

/// Splits outcomes into successes and failures in one pass.
#[must_use]
pub fn partition<T, P, I>(outcomes: I) -> Partitioned<T, P>
where
    I: IntoIterator<Item = Outcome<T, P>>,
{
    outcomes.into_iter().collect()
}

/// Keeps only the success values, in input order.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, failure, remove_failures, success};
///
/// let outcomes: Vec<Outcome<u8, ()>> = vec![success(1), failure(Severity::Err, "e", ()), success(3)];
/// assert_eq!(remove_failures(outcomes), vec![1, 3]);
/// ```
#[must_use]
pub fn remove_failures<T, P, I>(outcomes: I) -> Vec<T>
where
    I: IntoIterator<Item = Outcome<T, P>>,
{
    outcomes.into_iter().filter_map(Result::ok).collect()
}

/// Keeps only the failures, in input order.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, failure, get_failures, success};
///
/// let outcomes: Vec<Outcome<u8, ()>> = vec![success(1), failure(Severity::Err, "e", ())];
/// let failures = get_failures(outcomes);
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].message(), "e");
/// ```
#[must_use]
pub fn get_failures<T, P, I>(outcomes: I) -> Vec<Failure<P>>
where
    I: IntoIterator<Item = Outcome<T, P>>,
{
    outcomes.into_iter().filter_map(Result::err).collect()
}
