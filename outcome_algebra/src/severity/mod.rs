//! Severity lattice attached to every [`crate::Failure`].
//!
//! Levels form a total order `Info < Warn < Err < Panic`. The only operation
//! the combinators need is the maximum, so merging two failures can escalate
//! a severity but never lower it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How serious a failure is.
///
/// The derived ordering follows declaration order, so `Ord::max` is the
/// lattice join.
///
/// # Examples
///
/// ```
/// use outcome_algebra::Severity;
///
/// assert!(Severity::Info < Severity::Warn);
/// assert!(Severity::Err < Severity::Panic);
/// assert_eq!(Severity::default(), Severity::Err);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// Informational note; the computation still produced no value.
    Info,
    /// Something suspicious that a caller may choose to recover from.
    Warn,
    /// Ordinary failure.
    #[default]
    Err,
    /// Unrecoverable failure.
    Panic,
}

impl Severity {
    /// Every level, lowest first.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warn, Self::Err, Self::Panic];

    /// Returns the higher of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_algebra::Severity;
    ///
    /// assert_eq!(Severity::Warn.escalate(Severity::Err), Severity::Err);
    /// assert_eq!(Severity::Panic.escalate(Severity::Info), Severity::Panic);
    /// ```
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether this level is the top of the lattice.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Panic)
    }

    /// Level name as used by [`crate::Failure::render`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Err => "Err",
            Self::Panic => "Panic",
        }
    }
}

/// Join of the severity lattice.
///
/// Commutative, associative and idempotent. Every merge in this crate routes
/// through it.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Severity, max_severity};
///
/// assert_eq!(max_severity(Severity::Warn, Severity::Info), Severity::Warn);
/// ```
#[must_use]
pub fn max_severity(a: Severity, b: Severity) -> Severity {
    a.escalate(b)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity level '{input}'; expected one of Info, Warn, Err, Panic")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

// `Self::Err` would be ambiguous with the `Err` variant, so the error type is
// named directly and the variant is found by name.
impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, ParseSeverityError> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = match lowered.as_str() {
            "warning" => "warn",
            "error" => "err",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSeverityError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests;
