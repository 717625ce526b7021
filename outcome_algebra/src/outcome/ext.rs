//! Extension traits connecting [`Outcome`] to plain `Result`s and to the
//! top-level abort.

use std::fmt::Display;

use crate::{Failure, Outcome, Severity};

/// Methods available on every [`Outcome`].
pub trait OutcomeExt<T, P> {
    /// Returns the success value, or logs the rendered failure through
    /// `tracing` at error level and panics with the same text.
    ///
    /// This is the single point where a failure becomes a process-level
    /// error. Call it only at boundaries that treat any leftover failure as
    /// fatal; the combinators never use it.
    ///
    /// # Panics
    ///
    /// Panics with the output of [`Failure::render`] when `self` is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_algebra::{Outcome, OutcomeExt, success};
    ///
    /// let port: Outcome<u16, ()> = success(8080);
    /// assert_eq!(port.unwrap_or_abort(), 8080);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_algebra::{Outcome, OutcomeExt, Severity, failure};
    ///
    /// let port: Outcome<u16, ()> = failure(Severity::Err, "port missing", ());
    /// port.unwrap_or_abort(); // panics with "[Err] port missing"
    /// ```
    fn unwrap_or_abort(self) -> T;

    /// Raises the severity of a failure to at least `level`; successes pass
    /// through.
    ///
    /// # Errors
    ///
    /// Returns the original failure, possibly escalated.
    fn escalate(self, level: Severity) -> Outcome<T, P>;

    /// Logs a failure with [`Failure::report`] and hands the outcome back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns the original failure untouched.
    fn report_failure(self) -> Outcome<T, P>;
}

impl<T, P> OutcomeExt<T, P> for Outcome<T, P> {
    #[track_caller]
    fn unwrap_or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(failure) => {
                let rendered = failure.render();
                tracing::error!(severity = %failure.level(), "{rendered}");
                panic!("{rendered}");
            }
        }
    }

    fn escalate(self, level: Severity) -> Self {
        self.map_err(|failure| failure.escalate(level))
    }

    fn report_failure(self) -> Self {
        self.inspect_err(Failure::report)
    }
}

/// Lifts a standard `Result` into an [`Outcome`].
pub trait IntoOutcome<T, E> {
    /// Wraps the error as the payload of a failure at `level`, using its
    /// `Display` text as the message.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] when `self` is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_algebra::{IntoOutcome, Severity};
    ///
    /// let parsed = "abc".parse::<u32>().into_outcome(Severity::Warn);
    /// let failure = parsed.expect_err("not a number");
    /// assert_eq!(failure.render(), "[Warn] invalid digit found in string");
    /// ```
    fn into_outcome(self, level: Severity) -> Outcome<T, E>;
}

impl<T, E: Display> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self, level: Severity) -> Outcome<T, E> {
        self.map_err(|error| {
            let message = error.to_string();
            Failure::new(error).with_level(level).with_message(message)
        })
    }
}
