//! The [`Outcome`] alias and its constructors.
//!
//! An outcome is a plain [`Result`] whose error side is a [`Failure`]. Using
//! the standard two-variant type keeps `?`, `match` and the inherent
//! `Result` adaptors available; this crate only adds the severity-aware
//! combinators around it.

mod ext;

pub use ext::{IntoOutcome, OutcomeExt};

use crate::{Failure, Severity};

/// Either a value of type `T` or a [`Failure`] carrying a `P` payload.
pub type Outcome<T, P> = Result<T, Failure<P>>;

/// Wraps `value` as a successful outcome.
///
/// # Errors
///
/// Never returns `Err`; the return type matches the other constructors so it
/// can be used interchangeably with them.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, success};
///
/// let outcome: Outcome<u8, ()> = success(7);
/// assert_eq!(outcome, Ok(7));
/// ```
pub const fn success<T, P>(value: T) -> Outcome<T, P> {
    Ok(value)
}

/// Builds a failed outcome with the given severity, message and payload.
///
/// Use [`Failure::new`] and its builder methods when children are needed.
///
/// # Errors
///
/// Always returns `Err` holding the new [`Failure`].
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, failure};
///
/// let outcome: Outcome<u8, &str> = failure(Severity::Warn, "disk almost full", "disk");
/// let rendered = outcome.map_err(|f| f.render());
/// assert_eq!(rendered, Err("[Warn] disk almost full".to_owned()));
/// ```
pub fn failure<T, P>(level: Severity, message: impl Into<String>, payload: P) -> Outcome<T, P> {
    Err(Failure::new(payload)
        .with_level(level)
        .with_message(message))
}
