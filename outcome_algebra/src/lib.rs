//! Severity-graded outcomes and the combinators that merge, flatten and chain
//! them.
//!
//! An [`Outcome<T, P>`] is a `Result<T, Failure<P>>`. Each [`Failure`] has a
//! [`Severity`], a message and a payload of the caller's type. The crate adds
//! two families of combinators on top:
//!
//! - [`aggregate`]: for independent computations. [`merge`], [`apply`],
//!   [`zip`] and [`flatten`] report *every* failure, escalating to the
//!   highest severity and joining messages in input order.
//! - [`compose`]: for dependent computations. [`compose::chain`] and friends
//!   stop at the *first* failure and return it untouched.
//!
//! [`OutcomeExt::unwrap_or_abort`] is the one place a failure turns into a
//! panic; it logs the rendered failure through `tracing` first.
//!
//! # Examples
//!
//! ```
//! use outcome_algebra::{MergeOptions, Outcome, Severity, failure, flatten, success};
//!
//! fn check_name(name: &str) -> Outcome<String, &'static str> {
//!     if name.is_empty() {
//!         failure(Severity::Err, "name is empty", "name")
//!     } else {
//!         success(name.to_owned())
//!     }
//! }
//!
//! fn check_age(age: i32) -> Outcome<String, &'static str> {
//!     if age < 0 {
//!         failure(Severity::Warn, "age is negative", "age")
//!     } else {
//!         success(age.to_string())
//!     }
//! }
//!
//! let report = flatten(
//!     [check_name(""), check_age(-1)],
//!     MergeOptions::new().with_header("signup rejected"),
//! )
//! .expect_err("both fields are invalid");
//!
//! assert_eq!(report.level(), Severity::Err);
//! assert_eq!(
//!     report.render(),
//!     "[Err] signup rejected\n  name is empty\n  age is negative",
//! );
//! assert_eq!(*report.payload(), "name");
//! ```

pub mod aggregate;
pub mod compose;
mod failure;
mod options;
mod outcome;
mod severity;

pub use aggregate::{
    Partitioned, apply, flatten, get_failures, merge, merge_all, partition, remove_failures, zip,
};
pub use failure::{Failure, render};
pub use options::{DEFAULT_SEPARATOR, MergeOptions};
pub use outcome::{IntoOutcome, Outcome, OutcomeExt, failure, success};
pub use severity::{ParseSeverityError, Severity, max_severity};
