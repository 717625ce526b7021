//! Combinators for independent computations: every failure is reported.
//!
//! [`merge`] joins two failures, [`apply`] and [`zip`] combine two outcomes,
//! and [`flatten`] collapses a whole sequence. All of them take the maximum
//! severity and concatenate messages in input order. [`remove_failures`],
//! [`get_failures`] and [`partition`] split a sequence without merging.
//!
//! Use [`crate::compose`] instead when each step depends on the previous one.

mod flatten;
mod merge;
mod partition;

pub use flatten::flatten;
pub use merge::{apply, merge, merge_all, zip};
pub use partition::{Partitioned, get_failures, partition, remove_failures};
