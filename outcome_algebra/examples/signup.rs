//! Validates a handful of signup requests and prints the result of each.
//!
//! Field checks are independent, so their failures are aggregated; the
//! follow-up steps depend on a valid form, so they are chained. The last
//! request is passed to `unwrap_or_abort` only when `SIGNUP_ABORT` is set, to
//! show the top-level failure path.

use outcome_algebra::{
    MergeOptions, Outcome, OutcomeExt, Severity, compose, failure, flatten, success, zip,
};
use tracing::info;

#[derive(Debug)]
struct Signup {
    name: String,
    age: u8,
}

fn check_name(raw: &str) -> Outcome<String, &'static str> {
    match raw.trim() {
        "" => failure(Severity::Err, "name must not be empty", "name"),
        name if name.len() > 16 => failure(Severity::Warn, "name is too long", "name"),
        name => success(name.to_owned()),
    }
}

fn check_age(raw: &str) -> Outcome<u8, &'static str> {
    match raw.parse::<u8>() {
        Ok(age) if age >= 13 => success(age),
        Ok(_) => failure(Severity::Warn, "must be at least 13", "age"),
        Err(err) => failure(Severity::Err, format!("age '{raw}': {err}"), "age"),
    }
}

fn validate(name: &str, age: &str) -> Outcome<Signup, &'static str> {
    let options = MergeOptions::new().with_header(format!("request '{name}' rejected"));
    zip(check_name(name), check_age(age), options).map(|(name, age)| Signup { name, age })
}

fn reserve(signup: Signup) -> Outcome<Signup, &'static str> {
    if signup.name == "root" {
        failure(Severity::Panic, "reserved account name", "name")
    } else {
        success(signup)
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let requests = [("ada", "36"), ("", "7"), ("root", "40"), ("grace", "old")];
    for (name, age) in requests {
        match compose::chain(validate(name, age), [reserve]) {
            Ok(signup) => info!(name = %signup.name, age = signup.age, "accepted"),
            Err(rejected) => rejected.report(),
        }
    }

    let batch = flatten(
        requests.map(|(name, age)| validate(name, age)),
        MergeOptions::new().with_header("batch import failed"),
    );
    if let Err(rejected) = &batch {
        rejected.report();
    }

    if std::env::var_os("SIGNUP_ABORT").is_some() {
        let accepted = batch.unwrap_or_abort();
        info!(count = accepted.len(), "batch imported");
    }
}
