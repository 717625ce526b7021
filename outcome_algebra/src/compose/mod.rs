//! Combinators for dependent computations: the first failure wins.
//!
//! Every function here is a bind over exactly one channel of an
//! [`Outcome`]. The other channel passes through untouched, and nothing is
//! merged: a failure met along the way is returned as it is and every later
//! step is skipped. Reach for [`crate::aggregate`] when the steps are
//! independent and all of their failures should be reported.

use crate::{Failure, Outcome};

/// Binds `f` over the success channel.
///
/// `f` itself returns an outcome, so this chains rather than maps. A failure
/// is returned unchanged without calling `f`.
///
/// # Errors
///
/// Returns the incoming failure, or whatever failure `f` produces.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, compose, failure, success};
///
/// let halve = |n: u32| -> Outcome<u32, ()> {
///     if n % 2 == 0 { success(n / 2) } else { failure(Severity::Warn, "odd", ()) }
/// };
/// assert_eq!(compose::map(halve, success(8)), Ok(4));
/// assert!(compose::map(halve, success(7)).is_err());
/// ```
pub fn map<T, U, P, F>(f: F, outcome: Outcome<T, P>) -> Outcome<U, P>
where
    F: FnOnce(T) -> Outcome<U, P>,
{
    outcome.and_then(f)
}

/// Alias of [`map`].
///
/// # Errors
///
/// Same as [`map`].
pub fn map_ok<T, U, P, F>(f: F, outcome: Outcome<T, P>) -> Outcome<U, P>
where
    F: FnOnce(T) -> Outcome<U, P>,
{
    map(f, outcome)
}

/// Binds `f` over the failure channel.
///
/// This is where callers recover: `f` may turn the failure into a success,
/// rewrite it, or change the payload type. A success passes through
/// unchanged without calling `f`.
///
/// # Errors
///
/// Returns whatever failure `f` produces.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, compose, failure};
///
/// let missing: Outcome<u16, ()> = failure(Severity::Info, "no port set", ());
/// let recovered = compose::map_err(
///     |f| if f.level() <= Severity::Warn { Ok(8080) } else { Err(f) },
///     missing,
/// );
/// assert_eq!(recovered, Ok(8080));
/// ```
pub fn map_err<T, P, Q, F>(f: F, outcome: Outcome<T, P>) -> Outcome<T, Q>
where
    F: FnOnce(Failure<P>) -> Outcome<T, Q>,
{
    outcome.or_else(f)
}

/// Feeds a success into the failure-producing function `f`, short-circuiting
/// on failure.
///
/// # Errors
///
/// Returns the incoming failure without calling `f`, or `f`'s failure.
pub fn kleisli<T, U, P, F>(f: F, outcome: Outcome<T, P>) -> Outcome<U, P>
where
    F: FnOnce(T) -> Outcome<U, P>,
{
    match outcome {
        Ok(value) => f(value),
        Err(failure) => Err(failure),
    }
}

/// Runs `functions` in order, each on the previous step's value.
///
/// The first failure stops the chain: no later function is called and the
/// failure is returned exactly as produced. With no functions the initial
/// outcome is returned as is.
///
/// # Errors
///
/// Returns `initial`'s failure or the first failure produced by a step.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Outcome, Severity, compose, failure, success};
///
/// type Step = Box<dyn FnOnce(i32) -> Outcome<i32, ()>>;
/// let steps: Vec<Step> = vec![
///     Box::new(|x: i32| -> Outcome<i32, ()> { success(x + 1) }),
///     Box::new(|_: i32| -> Outcome<i32, ()> { failure(Severity::Err, "stop", ()) }),
///     Box::new(|_: i32| -> Outcome<i32, ()> { unreachable!("chain stops at the first failure") }),
/// ];
/// let stopped = compose::chain(success(5), steps).expect_err("second step fails");
/// assert_eq!(stopped.message(), "stop");
/// ```
pub fn chain<T, P, I>(initial: Outcome<T, P>, functions: I) -> Outcome<T, P>
where
    I: IntoIterator,
    I::Item: FnOnce(T) -> Outcome<T, P>,
{
    let start = initial?;
    functions
        .into_iter()
        .try_fold(start, |value, step| step(value))
}

/// Composes two failure-producing functions into one.
///
/// The result runs `f`, then `g` on its value; `g` is skipped when `f`
/// fails.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Failure, Outcome, Severity, compose, failure};
///
/// let parse = |s: &str| -> Outcome<i32, ()> {
///     s.parse().map_err(|_| Failure::new(()).with_message("nan"))
/// };
/// let positive = |n: i32| -> Outcome<u32, ()> {
///     u32::try_from(n).or_else(|_| failure(Severity::Warn, "negative", ()))
/// };
/// let parse_positive = compose::compose_kleisli(parse, positive);
/// assert_eq!(parse_positive("12"), Ok(12));
/// ```
pub fn compose_kleisli<A, B, C, P, F, G>(f: F, g: G) -> impl FnOnce(A) -> Outcome<C, P>
where
    F: FnOnce(A) -> Outcome<B, P>,
    G: FnOnce(B) -> Outcome<C, P>,
{
    move |input| kleisli(g, f(input))
}
