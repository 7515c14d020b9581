//! Result chain: propagates a typed failure reason.
//!
//! Each step either succeeds with a payload or fails with a reason. The first
//! failure is terminal for the chain; recovery, if any, belongs to the caller
//! that inspects the final value.

use crate::Bind;

/// Construct a successful step.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::unit(value)
}

/// Construct a failed step carrying `reason`.
pub const fn err<T, E>(reason: E) -> Result<T, E> {
    Err(reason)
}

/// Continue with `f` when `chain` succeeded.
///
/// A failed `chain` is returned with its reason untouched and `f` is never
/// called.
///
/// # Examples
/// ```
/// use short_circuit::outcome;
///
/// let parsed = outcome::bind(outcome::ok::<&str, String>("42"), |raw| {
///     raw.parse::<u32>().map_err(|error| error.to_string())
/// });
/// assert_eq!(parsed, Ok(42));
///
/// let skipped = outcome::bind(outcome::err::<&str, _>("missing".to_owned()), |raw| {
///     raw.parse::<u32>().map_err(|error| error.to_string())
/// });
/// assert_eq!(skipped, Err("missing".to_owned()));
/// ```
pub fn bind<T, U, E, F>(chain: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    chain.bind(f)
}

/// Transform the success payload; a failure passes through unchanged.
pub fn map<T, U, E, F>(chain: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    chain.fmap(f)
}
