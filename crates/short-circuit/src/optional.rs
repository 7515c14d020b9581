//! Optional-value chain: propagates absence without a diagnostic.
//!
//! Use this chain when the only concern is whether each intermediate value
//! exists, for example when walking nested optional fields.

use crate::Bind;

/// Lift a nullable source field into the chain.
///
/// The field is borrowed, so walking a structure never moves out of it.
///
/// # Examples
/// ```
/// use short_circuit::optional;
///
/// let street: Option<String> = Some("Beispielstrasse".to_owned());
/// assert_eq!(optional::wrap(&street).map(String::as_str), Some("Beispielstrasse"));
/// assert_eq!(optional::wrap(&None::<String>), None);
/// ```
#[must_use]
pub const fn wrap<T>(raw: &Option<T>) -> Option<&T> {
    raw.as_ref()
}

/// Place a value that is known to exist on the happy branch.
#[must_use]
pub fn present<T>(value: T) -> Option<T> {
    Option::unit(value)
}

/// Continue with `f` when `chain` holds a value.
///
/// An absent `chain` is returned as-is and `f` is never called.
#[must_use]
pub fn bind<T, U, F>(chain: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    chain.bind(f)
}

/// Transform a present value; absence passes through.
#[must_use]
pub fn map<T, U, F>(chain: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    chain.fmap(f)
}
