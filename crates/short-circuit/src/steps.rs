//! Folding a homogeneous sequence of steps with `bind`.

use crate::Bind;

/// Thread `seed` through each step in order.
///
/// Equivalent to `seed.bind(s1).bind(s2)...`: once a step yields `None` or
/// `Err`, the remaining steps are dropped without being called and that
/// value is returned.
///
/// # Examples
/// ```
/// use short_circuit::fold_steps;
///
/// let add_hundred: fn(u8) -> Option<u8> = |n| n.checked_add(100);
///
/// assert_eq!(fold_steps(Some(10), [add_hundred; 2]), Some(210));
/// assert_eq!(fold_steps(Some(10), [add_hundred; 3]), None);
/// ```
#[must_use]
pub fn fold_steps<T, M, I>(seed: M, steps: I) -> M
where
    M: Bind<Value = T, Rebind<T> = M>,
    I: IntoIterator,
    I::Item: FnOnce(T) -> M,
{
    steps.into_iter().fold(seed, |chain, step| chain.bind::<T, _>(step))
}
