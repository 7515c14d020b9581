//! Short-circuit composition for optional and fallible computations.
//!
//! A chain is a sequence of steps where each step may produce nothing
//! ([`Option`]) or a failure reason ([`Result`]). The first absent or failed
//! step ends the chain: its value is handed back unchanged and no later step
//! runs.
//!
//! Both containers share one algebra, [`Bind`]. The [`optional`] and
//! [`outcome`] modules expose it as free functions so a chain can be written
//! as explicitly nested continuations, while the native `?` operator gives the
//! equivalent imperative form. [`fold_steps`] folds a homogeneous list of
//! continuations with the same skipping rules.
//!
//! # Example
//!
//! ```
//! use short_circuit::{optional, outcome};
//!
//! let nested = outcome::bind(outcome::ok::<u8, &str>(2), |value| {
//!     outcome::bind(value.checked_mul(3).ok_or("overflow"), |tripled| {
//!         outcome::ok(u16::from(tripled))
//!     })
//! });
//!
//! fn imperative() -> Result<u16, &'static str> {
//!     let value = outcome::ok::<u8, &str>(2)?;
//!     let tripled = value.checked_mul(3).ok_or("overflow")?;
//!     Ok(u16::from(tripled))
//! }
//!
//! assert_eq!(nested, imperative());
//! assert_eq!(optional::bind(None::<u8>, |value| Some(value + 1)), None);
//! ```

mod bind;
pub mod optional;
pub mod outcome;
mod steps;

pub use bind::Bind;
pub use steps::fold_steps;
