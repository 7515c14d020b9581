//! Domain model, ports and use-case services.
//!
//! Nothing here depends on the inbound or outbound adapters; collaborators
//! are reached only through the traits in [`ports`].

pub mod country_lookup;
pub mod error;
pub mod notification;
pub mod ports;
pub mod profile;
pub mod sign_up;
pub mod user;

pub use country_lookup::CountryLookup;
pub use error::SignUpError;
pub use notification::Notification;
pub use profile::{Address, Country, Profile};
pub use sign_up::{SignUpForm, SignUpReceipt, SignUpService};
pub use user::{Email, Name, User, UserValidationError};
