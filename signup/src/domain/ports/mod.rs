//! Domain ports describing the collaborators the use cases drive.
//!
//! Each port exposes a strongly typed error so adapters map their failures
//! into predictable variants that the result chain can carry.

mod macros;
pub(crate) use macros::define_port_error;

mod notifier;
mod user_repository;

#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{NotificationError, Notifier};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
