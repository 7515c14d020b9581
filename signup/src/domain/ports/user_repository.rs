//! Port abstraction for user persistence adapters and their errors.

use std::sync::Arc;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The record could not be written.
        Write { message: String } => "user repository write failed: {message}",
    }
}

/// Stores signed-up users.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Persist `user` and return the stored record.
    fn save(&self, user: User) -> Result<User, UserPersistenceError>;
}

impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    fn save(&self, user: User) -> Result<User, UserPersistenceError> {
        (**self).save(user)
    }
}
