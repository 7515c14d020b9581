//! In-process user repository.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserRepository};

/// Keeps saved users in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Snapshot of every user saved so far, oldest first.
    ///
    /// # Errors
    /// Returns [`UserPersistenceError::Connection`] when the store lock was
    /// poisoned by a panicking writer.
    pub fn users(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.users
            .lock()
            .map(|users| users.clone())
            .map_err(|_| UserPersistenceError::connection("user store lock poisoned"))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: User) -> Result<User, UserPersistenceError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::write("user store lock poisoned"))?;
        users.push(user.clone());
        debug!(email = %user.email(), stored = users.len(), "user saved");
        Ok(user)
    }
}
