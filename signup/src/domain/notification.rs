//! Greeting notification sent after a successful sign-up.

use serde::Serialize;

use super::user::{Email, User};

/// Message addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    text: String,
    email: Email,
}

impl Notification {
    /// Build the welcome greeting for `user`.
    #[must_use]
    pub fn greeting(user: &User) -> Self {
        Self {
            text: format!("Hello, {}", user.name()),
            email: user.email().clone(),
        }
    }

    /// Message body.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Recipient address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}
