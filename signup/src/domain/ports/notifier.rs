//! Port abstraction for delivering notifications to users.

use std::sync::Arc;

use crate::domain::{Notification, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification adapters.
    pub enum NotificationError {
        /// The recipient's email domain is refused by policy.
        BlockedDomain { domain: String } => "email domain {domain} is blocked",
        /// The message could not be handed to the transport.
        Delivery { message: String } => "notification delivery failed: {message}",
    }
}

/// Sends messages to users.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Greet `user` and return the notification that was sent.
    fn send_notification(&self, user: &User) -> Result<Notification, NotificationError>;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn send_notification(&self, user: &User) -> Result<Notification, NotificationError> {
        (**self).send_notification(user)
    }
}
