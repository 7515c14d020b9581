//! Notifier enforcing the blocked-domain policy.

use tracing::debug;

use crate::domain::ports::{NotificationError, Notifier};
use crate::domain::{Notification, User};

/// Greets users unless their email domain is blocked.
///
/// Domains are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyNotifier {
    blocked_domain: String,
}

impl PolicyNotifier {
    /// Build a notifier refusing `blocked_domain`.
    #[must_use]
    pub fn new(blocked_domain: impl Into<String>) -> Self {
        Self {
            blocked_domain: blocked_domain.into(),
        }
    }

    /// Domain this notifier refuses to deliver to.
    #[must_use]
    pub const fn blocked_domain(&self) -> &str {
        self.blocked_domain.as_str()
    }
}

impl Notifier for PolicyNotifier {
    fn send_notification(&self, user: &User) -> Result<Notification, NotificationError> {
        let domain = user.email().domain();
        if domain.eq_ignore_ascii_case(&self.blocked_domain) {
            debug!(domain, "notification refused by domain policy");
            return Err(NotificationError::blocked_domain(domain));
        }

        let notification = Notification::greeting(user);
        debug!(email = %user.email(), "notification sent");
        Ok(notification)
    }
}
