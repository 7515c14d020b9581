//! Failure reasons carried by the sign-up chain.

use thiserror::Error;

use super::ports::{NotificationError, UserPersistenceError};
use super::user::UserValidationError;

/// Terminal reason a sign-up was rejected.
///
/// Callers branch on the variant (or on [`SignUpError::code`]) to choose a
/// user-facing message; the chain itself never recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    /// A submitted field failed validation.
    #[error(transparent)]
    Validation(#[from] UserValidationError),
    /// Notifications may not be sent to the recipient's domain.
    #[error("cannot send email to blocked domain {domain}")]
    InvalidEmailDomain {
        /// Domain that was refused.
        domain: String,
    },
    /// The user record could not be stored.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
    /// The greeting could not be delivered.
    #[error("notification failed: {message}")]
    Notification {
        /// Transport failure description.
        message: String,
    },
}

impl SignUpError {
    /// Machine-readable failure reason.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::SignUpError;
    /// use signup::domain::user::UserValidationError;
    ///
    /// let error = SignUpError::from(UserValidationError::InvalidName);
    /// assert_eq!(error.code(), "invalid_name");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.code(),
            Self::InvalidEmailDomain { .. } => "invalid_email_domain",
            Self::Persistence(_) => "persistence_failed",
            Self::Notification { .. } => "notification_failed",
        }
    }
}

impl From<NotificationError> for SignUpError {
    fn from(value: NotificationError) -> Self {
        match value {
            NotificationError::BlockedDomain { domain } => Self::InvalidEmailDomain { domain },
            NotificationError::Delivery { message } => Self::Notification { message },
        }
    }
}
