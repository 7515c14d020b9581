//! Sign-up use case composed as a short-circuit result chain.
//!
//! The chain runs validate email → validate name → build user → persist →
//! notify. The first failing step decides the outcome and no later step is
//! called, so a rejected email never reaches the repository or the notifier.
//! The domain-policy check on the email lives in the notifier and therefore
//! runs only after persistence succeeded.

use serde::Serialize;
use short_circuit::outcome;
use tracing::{debug, info, warn};

use super::error::SignUpError;
use super::notification::Notification;
use super::ports::{Notifier, UserRepository};
use super::user::{User, validate_email, validate_name};

/// Raw sign-up submission.
///
/// Both fields are optional; a missing field is rejected by validation rather
/// than by whoever collected the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    email: Option<String>,
    name: Option<String>,
}

impl SignUpForm {
    /// Build a form from raw field values.
    #[must_use]
    pub const fn new(email: Option<String>, name: Option<String>) -> Self {
        Self { email, name }
    }

    /// Submitted email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Submitted name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Aggregate payload of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpReceipt {
    user: User,
    notification: Notification,
}

impl SignUpReceipt {
    /// Pair the stored user with the notification sent to them.
    #[must_use]
    pub const fn new(user: User, notification: Notification) -> Self {
        Self { user, notification }
    }

    /// The stored user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The greeting that was sent.
    #[must_use]
    pub const fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Split the receipt into its parts.
    #[must_use]
    pub fn into_parts(self) -> (User, Notification) {
        (self.user, self.notification)
    }
}

/// Signs up users through a repository and a notifier.
#[derive(Debug, Clone)]
pub struct SignUpService<R, N> {
    users: R,
    notifier: N,
}

impl<R, N> SignUpService<R, N>
where
    R: UserRepository,
    N: Notifier,
{
    /// Wire the service to its collaborators.
    #[must_use]
    pub const fn new(users: R, notifier: N) -> Self {
        Self { users, notifier }
    }

    /// Register `form`, unwrapping each step with `?`.
    ///
    /// # Errors
    /// Returns the first [`SignUpError`] produced by the chain.
    pub fn register(&self, form: &SignUpForm) -> Result<SignUpReceipt, SignUpError> {
        let result = self.register_steps(form);
        log_outcome(&result);
        result
    }

    fn register_steps(&self, form: &SignUpForm) -> Result<SignUpReceipt, SignUpError> {
        let email = validate_email(form.email())?;
        debug!(step = "validate_email", "sign-up step passed");
        let name = validate_name(form.name())?;
        debug!(step = "validate_name", "sign-up step passed");

        let saved = self.users.save(User::new(email, name))?;
        debug!(step = "save_user", "sign-up step passed");
        let notification = self.notifier.send_notification(&saved)?;
        debug!(step = "send_notification", "sign-up step passed");

        Ok(SignUpReceipt::new(saved, notification))
    }

    /// Register `form`, passing each continuation to `bind` explicitly.
    ///
    /// Produces exactly the same value as [`SignUpService::register`] for
    /// every form and collaborator behaviour.
    ///
    /// # Errors
    /// Returns the first [`SignUpError`] produced by the chain.
    pub fn register_with_bindings(
        &self,
        form: &SignUpForm,
    ) -> Result<SignUpReceipt, SignUpError> {
        let result = outcome::bind(
            validate_email(form.email()).map_err(SignUpError::from),
            |email| {
                outcome::bind(
                    validate_name(form.name()).map_err(SignUpError::from),
                    |name| {
                        outcome::bind(
                            self.users
                                .save(User::new(email, name))
                                .map_err(SignUpError::from),
                            |saved| {
                                outcome::map(
                                    self.notifier
                                        .send_notification(&saved)
                                        .map_err(SignUpError::from),
                                    |notification| SignUpReceipt::new(saved, notification),
                                )
                            },
                        )
                    },
                )
            },
        );
        log_outcome(&result);
        result
    }
}

fn log_outcome(result: &Result<SignUpReceipt, SignUpError>) {
    match result {
        Ok(receipt) => info!(email = %receipt.user().email(), "user signed up"),
        Err(error) => warn!(code = error.code(), %error, "sign-up rejected"),
    }
}
