//! User data model and sign-up field validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Validation errors returned by [`validate_email`] and [`validate_name`].
///
/// A missing field fails the same way as a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Email is missing or not of the form `local@domain`.
    #[error("email must be of the form local@domain")]
    InvalidEmailFormat,
    /// Name is missing or contains something other than ASCII letters.
    #[error("name may only contain letters")]
    InvalidName,
}

impl UserValidationError {
    /// Machine-readable failure reason.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::InvalidName => "invalid_name",
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntax only; deliverability is the notifier's concern.
        Regex::new("^.+@.+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        Regex::new("^[A-Za-z]+$")
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidEmailFormat`] when `email` is not
    /// of the form `local@domain`.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email_regex().is_match(&email) {
            Ok(Self(email))
        } else {
            Err(UserValidationError::InvalidEmailFormat)
        }
    }

    /// Domain part following the last `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Name made of ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validate and construct a [`Name`].
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidName`] for empty or non-letter
    /// input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name_regex().is_match(&name) {
            Ok(Self(name))
        } else {
            Err(UserValidationError::InvalidName)
        }
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Validate a raw email field.
///
/// # Examples
/// ```
/// use signup::domain::user::{UserValidationError, validate_email};
///
/// let email = validate_email(Some("a@b.com")).expect("valid email");
/// assert_eq!(email.domain(), "b.com");
/// assert_eq!(validate_email(None), Err(UserValidationError::InvalidEmailFormat));
/// ```
pub fn validate_email(raw: Option<&str>) -> Result<Email, UserValidationError> {
    raw.ok_or(UserValidationError::InvalidEmailFormat)
        .and_then(Email::new)
}

/// Validate a raw name field.
pub fn validate_name(raw: Option<&str>) -> Result<Name, UserValidationError> {
    raw.ok_or(UserValidationError::InvalidName)
        .and_then(Name::new)
}

/// Signed-up user.
///
/// ## Invariants
/// - `email` matches `local@domain`.
/// - `name` is non-empty and made of ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    email: Email,
    name: Name,
}

impl User {
    /// Build a [`User`] from validated components.
    #[must_use]
    pub const fn new(email: Email, name: Name) -> Self {
        Self { email, name }
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Name used when greeting the user.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }
}
