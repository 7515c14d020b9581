//! Plain-text rendering of use-case results for the binaries.

use crate::domain::{SignUpError, SignUpReceipt};

/// Message shown when the notifier refuses the email domain.
pub const BLOCKED_DOMAIN_MESSAGE: &str = "Can't send an email to this domain :(";

/// Render the outcome of a sign-up run.
///
/// Success prints the saved user and the sent notification as pretty JSON.
/// A blocked domain gets a dedicated message; every other failure reports its
/// stable error code.
///
/// # Errors
/// Returns [`serde_json::Error`] when the receipt cannot be serialised.
pub fn render_sign_up(
    outcome: &Result<SignUpReceipt, SignUpError>,
) -> Result<String, serde_json::Error> {
    match outcome {
        Ok(receipt) => {
            let user = serde_json::to_string_pretty(receipt.user())?;
            let notification = serde_json::to_string_pretty(receipt.notification())?;
            Ok(format!(
                "Signed up user:\n{user}\nSent notification:\n{notification}"
            ))
        }
        Err(SignUpError::InvalidEmailDomain { .. }) => Ok(BLOCKED_DOMAIN_MESSAGE.to_owned()),
        Err(error) => Ok(format!("Failed with reason: {}", error.code())),
    }
}

/// Render the result of a country lookup.
#[must_use]
pub fn render_country_name(name: Option<&str>) -> String {
    format!("{name:?}")
}
