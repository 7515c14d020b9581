//! Command-line arguments for the `signup` binary.

use clap::Parser;

use crate::domain::SignUpForm;

/// `signup` command arguments.
///
/// Both flags are optional; a missing value reaches the sign-up chain as an
/// absent field and is rejected there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "signup",
    about = "Sign up a user and send them a greeting",
    version
)]
pub struct CliArgs {
    /// User name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,
    /// User email.
    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub email: Option<String>,
}

impl CliArgs {
    /// Convert the parsed flags into a sign-up submission.
    #[must_use]
    pub fn into_form(self) -> SignUpForm {
        SignUpForm::new(self.email, self.name)
    }
}
