//! Inbound adapters: command-line parsing, configuration, logging and
//! output rendering for the binaries.

mod cli;
pub mod report;
mod settings;
mod telemetry;

pub use cli::CliArgs;
pub use report::{render_country_name, render_sign_up};
pub use settings::{DEFAULT_BLOCKED_DOMAIN, NotifierSettings};
pub use telemetry::init_tracing;
