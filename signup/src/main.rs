//! Sign a user up from command-line flags and print the outcome.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::info;

use signup::domain::SignUpService;
use signup::inbound::{CliArgs, NotifierSettings, init_tracing, render_sign_up};
use signup::outbound::{InMemoryUserRepository, PolicyNotifier};

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = CliArgs::parse();
    let settings = NotifierSettings::load_from_iter([OsString::from("signup")])
        .map_err(|err| eyre!("failed to load notifier settings: {err}"))?;
    info!(
        blocked_domain = settings.blocked_domain(),
        "notifier settings loaded"
    );

    let service = SignUpService::new(
        InMemoryUserRepository::default(),
        PolicyNotifier::new(settings.blocked_domain()),
    );
    let outcome = service.register_with_bindings(&args.into_form());
    let rendered = render_sign_up(&outcome)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
