//! Print the country name of a complete profile and of an empty one.

use std::io::{self, Write};

use color_eyre::eyre::Result;

use signup::domain::{Address, Country, CountryLookup, Profile};
use signup::inbound::{init_tracing, render_country_name};

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let complete = Profile::with_address(Address {
        country: Some(Country::named("Germany")),
        street: Some("Beispielstrasse".to_owned()),
    });
    let empty = Profile::default();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "All fields are present")?;
    writeln!(
        stdout,
        "{}",
        render_country_name(CountryLookup::new(&complete).country_name_with_bindings())
    )?;
    writeln!(stdout, "Address is not there")?;
    writeln!(
        stdout,
        "{}",
        render_country_name(CountryLookup::new(&empty).country_name())
    )?;
    Ok(())
}
