//! Country name lookup composed as an optional chain.
//!
//! The lookup walks profile → address → country → name. Any missing level
//! makes the whole lookup absent and the deeper levels are never visited.

use short_circuit::optional;

use super::profile::Profile;

/// Resolves the country name recorded on a profile.
#[derive(Debug, Clone, Copy)]
pub struct CountryLookup<'a> {
    profile: &'a Profile,
}

impl<'a> CountryLookup<'a> {
    /// Prepare a lookup over `profile`.
    #[must_use]
    pub const fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Country name, unwrapping each level with `?`.
    #[must_use]
    pub fn country_name(&self) -> Option<&'a str> {
        let profile = self.profile;
        let address = optional::wrap(&profile.address)?;
        let country = optional::wrap(&address.country)?;

        optional::map(optional::wrap(&country.name), String::as_str)
    }

    /// Country name, written as explicitly nested binds.
    ///
    /// Returns exactly what [`CountryLookup::country_name`] returns.
    #[must_use]
    pub fn country_name_with_bindings(&self) -> Option<&'a str> {
        optional::bind(optional::present(self.profile), |profile| {
            optional::bind(optional::wrap(&profile.address), |address| {
                optional::bind(optional::wrap(&address.country), |country| {
                    optional::map(optional::wrap(&country.name), String::as_str)
                })
            })
        })
    }
}
