//! Behavioural tests for the optional country lookup.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use signup::domain::{Address, Country, CountryLookup, Profile};

/// Test world holding the profile and both lookup results.
#[derive(Default, ScenarioState)]
struct World {
    profile: Slot<Profile>,
    country: Slot<Option<String>>,
    country_with_bindings: Slot<Option<String>>,
}

impl World {
    fn country(&self) -> Option<String> {
        self.country.get().expect("lookup should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a profile in {country} on {street}")]
fn a_profile_in_country_on_street(world: &World, country: String, street: String) {
    world.profile.set(Profile::with_address(Address {
        country: Some(Country::named(country)),
        street: Some(street),
    }));
}

#[given("a profile without an address")]
fn a_profile_without_an_address(world: &World) {
    world.profile.set(Profile::default());
}

#[given("a profile whose country has no name")]
fn a_profile_whose_country_has_no_name(world: &World) {
    world.profile.set(Profile::with_address(Address {
        country: Some(Country::default()),
        street: Some("Beispielstrasse".to_owned()),
    }));
}

#[when("the country name is looked up")]
fn the_country_name_is_looked_up(world: &World) {
    let profile = world.profile.get().expect("profile should be set");
    let lookup = CountryLookup::new(&profile);
    world.country.set(lookup.country_name().map(str::to_owned));
    world
        .country_with_bindings
        .set(lookup.country_name_with_bindings().map(str::to_owned));
}

#[then("the country name is {name}")]
fn the_country_name_is(world: &World, name: String) {
    assert_eq!(world.country(), Some(name));
}

#[then("no country name is found")]
fn no_country_name_is_found(world: &World) {
    assert_eq!(world.country(), None);
}

#[then("both lookup styles agree")]
fn both_lookup_styles_agree(world: &World) {
    let with_bindings = world
        .country_with_bindings
        .get()
        .expect("bindings lookup should have run");
    assert_eq!(world.country(), with_bindings);
}

#[scenario(
    path = "tests/features/country_lookup.feature",
    name = "All fields are present"
)]
fn all_fields_are_present(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/country_lookup.feature",
    name = "Address is not there"
)]
fn address_is_not_there(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/country_lookup.feature",
    name = "Country has no name"
)]
fn country_has_no_name(world: World) {
    let _ = world;
}
