//! Behavioural tests for the sign-up chain.
//!
//! Scenarios drive the service through the in-memory repository and the
//! domain-policy notifier, counting how far each run got.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use signup::domain::ports::{NotificationError, Notifier};
use signup::domain::{Notification, SignUpError, SignUpForm, SignUpReceipt, SignUpService, User};
use signup::outbound::{InMemoryUserRepository, PolicyNotifier};

const BLOCKED_DOMAIN: &str = "invalidated.com";

/// Policy notifier that counts delivered greetings.
#[derive(Debug)]
struct CountingNotifier {
    inner: PolicyNotifier,
    sent: AtomicUsize,
}

impl CountingNotifier {
    fn new() -> Self {
        Self {
            inner: PolicyNotifier::new(BLOCKED_DOMAIN),
            sent: AtomicUsize::new(0),
        }
    }

    fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

impl Notifier for CountingNotifier {
    fn send_notification(&self, user: &User) -> Result<Notification, NotificationError> {
        let notification = self.inner.send_notification(user)?;
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(notification)
    }
}

type Outcome = Result<SignUpReceipt, SignUpError>;

/// Run outcome together with how many side effects it caused.
#[derive(Debug, Clone)]
struct Run {
    outcome: Outcome,
    saved: usize,
    sent: usize,
}

#[derive(Clone, Copy)]
enum Style {
    Sequential,
    Bindings,
}

fn run(form: &SignUpForm, style: Style) -> Run {
    let users = Arc::new(InMemoryUserRepository::default());
    let notifier = Arc::new(CountingNotifier::new());
    let service = SignUpService::new(Arc::clone(&users), Arc::clone(&notifier));

    let outcome = match style {
        Style::Sequential => service.register(form),
        Style::Bindings => service.register_with_bindings(form),
    };
    Run {
        outcome,
        saved: users.users().expect("user snapshot").len(),
        sent: notifier.sent(),
    }
}

/// Test world holding the submitted fields and the observed runs.
#[derive(Default, ScenarioState)]
struct World {
    email: Slot<String>,
    name: Slot<String>,
    run: Slot<Run>,
    bindings_run: Slot<Run>,
}

impl World {
    fn form(&self) -> SignUpForm {
        SignUpForm::new(self.email.get(), self.name.get())
    }

    fn run(&self) -> Run {
        self.run.get().expect("sign-up should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the email address {email}")]
fn the_email_address(world: &World, email: String) {
    world.email.set(email);
}

#[given("the user name {name}")]
fn the_user_name(world: &World, name: String) {
    world.name.set(name);
}

#[given("no user name")]
fn no_user_name(world: &World) {
    assert!(world.name.get().is_none(), "name should start empty");
}

// ============================================================================
// When steps
// ============================================================================

#[when("the user signs up")]
fn the_user_signs_up(world: &World) {
    world.run.set(run(&world.form(), Style::Sequential));
}

#[when("the user signs up in both styles")]
fn the_user_signs_up_in_both_styles(world: &World) {
    let form = world.form();
    world.run.set(run(&form, Style::Sequential));
    world.bindings_run.set(run(&form, Style::Bindings));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the sign-up succeeds")]
fn the_sign_up_succeeds(world: &World) {
    let outcome = world.run().outcome;
    assert!(outcome.is_ok(), "expected sign-up to succeed: {outcome:?}");
}

#[then("the notification greets {name}")]
fn the_notification_greets(world: &World, name: String) {
    let receipt = world.run().outcome.expect("sign-up should succeed");
    assert_eq!(receipt.notification().text(), format!("Hello, {name}"));
    assert_eq!(receipt.notification().email(), receipt.user().email());
}

#[then("the sign-up fails with reason {code}")]
fn the_sign_up_fails_with_reason(world: &World, code: String) {
    match world.run().outcome {
        Err(error) => assert_eq!(error.code(), code),
        Ok(receipt) => panic!("expected {code}, got receipt: {receipt:?}"),
    }
}

#[then("the saved user count is {count:usize}")]
fn the_saved_user_count_is(world: &World, count: usize) {
    assert_eq!(world.run().saved, count);
}

#[then("the sent notification count is {count:usize}")]
fn the_sent_notification_count_is(world: &World, count: usize) {
    assert_eq!(world.run().sent, count);
}

#[then("both styles return the same outcome")]
fn both_styles_return_the_same_outcome(world: &World) {
    let sequential = world.run();
    let bindings = world.bindings_run.get().expect("bindings run should be set");

    assert_eq!(sequential.outcome, bindings.outcome);
    assert_eq!(sequential.saved, bindings.saved);
    assert_eq!(sequential.sent, bindings.sent);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "A valid user is saved and greeted"
)]
fn a_valid_user_is_saved_and_greeted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "A malformed email stops the chain before persistence"
)]
fn a_malformed_email_stops_the_chain(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "A malformed name stops the chain before persistence"
)]
fn a_malformed_name_stops_the_chain(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "A missing name is rejected"
)]
fn a_missing_name_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "A blocked domain is saved but never greeted"
)]
fn a_blocked_domain_is_saved_but_never_greeted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_up.feature",
    name = "Both composition styles agree"
)]
fn both_composition_styles_agree(world: World) {
    let _ = world;
}
