//! Sign-up and country lookup use cases built on short-circuit chains.
//!
//! The crate is laid out as a small hexagon:
//!
//! - [`domain`] holds the model, field validation, ports and the two use-case
//!   drivers. Each driver is written twice, once with `?` and once with
//!   explicitly nested binds, and both forms return identical values.
//! - [`outbound`] provides in-process adapters for the ports.
//! - [`inbound`] parses command-line arguments, loads configuration,
//!   installs logging and renders results for the binaries.
//!
//! # Example
//!
//! ```
//! use signup::domain::{SignUpForm, SignUpService};
//! use signup::outbound::{InMemoryUserRepository, PolicyNotifier};
//!
//! let service = SignUpService::new(
//!     InMemoryUserRepository::default(),
//!     PolicyNotifier::new("invalidated.com"),
//! );
//! let form = SignUpForm::new(Some("a@b.com".to_owned()), Some("Alice".to_owned()));
//!
//! let receipt = service.register(&form).expect("valid sign-up");
//! assert_eq!(receipt.notification().text(), "Hello, Alice");
//! assert_eq!(service.register(&form), service.register_with_bindings(&form));
//! ```

pub mod domain;
pub mod inbound;
pub mod outbound;
