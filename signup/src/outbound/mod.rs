//! Outbound adapters implementing the domain ports.

mod memory;
mod notifier;

pub use memory::InMemoryUserRepository;
pub use notifier::PolicyNotifier;
