//! Notifier configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Domain refused when no override is configured.
pub const DEFAULT_BLOCKED_DOMAIN: &str = "invalidated.com";

/// Configuration values controlling the notifier.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct NotifierSettings {
    /// Email domain that never receives notifications.
    #[ortho_config(default = DEFAULT_BLOCKED_DOMAIN.to_owned())]
    pub blocked_domain: String,
}

impl NotifierSettings {
    /// Return the configured blocked domain.
    #[must_use]
    pub const fn blocked_domain(&self) -> &str {
        self.blocked_domain.as_str()
    }
}
