//! Remote store (libSQL/sqld) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database URL (e.g., `libsql://magazyn.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database access token.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file path. When set, the store opens locally instead of
    /// dialing the remote URL (dev and test mode).
    #[serde(default)]
    pub local_path: String,
}

impl StoreConfig {
    /// Check if the store config has the minimum required fields for remote access.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check if local-file mode is enabled.
    #[must_use]
    pub fn has_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }

    /// Require either remote or local mode to be usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when neither the remote URL+token
    /// pair nor a local path is present. This is the startup gate: data
    /// commands must fail here, before any operation is attempted.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() || self.has_local_path() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "store".to_string(),
            })
        }
    }
}
