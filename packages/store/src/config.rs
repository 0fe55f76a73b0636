//! # Application configuration - `notes.toml`
//!
//! Defines the TOML configuration embedded into the web binary. It selects the
//! notes backend and the timings the UI uses around notifications and navigation.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! backend = "remote"                              # or "local" for the in-memory backend
//! base_url = "https://notes-api.dicoding.dev/v1"
//!
//! [ui]
//! notification_timeout_ms = 3000
//! list_refresh_delay_ms = 1000
//! navigation_delay_ms = 1500
//! register_redirect_delay_ms = 2000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend selection and the remote base URL. |
//! | [`UiConfig`] | Notification timeout and the success-then-navigate delays. |
//!
//! Every field has a default, so a missing or empty file equals the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which notes backend the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Remote,
    Local,
}

/// API section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub backend: BackendKind,
    /// Base URL of the remote notes API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://notes-api.dicoding.dev/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            base_url: default_base_url(),
        }
    }
}

/// UI timing section. All values are milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Alerts self-dismiss after this long.
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout_ms: u64,
    /// Delay before a list reloads after a successful mutation.
    #[serde(default = "default_list_refresh_delay")]
    pub list_refresh_delay_ms: u64,
    /// Delay between a success notification and the navigation that follows it.
    #[serde(default = "default_navigation_delay")]
    pub navigation_delay_ms: u64,
    /// Delay before returning to the login page after registering.
    #[serde(default = "default_register_redirect_delay")]
    pub register_redirect_delay_ms: u64,
}

fn default_notification_timeout() -> u64 {
    3000
}

fn default_list_refresh_delay() -> u64 {
    1000
}

fn default_navigation_delay() -> u64 {
    1500
}

fn default_register_redirect_delay() -> u64 {
    2000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: default_notification_timeout(),
            list_refresh_delay_ms: default_list_refresh_delay(),
            navigation_delay_ms: default_navigation_delay(),
            register_redirect_delay_ms: default_register_redirect_delay(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    /// Builder method to switch to the in-memory backend.
    pub fn with_local_backend(mut self) -> Self {
        self.api.backend = BackendKind::Local;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.backend, BackendKind::Remote);
        assert_eq!(config.ui.notification_timeout_ms, 3000);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            backend = "local"
            base_url = "http://localhost:5000/v1/"

            [ui]
            navigation_delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api.backend, BackendKind::Local);
        assert_eq!(config.api.base_url, "http://localhost:5000/v1");
        assert_eq!(config.ui.navigation_delay_ms, 10);
        assert_eq!(config.ui.list_refresh_delay_ms, 1000);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(AppConfig::from_toml("[api]\nbackend = \"ftp\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_local_backend();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
