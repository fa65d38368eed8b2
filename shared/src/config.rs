//! Console configuration
//!
//! The console reads a small TOML document at startup. Every field has a
//! default so an empty document is valid.

use serde::{Deserialize, Serialize};

use crate::templates::Language;

/// Runtime configuration for the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the authentication API. Empty means "same origin".
    pub api_base_url: String,

    /// Number of synthetic applications shown in the inventory
    pub inventory_size: usize,

    /// Language preselected for end-user notifications
    pub default_language: Language,

    /// Maximum tracing level (trace, debug, info, warn, error)
    pub log_level: String,

    /// How long a toast stays visible, in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            inventory_size: 50,
            default_language: Language::English,
            log_level: "debug".to_string(),
            toast_duration_ms: 5000,
        }
    }
}

impl ConsoleConfig {
    /// Parse from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Return a copy with the API base URL replaced and normalized
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Join an endpoint path onto the API base URL with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.inventory_size, 50);
    }

    #[test]
    fn test_partial_document() {
        let config = ConsoleConfig::from_toml(
            r#"
            api_base_url = "https://api.patchtune.test"
            default_language = "german"
            toast_duration_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.patchtune.test");
        assert_eq!(config.default_language, Language::German);
        assert_eq!(config.toast_duration_ms, 2500);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ConsoleConfig::default().with_api_base_url("http://localhost:8080/");
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.endpoint("/auth/login"), "http://localhost:8080/auth/login");
        assert_eq!(config.endpoint("auth/signup"), "http://localhost:8080/auth/signup");
    }
}
