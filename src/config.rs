//! Configuration module

use std::env;

/// Default base URL of the classification service
pub const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:5001";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Base URL of the classification service (no trailing slash)
    pub classifier_url: String,

    /// Optional request timeout for classification service calls
    pub classifier_timeout_secs: Option<u64>,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            classifier_url: DEFAULT_CLASSIFIER_URL.to_string(),
            classifier_timeout_secs: None,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            classifier_url: lookup("CLASSIFIER_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.classifier_url),

            classifier_timeout_secs: lookup("CLASSIFIER_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
