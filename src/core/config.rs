//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use tracing_subscriber::EnvFilter;

use super::content::SiteMeta;

pub const PUBLIC_URL_VAR: &str = "NEXUS_PUBLIC_URL";
pub const LOG_VAR: &str = "NEXUS_LOG";

const DEFAULT_PUBLIC_URL: &str = "https://nexus.inc";
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("NEXUS_PUBLIC_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidPublicUrl(String),

    #[error("NEXUS_LOG is not a valid tracing filter: {0}")]
    InvalidLogFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canonical origin used for SEO tags
    /// Example: https://nexus.inc
    pub public_url: String,

    /// Tracing filter directives
    /// Example: info,nexus_site=debug
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(PUBLIC_URL_VAR).ok(),
            std::env::var(LOG_VAR).ok(),
        )
    }

    /// Build and validate a configuration from optional raw values.
    pub fn from_values(
        public_url: Option<String>,
        log_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        let public_url = non_empty(public_url).unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());
        let log_filter = non_empty(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let config = Self {
            public_url: validate_public_url(&public_url)?,
            log_filter,
        };
        config.env_filter()?;
        Ok(config)
    }

    /// Filter for the tracing subscriber.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.log_filter)?)
    }

    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta::new(self.public_url.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_public_url(url: &str) -> Result<String, ConfigError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') && !rest.contains(' ') => {
            Ok(url.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidPublicUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_values(None, None).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.public_url, "https://nexus.inc");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = Config::from_values(Some("  ".to_string()), Some(String::new())).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_public_url_trailing_slash_trimmed() {
        let config = Config::from_values(Some("http://localhost:3000/".to_string()), None).unwrap();

        assert_eq!(config.public_url, "http://localhost:3000");
        assert_eq!(config.site_meta().canonical("/pricing"), "http://localhost:3000/pricing");
    }

    #[test]
    fn test_rejects_relative_public_url() {
        let result = Config::from_values(Some("nexus.inc".to_string()), None);

        assert!(matches!(result, Err(ConfigError::InvalidPublicUrl(_))));
    }

    #[test]
    fn test_rejects_scheme_only_url() {
        let result = Config::from_values(Some("https://".to_string()), None);

        assert!(matches!(result, Err(ConfigError::InvalidPublicUrl(_))));
    }

    #[test]
    fn test_accepts_filter_directives() {
        let config =
            Config::from_values(None, Some("warn,nexus_site=debug".to_string())).unwrap();

        assert_eq!(config.log_filter, "warn,nexus_site=debug");
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_rejects_bad_filter() {
        let result = Config::from_values(None, Some("nexus_site=loud".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidLogFilter(_))));
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let err = Config::from_values(Some("ftp://x".to_string()), None).unwrap_err();

        assert!(err.to_string().contains("NEXUS_PUBLIC_URL"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check it does not panic
        let _ = Config::from_env();
    }
}
