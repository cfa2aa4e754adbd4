use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection settings for the recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL that the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    format!("mealdb-browser/{}", env!("CARGO_PKG_VERSION"))
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL, MEALDB__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`] for the source priority.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        // Use double underscore so field names keep their own underscores
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(default_timeout(), 30);
        assert!(default_user_agent().starts_with("mealdb-browser/"));
    }

    #[test]
    fn test_default_config_matches_default_functions() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://localhost:9000\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: CatalogConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        env::set_var("MEALDB__BASE_URL", "http://localhost:9100/api");
        env::set_var("MEALDB__TIMEOUT", "7");

        let result = load_config();

        env::remove_var("MEALDB__BASE_URL");
        env::remove_var("MEALDB__TIMEOUT");

        let config = result.unwrap();
        assert_eq!(config.base_url, "http://localhost:9100/api");
        assert_eq!(config.timeout, 7);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_load_config_without_file() {
        // No mealdb.toml in the test working directory; defaults must fill in.
        let result = load_config();
        assert!(result.is_ok());
    }
}
