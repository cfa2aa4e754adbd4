use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::catalog::HttpCatalog;
use crate::config::{default_base_url, default_timeout, default_user_agent, CatalogConfig};
use crate::error::CatalogError;

/// Builder for configuring an [`HttpCatalog`]
#[derive(Debug, Default)]
pub struct CatalogClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CatalogClientBuilder {
    /// Take every setting from a loaded configuration
    ///
    /// Settings applied after this call override the configuration.
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::{CatalogClient, CatalogConfig};
    ///
    /// let builder = CatalogClient::builder().config(&CatalogConfig::default());
    /// ```
    pub fn config(mut self, config: &CatalogConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = Some(Duration::from_secs(config.timeout));
        self.user_agent = Some(config.user_agent.clone());
        self
    }

    /// Set the catalog base URL, e.g. `https://www.themealdb.com/api/json/v1/1`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::CatalogClient;
    /// use std::time::Duration;
    ///
    /// let builder = CatalogClient::builder().timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `CatalogError::BuilderError` if the base URL is not an
    /// http(s) URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpCatalog, CatalogError> {
        let base_url = self.base_url.unwrap_or_else(default_base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::BuilderError(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(default_timeout()));
        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                CatalogError::BuilderError(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!("Catalog client for {} (timeout {:?})", base_url, timeout);
        Ok(HttpCatalog::from_parts(client, &base_url))
    }
}

/// Main entry point for the builder API
pub struct CatalogClient;

impl CatalogClient {
    /// Creates a new builder for a catalog client
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::CatalogClient;
    ///
    /// let catalog = CatalogClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build();
    /// assert!(catalog.is_ok());
    /// ```
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }
}
