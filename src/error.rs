use thiserror::Error;

/// Errors that can occur while talking to the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog unreachable, timed out, or answered with a non-success status
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// Lookup returned no record for the requested id
    #[error("No recipe found with id {0}")]
    NotFoundError(String),

    /// Client builder misconfiguration
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError(err.to_string())
    }
}
