mod http;
mod wire;

pub use http::HttpCatalog;
pub use wire::MAX_INGREDIENT_SLOTS;

use crate::error::CatalogError;
use crate::model::{CatalogArea, CatalogCategory, QueryState, RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Read-only access to a recipe catalog
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List every category, in catalog order
    async fn list_categories(&self) -> Result<Vec<CatalogCategory>, CatalogError>;

    /// List every cuisine area, in catalog order
    async fn list_areas(&self) -> Result<Vec<CatalogArea>, CatalogError>;

    /// Run the one query `state` resolves to.
    ///
    /// No matches is an empty list, not an error.
    async fn search(&self, state: &QueryState) -> Result<Vec<RecipeSummary>, CatalogError>;

    /// Look up the full record for `id`
    async fn get_detail(&self, id: &str) -> Result<RecipeDetail, CatalogError>;
}
