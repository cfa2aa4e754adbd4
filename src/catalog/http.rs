use crate::builder::CatalogClient;
use crate::catalog::wire::{take_list, AreaRecord, CategoryRecord, MealRecord, SummaryRecord};
use crate::catalog::CatalogService;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{
    CatalogArea, CatalogCategory, QueryState, RecipeDetail, RecipeSummary, SearchQuery,
};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

/// Catalog client speaking TheMealDB's JSON-over-GET protocol
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub(crate) fn from_parts(client: Client, base_url: &str) -> Self {
        HttpCatalog {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from loaded configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        CatalogClient::builder().config(config).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Value, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        debug!("GET {} {:?}", url, query);

        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            e
        })?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn list_categories(&self) -> Result<Vec<CatalogCategory>, CatalogError> {
        let body = self.get_json("categories.php", None).await?;
        let records: Vec<CategoryRecord> = take_list(body, "categories")?;
        Ok(records.into_iter().map(CatalogCategory::from).collect())
    }

    async fn list_areas(&self) -> Result<Vec<CatalogArea>, CatalogError> {
        // The area list lives under `meals` like every other meal endpoint
        let body = self.get_json("list.php", Some(("a", "list"))).await?;
        let records: Vec<AreaRecord> = take_list(body, "meals")?;
        Ok(records.into_iter().map(CatalogArea::from).collect())
    }

    async fn search(&self, state: &QueryState) -> Result<Vec<RecipeSummary>, CatalogError> {
        let (path, query) = match state.resolve() {
            SearchQuery::ByCategory(category) => ("filter.php", ("c", category)),
            SearchQuery::ByArea(area) => ("filter.php", ("a", area)),
            SearchQuery::ByName(term) => ("search.php", ("s", term)),
        };

        let body = self.get_json(path, Some(query)).await?;
        let records: Vec<SummaryRecord> = take_list(body, "meals")?;
        debug!("{} recipes matched {:?}", records.len(), state.resolve());
        Ok(records.into_iter().map(RecipeSummary::from).collect())
    }

    async fn get_detail(&self, id: &str) -> Result<RecipeDetail, CatalogError> {
        let body = self.get_json("lookup.php", Some(("i", id))).await?;
        let records: Vec<MealRecord> = take_list(body, "meals")?;

        records
            .into_iter()
            .next()
            .map(RecipeDetail::from)
            .ok_or_else(|| CatalogError::NotFoundError(id.to_string()))
    }
}
