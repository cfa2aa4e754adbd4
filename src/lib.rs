pub mod browser;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod projection;
pub mod render;
pub mod shell;

pub use browser::{BrowserView, RecipeBrowser, ViewStatus};
pub use builder::{CatalogClient, CatalogClientBuilder};
pub use catalog::{CatalogService, HttpCatalog};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use model::{
    CatalogArea, CatalogCategory, Ingredient, QueryState, RecipeDetail, RecipeSummary,
    SearchQuery,
};
pub use projection::DetailProjection;

/// Search the catalog by recipe name using the loaded configuration
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = mealdb_browser::search_recipes("Arrabiata").await?;
/// for recipe in recipes {
///     println!("{} {}", recipe.id, recipe.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(term: &str) -> Result<Vec<RecipeSummary>, CatalogError> {
    let catalog = HttpCatalog::new(&CatalogConfig::load()?)?;
    catalog.search(&QueryState::with_term(term)).await
}

/// Fetch one recipe by id using the loaded configuration
pub async fn fetch_recipe(id: &str) -> Result<RecipeDetail, CatalogError> {
    let catalog = HttpCatalog::new(&CatalogConfig::load()?)?;
    catalog.get_detail(id).await
}
