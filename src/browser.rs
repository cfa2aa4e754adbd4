use log::{debug, info, warn};

use crate::catalog::CatalogService;
use crate::error::CatalogError;
use crate::model::{CatalogArea, CatalogCategory, QueryState, RecipeDetail, RecipeSummary};

/// What the status line should say
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    /// The last query succeeded with zero matches
    NoResults,
    /// The last action failed; the message is shown to the user
    Failed(String),
}

/// Everything the renderer needs. Only [`RecipeBrowser`] writes to it.
#[derive(Debug, Clone, Default)]
pub struct BrowserView {
    pub query: QueryState,
    pub categories: Vec<CatalogCategory>,
    pub areas: Vec<CatalogArea>,
    pub recipes: Vec<RecipeSummary>,
    pub selected_recipe: Option<RecipeDetail>,
    /// Status of the filter lists and the recipe list
    pub search_status: ViewStatus,
    /// Status of the detail panel
    pub detail_status: ViewStatus,
}

/// Monotonic request number. A result is applied only while its generation
/// is still the latest one issued for the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// A query that has been issued but not yet applied
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub generation: Generation,
    pub query: QueryState,
}

/// A detail lookup that has been issued but not yet applied
#[derive(Debug, Clone)]
pub struct PendingDetail {
    pub generation: Generation,
    pub id: String,
}

/// Owns the query state and the view, and mediates every catalog call
pub struct RecipeBrowser {
    catalog: Box<dyn CatalogService>,
    view: BrowserView,
    search_generation: u64,
    detail_generation: u64,
}

impl RecipeBrowser {
    pub fn new(catalog: Box<dyn CatalogService>) -> Self {
        RecipeBrowser {
            catalog,
            view: BrowserView::default(),
            search_generation: 0,
            detail_generation: 0,
        }
    }

    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    pub fn query(&self) -> &QueryState {
        &self.view.query
    }

    /// Fetch the category and area lists side by side.
    ///
    /// A failure of one list does not discard the other.
    pub async fn load_filters(&mut self) {
        self.view.search_status = ViewStatus::Loading;
        let (categories, areas) = tokio::join!(
            self.catalog.list_categories(),
            self.catalog.list_areas()
        );

        let mut failures = Vec::new();
        match categories {
            Ok(categories) => self.view.categories = categories,
            Err(e) => failures.push(format!("categories: {}", e)),
        }
        match areas {
            Ok(areas) => self.view.areas = areas,
            Err(e) => failures.push(format!("areas: {}", e)),
        }

        if failures.is_empty() {
            info!(
                "Loaded {} categories and {} areas",
                self.view.categories.len(),
                self.view.areas.len()
            );
            self.view.search_status = ViewStatus::Idle;
        } else {
            let message = format!("Failed to load filters ({})", failures.join("; "));
            warn!("{}", message);
            self.view.search_status = ViewStatus::Failed(message);
        }
    }

    /// Update the search term. Does not fetch.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.query.set_search_term(term);
    }

    /// Select a category (clearing the area) and search
    pub async fn set_category(&mut self, name: impl Into<String>) {
        self.view.query.select_category(name);
        self.submit_search().await;
    }

    /// Select an area (clearing the category) and search
    pub async fn set_area(&mut self, name: impl Into<String>) {
        self.view.query.select_area(name);
        self.submit_search().await;
    }

    /// Run the query the current state resolves to and replace the result list
    pub async fn submit_search(&mut self) {
        let pending = self.begin_search();
        let result = self.catalog.search(&pending.query).await;
        self.finish_search(pending.generation, result);
    }

    /// Fetch a recipe and make it the selected one.
    ///
    /// On failure the current selection is left as it was.
    pub async fn select_recipe(&mut self, id: impl Into<String>) {
        let pending = self.begin_detail(id);
        let result = self.catalog.get_detail(&pending.id).await;
        self.finish_detail(pending.generation, result);
    }

    pub fn dismiss_detail(&mut self) {
        // Invalidate any lookup still in flight so it cannot reopen the panel
        self.detail_generation += 1;
        self.view.selected_recipe = None;
        self.view.detail_status = ViewStatus::Idle;
    }

    /// Issue a new query generation for the current state
    pub fn begin_search(&mut self) -> PendingSearch {
        self.search_generation += 1;
        self.view.search_status = ViewStatus::Loading;
        PendingSearch {
            generation: Generation(self.search_generation),
            query: self.view.query.clone(),
        }
    }

    /// Apply a query result if it is still the latest. Returns whether it was applied.
    pub fn finish_search(
        &mut self,
        generation: Generation,
        result: Result<Vec<RecipeSummary>, CatalogError>,
    ) -> bool {
        if generation.0 != self.search_generation {
            debug!(
                "Discarding stale search result {:?} (latest is {})",
                generation, self.search_generation
            );
            return false;
        }

        match result {
            Ok(recipes) => {
                self.view.search_status = if recipes.is_empty() {
                    ViewStatus::NoResults
                } else {
                    ViewStatus::Idle
                };
                self.view.recipes = recipes;
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                self.view.recipes.clear();
                self.view.search_status =
                    ViewStatus::Failed(format!("Failed to load recipes: {}", e));
            }
        }
        true
    }

    /// Issue a new detail generation for `id`
    pub fn begin_detail(&mut self, id: impl Into<String>) -> PendingDetail {
        self.detail_generation += 1;
        self.view.detail_status = ViewStatus::Loading;
        PendingDetail {
            generation: Generation(self.detail_generation),
            id: id.into(),
        }
    }

    /// Apply a detail result if it is still the latest. Returns whether it was applied.
    pub fn finish_detail(
        &mut self,
        generation: Generation,
        result: Result<RecipeDetail, CatalogError>,
    ) -> bool {
        if generation.0 != self.detail_generation {
            debug!(
                "Discarding stale detail result {:?} (latest is {})",
                generation, self.detail_generation
            );
            return false;
        }

        match result {
            Ok(detail) => {
                info!("Selected recipe {} ({})", detail.id, detail.name);
                self.view.selected_recipe = Some(detail);
                self.view.detail_status = ViewStatus::Idle;
            }
            Err(e) => {
                warn!("Detail lookup failed: {}", e);
                self.view.detail_status =
                    ViewStatus::Failed(format!("Failed to load recipe: {}", e));
            }
        }
        true
    }
}
