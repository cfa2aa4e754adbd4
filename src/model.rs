use serde::Serialize;

/// A recipe category as listed by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
}

/// A cuisine area ("Italian", "Japanese", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogArea {
    pub name: String,
}

/// Lightweight listing record returned by a search or filter query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full recipe record returned by an id lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub youtube_url: Option<String>,
    /// Ingredient slots in catalog order, ending at the first empty slot
    pub ingredients: Vec<Ingredient>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

/// The three search inputs.
///
/// At most one of category and area is non-empty; selecting one clears the
/// other. The search term only takes effect when both are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    selected_category: String,
    selected_area: String,
}

/// The single catalog query a [`QueryState`] resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery<'a> {
    ByCategory(&'a str),
    ByArea(&'a str),
    ByName(&'a str),
}

impl QueryState {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Default::default()
        }
    }

    pub fn with_category(category: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.select_category(category);
        state
    }

    pub fn with_area(area: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.select_area(area);
        state
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selected_area(&self) -> &str {
        &self.selected_area
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a category and clear the area filter. An empty name clears both.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.selected_area.clear();
    }

    /// Select an area and clear the category filter. An empty name clears both.
    pub fn select_area(&mut self, area: impl Into<String>) {
        self.selected_area = area.into();
        self.selected_category.clear();
    }

    /// Category wins over area, area wins over the search term.
    pub fn resolve(&self) -> SearchQuery<'_> {
        if !self.selected_category.is_empty() {
            SearchQuery::ByCategory(&self.selected_category)
        } else if !self.selected_area.is_empty() {
            SearchQuery::ByArea(&self.selected_area)
        } else {
            SearchQuery::ByName(&self.search_term)
        }
    }
}
