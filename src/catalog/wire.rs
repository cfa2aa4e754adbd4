//! JSON shapes of the catalog responses and their mapping onto the model.

use crate::error::CatalogError;
use crate::model::{CatalogArea, CatalogCategory, Ingredient, RecipeDetail, RecipeSummary};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure slots in a catalog record
pub const MAX_INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    #[serde(rename = "idCategory")]
    id: String,
    #[serde(rename = "strCategory")]
    name: String,
    #[serde(rename = "strCategoryThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AreaRecord {
    #[serde(rename = "strArea")]
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
}

/// A full lookup record. The numbered `strIngredientN` / `strMeasureN`
/// fields land in `slots`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(flatten)]
    slots: Map<String, Value>,
}

/// Pull the list stored under `key` out of a response body.
///
/// A missing key is a parse error; an explicit `null` means no results.
pub(crate) fn take_list<T: DeserializeOwned>(
    mut body: Value,
    key: &str,
) -> Result<Vec<T>, CatalogError> {
    let object = body
        .as_object_mut()
        .ok_or_else(|| CatalogError::ParseError("response is not a JSON object".to_string()))?;

    match object.remove(key) {
        None => Err(CatalogError::ParseError(format!(
            "response has no `{}` field",
            key
        ))),
        Some(Value::Null) => Ok(Vec::new()),
        Some(list) => Ok(serde_json::from_value(list)?),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn slot_text<'a>(slots: &'a Map<String, Value>, field: &str) -> &'a str {
    slots
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
}

/// Walk slots 1..=20 and stop at the first one without an ingredient name
pub(crate) fn flatten_ingredients(slots: &Map<String, Value>) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();

    for n in 1..=MAX_INGREDIENT_SLOTS {
        let name = slot_text(slots, &format!("strIngredient{}", n));
        if name.is_empty() {
            break;
        }
        let measure = slot_text(slots, &format!("strMeasure{}", n));
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }

    ingredients
}

impl From<CategoryRecord> for CatalogCategory {
    fn from(record: CategoryRecord) -> Self {
        CatalogCategory {
            id: record.id,
            name: record.name,
            thumbnail_url: non_empty(record.thumbnail),
            description: non_empty(record.description),
        }
    }
}

impl From<AreaRecord> for CatalogArea {
    fn from(record: AreaRecord) -> Self {
        CatalogArea { name: record.name }
    }
}

impl From<SummaryRecord> for RecipeSummary {
    fn from(record: SummaryRecord) -> Self {
        RecipeSummary {
            id: record.id,
            name: record.name,
            thumbnail_url: record.thumbnail.unwrap_or_default(),
        }
    }
}

impl From<MealRecord> for RecipeDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = flatten_ingredients(&record.slots);
        let tags = record
            .tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        RecipeDetail {
            id: record.id,
            name: record.name,
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            instructions: record.instructions.unwrap_or_default(),
            youtube_url: non_empty(record.youtube),
            ingredients,
            category: non_empty(record.category),
            area: non_empty(record.area),
            tags,
            source_url: non_empty(record.source),
        }
    }
}
