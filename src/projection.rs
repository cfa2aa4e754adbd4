//! Display fragments derived from a [`RecipeDetail`].

use crate::model::{Ingredient, RecipeDetail};

/// Borrowed, display-ready view of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailProjection<'a> {
    pub name: &'a str,
    pub thumbnail_url: &'a str,
    pub ingredients: &'a [Ingredient],
    pub paragraphs: Vec<&'a str>,
    pub tutorial_url: Option<&'a str>,
}

impl<'a> DetailProjection<'a> {
    pub fn new(detail: &'a RecipeDetail) -> Self {
        DetailProjection {
            name: &detail.name,
            thumbnail_url: &detail.thumbnail_url,
            ingredients: &detail.ingredients,
            paragraphs: split_instructions(&detail.instructions),
            tutorial_url: tutorial_link(detail),
        }
    }
}

/// Split instructions into paragraphs on every `.`.
///
/// Each segment is trimmed and empty segments are dropped. This also breaks
/// abbreviations ("Dr.") and decimals ("1.5 cups") into separate paragraphs.
pub fn split_instructions(instructions: &str) -> Vec<&str> {
    instructions
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub fn tutorial_link(detail: &RecipeDetail) -> Option<&str> {
    detail
        .youtube_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
}
