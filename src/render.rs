//! Plain-text rendering of the browser view.

use std::io::{self, Write};

use crate::browser::{BrowserView, ViewStatus};
use crate::model::{CatalogArea, CatalogCategory, RecipeDetail, RecipeSummary};
use crate::projection::DetailProjection;

const TITLE: &str = "Recipe Hunter";

/// Render the whole view: filters, recipe list, status line and detail panel
pub fn render<W: Write>(view: &BrowserView, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== {} ===", TITLE)?;

    let query = &view.query;
    writeln!(
        out,
        "Search: \"{}\" | Category: {} | Area: {}",
        query.search_term(),
        or_any(query.selected_category()),
        or_any(query.selected_area())
    )?;

    render_status(&view.search_status, out)?;

    if !view.recipes.is_empty() {
        writeln!(out)?;
        render_summaries(&view.recipes, out)?;
    }

    if view.detail_status != ViewStatus::Idle || view.selected_recipe.is_some() {
        writeln!(out)?;
    }
    render_status(&view.detail_status, out)?;
    if let Some(detail) = &view.selected_recipe {
        render_detail(detail, out)?;
    }

    Ok(())
}

fn render_status<W: Write>(status: &ViewStatus, out: &mut W) -> io::Result<()> {
    match status {
        ViewStatus::Idle => Ok(()),
        ViewStatus::Loading => writeln!(out, "Loading..."),
        ViewStatus::NoResults => writeln!(out, "No recipes found."),
        ViewStatus::Failed(message) => writeln!(out, "Error: {}", message),
    }
}

fn or_any(value: &str) -> &str {
    if value.is_empty() {
        "(any)"
    } else {
        value
    }
}

/// Numbered recipe list; the numbers are what `open #n` refers to
pub fn render_summaries<W: Write>(recipes: &[RecipeSummary], out: &mut W) -> io::Result<()> {
    for (index, recipe) in recipes.iter().enumerate() {
        writeln!(out, "{:>3}. {} [{}]", index + 1, recipe.name, recipe.id)?;
        if !recipe.thumbnail_url.is_empty() {
            writeln!(out, "     Image: {}", recipe.thumbnail_url)?;
        }
    }
    Ok(())
}

pub fn render_filters<W: Write>(
    categories: &[CatalogCategory],
    areas: &[CatalogArea],
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Categories:")?;
    for category in categories {
        writeln!(out, "  {}", category.name)?;
    }
    writeln!(out, "Areas:")?;
    for area in areas {
        writeln!(out, "  {}", area.name)?;
    }
    Ok(())
}

pub fn render_detail<W: Write>(detail: &RecipeDetail, out: &mut W) -> io::Result<()> {
    let projection = DetailProjection::new(detail);

    writeln!(out, "## {}", projection.name)?;
    if !projection.thumbnail_url.is_empty() {
        writeln!(out, "Image: {}", projection.thumbnail_url)?;
    }
    let origin: Vec<&str> = [detail.category.as_deref(), detail.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        writeln!(out, "{}", origin.join(" / "))?;
    }
    if !detail.tags.is_empty() {
        writeln!(out, "Tags: {}", detail.tags.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "Ingredients")?;
    for ingredient in projection.ingredients {
        writeln!(out, "  - {} - {}", ingredient.name, ingredient.measure)?;
    }

    writeln!(out)?;
    writeln!(out, "Instructions")?;
    for paragraph in &projection.paragraphs {
        writeln!(out, "  {}", paragraph)?;
    }

    if let Some(url) = projection.tutorial_url {
        writeln!(out)?;
        writeln!(out, "Watch Tutorial: {}", url)?;
    }
    if let Some(source) = &detail.source_url {
        writeln!(out, "Source: {}", source)?;
    }

    Ok(())
}
