// SPDX-License-Identifier: MIT

//! Foodie catalog: the read-only list of every chef's recipes.

use crate::error::Result;
use crate::middleware::auth::Session;
use crate::models::Recipe;
use crate::routes::{force_logout, Placeholder};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/foodie/dashboard", get(dashboard))
}

// ─── Views ───────────────────────────────────────────────────

/// Recipe catalog view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodieDashboardView {
    pub heading: String,
    /// Selected sort direction, echoed back
    pub sort_order: i32,
    pub sort_options: Vec<SortOption>,
    pub columns: Vec<String>,
    pub rows: Vec<FoodieRecipeRow>,
    /// Present only when `rows` is empty
    pub placeholder: Option<Placeholder>,
    pub logout_action: String,
}

/// One sort dropdown option.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SortOption {
    pub value: i32,
    pub label: String,
}

/// One catalog table row.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodieRecipeRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub prep_time_in_minutes: u32,
    pub action: RowAction,
}

/// Per-row action button. The catalog's "View" stays disabled; recipe
/// detail pages have not been built yet.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RowAction {
    pub label: String,
    pub enabled: bool,
}

// ─── Handlers ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    #[serde(default = "default_sort_order")]
    sort_order: i32,
}

fn default_sort_order() -> i32 {
    1
}

/// Serve the recipe catalog, sorted by prep time.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(query): Query<CatalogQuery>,
    jar: CookieJar,
) -> Result<Response> {
    tracing::debug!(user_id = %session.user.id, sort_order = query.sort_order, "Fetching recipe catalog");

    let recipes = match state
        .recipe_api
        .all_recipes(&session.api_token, query.sort_order)
        .await
    {
        Ok(recipes) => recipes,
        Err(err) if err.is_session_invalid() => return Ok(force_logout(&state.config, jar)),
        Err(err) => return Err(err),
    };

    let rows: Vec<FoodieRecipeRow> = recipes.into_iter().map(catalog_row).collect();
    let placeholder = rows.is_empty().then(|| Placeholder {
        text: "No recipes found".to_string(),
        colspan: 5,
    });

    let view = FoodieDashboardView {
        heading: "Recipe Catalog".to_string(),
        sort_order: query.sort_order,
        sort_options: vec![
            SortOption {
                value: 1,
                label: "Sort by Prep Time (ASC)".to_string(),
            },
            SortOption {
                value: -1,
                label: "Sort by Prep Time (DESC)".to_string(),
            },
        ],
        columns: vec![
            "Title".to_string(),
            "Category".to_string(),
            "Difficulty".to_string(),
            "Prep Time (mins)".to_string(),
            "Action".to_string(),
        ],
        rows,
        placeholder,
        logout_action: "/logout".to_string(),
    };
    Ok(Json(view).into_response())
}

fn catalog_row(recipe: Recipe) -> FoodieRecipeRow {
    FoodieRecipeRow {
        id: recipe.id,
        title: recipe.title,
        category: recipe.category,
        difficulty: recipe.difficulty,
        prep_time_in_minutes: recipe.prep_time_in_minutes,
        action: RowAction {
            label: "View".to_string(),
            enabled: false,
        },
    }
}
