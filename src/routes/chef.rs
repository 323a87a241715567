// SPDX-License-Identifier: MIT

//! Chef pages: the manage-recipes dashboard and the recipe form.
//!
//! All routes here sit behind the session middleware. The dashboard
//! re-fetches the chef's recipes on every request; the form serves both
//! create and edit, with the recipe ID carried in the route.

use crate::error::{AppError, Result};
use crate::forms::{api_error, field_errors, FieldErrors, RecipeForm};
use crate::middleware::auth::Session;
use crate::models::{Recipe, CATEGORIES, CUISINES, DIFFICULTIES, FILTER_CATEGORIES};
use crate::routes::{force_logout, Placeholder};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chef/dashboard", get(dashboard))
        .route("/chef/create", get(create_page).post(submit_create))
        .route("/chef/edit/{id}", get(edit_page).post(submit_edit))
        .route("/chef/recipes/{id}/delete", post(delete_recipe))
}

// ─── Views ───────────────────────────────────────────────────

/// Manage-recipes dashboard view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChefDashboardView {
    pub heading: String,
    /// Selected category filter, echoed back
    pub category: String,
    pub category_options: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<ChefRecipeRow>,
    /// Present only when `rows` is empty
    pub placeholder: Option<Placeholder>,
    pub create_href: String,
    pub logout_action: String,
}

/// One dashboard table row.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChefRecipeRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    /// Rendered "{n} mins"
    pub prep_time: String,
    pub edit_href: String,
    pub delete_action: String,
}

/// Recipe form view, shared by create and edit.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeFormView {
    pub heading: String,
    /// "create" or "edit"
    pub mode: String,
    pub values: RecipeForm,
    pub options: RecipeOptions,
    pub errors: FieldErrors,
}

/// Fixed select options for the recipe form.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeOptions {
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub cuisines: Vec<String>,
}

impl RecipeOptions {
    fn new() -> Self {
        Self {
            categories: option_list(CATEGORIES),
            difficulties: option_list(DIFFICULTIES),
            cuisines: option_list(CUISINES),
        }
    }
}

impl RecipeFormView {
    fn create(values: RecipeForm, errors: FieldErrors) -> Self {
        Self {
            heading: "Add Recipe".to_string(),
            mode: "create".to_string(),
            values,
            options: RecipeOptions::new(),
            errors,
        }
    }

    fn edit(values: RecipeForm, errors: FieldErrors) -> Self {
        Self {
            heading: "Update Recipe".to_string(),
            mode: "edit".to_string(),
            values,
            options: RecipeOptions::new(),
            errors,
        }
    }
}

/// Delete confirmation view, answered when the body lacks `confirm: true`.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteConfirmView {
    pub confirm_required: bool,
    pub prompt: String,
}

fn option_list(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    #[serde(default = "default_category")]
    category: String,
}

fn default_category() -> String {
    "All Categories".to_string()
}

/// Serve the manage-recipes dashboard, filtered by category.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(query): Query<DashboardQuery>,
    jar: CookieJar,
) -> Result<Response> {
    tracing::debug!(user_id = %session.user.id, category = %query.category, "Fetching chef recipes");

    let recipes = match state
        .recipe_api
        .recipes_for_user(&session.api_token, &session.user.id, &query.category)
        .await
    {
        Ok(recipes) => recipes,
        Err(err) if err.is_session_invalid() => return Ok(force_logout(&state.config, jar)),
        Err(err) => return Err(err),
    };

    let rows: Vec<ChefRecipeRow> = recipes.into_iter().map(recipe_row).collect();
    let placeholder = rows.is_empty().then(|| Placeholder {
        text: "No recipes found".to_string(),
        colspan: 5,
    });

    let view = ChefDashboardView {
        heading: "Manage Recipes".to_string(),
        category: query.category,
        category_options: option_list(FILTER_CATEGORIES),
        columns: option_list(&["Title", "Category", "Difficulty", "Prep Time", "Actions"]),
        rows,
        placeholder,
        create_href: "/chef/create".to_string(),
        logout_action: "/logout".to_string(),
    };
    Ok(Json(view).into_response())
}

fn recipe_row(recipe: Recipe) -> ChefRecipeRow {
    ChefRecipeRow {
        edit_href: format!("/chef/edit/{}", recipe.id),
        delete_action: format!("/chef/recipes/{}/delete", recipe.id),
        prep_time: format!("{} mins", recipe.prep_time_in_minutes),
        id: recipe.id,
        title: recipe.title,
        category: recipe.category,
        difficulty: recipe.difficulty,
    }
}

// ─── Recipe form ─────────────────────────────────────────────

/// Serve the blank create-recipe form.
async fn create_page() -> Json<RecipeFormView> {
    Json(RecipeFormView::create(
        RecipeForm::default(),
        FieldErrors::new(),
    ))
}

/// Validate and create a recipe, then return to the dashboard.
async fn submit_create(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Json(form): Json<RecipeForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let view = RecipeFormView::create(form, field_errors(&validation));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    let payload = form.to_payload(&session.user.id);
    match state
        .recipe_api
        .create_recipe(&session.api_token, &payload)
        .await
    {
        Ok(()) => {
            tracing::info!(user_id = %session.user.id, title = %payload.title, "Recipe created");
            Ok(Redirect::to("/chef/dashboard").into_response())
        }
        Err(err @ AppError::RecipeApi { .. }) => {
            let message = err.upstream_message().unwrap_or("Failed to save recipe.");
            let view = RecipeFormView::create(form, api_error(message));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Serve the edit form prefilled from the stored recipe.
async fn edit_page(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<RecipeFormView>> {
    let recipe = state.recipe_api.get_recipe(&session.api_token, &id).await?;
    Ok(Json(RecipeFormView::edit(
        prefill(recipe),
        FieldErrors::new(),
    )))
}

/// Validate and update a recipe, then return to the dashboard.
async fn submit_edit(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(form): Json<RecipeForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let view = RecipeFormView::edit(form, field_errors(&validation));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    let payload = form.to_payload(&session.user.id);
    match state
        .recipe_api
        .update_recipe(&session.api_token, &id, &payload)
        .await
    {
        Ok(()) => {
            tracing::info!(user_id = %session.user.id, recipe_id = %id, "Recipe updated");
            Ok(Redirect::to("/chef/dashboard").into_response())
        }
        Err(err @ AppError::RecipeApi { .. }) => {
            let message = err.upstream_message().unwrap_or("Failed to save recipe.");
            let view = RecipeFormView::edit(form, api_error(message));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Populate form values from a stored recipe for the edit page.
fn prefill(recipe: Recipe) -> RecipeForm {
    RecipeForm {
        title: recipe.title,
        category: recipe.category,
        difficulty: recipe.difficulty,
        prep_time_in_minutes: recipe.prep_time_in_minutes,
        cook_time_in_minutes: recipe.cook_time_in_minutes,
        servings: recipe.servings,
        cuisine: recipe.cuisine,
        ingredients: recipe.ingredients,
        instructions: recipe.instructions,
        tags: recipe.tags,
        notes: recipe.notes,
    }
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DeleteRequest {
    #[serde(default)]
    confirm: bool,
}

/// Delete a recipe after an explicit confirmation round-trip.
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(request): Json<DeleteRequest>,
) -> Result<Response> {
    if !request.confirm {
        return Ok(Json(DeleteConfirmView {
            confirm_required: true,
            prompt: "Are you sure you want to delete this recipe?".to_string(),
        })
        .into_response());
    }

    // The dashboard re-fetch happens either way; a failed delete is only
    // visible in the logs.
    match state.recipe_api.delete_recipe(&session.api_token, &id).await {
        Ok(()) => {
            tracing::info!(user_id = %session.user.id, recipe_id = %id, "Recipe deleted");
        }
        Err(err) => {
            tracing::error!(error = %err, recipe_id = %id, "Failed to delete recipe");
        }
    }

    Ok(Redirect::to("/chef/dashboard").into_response())
}
