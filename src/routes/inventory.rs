// SPDX-License-Identifier: MIT

//! Raw-material inventory widget.
//!
//! Unrelated to the recipe pages and deliberately left open: no session
//! gate, state pinned to a per-visitor cookie. Boards live in memory only
//! and reset with the process.

use crate::config::Config;
use crate::services::{InventoryBoard, InventoryEntry, InventoryRow};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Anonymous visitor cookie keying the in-memory board.
pub const PANTRY_COOKIE: &str = "cookistry_pantry";

const BLANK_FIELDS_MESSAGE: &str = "Please fill out all fields!";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/inventory", get(inventory_page))
        .route("/inventory/add", post(add_entry))
}

// ─── Views ───────────────────────────────────────────────────

/// Inventory page view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InventoryView {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<InventoryRow>,
    pub total_products: u32,
    /// "{name} (RS {cost})" summary line
    pub most_expensive: String,
    /// Set when the submitted entry had a blank field
    pub error: Option<String>,
    pub add_action: String,
}

impl InventoryView {
    fn from_board(board: InventoryBoard, error: Option<&str>) -> Self {
        Self {
            heading: "Raw Material Inventory".to_string(),
            columns: vec![
                "Material Name".to_string(),
                "Category".to_string(),
                "Quantity".to_string(),
                "Supplier Name".to_string(),
                "Cost per Unit".to_string(),
            ],
            most_expensive: board.most_expensive_display(),
            rows: board.rows,
            total_products: board.total_products,
            error: error.map(str::to_string),
            add_action: "/inventory/add".to_string(),
        }
    }
}

// ─── Handlers ────────────────────────────────────────────────

/// Serve the visitor's inventory board.
async fn inventory_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (visitor, jar) = visitor_id(&state.config, jar);
    let board = state.inventory.board(&visitor);
    (jar, Json(InventoryView::from_board(board, None))).into_response()
}

/// Record one inventory entry; every field is required.
async fn add_entry(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(entry): Json<InventoryEntry>,
) -> Response {
    let (visitor, jar) = visitor_id(&state.config, jar);

    if !entry.is_complete() {
        let board = state.inventory.board(&visitor);
        let view = InventoryView::from_board(board, Some(BLANK_FIELDS_MESSAGE));
        return (StatusCode::UNPROCESSABLE_ENTITY, jar, Json(view)).into_response();
    }

    let board = state.inventory.add(&visitor, &entry);
    tracing::debug!(total_products = board.total_products, "Inventory entry added");
    (jar, Json(InventoryView::from_board(board, None))).into_response()
}

/// Visitor ID from the pantry cookie, minting one on first contact.
fn visitor_id(config: &Config, jar: CookieJar) -> (String, CookieJar) {
    if let Some(cookie) = jar.get(PANTRY_COOKIE) {
        return (cookie.value().to_string(), jar);
    }

    let id = Uuid::new_v4().to_string();
    let mut cookie = Cookie::new(PANTRY_COOKIE, id.clone());
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_http_only(true);
    cookie.set_secure(config.secure_cookies());

    (id, jar.add(cookie))
}
