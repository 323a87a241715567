// SPDX-License-Identifier: MIT

//! Cookistry web gateway
//!
//! This crate serves the JSON page views for the Cookistry recipe app and
//! brokers every call to the recipe API, keeping the bearer token inside a
//! signed session cookie instead of browser storage.

pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{InventoryStore, RecipeApi};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub recipe_api: RecipeApi,
    pub inventory: InventoryStore,
}
