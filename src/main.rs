// SPDX-License-Identifier: MIT

//! Cookistry Web Server
//!
//! Serves the page views for the Cookistry recipe app and forwards recipe
//! and account operations to the upstream recipe API.

use cookistry_web::{
    config::Config,
    services::{InventoryStore, RecipeApi},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Cookistry web gateway");

    // Initialize the upstream client
    let recipe_api = RecipeApi::new(config.recipe_api_url.clone());
    tracing::info!(url = %config.recipe_api_url, "Recipe API client initialized");

    // Per-visitor inventory boards, in-memory only
    let inventory = InventoryStore::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        recipe_api,
        inventory,
    });

    // Build router
    let app = cookistry_web::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cookistry_web=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
