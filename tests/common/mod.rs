// SPDX-License-Identifier: MIT

use cookistry_web::config::Config;
use cookistry_web::middleware::auth::create_session_token;
use cookistry_web::models::UserProfile;
use cookistry_web::routes::create_router;
use cookistry_web::services::{InventoryStore, RecipeApi};
use cookistry_web::AppState;
use std::sync::Arc;

/// Create a test app pointed at the given recipe API base URL.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(recipe_api_url: &str) -> (axum::Router, Arc<AppState>) {
    let mut config = Config::default();
    config.recipe_api_url = recipe_api_url.trim_end_matches('/').to_string();

    let recipe_api = RecipeApi::new(config.recipe_api_url.clone());
    let inventory = InventoryStore::new();

    let state = Arc::new(AppState {
        config,
        recipe_api,
        inventory,
    });
    (create_router(state.clone()), state)
}

/// Chef profile used across the page tests.
#[allow(dead_code)]
pub fn chef() -> UserProfile {
    UserProfile {
        id: "chef-1".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "asha@example.com".to_string(),
        mobile_number: "9876543210".to_string(),
        role: "chef".to_string(),
    }
}

/// Foodie profile used across the page tests.
#[allow(dead_code)]
pub fn foodie() -> UserProfile {
    UserProfile {
        id: "user-7".to_string(),
        first_name: "Ben".to_string(),
        last_name: "Ng".to_string(),
        email: "ben@example.com".to_string(),
        mobile_number: "9123456780".to_string(),
        role: "user".to_string(),
    }
}

/// Cookie header value carrying a valid session for the given profile.
#[allow(dead_code)]
pub fn session_cookie_header(state: &AppState, user: &UserProfile) -> String {
    let token = create_session_token("api-token", user, &state.config.session_signing_key)
        .expect("session token should sign");
    format!("cookistry_session={token}")
}

/// Parse a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&body).expect("body should be JSON")
}
