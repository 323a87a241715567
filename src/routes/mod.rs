// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod auth;
pub mod chef;
pub mod foodie;
pub mod inventory;

use crate::config::Config;
use crate::middleware::auth::{clear_logged_in_cookie, clear_session_cookie, require_session};
use crate::AppState;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{middleware, routing::get, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Empty-table placeholder shared by the dashboard views.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Placeholder {
    pub text: String,
    pub colspan: u32,
}

/// Catch-all error page view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ErrorPageView {
    pub heading: String,
    pub message: String,
    pub login_href: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Error page served for any route the gateway does not know.
async fn error_page() -> (StatusCode, Json<ErrorPageView>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorPageView {
            heading: "Something Went Wrong".to_string(),
            message: "We're sorry, but an error occurred. Please try again later.".to_string(),
            login_href: "/login".to_string(),
        }),
    )
}

/// Clear the session cookies and send the browser back to the login page.
/// The list handlers use this when the recipe API rejects the stored token.
pub(crate) fn force_logout(config: &Config, jar: CookieJar) -> Response {
    tracing::info!("Upstream rejected the session token, logging out");
    let jar = jar
        .add(clear_session_cookie(config))
        .add(clear_logged_in_cookie(config));
    (jar, Redirect::to("/login")).into_response()
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from the web origin and localhost (for dev)
    let web_origin = state.config.web_origin.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == web_origin
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(inventory::routes());

    // Protected routes (session required)
    let protected_routes = chef::routes()
        .merge(foodie::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(error_page)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
