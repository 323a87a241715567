// SPDX-License-Identifier: MIT

//! Login, registration and logout.
//!
//! These routes are public. A successful login signs the upstream bearer
//! token into the session cookie and redirects by role; everything else
//! answers with the page view so the shell can re-render the form.

use crate::error::{AppError, Result};
use crate::forms::{api_error, field_errors, FieldErrors, LoginForm, RegisterForm};
use crate::middleware::auth::{
    clear_logged_in_cookie, clear_session_cookie, create_session_token, logged_in_cookie,
    session_cookie,
};
use crate::services::LoginOutcome;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_page).post(submit_login))
        .route("/register", get(register_page).post(submit_register))
        .route("/logout", post(logout))
}

// ─── Views ───────────────────────────────────────────────────

/// Login page view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginView {
    pub heading: String,
    pub errors: FieldErrors,
    /// Cross-link under the form, "Don't have an account? Register here"
    pub register_href: String,
}

impl LoginView {
    fn new(errors: FieldErrors) -> Self {
        Self {
            heading: "Login".to_string(),
            errors,
            register_href: "/register".to_string(),
        }
    }
}

/// Register page view.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegisterView {
    pub heading: String,
    /// Role radio options as (value, label) pairs; "user" is preselected
    pub role_options: Vec<RoleOption>,
    pub errors: FieldErrors,
    /// Cross-link under the form, "Already have an account? Login here"
    pub login_href: String,
}

/// One role radio option.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RoleOption {
    pub value: String,
    pub label: String,
}

impl RegisterView {
    fn new(errors: FieldErrors) -> Self {
        Self {
            heading: "Register for Cookistry".to_string(),
            role_options: vec![
                RoleOption {
                    value: "user".to_string(),
                    label: "Foodie (User)".to_string(),
                },
                RoleOption {
                    value: "chef".to_string(),
                    label: "Chef".to_string(),
                },
            ],
            errors,
            login_href: "/login".to_string(),
        }
    }
}

// ─── Handlers ────────────────────────────────────────────────

/// Serve the login page view.
async fn login_page() -> Json<LoginView> {
    Json(LoginView::new(FieldErrors::new()))
}

/// Validate the login form and sign a session from the upstream token.
async fn submit_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(form): Json<LoginForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let view = LoginView::new(field_errors(&validation));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    match state.recipe_api.login(&form.email, &form.password).await {
        Ok(LoginOutcome::Authenticated { token, user }) => {
            let session =
                create_session_token(&token, &user, &state.config.session_signing_key)?;

            let destination = if user.is_chef() {
                "/chef/dashboard"
            } else {
                "/foodie/dashboard"
            };
            tracing::info!(user_id = %user.id, role = %user.role, "Login successful");

            let jar = jar
                .add(session_cookie(&state.config, session))
                .add(logged_in_cookie(&state.config));
            Ok((jar, Redirect::to(destination)).into_response())
        }
        Ok(LoginOutcome::InvalidCredentials) => {
            tracing::info!("Login rejected upstream");
            let view = LoginView::new(api_error("Invalid email or password."));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response())
        }
        Err(err @ AppError::RecipeApi { .. }) => {
            let message = err
                .upstream_message()
                .unwrap_or("An error occurred. Please try again.");
            let view = LoginView::new(api_error(message));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Serve the register page view.
async fn register_page() -> Json<RegisterView> {
    Json(RegisterView::new(FieldErrors::new()))
}

/// Validate the registration form and create the account upstream.
async fn submit_register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let view = RegisterView::new(field_errors(&validation));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    match state.recipe_api.register(&form.to_new_user()).await {
        Ok(()) => {
            tracing::info!(role = %form.role, "User registered");
            Ok(Redirect::to("/login").into_response())
        }
        Err(err @ AppError::RecipeApi { .. }) => {
            let message = err
                .upstream_message()
                .unwrap_or("Registration failed. Please try again.");
            let view = RegisterView::new(api_error(message));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Clear the session cookies and return to the login page.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Logging out");
    let jar = jar
        .add(clear_session_cookie(&state.config))
        .add(clear_logged_in_cookie(&state.config));
    (jar, Redirect::to("/login"))
}
