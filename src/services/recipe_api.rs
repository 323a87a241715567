// SPDX-License-Identifier: MIT

//! Recipe API client.
//!
//! Thin reqwest wrapper over the external recipe service. Handlers pass the
//! session's bearer token per call; the client never stores credentials.

use crate::error::AppError;
use crate::models::{NewUser, Recipe, RecipePayload, UserProfile};
use serde::Deserialize;

/// Outcome of a login attempt.
///
/// The recipe API reports bad credentials as a 200 whose body carries
/// `{"message": "Invalid Credentials"}`, so this is separate from the
/// transport-level `AppError` path.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated { token: String, user: UserProfile },
    InvalidCredentials,
}

/// Recipe API client.
#[derive(Clone)]
pub struct RecipeApi {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeApi {
    /// Create a client for the given API base URL (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Log in and obtain an API token plus the user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let response = self
            .http
            .post(format!("{}/user/login", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(request_failed)?;

        let body: LoginResponse = self.check_response_json(response).await?;

        if body.message.as_deref() == Some("Invalid Credentials") {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        match (body.token, body.user) {
            (Some(token), Some(user)) => Ok(LoginOutcome::Authenticated { token, user }),
            _ => Err(AppError::RecipeApi {
                status: None,
                message: body.message.unwrap_or_default(),
            }),
        }
    }

    /// Register a new user.
    pub async fn register(&self, new_user: &NewUser) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/user/register", self.base_url))
            .json(new_user)
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response(response).await
    }

    /// Fetch a single recipe by ID.
    pub async fn get_recipe(&self, token: &str, id: &str) -> Result<Recipe, AppError> {
        let response = self
            .http
            .get(format!("{}/recipe/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(request_failed)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Recipe {id} not found")));
        }

        self.check_response_json(response).await
    }

    /// Create a recipe.
    pub async fn create_recipe(&self, token: &str, payload: &RecipePayload) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/recipe", self.base_url))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response(response).await
    }

    /// Update an existing recipe.
    pub async fn update_recipe(
        &self,
        token: &str,
        id: &str,
        payload: &RecipePayload,
    ) -> Result<(), AppError> {
        let response = self
            .http
            .put(format!("{}/recipe/{}", self.base_url, id))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response(response).await
    }

    /// Delete a recipe.
    pub async fn delete_recipe(&self, token: &str, id: &str) -> Result<(), AppError> {
        let response = self
            .http
            .delete(format!("{}/recipe/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response(response).await
    }

    /// List a chef's recipes, optionally narrowed by category.
    ///
    /// The category value is forwarded verbatim; "All Categories" means no
    /// filter on the API side.
    pub async fn recipes_for_user(
        &self,
        token: &str,
        user_id: &str,
        category: &str,
    ) -> Result<Vec<Recipe>, AppError> {
        let response = self
            .http
            .post(format!("{}/recipe/user", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({ "userId": user_id, "category": category }))
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response_json(response).await
    }

    /// List every recipe, sorted by prep time (1 ascending, -1 descending).
    pub async fn all_recipes(&self, token: &str, sort_order: i32) -> Result<Vec<Recipe>, AppError> {
        let response = self
            .http
            .post(format!("{}/recipe/all", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({ "sortOrder": sort_order }))
            .send()
            .await
            .map_err(request_failed)?;

        self.check_response_json(response).await
    }

    /// Check response status; failures carry the upstream status code and the
    /// server's `message` field when the body has one.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::failure(response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Recipe API response body did not parse");
            AppError::RecipeApi {
                status: None,
                message: String::new(),
            }
        })
    }

    async fn failure(response: reqwest::Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<ApiMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();

        tracing::warn!(
            status = status.as_u16(),
            message = %message,
            "Recipe API returned an error"
        );

        AppError::RecipeApi {
            status: Some(status.as_u16()),
            message,
        }
    }
}

fn request_failed(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "Recipe API request failed");
    AppError::RecipeApi {
        status: None,
        message: String::new(),
    }
}

/// Error body shape used across the recipe API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}

/// Login response body: either a failure message or a token plus the user.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserProfile>,
}
