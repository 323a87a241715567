// SPDX-License-Identifier: MIT

//! Session middleware.
//!
//! The session is a signed cookie wrapping the recipe API's bearer token and
//! the profile captured at login. Pages never see the raw token; handlers
//! read the decoded [`Session`] from request extensions.

use crate::config::Config;
use crate::models::UserProfile;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Duration;

/// Session cookie holding the signed claims.
pub const SESSION_COOKIE: &str = "cookistry_session";
/// Non-HttpOnly hint so the shell can cheaply test for a session.
pub const LOGGED_IN_COOKIE: &str = "cookistry_logged_in";

const SESSION_TTL_DAYS: i64 = 30;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (upstream user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Bearer token issued by the recipe API at login
    pub token: String,
    /// Profile captured at login
    pub user: UserProfile,
}

/// Active session extracted from the cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub api_token: String,
    pub user: UserProfile,
}

/// Middleware that requires a live session on page routes.
///
/// A missing or undecodable cookie sends the browser back to the login page
/// rather than answering 401; these are page requests, not API calls.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Redirect::to("/login").into_response();
    };

    match decode_session(cookie.value(), &state.config.session_signing_key) {
        Ok(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rejecting unusable session cookie");
            Redirect::to("/login").into_response()
        }
    }
}

/// Create a signed session token for a fresh login.
pub fn create_session_token(
    api_token: &str,
    user: &UserProfile,
    signing_key: &[u8],
) -> anyhow::Result<String> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user.id.clone(),
        iat: now,
        exp: now + (SESSION_TTL_DAYS as usize) * 24 * 60 * 60,
        token: api_token.to_string(),
        user: user.clone(),
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Decode and verify a session cookie value.
pub fn decode_session(
    value: &str,
    signing_key: &[u8],
) -> Result<Session, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let data = decode::<Claims>(value, &key, &validation)?;

    Ok(Session {
        api_token: data.claims.token,
        user: data.claims.user,
    })
}

// ─── Cookies ─────────────────────────────────────────────────

fn base_cookie(
    name: &'static str,
    value: String,
    config: &Config,
    max_age: Duration,
) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(max_age);
    cookie.set_secure(config.secure_cookies());
    cookie
}

/// Session cookie with its creation attributes.
pub fn session_cookie(config: &Config, value: String) -> Cookie<'static> {
    let mut cookie = base_cookie(
        SESSION_COOKIE,
        value,
        config,
        Duration::days(SESSION_TTL_DAYS),
    );
    cookie.set_http_only(true);
    cookie
}

/// Hint cookie; the shell reads it, so it stays visible to scripts.
pub fn logged_in_cookie(config: &Config) -> Cookie<'static> {
    base_cookie(
        LOGGED_IN_COOKIE,
        "1".to_string(),
        config,
        Duration::days(SESSION_TTL_DAYS),
    )
}

/// Removal twin of [`session_cookie`]; attributes must match creation.
pub fn clear_session_cookie(config: &Config) -> Cookie<'static> {
    let mut cookie = base_cookie(SESSION_COOKIE, String::new(), config, Duration::ZERO);
    cookie.set_http_only(true);
    cookie
}

/// Removal twin of [`logged_in_cookie`].
pub fn clear_logged_in_cookie(config: &Config) -> Cookie<'static> {
    base_cookie(LOGGED_IN_COOKIE, String::new(), config, Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef() -> UserProfile {
        UserProfile {
            id: "chef-1".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            role: "chef".to_string(),
        }
    }

    #[test]
    fn test_session_token_round_trip() {
        let signing_key = b"test_signing_key_32_bytes_long!!";

        let token = create_session_token("api-token", &chef(), signing_key).unwrap();
        let session = decode_session(&token, signing_key).unwrap();

        assert_eq!(session.api_token, "api-token");
        assert_eq!(session.user.id, "chef-1");
        assert!(session.user.is_chef());
    }

    #[test]
    fn test_session_token_rejects_wrong_key() {
        let token =
            create_session_token("api-token", &chef(), b"test_signing_key_32_bytes_long!!").unwrap();

        assert!(decode_session(&token, b"another_signing_key_32_bytes!!!!").is_err());
    }

    #[test]
    fn test_clear_cookies_match_creation_attributes() {
        let config = Config::default();

        let created = session_cookie(&config, "value".to_string());
        let cleared = clear_session_cookie(&config);

        assert_eq!(created.path(), cleared.path());
        assert_eq!(created.same_site(), cleared.same_site());
        assert_eq!(created.http_only(), cleared.http_only());
        assert_eq!(cleared.max_age(), Some(Duration::ZERO));

        let hint = logged_in_cookie(&config);
        assert_eq!(hint.http_only(), None);
        assert_eq!(hint.value(), "1");
    }
}
