//! User model shared between the session and the recipe API.

use serde::{Deserialize, Serialize};

/// User profile as the recipe API returns it at login.
///
/// The upstream service speaks camelCase JSON and keys documents by `_id`.
/// Only `id` and `role` are load-bearing; the rest is display data and may
/// be absent on older accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Upstream document ID
    #[serde(rename = "_id")]
    pub id: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Mobile number, kept exactly as entered at registration
    #[serde(default)]
    pub mobile_number: String,
    /// "chef" may manage recipes; any other value only browses
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    /// Whether this user may create, edit and delete recipes.
    pub fn is_chef(&self) -> bool {
        self.role == "chef"
    }
}

/// Registration payload for the recipe API (camelCase on the wire).
///
/// The confirm-password field never leaves this service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub role: String,
    pub password: String,
}
