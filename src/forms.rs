// SPDX-License-Identifier: MIT

//! Form bodies and client-side validation.
//!
//! Each page form deserializes from the JSON the shell posts, validates into
//! a field → message map, and only reaches the recipe API once the map is
//! empty. Request-level failures are surfaced on the same map under the
//! literal key `"api"`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{NewUser, RecipePayload};

/// Field name (or [`API_ERROR_KEY`]) → message.
pub type FieldErrors = BTreeMap<String, String>;

/// Key for request-level errors surfaced on a form.
pub const API_ERROR_KEY: &str = "api";

// ─── Login ───────────────────────────────────────────────────

/// Login form body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ─── Register ────────────────────────────────────────────────

/// Registration form body. `role` falls back to "user", matching the
/// register page's default selection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile Number is required"))]
    pub mobile_number: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Confirm Password is required"),
        must_match(other = password, message = "Passwords do not match")
    )]
    pub confirm_password: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl RegisterForm {
    /// Upstream registration payload; the confirm-password field stays behind.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            mobile_number: self.mobile_number.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            password: self.password.clone(),
        }
    }
}

// ─── Recipe ──────────────────────────────────────────────────

/// Create / update recipe form body.
///
/// Ingredients, instructions and tags arrive as ordered row lists from the
/// list editor. Rows may still contain commas typed by the user;
/// [`normalize_entries`] flattens them for the upstream payload. Numeric
/// fields accept a number, a numeric string, `""` or `null`; anything blank
/// or unparseable lands on 0 so the minimum checks fire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Difficulty is required"))]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    #[validate(range(min = 1, message = "Prep time must be at least 1 minute"))]
    pub prep_time_in_minutes: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    #[validate(range(min = 1, message = "Cook time must be at least 1 minute"))]
    pub cook_time_in_minutes: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: u32,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    #[validate(custom(function = at_least_one_ingredient))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = at_least_one_instruction))]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl RecipeForm {
    /// Upstream payload with normalized list fields and the owning user.
    pub fn to_payload(&self, user_id: &str) -> RecipePayload {
        RecipePayload {
            title: self.title.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            prep_time_in_minutes: self.prep_time_in_minutes,
            cook_time_in_minutes: self.cook_time_in_minutes,
            servings: self.servings,
            cuisine: self.cuisine.clone(),
            ingredients: normalize_entries(&self.ingredients),
            instructions: normalize_entries(&self.instructions),
            tags: normalize_entries(&self.tags),
            notes: self.notes.clone(),
            user_id: user_id.to_string(),
        }
    }
}

fn at_least_one_ingredient(rows: &[String]) -> Result<(), ValidationError> {
    require_entries(rows, "At least one ingredient is required")
}

fn at_least_one_instruction(rows: &[String]) -> Result<(), ValidationError> {
    require_entries(rows, "At least one instruction is required")
}

fn require_entries(rows: &[String], message: &'static str) -> Result<(), ValidationError> {
    if normalize_entries(rows).is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(message.into());
        return Err(error);
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────

/// Flatten list-editor rows into upstream entries: split each row on commas,
/// trim, and drop empties, preserving order.
pub fn normalize_entries(rows: &[String]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// A one-entry map carrying a request-level error under [`API_ERROR_KEY`].
pub fn api_error(message: impl Into<String>) -> FieldErrors {
    let mut map = FieldErrors::new();
    map.insert(API_ERROR_KEY.to_string(), message.into());
    map
}

/// Collapse validation output into the flat field → message map the views
/// render. When a field fails more than one check the last message wins: a
/// blank confirm-password submitted against a filled password reports
/// "Passwords do not match".
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, failures) in errors.field_errors() {
        if let Some(failure) = failures.last() {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            map.insert(field.to_string(), message);
        }
    }
    map
}

/// Accept a JSON number, a numeric string, `""`, or `null`; anything else
/// coerces to 0.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        serde_json::Value::String(raw) => raw.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_form_requires_email_and_password() {
        let form = LoginForm {
            email: String::new(),
            password: String::new(),
        };

        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(errors.get("email").unwrap(), "Email is required");
        assert_eq!(errors.get("password").unwrap(), "Password is required");
    }

    #[test]
    fn test_register_mismatch_wins_over_blank_confirm() {
        let form: RegisterForm = serde_json::from_value(json!({
            "first_name": "Asha",
            "last_name": "Rao",
            "mobile_number": "9876543210",
            "email": "asha@example.com",
            "password": "secret",
            "confirm_password": ""
        }))
        .unwrap();

        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(
            errors.get("confirm_password").unwrap(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_register_blank_passwords_report_required() {
        let form: RegisterForm = serde_json::from_value(json!({
            "first_name": "Asha",
            "last_name": "Rao",
            "mobile_number": "9876543210",
            "email": "asha@example.com"
        }))
        .unwrap();

        assert_eq!(form.role, "user");
        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(errors.get("password").unwrap(), "Password is required");
        assert_eq!(
            errors.get("confirm_password").unwrap(),
            "Confirm Password is required"
        );
    }

    #[test]
    fn test_recipe_numbers_accept_strings_blanks_and_nulls() {
        let form: RecipeForm = serde_json::from_value(json!({
            "title": "Dal",
            "category": "Dinner",
            "difficulty": "Easy",
            "prep_time_in_minutes": "15",
            "cook_time_in_minutes": "",
            "servings": null,
            "ingredients": ["lentils"],
            "instructions": ["boil"]
        }))
        .unwrap();

        assert_eq!(form.prep_time_in_minutes, 15);
        assert_eq!(form.cook_time_in_minutes, 0);
        assert_eq!(form.servings, 0);

        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(
            errors.get("cook_time_in_minutes").unwrap(),
            "Cook time must be at least 1 minute"
        );
        assert_eq!(errors.get("servings").unwrap(), "Servings must be at least 1");
        assert!(!errors.contains_key("prep_time_in_minutes"));
    }

    #[test]
    fn test_recipe_minimums_are_inclusive() {
        let form: RecipeForm = serde_json::from_value(json!({
            "title": "Toast",
            "category": "Breakfast",
            "difficulty": "Easy",
            "prep_time_in_minutes": 1,
            "cook_time_in_minutes": 1,
            "servings": 1,
            "ingredients": ["bread"],
            "instructions": ["toast"]
        }))
        .unwrap();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_recipe_requires_normalized_entries() {
        let form: RecipeForm = serde_json::from_value(json!({
            "title": "Dal",
            "category": "Dinner",
            "difficulty": "Easy",
            "prep_time_in_minutes": 5,
            "cook_time_in_minutes": 20,
            "servings": 2,
            "ingredients": [" , "],
            "instructions": []
        }))
        .unwrap();

        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(
            errors.get("ingredients").unwrap(),
            "At least one ingredient is required"
        );
        assert_eq!(
            errors.get("instructions").unwrap(),
            "At least one instruction is required"
        );
    }

    #[test]
    fn test_normalize_entries_splits_rows_on_commas() {
        let rows = vec!["egg, flour ,sugar".to_string()];
        assert_eq!(normalize_entries(&rows), vec!["egg", "flour", "sugar"]);

        let rows = vec!["knead".to_string(), String::new(), "rest, bake".to_string()];
        assert_eq!(normalize_entries(&rows), vec!["knead", "rest", "bake"]);
    }

    #[test]
    fn test_recipe_payload_normalizes_and_sets_owner() {
        let form: RecipeForm = serde_json::from_value(json!({
            "title": "Cake",
            "category": "Dessert",
            "difficulty": "Medium",
            "prep_time_in_minutes": 20,
            "cook_time_in_minutes": 40,
            "servings": 8,
            "ingredients": ["egg, flour ,sugar"],
            "instructions": ["mix", "bake"],
            "tags": [""]
        }))
        .unwrap();
        assert!(form.validate().is_ok());

        let payload = form.to_payload("user-42");
        assert_eq!(payload.ingredients, vec!["egg", "flour", "sugar"]);
        assert_eq!(payload.instructions, vec!["mix", "bake"]);
        assert!(payload.tags.is_empty());
        assert_eq!(payload.user_id, "user-42");
    }
}
