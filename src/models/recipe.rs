//! Recipe models and the fixed form option lists.

use serde::{Deserialize, Serialize};

/// Recipe as stored by the recipe API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Upstream document ID
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    #[serde(default)]
    pub prep_time_in_minutes: u32,
    #[serde(default)]
    pub cook_time_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    /// Empty when the chef picked no cuisine
    #[serde(default)]
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Owning chef's user ID
    #[serde(default)]
    pub user_id: String,
}

/// Recipe payload sent upstream on create and update (camelCase on the wire).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub prep_time_in_minutes: u32,
    pub cook_time_in_minutes: u32,
    pub servings: u32,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub notes: String,
    pub user_id: String,
}

/// Category options offered by the recipe form.
pub const CATEGORIES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Appetizer",
    "Salad",
    "Main-course",
    "Side-dish",
    "Snacks",
    "Dessert",
    "Others",
];

/// Difficulty options offered by the recipe form.
pub const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];

/// Cuisine options offered by the recipe form (the field itself is optional).
pub const CUISINES: &[&str] = &[
    "Italian",
    "French",
    "American",
    "Thai",
    "Indian",
    "Chinese",
    "Mexican",
    "Japanese",
    "Others",
];

/// Filter options on the manage-recipes toolbar. "All Categories" is passed
/// through upstream like any other value; the API treats it as no filter.
pub const FILTER_CATEGORIES: &[&str] = &[
    "All Categories",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snacks",
    "Dessert",
];
