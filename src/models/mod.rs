// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod recipe;
pub mod user;

pub use recipe::{Recipe, RecipePayload, CATEGORIES, CUISINES, DIFFICULTIES, FILTER_CATEGORIES};
pub use user::{NewUser, UserProfile};
