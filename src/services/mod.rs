// SPDX-License-Identifier: MIT

//! Services module - the upstream client and in-memory state.

pub mod inventory;
pub mod recipe_api;

pub use inventory::{InventoryBoard, InventoryEntry, InventoryRow, InventoryStore};
pub use recipe_api::{LoginOutcome, RecipeApi};
