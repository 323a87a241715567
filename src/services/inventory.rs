// SPDX-License-Identifier: MIT

//! Per-visitor inventory boards.
//!
//! In-memory state for the raw-material entry page, keyed by the visitor
//! cookie. Boards live for the life of the process; there is no persistence
//! and no cross-visitor sharing.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One submitted entry, as posted by the shell.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryEntry {
    #[serde(default)]
    pub material_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub cost_per_unit: String,
}

impl InventoryEntry {
    /// All five fields present after trimming.
    pub fn is_complete(&self) -> bool {
        [
            &self.material_name,
            &self.category,
            &self.quantity,
            &self.supplier_name,
            &self.cost_per_unit,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// One stored row, exactly as the table renders it.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InventoryRow {
    pub material_name: String,
    pub category: String,
    pub quantity: String,
    pub supplier_name: String,
    /// Rendered cost, `RS {cost_per_unit}.00`
    pub cost: String,
}

/// A visitor's table plus the two running summaries.
#[derive(Debug, Clone)]
pub struct InventoryBoard {
    pub rows: Vec<InventoryRow>,
    pub total_products: u32,
    /// Recorded maximum cost, compared and stored as text
    pub most_expensive_cost: String,
    /// Material recorded alongside the maximum
    pub most_expensive_name: String,
}

impl Default for InventoryBoard {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_products: 0,
            most_expensive_cost: "0.00".to_string(),
            most_expensive_name: String::new(),
        }
    }
}

impl InventoryBoard {
    fn push(&mut self, entry: &InventoryEntry) {
        let cost_per_unit = entry.cost_per_unit.trim();

        self.rows.push(InventoryRow {
            material_name: entry.material_name.trim().to_string(),
            category: entry.category.trim().to_string(),
            quantity: entry.quantity.trim().to_string(),
            supplier_name: entry.supplier_name.trim().to_string(),
            cost: format!("RS {cost_per_unit}.00"),
        });
        self.total_products += 1;

        // Costs compare as text: "10" sorts below "9".
        if self.most_expensive_cost.as_str() <= cost_per_unit {
            self.most_expensive_cost = format!("{cost_per_unit}.00");
            self.most_expensive_name = entry.material_name.trim().to_string();
        }
    }

    /// Summary line rendered under the table.
    pub fn most_expensive_display(&self) -> String {
        format!(
            "{} (RS {})",
            self.most_expensive_name, self.most_expensive_cost
        )
    }
}

/// All visitors' boards.
pub struct InventoryStore {
    boards: DashMap<String, InventoryBoard>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            boards: DashMap::new(),
        }
    }

    /// Current board for a visitor; a fresh empty board when none exists.
    pub fn board(&self, visitor: &str) -> InventoryBoard {
        self.boards
            .get(visitor)
            .map(|board| board.clone())
            .unwrap_or_default()
    }

    /// Append a complete entry to the visitor's board and return the
    /// refreshed board. Callers reject incomplete entries first; see
    /// [`InventoryEntry::is_complete`].
    pub fn add(&self, visitor: &str, entry: &InventoryEntry) -> InventoryBoard {
        let mut board = self.boards.entry(visitor.to_string()).or_default();
        board.push(entry);
        board.clone()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
