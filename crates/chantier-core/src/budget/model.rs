use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChantierError, Result};

/// A budget line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Free text entered by the user or imported from a submission
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl BudgetItem {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            quantity: String::new(),
            unit: String::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self.unit = unit.into();
        self
    }
}

/// A budget category, identified by its canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, items: Vec<BudgetItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Sum of item costs
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }
}

/// Sum of item costs across all categories
pub fn total_cost(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(BudgetCategory::total).sum()
}

/// Read a budget (JSON array of categories)
pub fn load_budget(path: &Path) -> Result<Vec<BudgetCategory>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ChantierError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a budget as pretty-printed JSON
pub fn save_budget(path: &Path, categories: &[BudgetCategory]) -> Result<()> {
    let content = serde_json::to_string_pretty(categories)?;
    fs::write(path, content)?;
    Ok(())
}
