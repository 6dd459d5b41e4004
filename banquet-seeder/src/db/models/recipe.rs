//! Recipe Models (配方)
//!
//! Recipe → Ingredient 的 join 表是一条 bill-of-materials 边,
//! 携带数量与单位。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type IngredientId = RecordId;
pub type RecipeId = RecordId;

/// Ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IngredientId>,
    pub name: String,
    /// Purchasing unit: "kg", "l", "dozen", ...
    pub unit: String,
    pub cost_per_unit: f64,
    /// Preferred supplier, if any
    #[serde(default)]
    pub supplier: Option<RecordId>,
}

/// Recipe for a menu item
///
/// Multiple recipes may reference the same menu item (e.g. a standard and
/// a large-batch variant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub menu_item: RecordId,
    pub name: String,
    pub yield_servings: i32,
    pub prep_minutes: i32,
    pub instructions: Option<String>,
}

/// BOM edge: recipe ↔ ingredient with quantity/unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub recipe: RecordId,
    pub ingredient: RecordId,
    pub quantity: f64,
    pub unit: String,
}
