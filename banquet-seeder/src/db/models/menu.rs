//! Menu Models (菜单)
//!
//! MenuItem 与 MenuPackage, 以及两者之间携带数量/必选标记的 join 表。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;
pub type MenuPackageId = RecordId;

/// Menu item category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Appetizer,
    Entree,
    Side,
    Dessert,
    Beverage,
}

/// Menu item
///
/// Dietary flags are independent booleans — a dish can be vegan AND
/// gluten-free; no flag implies another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: MenuCategory,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegetarian: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegan: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_gluten_free: bool,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Menu package, priced per person, valid for [min_guests, max_guests]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPackage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuPackageId>,
    pub name: String,
    pub description: Option<String>,
    pub price_per_person: f64,
    pub min_guests: i32,
    pub max_guests: i32,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

impl MenuPackage {
    /// 访客数是否落在套餐区间内
    pub fn accepts_guest_count(&self, guest_count: i32) -> bool {
        guest_count >= self.min_guests && guest_count <= self.max_guests
    }
}

/// Join row: package ↔ menu item, with quantity and required/optional flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub package: RecordId,
    pub menu_item: RecordId,
    pub quantity: i32,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_range_is_inclusive() {
        let pkg = MenuPackage {
            id: None,
            name: "Test".into(),
            description: None,
            price_per_person: 10.0,
            min_guests: 20,
            max_guests: 80,
            is_active: true,
        };
        assert!(pkg.accepts_guest_count(20));
        assert!(pkg.accepts_guest_count(80));
        assert!(!pkg.accepts_guest_count(19));
        assert!(!pkg.accepts_guest_count(81));
    }
}
