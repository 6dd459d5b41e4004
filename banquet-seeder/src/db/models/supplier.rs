//! Supplier and Purchase Order Models

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type SupplierId = RecordId;
pub type PurchaseOrderId = RecordId;

/// Supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SupplierId>,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Purchase order lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    Draft,
    Sent,
    Confirmed,
    Received,
    Cancelled,
}

/// Purchase order against a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PurchaseOrderId>,
    pub supplier: RecordId,
    pub po_number: String,
    pub status: PurchaseOrderStatus,
    pub ordered_at: i64,
    pub expected_at: Option<i64>,
    /// Sum of item line totals, computed on the create path
    #[serde(default)]
    pub total: f64,
}

/// Create payload: total computed from the items on the write path
#[derive(Debug, Clone)]
pub struct PurchaseOrderCreate {
    pub supplier: RecordId,
    pub po_number: String,
    pub status: PurchaseOrderStatus,
    pub ordered_at: i64,
    pub expected_at: Option<i64>,
    /// (description, quantity, unit, unit_cost)
    pub items: Vec<(String, f64, String, f64)>,
}

/// Purchase order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub purchase_order: RecordId,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    pub line_total: f64,
}
