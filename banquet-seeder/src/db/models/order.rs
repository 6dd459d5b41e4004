//! Order Models (订单)
//!
//! 表名用 `event_order` — `order` 在 SurrealQL 里与 ORDER BY 冲突。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Order fulfillment lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InPrep,
    Ready,
    Delivered,
    Completed,
}

/// Catering order: event + package + line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub event: RecordId,
    pub client: RecordId,
    pub package: RecordId,
    pub status: OrderStatus,
    pub guest_count: i32,
    /// 套餐单价快照 (下单时)
    pub price_per_person: f64,
    /// package price * guests, computed on create
    pub package_subtotal: f64,
    /// package_subtotal + extra line items, computed on create
    pub total: f64,
    pub placed_at: i64,
    pub notes: Option<String>,
}

/// Extra line item on an order (beyond the package)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event_order: RecordId,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Create payload: items carried separately so totals are computed once.
/// The client link is derived from the event on the write path.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub event: RecordId,
    pub package: RecordId,
    pub status: OrderStatus,
    pub placed_at: i64,
    pub notes: Option<String>,
    /// (name, quantity, unit_price)
    pub items: Vec<(String, i32, f64)>,
}
