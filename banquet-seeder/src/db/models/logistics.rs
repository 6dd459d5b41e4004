//! Equipment and Vehicle Models

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type EquipmentId = RecordId;
pub type VehicleId = RecordId;

/// Owned equipment inventory (chafing dishes, tables, linens, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EquipmentId>,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Delivery vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VehicleId>,
    pub name: String,
    pub plate: String,
    pub vehicle_type: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub refrigerated: bool,
}
