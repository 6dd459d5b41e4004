//! Delivery Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Delivery lifecycle: SCHEDULED → LOADING → IN_TRANSIT → ARRIVED → SETUP_COMPLETE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Scheduled,
    Loading,
    InTransit,
    Arrived,
    SetupComplete,
}

/// Delivery run for an event, assigned to a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event: RecordId,
    pub vehicle: RecordId,
    pub status: DeliveryStatus,
    pub scheduled_at: i64,
    pub driver_name: Option<String>,
    pub notes: Option<String>,
}
