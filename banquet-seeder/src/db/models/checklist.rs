//! Prep / Pack List Models
//!
//! Both lists belong to an order and own child checklist items.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Shared checklist lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistStatus {
    Pending,
    InProgress,
    Completed,
}

/// Kitchen prep checklist for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event_order: RecordId,
    pub status: ChecklistStatus,
    pub due_at: i64,
}

/// Prep task (task + quantity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub prep_list: RecordId,
    pub task: String,
    pub quantity: i32,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub done: bool,
}

/// Packing checklist for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event_order: RecordId,
    pub status: ChecklistStatus,
}

/// Pack item (item + quantity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub pack_list: RecordId,
    pub item: String,
    pub quantity: i32,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub packed: bool,
}
