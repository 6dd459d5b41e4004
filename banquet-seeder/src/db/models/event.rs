//! Event Models (活动)
//!
//! Event 属于一个 client 用户和一个 venue, 独占拥有 timeline、guests、
//! photos 三类子记录 (随父级删除级联)。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type EventId = RecordId;

/// Event status lifecycle
///
/// INQUIRY → PROPOSAL_SENT → CONFIRMED; CANCELLED / COMPLETED are part of
/// the schema but not exercised by the sample data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Inquiry,
    ProposalSent,
    Confirmed,
    Cancelled,
    Completed,
}

/// Catered event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub name: String,
    /// 客户 (CLIENT 角色用户)
    pub client: RecordId,
    pub venue: RecordId,
    pub status: EventStatus,
    pub event_type: String,
    pub guest_count: i32,
    pub starts_at: i64,
    pub ends_at: i64,
    pub notes: Option<String>,
}

/// Timeline entry owned by an event (load-in, service, teardown, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event: RecordId,
    pub activity: String,
    pub scheduled_at: i64,
    pub duration_minutes: i32,
    pub sort_order: i32,
}

/// Named guest on an event's list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventGuest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event: RecordId,
    pub name: String,
    pub dietary_note: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub rsvp_confirmed: bool,
    pub table_number: Option<i32>,
}

/// Photo attached to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPhoto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event: RecordId,
    pub path: String,
    pub caption: Option<String>,
    pub sort_order: i32,
}
