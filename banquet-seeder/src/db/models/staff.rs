//! Staff Model
//!
//! Exactly one staff profile per STAFF-role user (enforced by the
//! repository and a unique index on the `user` link).

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type StaffId = RecordId;

/// Staff profile, one-to-one with a STAFF-role user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StaffId>,
    /// 关联用户 (唯一)
    pub user: RecordId,
    pub position: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Weekday availability, e.g. ["MON", "TUE", "SAT"]
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create/upsert staff payload
#[derive(Debug, Clone)]
pub struct StaffCreate {
    pub user: RecordId,
    pub position: String,
    pub hourly_rate: f64,
    pub skills: Vec<String>,
    pub availability: Vec<String>,
}
