//! Time Entry Model (工时)

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Clock-in/out record for a staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub staff: RecordId,
    /// Work date (YYYY-MM-DD)
    pub work_date: String,
    pub clock_in: i64,
    pub clock_out: i64,
    pub break_minutes: i32,
    /// Derived: (clock_out - clock_in - breaks), in hours, 2 dp
    pub total_hours: f64,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub approved: bool,
}

/// Create payload; total_hours derived on the write path
#[derive(Debug, Clone)]
pub struct TimeEntryCreate {
    pub staff: RecordId,
    pub work_date: String,
    pub clock_in: i64,
    pub clock_out: i64,
    pub break_minutes: i32,
    pub approved: bool,
}
