//! Staff Assignment Model
//!
//! 排班窗口必须包住活动本身的起止时间 (到场早于开场, 离场晚于散场),
//! repository 创建时校验。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Staff ↔ event assignment with a role and a time window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub staff: RecordId,
    pub event: RecordId,
    /// Working role for this event: "CHEF", "SERVER", "SETUP", ...
    pub role: String,
    pub starts_at: i64,
    pub ends_at: i64,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub confirmed: bool,
}
