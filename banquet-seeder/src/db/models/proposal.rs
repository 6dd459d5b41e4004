//! Proposal Models (报价方案)
//!
//! 状态机: DRAFT → SENT → VIEWED → {ACCEPTED | REJECTED}。
//! ACCEPTED 必须携带 signed_by / signed_at, 其他状态两者必须为空
//! (repository 层强制)。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ProposalId = RecordId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Viewed,
    Accepted,
    Rejected,
}

/// Proposal for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProposalId>,
    pub event: RecordId,
    /// 客户姓名快照 (经由 event.client 解析)
    pub client_name: String,
    pub status: ProposalStatus,
    pub valid_until: i64,
    pub sent_at: Option<i64>,
    /// Menu subtotal + line item sum, computed on create
    pub total: f64,
    pub signed_by: Option<String>,
    pub signed_at: Option<i64>,
}

/// Selected package snapshot owned by a proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalMenu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub proposal: RecordId,
    pub package: RecordId,
    pub package_name: String,
    /// Price-per-person snapshot at proposal time
    pub price_per_person: f64,
}

/// Proposal line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub proposal: RecordId,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Create payload
#[derive(Debug, Clone)]
pub struct ProposalCreate {
    pub event: RecordId,
    pub package: RecordId,
    pub status: ProposalStatus,
    pub valid_until: i64,
    pub sent_at: Option<i64>,
    pub signed_by: Option<String>,
    pub signed_at: Option<i64>,
    /// (description, quantity, unit_price)
    pub line_items: Vec<(String, i32, f64)>,
}
