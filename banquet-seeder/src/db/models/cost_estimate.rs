//! Cost Estimate Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostEstimateStatus {
    Draft,
    Final,
    ConvertedToProposal,
    Archived,
}

/// Internal pricing breakdown for an event, optionally tied to a package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub event: RecordId,
    #[serde(default)]
    pub package: Option<RecordId>,
    pub food_cost: f64,
    pub labor_cost: f64,
    pub equipment_cost: f64,
    pub overhead: f64,
    pub profit_margin: f64,
    pub tax: f64,
    /// Sum of all components, computed on create
    pub total: f64,
    pub status: CostEstimateStatus,
}
