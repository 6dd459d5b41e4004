//! Venue Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type VenueId = RecordId;

/// Venue — standalone catalog entity
///
/// `capacity` is an advisory upper bound for events held here; the sample
/// data respects it but the schema does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VenueId>,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub rental_fee: f64,
}
