//! Cost Estimate Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CostEstimate, Event};
use crate::utils::money;

const COST_ESTIMATE_TABLE: &str = "cost_estimate";

#[derive(Clone)]
pub struct CostEstimateRepository {
    base: BaseRepository,
}

impl CostEstimateRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an estimate; the stored total is recomputed from the
    /// breakdown components regardless of what the caller passed.
    pub async fn create(&self, mut estimate: CostEstimate) -> RepoResult<CostEstimate> {
        for (value, field) in [
            (estimate.food_cost, "food_cost"),
            (estimate.labor_cost, "labor_cost"),
            (estimate.equipment_cost, "equipment_cost"),
            (estimate.overhead, "overhead"),
            (estimate.profit_margin, "profit_margin"),
            (estimate.tax, "tax"),
        ] {
            money::validate_amount(value, field)?;
        }

        let event: Option<Event> = self.base.db().select(estimate.event.clone()).await?;
        if event.is_none() {
            return Err(RepoError::NotFound(format!(
                "Event {} not found",
                estimate.event
            )));
        }

        estimate.total = money::sum([
            estimate.food_cost,
            estimate.labor_cost,
            estimate.equipment_cost,
            estimate.overhead,
            estimate.profit_margin,
            estimate.tax,
        ]);

        let created: Option<CostEstimate> = self
            .base
            .db()
            .create(COST_ESTIMATE_TABLE)
            .content(estimate)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cost estimate".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(COST_ESTIMATE_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(COST_ESTIMATE_TABLE).await
    }
}
