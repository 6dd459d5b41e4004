//! Delivery Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Delivery, Event, Vehicle};

const DELIVERY_TABLE: &str = "delivery";

#[derive(Clone)]
pub struct DeliveryRepository {
    base: BaseRepository,
}

impl DeliveryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, delivery: Delivery) -> RepoResult<Delivery> {
        let event: Option<Event> = self.base.db().select(delivery.event.clone()).await?;
        if event.is_none() {
            return Err(RepoError::NotFound(format!(
                "Event {} not found",
                delivery.event
            )));
        }
        let vehicle: Option<Vehicle> = self.base.db().select(delivery.vehicle.clone()).await?;
        if vehicle.is_none() {
            return Err(RepoError::NotFound(format!(
                "Vehicle {} not found",
                delivery.vehicle
            )));
        }

        let created: Option<Delivery> = self
            .base
            .db()
            .create(DELIVERY_TABLE)
            .content(delivery)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create delivery".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(DELIVERY_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(DELIVERY_TABLE).await
    }
}
