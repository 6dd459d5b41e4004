//! Equipment and Vehicle Repositories

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Equipment, Vehicle};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_positive, validate_required_text,
};

const EQUIPMENT_TABLE: &str = "equipment";
const VEHICLE_TABLE: &str = "vehicle";

#[derive(Clone)]
pub struct EquipmentRepository {
    base: BaseRepository,
}

impl EquipmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, equipment: Equipment) -> RepoResult<Equipment> {
        validate_required_text(&equipment.name, "equipment name", MAX_NAME_LEN)?;
        validate_positive(equipment.quantity, "quantity")?;

        let created: Option<Equipment> = self
            .base
            .db()
            .create(EQUIPMENT_TABLE)
            .content(equipment)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create equipment".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(EQUIPMENT_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(EQUIPMENT_TABLE).await
    }
}

#[derive(Clone)]
pub struct VehicleRepository {
    base: BaseRepository,
}

impl VehicleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, vehicle: Vehicle) -> RepoResult<Vehicle> {
        validate_required_text(&vehicle.name, "vehicle name", MAX_NAME_LEN)?;
        validate_required_text(&vehicle.plate, "plate", MAX_SHORT_TEXT_LEN)?;

        let created: Option<Vehicle> = self
            .base
            .db()
            .create(VEHICLE_TABLE)
            .content(vehicle)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create vehicle".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Vehicle>> {
        let vehicles: Vec<Vehicle> = self
            .base
            .db()
            .query("SELECT * FROM vehicle ORDER BY name")
            .await?
            .take(0)?;
        Ok(vehicles)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(VEHICLE_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(VEHICLE_TABLE).await
    }
}
