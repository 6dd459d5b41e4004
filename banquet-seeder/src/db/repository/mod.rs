//! Repository Module
//!
//! CRUD + invariant enforcement for every table in the catering schema.
//! Repositories receive the database handle explicitly — there is no
//! module-level client.

// Identity
pub mod staff;
pub mod user;

// Catalog
pub mod logistics;
pub mod menu;
pub mod recipe;
pub mod supplier;
pub mod venue;

// Engagement
pub mod event;

// Commerce
pub mod cost_estimate;
pub mod invoice;
pub mod order;
pub mod proposal;

// Operations
pub mod assignment;
pub mod delivery;
pub mod time_entry;

// Re-exports
pub use assignment::AssignmentRepository;
pub use cost_estimate::CostEstimateRepository;
pub use delivery::DeliveryRepository;
pub use event::{EventChildCounts, EventRepository};
pub use invoice::InvoiceRepository;
pub use logistics::{EquipmentRepository, VehicleRepository};
pub use menu::{MenuItemRepository, MenuPackageRepository};
pub use order::OrderRepository;
pub use proposal::ProposalRepository;
pub use recipe::{IngredientRepository, RecipeRepository};
pub use staff::StaffRepository;
pub use supplier::{PurchaseOrderRepository, SupplierRepository};
pub use time_entry::TimeEntryRepository;
pub use user::UserRepository;
pub use venue::VenueRepository;

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Validation helpers in `utils` speak AppError; repositories fold that
/// into their own error space.
impl From<AppError> for RepoError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => RepoError::Validation(msg),
            AppError::NotFound(msg) => RepoError::NotFound(msg),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Row count for a table
    pub async fn count_table(&self, table: &str) -> RepoResult<usize> {
        let mut result = self
            .db
            .query(format!("SELECT count() AS count FROM {table} GROUP ALL"))
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.count as usize).unwrap_or(0))
    }

    /// Delete every row in a table
    pub async fn clear_table(&self, table: &str) -> RepoResult<()> {
        self.db.query(format!("DELETE {table}")).await?.check()?;
        Ok(())
    }
}
