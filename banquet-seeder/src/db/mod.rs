//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema application.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Schema statements applied on every startup (idempotent)
const SCHEMA: &str = include_str!("schema.surql");

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `data_dir` and apply
    /// the schema.
    pub async fn new(data_dir: &Path) -> Result<Self, AppError> {
        let db_path = data_dir.join("banquet.db");
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns("banquet")
            .use_db("catering")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database opened at {}", db_path.display());

        Self::apply_schema(&db).await?;

        Ok(Self { db })
    }

    /// Apply table and index definitions (IF NOT EXISTS, safe to re-run)
    async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Schema statement failed: {e}")))?;
        tracing::info!("Schema applied");
        Ok(())
    }

    pub fn handle(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
