//! Time Entry Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Staff, TimeEntry, TimeEntryCreate};
use crate::utils::time::worked_hours;

const TIME_ENTRY_TABLE: &str = "time_entry";

#[derive(Clone)]
pub struct TimeEntryRepository {
    base: BaseRepository,
}

impl TimeEntryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a time entry; total_hours is derived here, never supplied
    pub async fn create(&self, data: TimeEntryCreate) -> RepoResult<TimeEntry> {
        if data.clock_out <= data.clock_in {
            return Err(RepoError::Validation(format!(
                "clock_out must be after clock_in ({} <= {})",
                data.clock_out, data.clock_in
            )));
        }
        if data.break_minutes < 0 {
            return Err(RepoError::Validation(format!(
                "break_minutes must be non-negative, got {}",
                data.break_minutes
            )));
        }

        let staff: Option<Staff> = self.base.db().select(data.staff.clone()).await?;
        if staff.is_none() {
            return Err(RepoError::NotFound(format!(
                "Staff {} not found",
                data.staff
            )));
        }

        let total_hours = worked_hours(data.clock_in, data.clock_out, data.break_minutes as i64);
        let entry = TimeEntry {
            id: None,
            staff: data.staff,
            work_date: data.work_date,
            clock_in: data.clock_in,
            clock_out: data.clock_out,
            break_minutes: data.break_minutes,
            total_hours,
            approved: data.approved,
        };
        let created: Option<TimeEntry> = self
            .base
            .db()
            .create(TIME_ENTRY_TABLE)
            .content(entry)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create time entry".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(TIME_ENTRY_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(TIME_ENTRY_TABLE).await
    }
}
