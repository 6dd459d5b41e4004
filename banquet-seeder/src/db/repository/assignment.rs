//! Staff Assignment Repository
//!
//! 排班窗口必须包住活动起止: 到场 <= 开场, 离场 >= 散场。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Event, Staff, StaffAssignment};
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

const ASSIGNMENT_TABLE: &str = "staff_assignment";

#[derive(Clone)]
pub struct AssignmentRepository {
    base: BaseRepository,
}

impl AssignmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, assignment: StaffAssignment) -> RepoResult<StaffAssignment> {
        validate_required_text(&assignment.role, "assignment role", MAX_SHORT_TEXT_LEN)?;

        let staff: Option<Staff> = self.base.db().select(assignment.staff.clone()).await?;
        if staff.is_none() {
            return Err(RepoError::NotFound(format!(
                "Staff {} not found",
                assignment.staff
            )));
        }

        let event: Option<Event> = self.base.db().select(assignment.event.clone()).await?;
        let event = event.ok_or_else(|| {
            RepoError::NotFound(format!("Event {} not found", assignment.event))
        })?;

        if assignment.starts_at > event.starts_at || assignment.ends_at < event.ends_at {
            return Err(RepoError::Validation(format!(
                "Assignment window [{}, {}] does not bracket event '{}' [{}, {}]",
                assignment.starts_at,
                assignment.ends_at,
                event.name,
                event.starts_at,
                event.ends_at
            )));
        }

        let created: Option<StaffAssignment> = self
            .base
            .db()
            .create(ASSIGNMENT_TABLE)
            .content(assignment)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create assignment".to_string()))
    }

    /// Number of assignments attached to one event
    pub async fn count_for_event(&self, event: &RecordId) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM staff_assignment WHERE event = $event GROUP ALL")
            .bind(("event", event.clone()))
            .await?;

        #[derive(serde::Deserialize)]
        struct CountRow {
            count: i64,
        }
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.count as usize).unwrap_or(0))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(ASSIGNMENT_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(ASSIGNMENT_TABLE).await
    }
}
