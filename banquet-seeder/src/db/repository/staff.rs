//! Staff Repository
//!
//! 每个 STAFF 角色用户恰好一份档案; `user` 链接唯一索引兜底。

use serde_json::json;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Staff, StaffCreate, User, UserRole};
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::money::validate_amount;

const STAFF_TABLE: &str = "staff";

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Staff>> {
        let staff: Vec<Staff> = self
            .base
            .db()
            .query("SELECT * FROM staff ORDER BY position")
            .await?
            .take(0)?;
        Ok(staff)
    }

    /// Find the profile belonging to a user, if any
    pub async fn find_by_user(&self, user: &RecordId) -> RepoResult<Option<Staff>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE user = $user LIMIT 1")
            .bind(("user", user.clone()))
            .await?;
        let staff: Vec<Staff> = result.take(0)?;
        Ok(staff.into_iter().next())
    }

    /// Create-or-update keyed by the user link (one-to-one invariant)
    pub async fn upsert(&self, data: StaffCreate) -> RepoResult<Staff> {
        validate_required_text(&data.position, "position", MAX_SHORT_TEXT_LEN)?;
        validate_amount(data.hourly_rate, "hourly_rate")?;

        // 档案只允许挂在 STAFF 角色用户上
        let user: Option<User> = self.base.db().select(data.user.clone()).await?;
        let user = user
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", data.user)))?;
        if user.role != UserRole::Staff {
            return Err(RepoError::Validation(format!(
                "User {} has role {}, staff profile requires STAFF",
                data.user,
                user.role.as_str()
            )));
        }

        if let Some(existing) = self.find_by_user(&data.user).await? {
            let id = existing
                .id
                .ok_or_else(|| RepoError::Database("Staff row without id".to_string()))?;
            let updated: Option<Staff> = self
                .base
                .db()
                .update(id)
                .merge(json!({
                    "position": data.position,
                    "hourly_rate": data.hourly_rate,
                    "skills": data.skills,
                    "availability": data.availability,
                    "is_active": true,
                }))
                .await?;
            return updated
                .ok_or_else(|| RepoError::Database("Failed to update staff".to_string()));
        }

        let staff = Staff {
            id: None,
            user: data.user,
            position: data.position,
            hourly_rate: data.hourly_rate,
            skills: data.skills,
            availability: data.availability,
            is_active: true,
        };
        let created: Option<Staff> = self.base.db().create(STAFF_TABLE).content(staff).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(STAFF_TABLE).await
    }
}
