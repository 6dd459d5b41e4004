//! User Repository

use serde_json::json;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate, UserRole};
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_required_text};

const USER_TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY email")
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Find user by email (unique natural key)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find all users with the given role
    pub async fn find_by_role(&self, role: UserRole) -> RepoResult<Vec<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE role = $role ORDER BY email")
            .bind(("role", role))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users)
    }

    /// Create-or-update keyed by email; the seed password is hashed on
    /// every run so credential rotation in the fixture takes effect.
    pub async fn upsert(&self, data: UserCreate) -> RepoResult<User> {
        validate_email(&data.email)?;
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

        if let Some(existing) = self.find_by_email(&data.email).await? {
            let id = existing
                .id
                .ok_or_else(|| RepoError::Database("User row without id".to_string()))?;
            let updated: Option<User> = self
                .base
                .db()
                .update(id)
                .merge(json!({
                    "name": data.name,
                    "hash_pass": hash_pass,
                    "role": data.role,
                    "phone": data.phone,
                    "is_active": true,
                }))
                .await?;
            return updated
                .ok_or_else(|| RepoError::Database("Failed to update user".to_string()));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    email = $email,
                    name = $name,
                    hash_pass = $hash_pass,
                    role = $role,
                    phone = $phone,
                    is_active = true
                RETURN AFTER"#,
            )
            .bind(("email", data.email))
            .bind(("name", data.name))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("phone", data.phone))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(USER_TABLE).await
    }
}
