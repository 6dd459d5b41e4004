//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// Account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Manager,
    Client,
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::Client => "CLIENT",
            UserRole::Staff => "STAFF",
        }
    }
}

/// User account — root of all ownership edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// 唯一邮箱 (upsert 自然键)
    pub email: String,
    pub name: String,
    /// argon2 哈希, 永不序列化输出
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: UserRole,
    pub phone: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create/upsert user payload (plaintext password, hashed on the write path)
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&UserRole::Staff).unwrap(),
            "\"STAFF\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"ADMIN\"").unwrap(),
            UserRole::Admin
        );
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = User::hash_password("banquet-demo").unwrap();
        let user = User {
            id: None,
            email: "a@b.example".into(),
            name: "A".into(),
            hash_pass: hash,
            role: UserRole::Client,
            phone: None,
            is_active: true,
        };
        assert!(user.verify_password("banquet-demo").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
