//! Shared test scaffolding: one embedded database per test

use banquet_seeder::{Config, DbService};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tempfile::TempDir;

/// Open a fresh embedded database in a tempdir. The TempDir must be kept
/// alive for the duration of the test.
pub async fn test_db() -> (TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    (tmp, service.handle())
}

/// Config pointing nowhere in particular, with a fixed test password
pub fn test_config() -> Config {
    Config {
        data_dir: String::new(),
        seed_password: "test-pass-123".to_string(),
        log_level: "info".to_string(),
        log_dir: None,
    }
}
