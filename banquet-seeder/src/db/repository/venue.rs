//! Venue Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Venue;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_positive, validate_required_text,
};
use crate::utils::money::validate_amount;

const VENUE_TABLE: &str = "venue";

#[derive(Clone)]
pub struct VenueRepository {
    base: BaseRepository,
}

impl VenueRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, venue: Venue) -> RepoResult<Venue> {
        validate_required_text(&venue.name, "venue name", MAX_NAME_LEN)?;
        validate_required_text(&venue.address, "venue address", MAX_ADDRESS_LEN)?;
        validate_positive(venue.capacity, "capacity")?;
        validate_amount(venue.rental_fee, "rental_fee")?;

        let created: Option<Venue> = self.base.db().create(VENUE_TABLE).content(venue).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create venue".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Venue>> {
        let venues: Vec<Venue> = self
            .base
            .db()
            .query("SELECT * FROM venue ORDER BY name")
            .await?
            .take(0)?;
        Ok(venues)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(VENUE_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(VENUE_TABLE).await
    }
}
