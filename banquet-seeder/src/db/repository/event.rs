//! Event Repository
//!
//! Event 独占其 timeline / guest / photo 子记录: 删除活动时一并删除,
//! 清库时先删子表再删父表。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Event, EventGuest, EventPhoto, TimelineEntry, User, UserRole, Venue,
};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_positive,
    validate_required_text,
};

const EVENT_TABLE: &str = "event";
const TIMELINE_TABLE: &str = "timeline_entry";
const GUEST_TABLE: &str = "event_guest";
const PHOTO_TABLE: &str = "event_photo";

/// Per-event child row counts (used by the integrity checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventChildCounts {
    pub timeline: usize,
    pub guests: usize,
    pub photos: usize,
}

#[derive(Clone)]
pub struct EventRepository {
    base: BaseRepository,
}

impl EventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, event: Event) -> RepoResult<Event> {
        validate_required_text(&event.name, "event name", MAX_NAME_LEN)?;
        validate_optional_text(&event.notes, "notes", MAX_NOTE_LEN)?;
        validate_positive(event.guest_count, "guest_count")?;
        if event.ends_at <= event.starts_at {
            return Err(RepoError::Validation(format!(
                "event '{}' ends before it starts",
                event.name
            )));
        }

        // 客户必须是 CLIENT 角色用户
        let client: Option<User> = self.base.db().select(event.client.clone()).await?;
        let client = client
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", event.client)))?;
        if client.role != UserRole::Client {
            return Err(RepoError::Validation(format!(
                "Event client {} has role {}, expected CLIENT",
                event.client,
                client.role.as_str()
            )));
        }

        let venue: Option<Venue> = self.base.db().select(event.venue.clone()).await?;
        let venue = venue
            .ok_or_else(|| RepoError::NotFound(format!("Venue {} not found", event.venue)))?;
        // Capacity is advisory (not enforced) — surface it, don't fail
        if event.guest_count > venue.capacity {
            tracing::warn!(
                "Event '{}' guest count {} exceeds venue '{}' capacity {}",
                event.name,
                event.guest_count,
                venue.name,
                venue.capacity
            );
        }

        let created: Option<Event> = self.base.db().create(EVENT_TABLE).content(event).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create event".to_string()))
    }

    pub async fn add_timeline_entry(&self, entry: TimelineEntry) -> RepoResult<TimelineEntry> {
        let created: Option<TimelineEntry> = self
            .base
            .db()
            .create(TIMELINE_TABLE)
            .content(entry)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create timeline entry".to_string()))
    }

    pub async fn add_guest(&self, guest: EventGuest) -> RepoResult<EventGuest> {
        validate_required_text(&guest.name, "guest name", MAX_NAME_LEN)?;
        let created: Option<EventGuest> =
            self.base.db().create(GUEST_TABLE).content(guest).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create guest".to_string()))
    }

    pub async fn add_photo(&self, photo: EventPhoto) -> RepoResult<EventPhoto> {
        let created: Option<EventPhoto> =
            self.base.db().create(PHOTO_TABLE).content(photo).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create photo".to_string()))
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Event>> {
        let event: Option<Event> = self.base.db().select(id.clone()).await?;
        Ok(event)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self
            .base
            .db()
            .query("SELECT * FROM event ORDER BY starts_at")
            .await?
            .take(0)?;
        Ok(events)
    }

    /// Child row counts for one event
    pub async fn child_counts(&self, event: &RecordId) -> RepoResult<EventChildCounts> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM timeline_entry WHERE event = $event GROUP ALL")
            .query("SELECT count() AS count FROM event_guest WHERE event = $event GROUP ALL")
            .query("SELECT count() AS count FROM event_photo WHERE event = $event GROUP ALL")
            .bind(("event", event.clone()))
            .await?;

        #[derive(serde::Deserialize)]
        struct CountRow {
            count: i64,
        }
        let timeline: Option<CountRow> = result.take(0)?;
        let guests: Option<CountRow> = result.take(1)?;
        let photos: Option<CountRow> = result.take(2)?;
        Ok(EventChildCounts {
            timeline: timeline.map(|r| r.count as usize).unwrap_or(0),
            guests: guests.map(|r| r.count as usize).unwrap_or(0),
            photos: photos.map(|r| r.count as usize).unwrap_or(0),
        })
    }

    /// Delete one event and everything it owns
    pub async fn delete(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE timeline_entry WHERE event = $event")
            .query("DELETE event_guest WHERE event = $event")
            .query("DELETE event_photo WHERE event = $event")
            .bind(("event", id.clone()))
            .await?
            .check()?;
        let _: Option<Event> = self.base.db().delete(id.clone()).await?;
        Ok(())
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(EVENT_TABLE).await
    }

    pub async fn count_timeline(&self) -> RepoResult<usize> {
        self.base.count_table(TIMELINE_TABLE).await
    }

    pub async fn count_guests(&self) -> RepoResult<usize> {
        self.base.count_table(GUEST_TABLE).await
    }

    pub async fn count_photos(&self) -> RepoResult<usize> {
        self.base.count_table(PHOTO_TABLE).await
    }

    /// Remove events and all owned child rows (children first)
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PHOTO_TABLE).await?;
        self.base.clear_table(GUEST_TABLE).await?;
        self.base.clear_table(TIMELINE_TABLE).await?;
        self.base.clear_table(EVENT_TABLE).await
    }
}
