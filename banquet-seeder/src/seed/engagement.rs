//! Engagement phase: events with their fixed fan-out of child records
//!
//! 每场活动: 20 条时间线 (活动模板长度), 18 位来宾, 16 张照片,
//! 15 条排班。子记录属性用 `idx % N` 在模板数组上轮转。

use super::catalog::SeededCatalog;
use super::{
    ASSIGNMENTS_PER_EVENT, GUESTS_PER_EVENT, PHOTOS_PER_EVENT, TIMELINE_PER_EVENT, record_id,
};
use crate::db::models::{
    Event, EventGuest, EventPhoto, EventStatus, StaffAssignment, TimelineEntry, User,
};
use crate::db::repository::{AssignmentRepository, EventRepository, StaffRepository};
use crate::utils::time::anchor_offset_millis;
use crate::utils::{AppError, AppResult};

/// (name, type, client email, venue idx, status, guests, day offset,
/// start hour, end hour)
const EVENTS: &[(&str, &str, &str, usize, EventStatus, i32, i64, u32, u32)] = &[
    (
        "Martin-Silva Wedding Reception",
        "WEDDING",
        "sofia.martin@client.example",
        0,
        EventStatus::Confirmed,
        120,
        14,
        17,
        23,
    ),
    (
        "Chen Industries Product Launch",
        "CORPORATE",
        "derek.chen@client.example",
        1,
        EventStatus::Confirmed,
        85,
        21,
        18,
        22,
    ),
    (
        "Osei Family Reunion",
        "PRIVATE",
        "amara.osei@client.example",
        2,
        EventStatus::Confirmed,
        60,
        30,
        12,
        17,
    ),
    (
        "Harborlight Charity Gala",
        "GALA",
        "sofia.martin@client.example",
        3,
        EventStatus::Inquiry,
        150,
        45,
        18,
        23,
    ),
    (
        "Chen Board Retreat Dinner",
        "CORPORATE",
        "derek.chen@client.example",
        0,
        EventStatus::ProposalSent,
        40,
        28,
        19,
        22,
    ),
];

/// Activity template — its length fixes the timeline fan-out.
/// (minutes from event start, activity, duration minutes)
const ACTIVITY_TEMPLATE: [(i64, &str, i32); TIMELINE_PER_EVENT] = [
    (-300, "Vendor load-in", 60),
    (-240, "Kitchen setup", 60),
    (-240, "Equipment unload", 45),
    (-180, "Table and linen setup", 60),
    (-150, "Floral placement", 45),
    (-120, "AV check", 30),
    (-120, "Bar stocking", 45),
    (-90, "Staff briefing", 30),
    (-60, "Final plating prep", 60),
    (-30, "Doors open", 30),
    (0, "Welcome drinks", 45),
    (45, "Appetizer service", 45),
    (90, "Dinner service", 75),
    (165, "Toasts and speeches", 30),
    (195, "Dessert service", 45),
    (240, "Coffee and tea service", 30),
    (270, "Last call", 30),
    (300, "Guest departure", 30),
    (330, "Breakdown and pack-out", 60),
    (390, "Final venue sweep", 30),
];

const GUEST_FIRST_NAMES: [&str; GUESTS_PER_EVENT] = [
    "Olivia", "Noah", "Ava", "Liam", "Maya", "Ethan", "Zoe", "Caleb", "Isla", "Rohan", "Nina",
    "Felix", "Grace", "Omar", "Lily", "Hugo", "Ruth", "Ivan",
];

const GUEST_LAST_NAMES: &[&str] = &[
    "Anderson", "Brooks", "Castillo", "Dubois", "Eriksen", "Fontaine",
];

const DIETARY_NOTES: &[Option<&str>] = &[
    None,
    Some("Vegetarian"),
    None,
    Some("Gluten-free"),
    None,
    Some("Vegan"),
    None,
    Some("Nut allergy"),
    None,
];

const PHOTO_CAPTIONS: &[&str] = &[
    "Venue walkthrough",
    "Table setting mockup",
    "Menu tasting",
    "Client mood board",
];

const ASSIGNMENT_ROLES: [&str; ASSIGNMENTS_PER_EVENT] = [
    "EVENT_LEAD",
    "CHEF",
    "SOUS_CHEF",
    "SERVER",
    "SERVER",
    "SERVER",
    "BARTENDER",
    "SETUP",
    "SETUP",
    "DRIVER",
    "SERVER",
    "RUNNER",
    "CARVER",
    "EXPEDITER",
    "BREAKDOWN",
];

pub(super) async fn seed(
    events: &EventRepository,
    assignments: &AssignmentRepository,
    staff_repo: &StaffRepository,
    clients: &[User],
    catalog: &SeededCatalog,
) -> AppResult<Vec<Event>> {
    if clients.is_empty() {
        return Err(AppError::validation("no client users to attach events to"));
    }
    let staff = staff_repo.find_all().await?;
    if staff.is_empty() {
        return Err(AppError::validation("no staff to assign to events"));
    }

    let mut out = Vec::with_capacity(EVENTS.len());
    for (idx, (name, event_type, client_email, venue_idx, status, guests, day, start_h, end_h)) in
        EVENTS.iter().enumerate()
    {
        let client_user = clients
            .iter()
            .find(|c| c.email == *client_email)
            .ok_or_else(|| AppError::not_found(format!("client user {client_email} missing")))?;
        let client = record_id(&client_user.id, "client user")?;
        let venue = record_id(&catalog.venues[venue_idx % catalog.venues.len()].id, "venue")?;

        let event = events
            .create(Event {
                id: None,
                name: (*name).to_string(),
                client,
                venue,
                status: *status,
                event_type: (*event_type).to_string(),
                guest_count: *guests,
                starts_at: anchor_offset_millis(*day, *start_h, 0),
                ends_at: anchor_offset_millis(*day, *end_h, 0),
                notes: None,
            })
            .await?;
        let event_id = record_id(&event.id, "event")?;

        seed_timeline(events, &event, &event_id).await?;
        seed_guests(events, &event_id).await?;
        seed_photos(events, idx, &event_id).await?;
        seed_assignments(assignments, &staff, &event, &event_id).await?;

        out.push(event);
    }

    Ok(out)
}

async fn seed_timeline(
    repo: &EventRepository,
    event: &Event,
    event_id: &surrealdb::RecordId,
) -> AppResult<()> {
    for (idx, (offset_min, activity, duration)) in ACTIVITY_TEMPLATE.iter().enumerate() {
        repo.add_timeline_entry(TimelineEntry {
            id: None,
            event: event_id.clone(),
            activity: (*activity).to_string(),
            scheduled_at: event.starts_at + offset_min * 60_000,
            duration_minutes: *duration,
            sort_order: idx as i32,
        })
        .await?;
    }
    Ok(())
}

async fn seed_guests(repo: &EventRepository, event_id: &surrealdb::RecordId) -> AppResult<()> {
    for idx in 0..GUESTS_PER_EVENT {
        let name = format!(
            "{} {}",
            GUEST_FIRST_NAMES[idx],
            GUEST_LAST_NAMES[idx % GUEST_LAST_NAMES.len()]
        );
        repo.add_guest(EventGuest {
            id: None,
            event: event_id.clone(),
            name,
            dietary_note: DIETARY_NOTES[idx % DIETARY_NOTES.len()].map(str::to_string),
            rsvp_confirmed: idx % 3 != 2,
            table_number: Some((idx / 6 + 1) as i32),
        })
        .await?;
    }
    Ok(())
}

async fn seed_photos(
    repo: &EventRepository,
    event_idx: usize,
    event_id: &surrealdb::RecordId,
) -> AppResult<()> {
    for idx in 0..PHOTOS_PER_EVENT {
        repo.add_photo(EventPhoto {
            id: None,
            event: event_id.clone(),
            path: format!("photos/event-{:02}/img_{:02}.jpg", event_idx + 1, idx + 1),
            caption: Some(PHOTO_CAPTIONS[idx % PHOTO_CAPTIONS.len()].to_string()),
            sort_order: idx as i32,
        })
        .await?;
    }
    Ok(())
}

async fn seed_assignments(
    repo: &AssignmentRepository,
    staff: &[crate::db::models::Staff],
    event: &Event,
    event_id: &surrealdb::RecordId,
) -> AppResult<()> {
    for (idx, role) in ASSIGNMENT_ROLES.iter().enumerate() {
        let member = record_id(&staff[idx % staff.len()].id, "staff")?;
        // 到场时间错峰: 提前 2-4 小时; 离场晚 1-1.5 小时
        let lead_minutes = 120 + (idx as i64 % 3) * 60;
        let tail_minutes = 60 + (idx as i64 % 2) * 30;
        repo.create(StaffAssignment {
            id: None,
            staff: member,
            event: event_id.clone(),
            role: (*role).to_string(),
            starts_at: event.starts_at - lead_minutes * 60_000,
            ends_at: event.ends_at + tail_minutes * 60_000,
            confirmed: idx % 4 != 3,
        })
        .await?;
    }
    Ok(())
}
