//! Repository-level invariant tests against a fresh embedded database:
//! the create paths must reject rows that would break the data-model
//! contract, and computed amounts must come out exact.

mod common;

use banquet_seeder::db::models::{
    Event, EventStatus, InvoiceCreate, InvoiceStatus, MenuPackage, OrderCreate, OrderStatus,
    PaymentMethod, ProposalCreate, ProposalStatus, StaffAssignment, StaffCreate, TimeEntryCreate,
    User, UserCreate, UserRole, Venue,
};
use banquet_seeder::db::repository::{
    AssignmentRepository, EventRepository, InvoiceRepository, MenuPackageRepository,
    OrderRepository, ProposalRepository, RepoError, StaffRepository, TimeEntryRepository,
    UserRepository, VenueRepository,
};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const HOUR: i64 = 3_600_000;
const DAY: i64 = 86_400_000;

async fn make_user(db: &Surreal<Db>, email: &str, role: UserRole) -> User {
    UserRepository::new(db.clone())
        .upsert(UserCreate {
            email: email.to_string(),
            name: "Test Person".to_string(),
            password: "pw-123456".to_string(),
            role,
            phone: None,
        })
        .await
        .unwrap()
}

async fn make_venue(db: &Surreal<Db>) -> RecordId {
    VenueRepository::new(db.clone())
        .create(Venue {
            id: None,
            name: "Test Hall".to_string(),
            address: "1 Test Street".to_string(),
            capacity: 100,
            description: None,
            amenities: vec![],
            rental_fee: 500.0,
        })
        .await
        .unwrap()
        .id
        .unwrap()
}

async fn make_package(db: &Surreal<Db>, min: i32, max: i32) -> RecordId {
    MenuPackageRepository::new(db.clone())
        .create(MenuPackage {
            id: None,
            name: format!("Test Package {min}-{max}"),
            description: None,
            price_per_person: 50.0,
            min_guests: min,
            max_guests: max,
            is_active: true,
        })
        .await
        .unwrap()
        .id
        .unwrap()
}

async fn make_event(db: &Surreal<Db>, client: RecordId, venue: RecordId, guests: i32) -> Event {
    EventRepository::new(db.clone())
        .create(Event {
            id: None,
            name: "Test Event".to_string(),
            client,
            venue,
            status: EventStatus::Confirmed,
            event_type: "PRIVATE".to_string(),
            guest_count: guests,
            starts_at: 10 * DAY,
            ends_at: 10 * DAY + 5 * HOUR,
            notes: None,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn user_upsert_is_idempotent_by_email() {
    let (_tmp, db) = common::test_db().await;
    let users = UserRepository::new(db);

    let first = users
        .upsert(UserCreate {
            email: "dup@banquet.example".to_string(),
            name: "First Name".to_string(),
            password: "pw-123456".to_string(),
            role: UserRole::Client,
            phone: None,
        })
        .await
        .unwrap();
    let second = users
        .upsert(UserCreate {
            email: "dup@banquet.example".to_string(),
            name: "Second Name".to_string(),
            password: "pw-123456".to_string(),
            role: UserRole::Client,
            phone: Some("+1-555-9999".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Second Name");
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn staff_profile_requires_staff_role() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;

    let result = StaffRepository::new(db)
        .upsert(StaffCreate {
            user: client.id.unwrap(),
            position: "Server".to_string(),
            hourly_rate: 18.0,
            skills: vec![],
            availability: vec![],
        })
        .await;

    assert!(matches!(result, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn staff_upsert_keeps_one_profile_per_user() {
    let (_tmp, db) = common::test_db().await;
    let user = make_user(&db, "staff@test.example", UserRole::Staff).await;
    let staff = StaffRepository::new(db);

    let user_id = user.id.unwrap();
    staff
        .upsert(StaffCreate {
            user: user_id.clone(),
            position: "Server".to_string(),
            hourly_rate: 18.0,
            skills: vec![],
            availability: vec![],
        })
        .await
        .unwrap();
    let updated = staff
        .upsert(StaffCreate {
            user: user_id,
            position: "Head Server".to_string(),
            hourly_rate: 21.0,
            skills: vec!["wine service".to_string()],
            availability: vec![],
        })
        .await
        .unwrap();

    assert_eq!(staff.count().await.unwrap(), 1);
    assert_eq!(updated.position, "Head Server");
}

#[tokio::test]
async fn order_rejects_guest_count_outside_package_range() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;
    let venue = make_venue(&db).await;
    let package = make_package(&db, 50, 80).await;
    // 30 guests, below the package floor of 50
    let event = make_event(&db, client.id.unwrap(), venue, 30).await;

    let result = OrderRepository::new(db)
        .create(OrderCreate {
            event: event.id.unwrap(),
            package,
            status: OrderStatus::Pending,
            placed_at: 0,
            notes: None,
            items: vec![],
        })
        .await;

    assert!(matches!(result, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn order_totals_are_computed_from_package_and_items() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;
    let venue = make_venue(&db).await;
    let package = make_package(&db, 20, 80).await; // 50.0 per person
    let event = make_event(&db, client.id.unwrap(), venue, 60).await;

    let order = OrderRepository::new(db)
        .create(OrderCreate {
            event: event.id.unwrap(),
            package,
            status: OrderStatus::Confirmed,
            placed_at: 0,
            notes: None,
            items: vec![("Extra station".to_string(), 3, 99.99)],
        })
        .await
        .unwrap();

    assert_eq!(order.price_per_person, 50.0);
    assert_eq!(order.package_subtotal, 3000.0);
    assert_eq!(order.total, 3000.0 + 299.97);
}

#[tokio::test]
async fn accepted_proposal_requires_signature_and_vice_versa() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;
    let venue = make_venue(&db).await;
    let package = make_package(&db, 20, 80).await;
    let event = make_event(&db, client.id.unwrap(), venue, 60).await;
    let proposals = ProposalRepository::new(db);
    let event_id = event.id.unwrap();

    // ACCEPTED without signature
    let unsigned = proposals
        .create(ProposalCreate {
            event: event_id.clone(),
            package: package.clone(),
            status: ProposalStatus::Accepted,
            valid_until: 5 * DAY,
            sent_at: Some(DAY),
            signed_by: None,
            signed_at: None,
            line_items: vec![],
        })
        .await;
    assert!(matches!(unsigned, Err(RepoError::Validation(_))));

    // SENT carrying a signature
    let signed_sent = proposals
        .create(ProposalCreate {
            event: event_id.clone(),
            package: package.clone(),
            status: ProposalStatus::Sent,
            valid_until: 5 * DAY,
            sent_at: Some(DAY),
            signed_by: Some("Someone".to_string()),
            signed_at: Some(2 * DAY),
            line_items: vec![],
        })
        .await;
    assert!(matches!(signed_sent, Err(RepoError::Validation(_))));

    // Valid ACCEPTED, with the client name resolved through the event
    let accepted = proposals
        .create(ProposalCreate {
            event: event_id,
            package,
            status: ProposalStatus::Accepted,
            valid_until: 5 * DAY,
            sent_at: Some(DAY),
            signed_by: Some("Test Person".to_string()),
            signed_at: Some(2 * DAY),
            line_items: vec![("Add-on".to_string(), 2, 10.0)],
        })
        .await
        .unwrap();
    assert_eq!(accepted.client_name, "Test Person");
    assert_eq!(accepted.total, 60.0 * 50.0 + 20.0);
}

#[tokio::test]
async fn invoice_total_is_subtotal_plus_tax_plus_gratuity() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;
    let venue = make_venue(&db).await;
    let event = make_event(&db, client.id.unwrap(), venue, 60).await;
    let invoices = InvoiceRepository::new(db);

    let invoice = invoices
        .create(InvoiceCreate {
            event: event.id.unwrap(),
            invoice_number: "INV-T-0001".to_string(),
            status: InvoiceStatus::Sent,
            issued_at: 0,
            due_at: 5 * DAY,
            tax_rate: 0.08,
            gratuity: 100.0,
            line_items: vec![
                ("Catering".to_string(), 60, 50.0),
                ("Delivery".to_string(), 1, 250.0),
            ],
        })
        .await
        .unwrap();

    assert_eq!(invoice.subtotal, 3250.0);
    assert_eq!(invoice.tax_amount, 260.0);
    assert_eq!(invoice.total, 3250.0 + 260.0 + 100.0);

    // Payment against a missing invoice is refused
    let bogus: RecordId = ("invoice", "does_not_exist").into();
    let missing = invoices
        .add_payment(&bogus, 10.0, PaymentMethod::Cash, DAY, None)
        .await;
    assert!(matches!(missing, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn assignment_window_must_bracket_the_event() {
    let (_tmp, db) = common::test_db().await;
    let client = make_user(&db, "client@test.example", UserRole::Client).await;
    let staff_user = make_user(&db, "staff@test.example", UserRole::Staff).await;
    let venue = make_venue(&db).await;
    let event = make_event(&db, client.id.unwrap(), venue, 60).await;

    let staff = StaffRepository::new(db.clone())
        .upsert(StaffCreate {
            user: staff_user.id.unwrap(),
            position: "Server".to_string(),
            hourly_rate: 18.0,
            skills: vec![],
            availability: vec![],
        })
        .await
        .unwrap();

    let assignments = AssignmentRepository::new(db);
    let staff_id = staff.id.unwrap();
    let event_id = event.id.unwrap();

    // Arrives after the event has started
    let late = assignments
        .create(StaffAssignment {
            id: None,
            staff: staff_id.clone(),
            event: event_id.clone(),
            role: "SERVER".to_string(),
            starts_at: event.starts_at + HOUR,
            ends_at: event.ends_at + HOUR,
            confirmed: true,
        })
        .await;
    assert!(matches!(late, Err(RepoError::Validation(_))));

    // Proper bracket: in early, out late
    assignments
        .create(StaffAssignment {
            id: None,
            staff: staff_id,
            event: event_id,
            role: "SERVER".to_string(),
            starts_at: event.starts_at - 2 * HOUR,
            ends_at: event.ends_at + HOUR,
            confirmed: true,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn time_entry_derives_hours_and_rejects_backwards_clocks() {
    let (_tmp, db) = common::test_db().await;
    let staff_user = make_user(&db, "staff@test.example", UserRole::Staff).await;
    let staff = StaffRepository::new(db.clone())
        .upsert(StaffCreate {
            user: staff_user.id.unwrap(),
            position: "Chef".to_string(),
            hourly_rate: 30.0,
            skills: vec![],
            availability: vec![],
        })
        .await
        .unwrap();
    let entries = TimeEntryRepository::new(db);
    let staff_id = staff.id.unwrap();

    let entry = entries
        .create(TimeEntryCreate {
            staff: staff_id.clone(),
            work_date: "2026-05-25".to_string(),
            clock_in: 9 * HOUR,
            clock_out: 17 * HOUR + HOUR / 2,
            break_minutes: 30,
            approved: true,
        })
        .await
        .unwrap();
    assert_eq!(entry.total_hours, 8.0);

    let backwards = entries
        .create(TimeEntryCreate {
            staff: staff_id,
            work_date: "2026-05-25".to_string(),
            clock_in: 17 * HOUR,
            clock_out: 9 * HOUR,
            break_minutes: 0,
            approved: false,
        })
        .await;
    assert!(matches!(backwards, Err(RepoError::Validation(_))));
}
