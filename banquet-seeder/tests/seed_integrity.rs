//! Full-run seeding tests: populate a fresh embedded database, then hold
//! the sample set against the data-model contract.

mod common;

use banquet_seeder::seed::{
    ASSIGNMENTS_PER_EVENT, GUESTS_PER_EVENT, PHOTOS_PER_EVENT, TIMELINE_PER_EVENT,
};
use banquet_seeder::db::models::UserRole;
use banquet_seeder::db::repository::{
    AssignmentRepository, EventRepository, InvoiceRepository, ProposalRepository, UserRepository,
};
use banquet_seeder::{Seeder, Verifier};

#[tokio::test]
async fn full_seed_passes_every_integrity_check() {
    let (_tmp, db) = common::test_db().await;
    let seeder = Seeder::new(db.clone(), &common::test_config());

    seeder.run().await.unwrap();

    let report = Verifier::new(db).run().await.unwrap();
    assert!(
        report.is_ok(),
        "integrity violations: {:?}",
        report.violations
    );
}

#[tokio::test]
async fn seed_produces_expected_row_counts() {
    let (_tmp, db) = common::test_db().await;
    let seeder = Seeder::new(db, &common::test_config());

    let summary = seeder.run().await.unwrap();
    let count = |table: &str| {
        summary
            .tables
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, n)| *n)
            .unwrap_or_else(|| panic!("no count for table {table}"))
    };

    assert_eq!(count("user"), 11);
    assert_eq!(count("staff"), 6);
    assert_eq!(count("venue"), 4);
    assert_eq!(count("menu_item"), 18);
    assert_eq!(count("menu_package"), 3);
    assert_eq!(count("package_item"), 17);
    assert_eq!(count("ingredient"), 12);
    assert_eq!(count("recipe"), 6);
    assert_eq!(count("recipe_ingredient"), 15);
    assert_eq!(count("equipment"), 6);
    assert_eq!(count("vehicle"), 3);
    assert_eq!(count("supplier"), 4);
    assert_eq!(count("event"), 5);
    assert_eq!(count("timeline_entry"), 5 * TIMELINE_PER_EVENT);
    assert_eq!(count("event_guest"), 5 * GUESTS_PER_EVENT);
    assert_eq!(count("event_photo"), 5 * PHOTOS_PER_EVENT);
    assert_eq!(count("event_order"), 3);
    assert_eq!(count("order_item"), 5);
    assert_eq!(count("prep_list"), 3);
    assert_eq!(count("prep_task"), 15);
    assert_eq!(count("pack_list"), 3);
    assert_eq!(count("pack_item"), 15);
    assert_eq!(count("proposal"), 3);
    assert_eq!(count("proposal_menu"), 3);
    assert_eq!(count("proposal_line_item"), 5);
    assert_eq!(count("invoice"), 3);
    assert_eq!(count("invoice_line_item"), 9);
    assert_eq!(count("payment"), 3);
    assert_eq!(count("cost_estimate"), 3);
    assert_eq!(count("delivery"), 3);
    assert_eq!(count("staff_assignment"), 5 * ASSIGNMENTS_PER_EVENT);
    assert_eq!(count("time_entry"), 12);
    assert_eq!(count("purchase_order"), 3);
    assert_eq!(count("purchase_order_item"), 7);
}

#[tokio::test]
async fn every_event_gets_the_fixed_fanout() {
    let (_tmp, db) = common::test_db().await;
    Seeder::new(db.clone(), &common::test_config())
        .run()
        .await
        .unwrap();

    let events = EventRepository::new(db.clone());
    let assignments = AssignmentRepository::new(db);

    let all = events.find_all().await.unwrap();
    assert_eq!(all.len(), 5);
    for event in all {
        let id = event.id.clone().unwrap();
        let counts = events.child_counts(&id).await.unwrap();
        assert_eq!(counts.timeline, TIMELINE_PER_EVENT, "{}", event.name);
        assert_eq!(counts.guests, GUESTS_PER_EVENT, "{}", event.name);
        assert_eq!(counts.photos, PHOTOS_PER_EVENT, "{}", event.name);
        assert_eq!(
            assignments.count_for_event(&id).await.unwrap(),
            ASSIGNMENTS_PER_EVENT,
            "{}",
            event.name
        );
    }
}

#[tokio::test]
async fn reseeding_converges_instead_of_duplicating() {
    let (_tmp, db) = common::test_db().await;
    let seeder = Seeder::new(db.clone(), &common::test_config());

    let first = seeder.run().await.unwrap();

    // Users survive the second run under the same ids (upsert by email)
    let users = UserRepository::new(db);
    let admin_before = users
        .find_by_email("admin@banquet.example")
        .await
        .unwrap()
        .unwrap();

    let second = seeder.run().await.unwrap();
    assert_eq!(first.tables, second.tables);

    let admin_after = users
        .find_by_email("admin@banquet.example")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin_before.id, admin_after.id);
}

#[tokio::test]
async fn seeded_accounts_authenticate_with_the_shared_password() {
    let (_tmp, db) = common::test_db().await;
    let config = common::test_config();
    Seeder::new(db.clone(), &config).run().await.unwrap();

    let users = UserRepository::new(db);
    for role in [UserRole::Admin, UserRole::Client, UserRole::Staff] {
        let members = users.find_by_role(role).await.unwrap();
        assert!(!members.is_empty());
        let user = &members[0];
        assert!(user.verify_password(&config.seed_password).unwrap());
        assert!(!user.verify_password("not-the-password").unwrap());
        assert!(!user.hash_pass.contains(&config.seed_password));
    }
}

#[tokio::test]
async fn sample_commerce_matches_its_lifecycles() {
    let (_tmp, db) = common::test_db().await;
    Seeder::new(db.clone(), &common::test_config())
        .run()
        .await
        .unwrap();

    use banquet_seeder::db::models::{InvoiceStatus, ProposalStatus};

    let proposals = ProposalRepository::new(db.clone()).find_all().await.unwrap();
    let accepted: Vec<_> = proposals
        .iter()
        .filter(|p| p.status == ProposalStatus::Accepted)
        .collect();
    assert_eq!(accepted.len(), 1);
    assert!(accepted[0].signed_by.is_some() && accepted[0].signed_at.is_some());
    for p in proposals.iter().filter(|p| p.status != ProposalStatus::Accepted) {
        assert!(p.signed_by.is_none() && p.signed_at.is_none());
    }

    let invoices = InvoiceRepository::new(db).find_all().await.unwrap();
    assert_eq!(invoices.len(), 3);
    let statuses: Vec<_> = invoices.iter().map(|i| i.status).collect();
    assert!(statuses.contains(&InvoiceStatus::Paid));
    assert!(statuses.contains(&InvoiceStatus::PartiallyPaid));
    assert!(statuses.contains(&InvoiceStatus::Sent));
}
