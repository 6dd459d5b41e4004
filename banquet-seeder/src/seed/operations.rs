//! Operations phase: deliveries, time entries, purchase orders

use super::catalog::SeededCatalog;
use super::record_id;
use crate::db::models::{
    Delivery, DeliveryStatus, Event, PurchaseOrderCreate, PurchaseOrderStatus, TimeEntryCreate,
};
use crate::db::repository::{
    DeliveryRepository, PurchaseOrderRepository, StaffRepository, TimeEntryRepository,
};
use crate::utils::time::{anchor_offset_date, anchor_offset_millis};
use crate::utils::{AppError, AppResult};

const DAY_MILLIS: i64 = 86_400_000;

/// (event idx, vehicle idx, status, driver)
const DELIVERIES: &[(usize, usize, DeliveryStatus, &str)] = &[
    (0, 0, DeliveryStatus::Scheduled, "Sam Okafor"),
    (1, 1, DeliveryStatus::Loading, "Sam Okafor"),
    (2, 2, DeliveryStatus::InTransit, "Jade Wheeler"),
];

/// (po number, supplier idx, status, ordered days before anchor,
/// expected days before anchor, items as (description, qty, unit, unit cost))
const PURCHASE_ORDERS: &[(
    &str,
    usize,
    PurchaseOrderStatus,
    i64,
    Option<i64>,
    &[(&str, f64, &str, f64)],
)] = &[
    (
        "PO-2026-001",
        0,
        PurchaseOrderStatus::Received,
        10,
        Some(3),
        &[
            ("Salmon fillet", 18.0, "kg", 19.5),
            ("Shrimp", 12.0, "kg", 16.0),
        ],
    ),
    (
        "PO-2026-002",
        1,
        PurchaseOrderStatus::Confirmed,
        6,
        Some(-4),
        &[
            ("Wild mushrooms", 9.0, "kg", 12.0),
            ("Red beets", 15.0, "kg", 2.1),
            ("Carrots", 20.0, "kg", 1.6),
        ],
    ),
    (
        "PO-2026-003",
        2,
        PurchaseOrderStatus::Sent,
        2,
        None,
        &[
            ("Chafing fuel cans", 48.0, "each", 1.8),
            ("Compostable plates", 500.0, "each", 0.22),
        ],
    ),
];

/// Clock-in/out pattern per staff member: (days before anchor, start hour,
/// end hour, break minutes, approved)
const SHIFT_PATTERN: &[(i64, u32, u32, i32, bool)] = &[
    (7, 9, 17, 30, true),
    (6, 10, 18, 45, false),
];

pub(super) async fn seed(
    deliveries: &DeliveryRepository,
    time_entries: &TimeEntryRepository,
    purchase_orders: &PurchaseOrderRepository,
    staff_repo: &StaffRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    for (event_idx, vehicle_idx, status, driver) in DELIVERIES {
        let event = &events[*event_idx];
        let event_id = record_id(&event.id, "event")?;
        let vehicle_id = record_id(
            &catalog.vehicles[vehicle_idx % catalog.vehicles.len()].id,
            "vehicle",
        )?;
        deliveries
            .create(Delivery {
                id: None,
                event: event_id,
                vehicle: vehicle_id,
                status: *status,
                // 装车出发: 开场前 4 小时
                scheduled_at: event.starts_at - 4 * 3_600_000,
                driver_name: Some((*driver).to_string()),
                notes: None,
            })
            .await?;
    }

    // 每位员工两条历史工时 (锚点前一周)
    let staff = staff_repo.find_all().await?;
    if staff.is_empty() {
        return Err(AppError::validation("no staff for time entries"));
    }
    for member in &staff {
        let staff_id = record_id(&member.id, "staff")?;
        for (days_back, start_h, end_h, break_minutes, approved) in SHIFT_PATTERN {
            time_entries
                .create(TimeEntryCreate {
                    staff: staff_id.clone(),
                    work_date: anchor_offset_date(-days_back),
                    clock_in: anchor_offset_millis(-days_back, *start_h, 0),
                    clock_out: anchor_offset_millis(-days_back, *end_h, 0),
                    break_minutes: *break_minutes,
                    approved: *approved,
                })
                .await?;
        }
    }

    for (po_number, supplier_idx, status, ordered_back, expected_back, items) in PURCHASE_ORDERS {
        let supplier_id = record_id(
            &catalog.suppliers[supplier_idx % catalog.suppliers.len()].id,
            "supplier",
        )?;
        purchase_orders
            .create(PurchaseOrderCreate {
                supplier: supplier_id,
                po_number: (*po_number).to_string(),
                status: *status,
                ordered_at: anchor_offset_millis(0, 8, 0) - ordered_back * DAY_MILLIS,
                expected_at: expected_back
                    .map(|back| anchor_offset_millis(0, 8, 0) - back * DAY_MILLIS),
                items: items
                    .iter()
                    .map(|(desc, qty, unit, cost)| {
                        ((*desc).to_string(), *qty, (*unit).to_string(), *cost)
                    })
                    .collect(),
            })
            .await?;
    }

    Ok(())
}
