//! Commerce phase: orders (+checklists), proposals, invoices, estimates
//!
//! 金额全部由 repository 在创建时算定; PAID/PARTIALLY_PAID 的收款按
//! 落库发票总额切分, 保证对账恒等式成立。

use super::catalog::SeededCatalog;
use super::record_id;
use crate::db::models::{
    ChecklistStatus, CostEstimate, CostEstimateStatus, Event, InvoiceCreate, InvoiceStatus,
    OrderCreate, OrderStatus, PaymentMethod, ProposalCreate, ProposalStatus,
};
use crate::db::repository::{
    CostEstimateRepository, InvoiceRepository, OrderRepository, ProposalRepository,
};
use crate::utils::money::round2;
use crate::utils::{AppError, AppResult};

const DAY_MILLIS: i64 = 86_400_000;
const SALES_TAX_RATE: f64 = 0.08;

/// (event idx, package idx, status, extra items)
const ORDERS: &[(usize, usize, OrderStatus, &[(&str, i32, f64)])] = &[
    (
        0,
        1,
        OrderStatus::Confirmed,
        &[
            ("Champagne toast service", 12, 18.0),
            ("Late-night snack station", 1, 450.0),
        ],
    ),
    (
        1,
        2,
        OrderStatus::InPrep,
        &[
            ("Branded cocktail napkins", 200, 0.35),
            ("Projector rental", 1, 120.0),
        ],
    ),
    (2, 0, OrderStatus::Pending, &[("Kids menu plates", 8, 14.0)]),
];

const PREP_STATUSES: &[ChecklistStatus] = &[
    ChecklistStatus::InProgress,
    ChecklistStatus::Pending,
    ChecklistStatus::Pending,
];

/// (task, quantity)
const PREP_TASKS: &[(&str, i32)] = &[
    ("Marinate chicken breasts", 24),
    ("Par-cook risotto base", 4),
    ("Prep crudite trays", 6),
    ("Bake torte bases", 3),
    ("Portion sauces", 40),
];

/// (item, quantity)
const PACK_ITEMS: &[(&str, i32)] = &[
    ("Chafing dishes", 8),
    ("Linen sets", 14),
    ("Serving utensils bin", 2),
    ("Glassware crates", 6),
    ("Bar kit", 1),
];

/// (event idx, package idx, status, signer, line items)
const PROPOSALS: &[(
    usize,
    usize,
    ProposalStatus,
    Option<&str>,
    &[(&str, i32, f64)],
)] = &[
    (
        0,
        1,
        ProposalStatus::Accepted,
        Some("Sofia Martin"),
        &[
            ("Service staff team (8)", 1, 1440.0),
            ("Floral centerpieces", 12, 65.0),
            ("Venue coordination", 1, 350.0),
        ],
    ),
    (
        2,
        0,
        ProposalStatus::Viewed,
        None,
        &[("Outdoor canopy setup", 1, 280.0)],
    ),
    (
        4,
        0,
        ProposalStatus::Sent,
        None,
        &[("Executive wine pairing", 40, 22.0)],
    ),
];

/// (event idx, invoice number, status, gratuity, venue fee)
const INVOICES: &[(usize, &str, InvoiceStatus, f64, f64)] = &[
    (0, "INV-2026-0001", InvoiceStatus::Paid, 650.0, 3500.0),
    (
        1,
        "INV-2026-0002",
        InvoiceStatus::PartiallyPaid,
        380.0,
        1800.0,
    ),
    (2, "INV-2026-0003", InvoiceStatus::Sent, 290.0, 1200.0),
];

/// (event idx, package idx or usize::MAX, status,
/// food/labor/equipment/overhead/profit/tax)
const ESTIMATES: &[(usize, usize, CostEstimateStatus, [f64; 6])] = &[
    (
        3,
        1,
        CostEstimateStatus::Draft,
        [5250.0, 2880.0, 940.0, 760.0, 1830.0, 948.0],
    ),
    (
        0,
        1,
        CostEstimateStatus::ConvertedToProposal,
        [4320.0, 2250.0, 820.0, 640.0, 1510.0, 779.0],
    ),
    (
        2,
        0,
        CostEstimateStatus::Final,
        [1980.0, 1120.0, 410.0, 330.0, 690.0, 362.0],
    ),
];

pub(super) async fn seed(
    orders: &OrderRepository,
    proposals: &ProposalRepository,
    invoices: &InvoiceRepository,
    estimates: &CostEstimateRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    seed_orders(orders, events, catalog).await?;
    seed_proposals(proposals, events, catalog).await?;
    seed_invoices(invoices, events, catalog).await?;
    seed_estimates(estimates, events, catalog).await?;
    Ok(())
}

async fn seed_orders(
    repo: &OrderRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    for (idx, (event_idx, package_idx, status, items)) in ORDERS.iter().enumerate() {
        let event = &events[*event_idx];
        let event_id = record_id(&event.id, "event")?;
        let package_id = record_id(&catalog.packages[*package_idx].id, "package")?;

        let order = repo
            .create(OrderCreate {
                event: event_id,
                package: package_id,
                status: *status,
                placed_at: event.starts_at - 10 * DAY_MILLIS,
                notes: None,
                items: items
                    .iter()
                    .map(|(name, qty, price)| ((*name).to_string(), *qty, *price))
                    .collect(),
            })
            .await?;
        let order_id = record_id(&order.id, "order")?;

        let prep_status = PREP_STATUSES[idx % PREP_STATUSES.len()];
        let tasks = PREP_TASKS
            .iter()
            .enumerate()
            .map(|(task_idx, (task, qty))| {
                // 进行中的清单前两项已完成
                let done = prep_status == ChecklistStatus::InProgress && task_idx < 2;
                ((*task).to_string(), *qty, done)
            })
            .collect();
        repo.attach_prep_list(&order_id, prep_status, event.starts_at - 8 * 3_600_000, tasks)
            .await?;

        let pack_items = PACK_ITEMS
            .iter()
            .map(|(item, qty)| ((*item).to_string(), *qty, false))
            .collect();
        repo.attach_pack_list(&order_id, ChecklistStatus::Pending, pack_items)
            .await?;
    }
    Ok(())
}

async fn seed_proposals(
    repo: &ProposalRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    for (event_idx, package_idx, status, signer, line_items) in PROPOSALS {
        let event = &events[*event_idx];
        let event_id = record_id(&event.id, "event")?;
        let package_id = record_id(&catalog.packages[*package_idx].id, "package")?;

        let sent_at = Some(event.starts_at - 20 * DAY_MILLIS);
        let signed_at = signer.map(|_| event.starts_at - 16 * DAY_MILLIS);

        repo.create(ProposalCreate {
            event: event_id,
            package: package_id,
            status: *status,
            valid_until: event.starts_at - 7 * DAY_MILLIS,
            sent_at,
            signed_by: signer.map(str::to_string),
            signed_at,
            line_items: line_items
                .iter()
                .map(|(desc, qty, price)| ((*desc).to_string(), *qty, *price))
                .collect(),
        })
        .await?;
    }
    Ok(())
}

async fn seed_invoices(
    repo: &InvoiceRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    for (event_idx, number, status, gratuity, venue_fee) in INVOICES {
        let event = &events[*event_idx];
        let event_id = record_id(&event.id, "event")?;

        // 套餐主线 + 场地 + 配送 (套餐沿用该活动订单所选的那一个)
        let package_idx = ORDERS
            .iter()
            .find(|(order_event, ..)| order_event == event_idx)
            .map(|(_, package_idx, ..)| *package_idx)
            .ok_or_else(|| AppError::validation("invoice for an event without an order"))?;
        let package = &catalog.packages[package_idx];
        let line_items = vec![
            (
                format!("{} — {} guests", package.name, event.guest_count),
                event.guest_count,
                package.price_per_person,
            ),
            ("Venue rental".to_string(), 1, *venue_fee),
            ("Delivery and setup".to_string(), 1, 250.0),
        ];

        let issued_at = event.starts_at - 12 * DAY_MILLIS;
        let invoice = repo
            .create(InvoiceCreate {
                event: event_id,
                invoice_number: (*number).to_string(),
                status: *status,
                issued_at,
                due_at: event.starts_at - 2 * DAY_MILLIS,
                tax_rate: SALES_TAX_RATE,
                gratuity: *gratuity,
                line_items,
            })
            .await?;
        let invoice_id = record_id(&invoice.id, "invoice")?;

        // Payments split off the stored total so the books balance exactly
        match status {
            InvoiceStatus::Paid => {
                let deposit = round2(invoice.total * 0.5);
                let balance = round2(invoice.total - deposit);
                repo.add_payment(
                    &invoice_id,
                    deposit,
                    PaymentMethod::BankTransfer,
                    issued_at + 2 * DAY_MILLIS,
                    Some("WIRE-88213".to_string()),
                )
                .await?;
                repo.add_payment(
                    &invoice_id,
                    balance,
                    PaymentMethod::Card,
                    issued_at + 9 * DAY_MILLIS,
                    Some("CH-55102".to_string()),
                )
                .await?;
            }
            InvoiceStatus::PartiallyPaid => {
                let deposit = round2(invoice.total * 0.5);
                repo.add_payment(
                    &invoice_id,
                    deposit,
                    PaymentMethod::Check,
                    issued_at + 3 * DAY_MILLIS,
                    Some("CHK-2041".to_string()),
                )
                .await?;
            }
            _ => {}
        }
    }
    Ok(())
}

async fn seed_estimates(
    repo: &CostEstimateRepository,
    events: &[Event],
    catalog: &SeededCatalog,
) -> AppResult<()> {
    for (event_idx, package_idx, status, breakdown) in ESTIMATES {
        let event = &events[*event_idx];
        let event_id = record_id(&event.id, "event")?;
        let package = catalog
            .packages
            .get(*package_idx)
            .ok_or_else(|| AppError::validation("estimate references unknown package"))?;
        let [food, labor, equipment, overhead, profit, tax] = breakdown;

        repo.create(CostEstimate {
            id: None,
            event: event_id,
            package: package.id.clone(),
            food_cost: *food,
            labor_cost: *labor,
            equipment_cost: *equipment,
            overhead: *overhead,
            profit_margin: *profit,
            tax: *tax,
            total: 0.0, // recomputed by the repository
            status: *status,
        })
        .await?;
    }
    Ok(())
}
