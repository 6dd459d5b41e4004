//! Verify Module (完整性检查)
//!
//! 对当前库中的样本数据执行 §data-model 合同级检查:
//!
//! - 全部 ~30 张表的引用完整性 (链接指向存在的父记录)
//! - STAFF 用户与 staff 档案一一对应
//! - 每场活动的固定子记录数量 (20/18/16/15)
//! - ACCEPTED 提案必须签名, 其他状态必须未签名
//! - 发票恒等式 total = subtotal + tax + gratuity (金额容差内)
//! - 订单/提案的活动人数落在所选套餐区间内

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    MenuPackage, Proposal, ProposalMenu, ProposalStatus, UserRole,
};
use crate::db::repository::{
    AssignmentRepository, EventRepository, InvoiceRepository, OrderRepository,
    ProposalRepository, StaffRepository, UserRepository,
};
use crate::seed::{ASSIGNMENTS_PER_EVENT, GUESTS_PER_EVENT, PHOTOS_PER_EVENT, TIMELINE_PER_EVENT};
use crate::utils::{AppResult, money};

/// Link fields checked for referential integrity:
/// (table, field, target table, link is optional)
const LINKS: &[(&str, &str, &str, bool)] = &[
    ("staff", "user", "user", false),
    ("package_item", "package", "menu_package", false),
    ("package_item", "menu_item", "menu_item", false),
    ("ingredient", "supplier", "supplier", true),
    ("recipe", "menu_item", "menu_item", false),
    ("recipe_ingredient", "recipe", "recipe", false),
    ("recipe_ingredient", "ingredient", "ingredient", false),
    ("event", "client", "user", false),
    ("event", "venue", "venue", false),
    ("timeline_entry", "event", "event", false),
    ("event_guest", "event", "event", false),
    ("event_photo", "event", "event", false),
    ("event_order", "event", "event", false),
    ("event_order", "client", "user", false),
    ("event_order", "package", "menu_package", false),
    ("order_item", "event_order", "event_order", false),
    ("prep_list", "event_order", "event_order", false),
    ("prep_task", "prep_list", "prep_list", false),
    ("pack_list", "event_order", "event_order", false),
    ("pack_item", "pack_list", "pack_list", false),
    ("proposal", "event", "event", false),
    ("proposal_menu", "proposal", "proposal", false),
    ("proposal_menu", "package", "menu_package", false),
    ("proposal_line_item", "proposal", "proposal", false),
    ("invoice", "event", "event", false),
    ("invoice_line_item", "invoice", "invoice", false),
    ("payment", "invoice", "invoice", false),
    ("cost_estimate", "event", "event", false),
    ("cost_estimate", "package", "menu_package", true),
    ("delivery", "event", "event", false),
    ("delivery", "vehicle", "vehicle", false),
    ("staff_assignment", "staff", "staff", false),
    ("staff_assignment", "event", "event", false),
    ("time_entry", "staff", "staff", false),
    ("purchase_order", "supplier", "supplier", false),
    ("purchase_order_item", "purchase_order", "purchase_order", false),
];

/// A single failed check
#[derive(Debug, Clone)]
pub struct Violation {
    pub check: &'static str,
    pub detail: String,
}

/// Outcome of a verification run
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub violations: Vec<Violation>,
    pub checks_run: usize,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, check: &'static str, detail: impl Into<String>) {
        self.violations.push(Violation {
            check,
            detail: detail.into(),
        });
    }

    pub fn log(&self) {
        if self.is_ok() {
            tracing::info!("Integrity OK ({} checks)", self.checks_run);
            return;
        }
        tracing::error!(
            "Integrity FAILED: {} violation(s) across {} checks",
            self.violations.len(),
            self.checks_run
        );
        for v in &self.violations {
            tracing::error!("  [{}] {}", v.check, v.detail);
        }
    }
}

pub struct Verifier {
    db: Surreal<Db>,
    users: UserRepository,
    staff: StaffRepository,
    events: EventRepository,
    assignments: AssignmentRepository,
    orders: OrderRepository,
    proposals: ProposalRepository,
    invoices: InvoiceRepository,
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    id: String,
    target: String,
}

impl Verifier {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            staff: StaffRepository::new(db.clone()),
            events: EventRepository::new(db.clone()),
            assignments: AssignmentRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            proposals: ProposalRepository::new(db.clone()),
            invoices: InvoiceRepository::new(db.clone()),
            db,
        }
    }

    pub async fn run(&self) -> AppResult<VerifyReport> {
        let mut report = VerifyReport::default();

        self.check_links(&mut report).await?;
        self.check_staff_one_to_one(&mut report).await?;
        self.check_event_fanout(&mut report).await?;
        self.check_proposal_signatures(&mut report).await?;
        self.check_invoice_totals(&mut report).await?;
        self.check_guest_ranges(&mut report).await?;

        Ok(report)
    }

    /// All record ids of one table, as strings
    async fn table_ids(&self, table: &str) -> AppResult<HashSet<String>> {
        #[derive(Deserialize)]
        struct IdRow {
            id: String,
        }
        let rows: Vec<IdRow> = self
            .db
            .query(format!("SELECT <string>id AS id FROM {table}"))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| r.id).collect())
    }

    /// Referential integrity across every declared link field
    async fn check_links(&self, report: &mut VerifyReport) -> AppResult<()> {
        let mut id_cache: HashMap<&str, HashSet<String>> = HashMap::new();

        for (table, field, target_table, optional) in LINKS {
            report.checks_run += 1;

            if !id_cache.contains_key(target_table) {
                let ids = self.table_ids(target_table).await?;
                id_cache.insert(*target_table, ids);
            }
            let target_ids = &id_cache[target_table];

            let rows: Vec<LinkRow> = self
                .db
                .query(format!(
                    "SELECT <string>id AS id, <string>{field} AS target \
                     FROM {table} WHERE {field} != NONE"
                ))
                .await?
                .take(0)?;

            for row in &rows {
                if !target_ids.contains(&row.target) {
                    report.push(
                        "referential-integrity",
                        format!("{}.{} of {} points at missing {}", table, field, row.id, row.target),
                    );
                }
            }

            // Required links must also be present on every row
            if !*optional {
                #[derive(Deserialize)]
                struct CountRow {
                    count: i64,
                }
                let missing: Option<CountRow> = self
                    .db
                    .query(format!(
                        "SELECT count() AS count FROM {table} WHERE {field} = NONE GROUP ALL"
                    ))
                    .await?
                    .take(0)?;
                if let Some(row) = missing
                    && row.count > 0
                {
                    report.push(
                        "referential-integrity",
                        format!("{}.{} is NONE on {} row(s)", table, field, row.count),
                    );
                }
            }
        }
        Ok(())
    }

    /// Exactly one staff profile per STAFF-role user, none elsewhere
    async fn check_staff_one_to_one(&self, report: &mut VerifyReport) -> AppResult<()> {
        report.checks_run += 1;

        let staff_users = self.users.find_by_role(UserRole::Staff).await?;
        let staff_rows = self.staff.find_all().await?;

        let mut profiles_per_user: HashMap<String, usize> = HashMap::new();
        for row in &staff_rows {
            *profiles_per_user.entry(row.user.to_string()).or_default() += 1;
        }

        for user in &staff_users {
            let key = user
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default();
            match profiles_per_user.get(&key) {
                Some(1) => {}
                Some(n) => report.push(
                    "staff-one-to-one",
                    format!("user {} has {} staff profiles", user.email, n),
                ),
                None => report.push(
                    "staff-one-to-one",
                    format!("STAFF user {} has no staff profile", user.email),
                ),
            }
        }

        if staff_rows.len() != staff_users.len() {
            report.push(
                "staff-one-to-one",
                format!(
                    "{} staff profiles for {} STAFF users",
                    staff_rows.len(),
                    staff_users.len()
                ),
            );
        }
        Ok(())
    }

    /// Fixed per-event fan-out: 20 timeline / 18 guests / 16 photos / 15 assignments
    async fn check_event_fanout(&self, report: &mut VerifyReport) -> AppResult<()> {
        report.checks_run += 1;

        for event in self.events.find_all().await? {
            let Some(id) = event.id.clone() else {
                report.push("event-fanout", "event row without id".to_string());
                continue;
            };
            let counts = self.events.child_counts(&id).await?;
            let assignments = self.assignments.count_for_event(&id).await?;

            for (what, got, want) in [
                ("timeline entries", counts.timeline, TIMELINE_PER_EVENT),
                ("guests", counts.guests, GUESTS_PER_EVENT),
                ("photos", counts.photos, PHOTOS_PER_EVENT),
                ("staff assignments", assignments, ASSIGNMENTS_PER_EVENT),
            ] {
                if got != want {
                    report.push(
                        "event-fanout",
                        format!("event '{}' has {} {}, expected {}", event.name, got, what, want),
                    );
                }
            }
        }
        Ok(())
    }

    /// ACCEPTED ⟺ signed_by/signed_at
    async fn check_proposal_signatures(&self, report: &mut VerifyReport) -> AppResult<()> {
        report.checks_run += 1;

        for proposal in self.proposals.find_all().await? {
            let signed = proposal.signed_by.is_some() && proposal.signed_at.is_some();
            let partly_signed = proposal.signed_by.is_some() != proposal.signed_at.is_some();
            match proposal.status {
                ProposalStatus::Accepted if !signed => report.push(
                    "proposal-signature",
                    format!("ACCEPTED proposal for {} is unsigned", proposal.client_name),
                ),
                ProposalStatus::Accepted => {}
                status if signed || partly_signed => report.push(
                    "proposal-signature",
                    format!(
                        "{:?} proposal for {} carries signature fields",
                        status, proposal.client_name
                    ),
                ),
                _ => {}
            }
        }
        Ok(())
    }

    /// total = subtotal + tax_amount + gratuity, within money tolerance
    async fn check_invoice_totals(&self, report: &mut VerifyReport) -> AppResult<()> {
        report.checks_run += 1;

        for invoice in self.invoices.find_all().await? {
            let expected = money::sum([invoice.subtotal, invoice.tax_amount, invoice.gratuity]);
            if !money::approx_eq(invoice.total, expected) {
                report.push(
                    "invoice-total",
                    format!(
                        "{}: total {} != subtotal {} + tax {} + gratuity {}",
                        invoice.invoice_number,
                        invoice.total,
                        invoice.subtotal,
                        invoice.tax_amount,
                        invoice.gratuity
                    ),
                );
            }
        }
        Ok(())
    }

    /// Orders and proposals stay inside their package's guest range
    async fn check_guest_ranges(&self, report: &mut VerifyReport) -> AppResult<()> {
        report.checks_run += 1;

        for order in self.orders.find_all().await? {
            let package: Option<MenuPackage> = self
                .db
                .select(order.package.clone())
                .await?;
            let Some(package) = package else {
                continue; // already reported by the link check
            };
            if !package.accepts_guest_count(order.guest_count) {
                report.push(
                    "package-guest-range",
                    format!(
                        "order {:?} has {} guests, outside '{}' range [{}, {}]",
                        order.id, order.guest_count, package.name, package.min_guests,
                        package.max_guests
                    ),
                );
            }
        }

        let menus: Vec<ProposalMenu> = self
            .db
            .query("SELECT * FROM proposal_menu")
            .await?
            .take(0)?;
        for menu in menus {
            let proposal: Option<Proposal> = self
                .db
                .select(menu.proposal.clone())
                .await?;
            let package: Option<MenuPackage> = self
                .db
                .select(menu.package.clone())
                .await?;
            let (Some(proposal), Some(package)) = (proposal, package) else {
                continue;
            };
            let event = self.events.find_by_id(&proposal.event).await?;
            let Some(event) = event else {
                continue;
            };
            if !package.accepts_guest_count(event.guest_count) {
                report.push(
                    "package-guest-range",
                    format!(
                        "proposal for '{}' has {} guests, outside '{}' range [{}, {}]",
                        event.name,
                        event.guest_count,
                        package.name,
                        package.min_guests,
                        package.max_guests
                    ),
                );
            }
        }
        Ok(())
    }
}
