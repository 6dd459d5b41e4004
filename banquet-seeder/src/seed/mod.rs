//! Seed Module (样本数据)
//!
//! 清库 + 重建的编排器。填充顺序遵循外键依赖 (叶子先行):
//!
//! 1. Identity — users (按邮箱 upsert), staff (按 user 链接 upsert)
//! 2. Catalog — venues/menu/ingredients/recipes/equipment/vehicles/suppliers
//! 3. Engagement — events 及每场活动固定数量的子记录
//! 4. Commerce — orders/proposals/invoices/cost estimates
//! 5. Operations — deliveries/assignments/prep & pack lists/time entries/POs
//!
//! 清理阶段按相反方向逐表删除 (子表先于父表); users/staff 不清理,
//! 依靠自然键 upsert 收敛, 因此整轮重复执行得到同一份数据集。

mod catalog;
mod commerce;
mod engagement;
mod identity;
mod operations;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::repository::{
    AssignmentRepository, CostEstimateRepository, DeliveryRepository, EquipmentRepository,
    EventRepository, IngredientRepository, InvoiceRepository, MenuItemRepository,
    MenuPackageRepository, OrderRepository, ProposalRepository, PurchaseOrderRepository,
    RecipeRepository, StaffRepository, SupplierRepository, TimeEntryRepository, UserRepository,
    VehicleRepository, VenueRepository,
};
use crate::utils::{AppError, AppResult};

/// Seeded rows come back with ids; a missing one is a database fault.
pub(super) fn record_id(
    id: &Option<surrealdb::RecordId>,
    what: &str,
) -> AppResult<surrealdb::RecordId> {
    id.clone()
        .ok_or_else(|| AppError::database(format!("seeded {what} row without id")))
}

/// 每场活动的固定子记录数量 (活动模板长度 / 来宾 / 照片 / 排班)
pub const TIMELINE_PER_EVENT: usize = 20;
pub const GUESTS_PER_EVENT: usize = 18;
pub const PHOTOS_PER_EVENT: usize = 16;
pub const ASSIGNMENTS_PER_EVENT: usize = 15;

/// Per-table row counts after a seeding run
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub tables: Vec<(&'static str, usize)>,
}

impl SeedSummary {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|(_, n)| n).sum()
    }

    pub fn log(&self) {
        tracing::info!("Seeded {} rows:", self.total_rows());
        for (table, count) in &self.tables {
            tracing::info!("  {table:<22} {count:>5}");
        }
    }
}

/// Seeder — owns one repository per aggregate, all sharing the same
/// explicitly passed database handle.
pub struct Seeder {
    users: UserRepository,
    staff: StaffRepository,
    venues: VenueRepository,
    menu_items: MenuItemRepository,
    packages: MenuPackageRepository,
    ingredients: IngredientRepository,
    recipes: RecipeRepository,
    equipment: EquipmentRepository,
    vehicles: VehicleRepository,
    suppliers: SupplierRepository,
    events: EventRepository,
    orders: OrderRepository,
    proposals: ProposalRepository,
    invoices: InvoiceRepository,
    estimates: CostEstimateRepository,
    deliveries: DeliveryRepository,
    assignments: AssignmentRepository,
    time_entries: TimeEntryRepository,
    purchase_orders: PurchaseOrderRepository,
    seed_password: String,
}

impl Seeder {
    pub fn new(db: Surreal<Db>, config: &Config) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            staff: StaffRepository::new(db.clone()),
            venues: VenueRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            packages: MenuPackageRepository::new(db.clone()),
            ingredients: IngredientRepository::new(db.clone()),
            recipes: RecipeRepository::new(db.clone()),
            equipment: EquipmentRepository::new(db.clone()),
            vehicles: VehicleRepository::new(db.clone()),
            suppliers: SupplierRepository::new(db.clone()),
            events: EventRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            proposals: ProposalRepository::new(db.clone()),
            invoices: InvoiceRepository::new(db.clone()),
            estimates: CostEstimateRepository::new(db.clone()),
            deliveries: DeliveryRepository::new(db.clone()),
            assignments: AssignmentRepository::new(db.clone()),
            time_entries: TimeEntryRepository::new(db.clone()),
            purchase_orders: PurchaseOrderRepository::new(db),
            seed_password: config.seed_password.clone(),
        }
    }

    /// Wipe create-only tables, reverse dependency order.
    ///
    /// Users and staff survive — they are upserted by natural key.
    pub async fn wipe(&self) -> AppResult<()> {
        tracing::info!("Wiping existing sample data");

        // Commerce (deepest children first)
        self.invoices.clear().await?;
        self.proposals.clear().await?;
        self.estimates.clear().await?;

        // Operations
        self.deliveries.clear().await?;
        self.assignments.clear().await?;
        self.time_entries.clear().await?;
        self.purchase_orders.clear().await?;

        // Orders own their checklists and items
        self.orders.clear().await?;

        // Engagement
        self.events.clear().await?;

        // Catalog
        self.recipes.clear().await?;
        self.packages.clear().await?;
        self.menu_items.clear().await?;
        self.ingredients.clear().await?;
        self.equipment.clear().await?;
        self.vehicles.clear().await?;
        self.venues.clear().await?;
        self.suppliers.clear().await?;

        Ok(())
    }

    /// Full run: wipe, repopulate every table, print test credentials.
    pub async fn run(&self) -> AppResult<SeedSummary> {
        self.wipe().await?;

        tracing::info!("Seeding identity");
        identity::seed(&self.users, &self.staff, &self.seed_password).await?;

        tracing::info!("Seeding catalog");
        let catalog = catalog::seed(
            &self.venues,
            &self.menu_items,
            &self.packages,
            &self.ingredients,
            &self.recipes,
            &self.equipment,
            &self.vehicles,
            &self.suppliers,
        )
        .await?;

        tracing::info!("Seeding events");
        let clients = self
            .users
            .find_by_role(crate::db::models::UserRole::Client)
            .await?;
        let events =
            engagement::seed(&self.events, &self.assignments, &self.staff, &clients, &catalog)
                .await?;

        tracing::info!("Seeding commerce");
        commerce::seed(
            &self.orders,
            &self.proposals,
            &self.invoices,
            &self.estimates,
            &events,
            &catalog,
        )
        .await?;

        tracing::info!("Seeding operations");
        operations::seed(
            &self.deliveries,
            &self.time_entries,
            &self.purchase_orders,
            &self.staff,
            &events,
            &catalog,
        )
        .await?;

        let summary = self.summary().await?;
        summary.log();
        identity::print_test_credentials(&self.seed_password);
        Ok(summary)
    }

    /// Per-table row counts
    pub async fn summary(&self) -> AppResult<SeedSummary> {
        let tables = vec![
            ("user", self.users.count().await?),
            ("staff", self.staff.count().await?),
            ("venue", self.venues.count().await?),
            ("menu_item", self.menu_items.count().await?),
            ("menu_package", self.packages.count().await?),
            ("package_item", self.packages.count_items().await?),
            ("ingredient", self.ingredients.count().await?),
            ("recipe", self.recipes.count().await?),
            ("recipe_ingredient", self.recipes.count_ingredients().await?),
            ("equipment", self.equipment.count().await?),
            ("vehicle", self.vehicles.count().await?),
            ("supplier", self.suppliers.count().await?),
            ("event", self.events.count().await?),
            ("timeline_entry", self.events.count_timeline().await?),
            ("event_guest", self.events.count_guests().await?),
            ("event_photo", self.events.count_photos().await?),
            ("event_order", self.orders.count().await?),
            ("order_item", self.orders.count_items().await?),
            ("prep_list", self.orders.count_prep_lists().await?),
            ("prep_task", self.orders.count_prep_tasks().await?),
            ("pack_list", self.orders.count_pack_lists().await?),
            ("pack_item", self.orders.count_pack_items().await?),
            ("proposal", self.proposals.count().await?),
            ("proposal_menu", self.proposals.count_menus().await?),
            (
                "proposal_line_item",
                self.proposals.count_line_items().await?,
            ),
            ("invoice", self.invoices.count().await?),
            (
                "invoice_line_item",
                self.invoices.count_line_items().await?,
            ),
            ("payment", self.invoices.count_payments().await?),
            ("cost_estimate", self.estimates.count().await?),
            ("delivery", self.deliveries.count().await?),
            ("staff_assignment", self.assignments.count().await?),
            ("time_entry", self.time_entries.count().await?),
            ("purchase_order", self.purchase_orders.count().await?),
            (
                "purchase_order_item",
                self.purchase_orders.count_items().await?,
            ),
        ];
        Ok(SeedSummary { tables })
    }
}
