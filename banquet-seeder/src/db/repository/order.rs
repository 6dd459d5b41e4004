//! Order Repository
//!
//! 下单时校验活动人数落在套餐区间内 (硬校验), 金额在创建时一次算定。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    ChecklistStatus, Event, MenuPackage, Order, OrderCreate, OrderItem, PackItem, PackList,
    PrepList, PrepTask,
};
use crate::utils::money;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

const ORDER_TABLE: &str = "event_order";
const ORDER_ITEM_TABLE: &str = "order_item";
const PREP_LIST_TABLE: &str = "prep_list";
const PREP_TASK_TABLE: &str = "prep_task";
const PACK_LIST_TABLE: &str = "pack_list";
const PACK_ITEM_TABLE: &str = "pack_item";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an order with its extra line items.
    ///
    /// The package price-per-person is snapshotted; totals are computed
    /// here and never re-derived.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;

        let event: Option<Event> = self.base.db().select(data.event.clone()).await?;
        let event = event
            .ok_or_else(|| RepoError::NotFound(format!("Event {} not found", data.event)))?;

        let package: Option<MenuPackage> = self.base.db().select(data.package.clone()).await?;
        let package = package
            .ok_or_else(|| RepoError::NotFound(format!("Package {} not found", data.package)))?;

        if !package.accepts_guest_count(event.guest_count) {
            return Err(RepoError::Validation(format!(
                "Event '{}' has {} guests, outside package '{}' range [{}, {}]",
                event.name,
                event.guest_count,
                package.name,
                package.min_guests,
                package.max_guests
            )));
        }

        let mut line_totals = Vec::with_capacity(data.items.len());
        for (name, quantity, unit_price) in &data.items {
            money::validate_amount(*unit_price, name)?;
            if *quantity <= 0 {
                return Err(RepoError::Validation(format!(
                    "quantity for '{name}' must be positive, got {quantity}"
                )));
            }
            line_totals.push(money::line_total(*unit_price, *quantity));
        }

        let package_subtotal = money::line_total(package.price_per_person, event.guest_count);
        let total = money::sum(
            std::iter::once(package_subtotal).chain(line_totals.iter().copied()),
        );

        let order = Order {
            id: None,
            event: data.event,
            client: event.client.clone(),
            package: data.package,
            status: data.status,
            guest_count: event.guest_count,
            price_per_person: package.price_per_person,
            package_subtotal,
            total,
            placed_at: data.placed_at,
            notes: data.notes,
        };
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))?;
        let order_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Order row without id".to_string()))?;

        for ((name, quantity, unit_price), line_total) in data.items.into_iter().zip(line_totals) {
            let item = OrderItem {
                id: None,
                event_order: order_id.clone(),
                name,
                quantity,
                unit_price,
                line_total,
            };
            let _: Option<OrderItem> = self
                .base
                .db()
                .create(ORDER_ITEM_TABLE)
                .content(item)
                .await?;
        }

        Ok(created)
    }

    /// Attach a prep checklist to an order
    pub async fn attach_prep_list(
        &self,
        order: &RecordId,
        status: ChecklistStatus,
        due_at: i64,
        tasks: Vec<(String, i32, bool)>,
    ) -> RepoResult<PrepList> {
        let list = PrepList {
            id: None,
            event_order: order.clone(),
            status,
            due_at,
        };
        let created: Option<PrepList> = self
            .base
            .db()
            .create(PREP_LIST_TABLE)
            .content(list)
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create prep list".to_string()))?;
        let list_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Prep list row without id".to_string()))?;

        for (task, quantity, done) in tasks {
            let row = PrepTask {
                id: None,
                prep_list: list_id.clone(),
                task,
                quantity,
                done,
            };
            let _: Option<PrepTask> = self
                .base
                .db()
                .create(PREP_TASK_TABLE)
                .content(row)
                .await?;
        }
        Ok(created)
    }

    /// Attach a packing checklist to an order
    pub async fn attach_pack_list(
        &self,
        order: &RecordId,
        status: ChecklistStatus,
        items: Vec<(String, i32, bool)>,
    ) -> RepoResult<PackList> {
        let list = PackList {
            id: None,
            event_order: order.clone(),
            status,
        };
        let created: Option<PackList> = self
            .base
            .db()
            .create(PACK_LIST_TABLE)
            .content(list)
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create pack list".to_string()))?;
        let list_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Pack list row without id".to_string()))?;

        for (item, quantity, packed) in items {
            let row = PackItem {
                id: None,
                pack_list: list_id.clone(),
                item,
                quantity,
                packed,
            };
            let _: Option<PackItem> = self
                .base
                .db()
                .create(PACK_ITEM_TABLE)
                .content(row)
                .await?;
        }
        Ok(created)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM event_order ORDER BY placed_at")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(ORDER_TABLE).await
    }

    pub async fn count_items(&self) -> RepoResult<usize> {
        self.base.count_table(ORDER_ITEM_TABLE).await
    }

    pub async fn count_prep_lists(&self) -> RepoResult<usize> {
        self.base.count_table(PREP_LIST_TABLE).await
    }

    pub async fn count_prep_tasks(&self) -> RepoResult<usize> {
        self.base.count_table(PREP_TASK_TABLE).await
    }

    pub async fn count_pack_lists(&self) -> RepoResult<usize> {
        self.base.count_table(PACK_LIST_TABLE).await
    }

    pub async fn count_pack_items(&self) -> RepoResult<usize> {
        self.base.count_table(PACK_ITEM_TABLE).await
    }

    /// Remove orders, their line items, and both checklists (children first)
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PREP_TASK_TABLE).await?;
        self.base.clear_table(PREP_LIST_TABLE).await?;
        self.base.clear_table(PACK_ITEM_TABLE).await?;
        self.base.clear_table(PACK_LIST_TABLE).await?;
        self.base.clear_table(ORDER_ITEM_TABLE).await?;
        self.base.clear_table(ORDER_TABLE).await
    }
}
