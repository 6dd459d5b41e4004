//! Supplier and Purchase Order Repositories

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderItem, Supplier,
};
use crate::utils::money;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};

const SUPPLIER_TABLE: &str = "supplier";
const PURCHASE_ORDER_TABLE: &str = "purchase_order";
const PURCHASE_ORDER_ITEM_TABLE: &str = "purchase_order_item";

// =============================================================================
// Supplier Repository
// =============================================================================

#[derive(Clone)]
pub struct SupplierRepository {
    base: BaseRepository,
}

impl SupplierRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, supplier: Supplier) -> RepoResult<Supplier> {
        validate_required_text(&supplier.name, "supplier name", MAX_NAME_LEN)?;
        validate_optional_text(&supplier.email, "email", MAX_NAME_LEN)?;

        let created: Option<Supplier> = self
            .base
            .db()
            .create(SUPPLIER_TABLE)
            .content(supplier)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create supplier".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Supplier>> {
        let suppliers: Vec<Supplier> = self
            .base
            .db()
            .query("SELECT * FROM supplier WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(suppliers)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(SUPPLIER_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(SUPPLIER_TABLE).await
    }
}

// =============================================================================
// Purchase Order Repository (owns the line items)
// =============================================================================

#[derive(Clone)]
pub struct PurchaseOrderRepository {
    base: BaseRepository,
}

impl PurchaseOrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a purchase order with its line items; the stored total is
    /// the sum of the item line totals, computed here once.
    pub async fn create(&self, data: PurchaseOrderCreate) -> RepoResult<PurchaseOrder> {
        validate_required_text(&data.po_number, "po_number", MAX_NAME_LEN)?;
        if data.items.is_empty() {
            return Err(RepoError::Validation(
                "purchase order needs at least one item".to_string(),
            ));
        }

        let supplier: Option<Supplier> = self.base.db().select(data.supplier.clone()).await?;
        if supplier.is_none() {
            return Err(RepoError::NotFound(format!(
                "Supplier {} not found",
                data.supplier
            )));
        }

        let mut line_totals = Vec::with_capacity(data.items.len());
        for (description, quantity, _unit, unit_cost) in &data.items {
            money::validate_amount(*unit_cost, description)?;
            if *quantity <= 0.0 {
                return Err(RepoError::Validation(format!(
                    "quantity for '{description}' must be positive, got {quantity}"
                )));
            }
            line_totals.push(money::round2(unit_cost * quantity));
        }
        let total = money::sum(line_totals.iter().copied());

        let po = PurchaseOrder {
            id: None,
            supplier: data.supplier,
            po_number: data.po_number,
            status: data.status,
            ordered_at: data.ordered_at,
            expected_at: data.expected_at,
            total,
        };
        let created: Option<PurchaseOrder> = self
            .base
            .db()
            .create(PURCHASE_ORDER_TABLE)
            .content(po)
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create purchase order".to_string()))?;
        let po_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Purchase order row without id".to_string()))?;

        for ((description, quantity, unit, unit_cost), line_total) in
            data.items.into_iter().zip(line_totals)
        {
            let item = PurchaseOrderItem {
                id: None,
                purchase_order: po_id.clone(),
                description,
                quantity,
                unit,
                unit_cost,
                line_total,
            };
            let _: Option<PurchaseOrderItem> = self
                .base
                .db()
                .create(PURCHASE_ORDER_ITEM_TABLE)
                .content(item)
                .await?;
        }

        Ok(created)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(PURCHASE_ORDER_TABLE).await
    }

    pub async fn count_items(&self) -> RepoResult<usize> {
        self.base.count_table(PURCHASE_ORDER_ITEM_TABLE).await
    }

    /// Remove purchase orders and their line items
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PURCHASE_ORDER_ITEM_TABLE).await?;
        self.base.clear_table(PURCHASE_ORDER_TABLE).await
    }
}
