//! Invoice Repository
//!
//! total = subtotal + tax_amount + gratuity, 创建时算定落库。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Event, Invoice, InvoiceCreate, InvoiceLineItem, Payment, PaymentMethod,
};
use crate::utils::money;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

const INVOICE_TABLE: &str = "invoice";
const INVOICE_LINE_ITEM_TABLE: &str = "invoice_line_item";
const PAYMENT_TABLE: &str = "payment";

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an invoice with its line items
    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        validate_required_text(&data.invoice_number, "invoice_number", MAX_NAME_LEN)?;
        if data.line_items.is_empty() {
            return Err(RepoError::Validation(
                "invoice needs at least one line item".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&data.tax_rate) {
            return Err(RepoError::Validation(format!(
                "tax_rate must be in [0, 1), got {}",
                data.tax_rate
            )));
        }
        money::validate_amount(data.gratuity, "gratuity")?;

        let event: Option<Event> = self.base.db().select(data.event.clone()).await?;
        if event.is_none() {
            return Err(RepoError::NotFound(format!(
                "Event {} not found",
                data.event
            )));
        }

        let mut line_totals = Vec::with_capacity(data.line_items.len());
        for (description, quantity, unit_price) in &data.line_items {
            money::validate_amount(*unit_price, description)?;
            if *quantity <= 0 {
                return Err(RepoError::Validation(format!(
                    "quantity for '{description}' must be positive, got {quantity}"
                )));
            }
            line_totals.push(money::line_total(*unit_price, *quantity));
        }

        let subtotal = money::sum(line_totals.iter().copied());
        let tax_amount = money::round2(subtotal * data.tax_rate);
        let total = money::sum([subtotal, tax_amount, data.gratuity]);

        let invoice = Invoice {
            id: None,
            event: data.event,
            invoice_number: data.invoice_number,
            status: data.status,
            issued_at: data.issued_at,
            due_at: data.due_at,
            subtotal,
            tax_amount,
            gratuity: data.gratuity,
            total,
        };
        let created: Option<Invoice> = self
            .base
            .db()
            .create(INVOICE_TABLE)
            .content(invoice)
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create invoice".to_string()))?;
        let invoice_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Invoice row without id".to_string()))?;

        for ((description, quantity, unit_price), line_total) in
            data.line_items.into_iter().zip(line_totals)
        {
            let item = InvoiceLineItem {
                id: None,
                invoice: invoice_id.clone(),
                description,
                quantity,
                unit_price,
                line_total,
            };
            let _: Option<InvoiceLineItem> = self
                .base
                .db()
                .create(INVOICE_LINE_ITEM_TABLE)
                .content(item)
                .await?;
        }

        Ok(created)
    }

    /// Record a payment against an invoice
    pub async fn add_payment(
        &self,
        invoice: &RecordId,
        amount: f64,
        method: PaymentMethod,
        paid_at: i64,
        reference: Option<String>,
    ) -> RepoResult<Payment> {
        money::validate_amount(amount, "payment amount")?;

        let existing: Option<Invoice> = self.base.db().select(invoice.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!(
                "Invoice {invoice} not found"
            )));
        }

        let payment = Payment {
            id: None,
            invoice: invoice.clone(),
            amount,
            method,
            paid_at,
            reference,
        };
        let created: Option<Payment> = self
            .base
            .db()
            .create(PAYMENT_TABLE)
            .content(payment)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Invoice>> {
        let invoices: Vec<Invoice> = self
            .base
            .db()
            .query("SELECT * FROM invoice ORDER BY invoice_number")
            .await?
            .take(0)?;
        Ok(invoices)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(INVOICE_TABLE).await
    }

    pub async fn count_line_items(&self) -> RepoResult<usize> {
        self.base.count_table(INVOICE_LINE_ITEM_TABLE).await
    }

    pub async fn count_payments(&self) -> RepoResult<usize> {
        self.base.count_table(PAYMENT_TABLE).await
    }

    /// Remove invoices, their line items, and payments (children first)
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PAYMENT_TABLE).await?;
        self.base.clear_table(INVOICE_LINE_ITEM_TABLE).await?;
        self.base.clear_table(INVOICE_TABLE).await
    }
}
