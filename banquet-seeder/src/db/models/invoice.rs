//! Invoice and Payment Models (发票与收款)
//!
//! 发票不重复推导: total = subtotal + tax_amount + gratuity 在创建时
//! 计算一次并落库。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type InvoiceId = RecordId;

/// Invoice lifecycle: DRAFT → SENT → VIEWED → {PARTIALLY_PAID → PAID | OVERDUE}
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Viewed,
    PartiallyPaid,
    Paid,
    Overdue,
}

/// Invoice for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InvoiceId>,
    pub event: RecordId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issued_at: i64,
    pub due_at: i64,
    /// Sum of line item totals
    pub subtotal: f64,
    pub tax_amount: f64,
    pub gratuity: f64,
    /// subtotal + tax_amount + gratuity, fixed at creation
    pub total: f64,
}

/// Invoice line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub invoice: RecordId,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    BankTransfer,
    Check,
    Cash,
}

/// Payment received against an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub invoice: RecordId,
    pub amount: f64,
    pub method: PaymentMethod,
    pub paid_at: i64,
    pub reference: Option<String>,
}

/// Create payload: tax rate and gratuity applied to the line item sum
#[derive(Debug, Clone)]
pub struct InvoiceCreate {
    pub event: RecordId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issued_at: i64,
    pub due_at: i64,
    /// e.g. 0.09 for 9% sales tax
    pub tax_rate: f64,
    pub gratuity: f64,
    /// (description, quantity, unit_price)
    pub line_items: Vec<(String, i32, f64)>,
}
