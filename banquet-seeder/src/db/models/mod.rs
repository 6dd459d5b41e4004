//! Database Models
//!
//! Typed rows for every table in the Banquet catering schema. Foreign-key
//! edges are `surrealdb::RecordId` record links; statuses serialize as
//! SCREAMING_SNAKE_CASE strings; money is `f64` (computed through
//! [`crate::utils::money`]); timestamps are Unix millis (`i64`).

pub mod serde_helpers;

// Identity
pub mod staff;
pub mod user;

// Catalog
pub mod logistics;
pub mod menu;
pub mod recipe;
pub mod supplier;
pub mod venue;

// Engagement
pub mod event;

// Commerce
pub mod cost_estimate;
pub mod invoice;
pub mod order;
pub mod proposal;

// Operations
pub mod assignment;
pub mod checklist;
pub mod delivery;
pub mod time_entry;

pub use assignment::StaffAssignment;
pub use checklist::{ChecklistStatus, PackItem, PackList, PrepList, PrepTask};
pub use cost_estimate::{CostEstimate, CostEstimateStatus};
pub use delivery::{Delivery, DeliveryStatus};
pub use event::{Event, EventGuest, EventPhoto, EventStatus, TimelineEntry};
pub use invoice::{Invoice, InvoiceCreate, InvoiceLineItem, InvoiceStatus, Payment, PaymentMethod};
pub use logistics::{Equipment, Vehicle};
pub use menu::{MenuCategory, MenuItem, MenuPackage, PackageItem};
pub use order::{Order, OrderCreate, OrderItem, OrderStatus};
pub use proposal::{Proposal, ProposalCreate, ProposalLineItem, ProposalMenu, ProposalStatus};
pub use recipe::{Ingredient, Recipe, RecipeIngredient};
pub use staff::{Staff, StaffCreate};
pub use supplier::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderItem, PurchaseOrderStatus, Supplier,
};
pub use time_entry::{TimeEntry, TimeEntryCreate};
pub use user::{User, UserCreate, UserRole};
pub use venue::Venue;
