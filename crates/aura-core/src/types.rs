//! # Domain Types
//!
//! Core domain types used throughout the Agri Aura storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │     Product      │   │     CartLine     │   │      Order       │
//! │  ──────────────  │   │  ──────────────  │   │  ──────────────  │
//! │  id ("v1", ...)  │   │  product fields  │   │  id (ORD-NNNNNN) │
//! │  category        │   │  + quantity      │   │  lines, total    │
//! │  price (Rupees)  │   │  (snapshot)      │   │  status, address │
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//!
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │    BuyerTier     │   │      Offer       │   │   OrderStatus    │
//! │  Home (inc 1)    │   │  code, label     │   │  Processing      │
//! │  Bulk (inc 5)    │   │  target category │   │  Shipped         │
//! └──────────────────┘   └──────────────────┘   │  Delivered       │
//!                                               └──────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` carries a frozen copy of the product fields taken when the
//! line was created, so later catalog changes can never alter a cart or a
//! placed order retroactively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Rupees;
use crate::{BULK_INCREMENT, HOME_INCREMENT};

// =============================================================================
// Category
// =============================================================================

/// Product category. The set is closed; the catalog never invents new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Staples,
    Beverages,
    Organic,
    #[serde(rename = "Regional Org")]
    RegionalOrg,
}

impl Category {
    /// All categories in shop display order.
    pub const ALL: [Category; 7] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Organic,
        Category::RegionalOrg,
        Category::Dairy,
        Category::Staples,
        Category::Beverages,
    ];

    /// Human-readable label, matching the frontend chips.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Dairy => "Dairy",
            Category::Staples => "Staples",
            Category::Beverages => "Beverages",
            Category::Organic => "Organic",
            Category::RegionalOrg => "Regional Org",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Buyer Tier
// =============================================================================

/// The buyer tier, a property of the logged-in user (never of a product).
///
/// It determines the quantity increment applied on EVERY add/remove
/// operation and the bulk unit-price display multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BuyerTier {
    /// Household buyer: quantities move in steps of 1 base unit.
    #[default]
    Home,
    /// Bulk buyer (hotel, shop, caterer): steps of 5 base units.
    Bulk,
}

impl BuyerTier {
    /// The quantity increment for this tier.
    #[inline]
    pub const fn increment(&self) -> i64 {
        match self {
            BuyerTier::Home => HOME_INCREMENT,
            BuyerTier::Bulk => BULK_INCREMENT,
        }
    }
}

/// Kind of bulk buyer, informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BulkType {
    Hotel,
    Shop,
    #[serde(rename = "Function Catering")]
    FunctionCatering,
    #[serde(rename = "College Catering")]
    CollegeCatering,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable and owned by the catalog; the core only ever reads products.
/// `stock` and `rating` are informational — stock is NOT enforced on cart
/// operations (deliberate non-goal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, e.g. "v1" (vegetables), "s2" (staples).
    pub id: String,

    /// Display name shown in the shop grid.
    pub name: String,

    /// Category this product belongs to.
    pub category: Category,

    /// Price in whole rupees per base unit.
    pub price: Rupees,

    /// Base unit display string, e.g. "1kg" or "1L".
    pub unit: String,

    /// Marketing description.
    pub description: String,

    /// Informational stock level (not enforced).
    pub stock: i64,

    /// Informational star rating.
    pub rating: f32,

    /// Whether the product is flagged as a fresh harvest.
    pub is_fresh: bool,
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product snapshot plus a quantity; identity is the product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product id this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category at time of adding (frozen).
    pub category: Category,

    /// Price per base unit at time of adding (frozen).
    pub price: Rupees,

    /// Base unit display string at time of adding (frozen).
    pub unit: String,

    /// Quantity in base units; always a positive multiple of the tier
    /// increment that produced it.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line from a product snapshot and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            unit: product.unit.clone(),
            quantity,
        }
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Rupees {
        self.price * self.quantity
    }
}

// =============================================================================
// Offer / Voucher
// =============================================================================

/// A promotional offer from the voucher catalog.
///
/// `discount_label` is the advertised marketing copy; it does NOT drive the
/// computed discount (see [`crate::VOUCHER_DISCOUNT_BPS`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Offer {
    /// Offer identifier.
    pub id: String,

    /// Voucher code claimed by the user, e.g. "VEGIE30".
    pub code: String,

    /// Banner title, e.g. "Seasonal Veggie Feast".
    pub title: String,

    /// Banner subtitle.
    pub subtitle: String,

    /// Advertised discount copy, e.g. "30% FLAT OFF". Marketing only.
    pub discount_label: String,

    /// When set, claiming the offer auto-adds the first catalog product of
    /// this category to the committed cart.
    pub target_category: Option<Category>,
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of a past order.
///
/// The core only ever produces `Processing`; the later states exist for the
/// fulfilment pipeline to stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

/// Delivery schedule chosen in the cart drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliverySchedule {
    /// Chosen delivery date, e.g. "26 Aug 2026".
    pub date: String,

    /// Chosen time slot, e.g. "4:00 AM".
    pub slot: String,
}

impl DeliverySchedule {
    pub fn new(date: impl Into<String>, slot: impl Into<String>) -> Self {
        DeliverySchedule {
            date: date.into(),
            slot: slot.into(),
        }
    }

    /// Human-readable delivery estimate shown on order cards.
    pub fn label(&self) -> String {
        format!("Scheduled: {} at {}", self.date, self.slot)
    }
}

/// An immutable snapshot of a confirmed order.
///
/// Created only by [`crate::OrderLedger`] and never mutated afterward.
/// Lives in history indefinitely; there is no deletion operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Session-unique order id, e.g. "ORD-000001".
    pub id: String,

    /// Merged committed + staged lines at confirmation time.
    pub lines: Vec<CartLine>,

    /// Post-discount total, frozen at confirmation.
    pub total: Rupees,

    /// When the order was placed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Delivery address ("place, district").
    pub address: String,

    /// Chosen delivery date.
    pub delivery_date: String,

    /// Chosen delivery slot.
    pub delivery_slot: String,
}

impl Order {
    /// Delivery estimate label, e.g. "Scheduled: 26 Aug 2026 at 4:00 AM".
    pub fn delivery_label(&self) -> String {
        format!("Scheduled: {} at {}", self.delivery_date, self.delivery_slot)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
