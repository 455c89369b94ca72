//! # aura-core: Pure Business Logic for Agri Aura
//!
//! This crate is the **heart** of the Agri Aura storefront. It owns the
//! cart/pricing/order lifecycle as pure data structures and functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Agri Aura Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Frontend (TypeScript)                         │ │
//! │  │   Shop Grid ──► Cart Drawer ──► Checkout ──► Basket History   │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              apps/storefront (orchestrator)                   │ │
//! │  │   add_to_cart, apply_voucher, confirm_order, ...              │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ aura-core (THIS CRATE) ★                       │ │
//! │  │                                                               │ │
//! │  │   ┌────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐  │ │
//! │  │   │ types  │ │  money  │ │  cart   │ │ voucher │ │ ledger │  │ │
//! │  │   │Product │ │ Rupees  │ │CartStore│ │ Voucher │ │ Order  │  │ │
//! │  │   │CartLine│ │ pricing │ │committed│ │ Engine  │ │ Ledger │  │ │
//! │  │   └────────┘ └─────────┘ │ +staged │ └─────────┘ └────────┘  │ │
//! │  │                          └─────────┘                          │ │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                        │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Offer, Order, etc.)
//! - [`money`] - Integer-rupee money type (no floating point!)
//! - [`pricing`] - Pure totals computation and bulk display pricing
//! - [`cart`] - The two-collection cart store (committed + staged)
//! - [`voucher`] - Single-active-voucher engine with claim side effect
//! - [`ledger`] - Order placement transaction and append-only history
//! - [`validation`] - Input validation for the command layer
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Integer Money**: prices are whole rupees (i64), never floats
//! 4. **Explicit Errors**: typed errors, never strings or panics

pub mod cart;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod voucher;

pub use cart::{CartStore, DisplayLine};
pub use error::{CoreError, ValidationError};
pub use ledger::OrderLedger;
pub use money::Rupees;
pub use types::*;
pub use voucher::VoucherEngine;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity increment for home buyers.
pub const HOME_INCREMENT: i64 = 1;

/// Quantity increment for bulk buyers (hotels, shops, caterers).
///
/// Bulk buyers always add and remove in steps of 5 base units; the same
/// factor scales the displayed unit price ("1kg" becomes "5kg").
pub const BULK_INCREMENT: i64 = 5;

/// Voucher discount in basis points (1500 = 15%).
///
/// The discount is a flat 15% for ANY active voucher, regardless of the
/// label the offer advertises ("30% FLAT OFF", "SAVE ₹250 NOW", ...).
/// The offer metadata was never wired to the computation and keeping the
/// flat rate is a deliberate product decision, not an oversight to fix.
pub const VOUCHER_DISCOUNT_BPS: u32 = 1500;
