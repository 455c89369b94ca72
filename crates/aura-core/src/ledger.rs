//! # Order Ledger
//!
//! Converts a finalized cart snapshot into an immutable [`Order`], appends
//! it to history, and resets the transient cart/voucher state — one logical
//! transaction.
//!
//! ## Placement Transaction
//! ```text
//! place_order(cart, voucher, schedule, address)
//!      │
//!      ├── 1. merge committed + staged (snapshot, live store untouched)
//!      ├── 2. merged empty? ──► None (no-op, nothing changes)
//!      ├── 3. price merged lines under the active voucher
//!      ├── 4. allocate ORD-NNNNNN, stamp now, status Processing,
//!      │      prepend to history (most recent first)
//!      └── 5. clear cart (both collections) + clear voucher
//! ```
//!
//! Steps 4–5 are infallible, so the transaction cannot be observed
//! half-applied. History is append-only: nothing deletes or mutates a past
//! order; reorder actions only READ a past order's lines.

use chrono::Utc;

use crate::cart::CartStore;
use crate::pricing;
use crate::types::{DeliverySchedule, Order, OrderStatus};
use crate::voucher::VoucherEngine;

/// Append-only order history plus the session-unique id allocator.
///
/// ## Id Allocation
/// Ids are `ORD-NNNNNN` from a monotonically increasing session counter.
/// The original frontend used a random base-36 string; the counter gives
/// the same session-unique guarantee deterministically.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    /// Most recent order first.
    orders: Vec<Order>,

    /// Last allocated order sequence number.
    last_seq: u64,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger::default()
    }

    /// Places an order from the current cart + voucher state.
    ///
    /// Returns the placed order, or `None` when the merged cart is empty
    /// (a silent no-op: nothing is created and no state changes).
    ///
    /// On success the cart (both collections) and the active voucher are
    /// cleared as part of the same logical transaction; the returned order
    /// is already in history at index 0.
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        voucher: &mut VoucherEngine,
        schedule: &DeliverySchedule,
        address: &str,
    ) -> Option<Order> {
        let lines = cart.merged_lines();
        if lines.is_empty() {
            return None;
        }

        let totals = pricing::quote(&lines, voucher.active());

        self.last_seq += 1;
        let order = Order {
            id: format!("ORD-{:06}", self.last_seq),
            lines,
            total: totals.total,
            placed_at: Utc::now(),
            status: OrderStatus::Processing,
            address: address.to_string(),
            delivery_date: schedule.date.clone(),
            delivery_slot: schedule.slot.clone(),
        };

        self.orders.insert(0, order.clone());
        cart.clear();
        voucher.clear();

        Some(order)
    }

    /// Order history, most recent first.
    pub fn history(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up a past order by id (for whole-basket reorders).
    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
