//! # Cart Store
//!
//! The two-collection cart: *committed* lines from direct add/remove/quick-buy
//! actions, and *staged* lines queued from basket-history reorder actions,
//! kept separate until explicitly merged.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Operations                          │
//! │                                                                     │
//! │  Shop action                 Operation             Collection       │
//! │  ───────────                 ─────────             ──────────       │
//! │  Tap product / +       ────► add_line()       ────► committed       │
//! │  Tap −                 ────► remove_line()    ────► committed       │
//! │  Tap ✕ on a line       ────► delete_line()    ────► BOTH            │
//! │  "Add to Basket" (one) ────► stage_reorder()  ────► staged          │
//! │  "ADD BASKET" (whole)  ────► stage_basket()   ────► staged          │
//! │  "ADD TO BASKET" btn   ────► merge_staged()   ────► staged→committed│
//! │                                                                     │
//! │  INVARIANT: within one collection each product id appears at most   │
//! │  once; repeated adds accumulate quantity instead of duplicating.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities always move in steps of the current buyer tier's increment,
//! so under inc-aligned inputs every quantity is a positive multiple of
//! that increment and a line disappears exactly when it would reach zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{BuyerTier, CartLine, Product};

/// A cart line tagged with its collection, for display only.
///
/// Staged lines render as visually distinct "pending" entries below the
/// committed ones. This view is never used for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplayLine {
    #[serde(flatten)]
    pub line: CartLine,

    /// True when the line lives in the staged collection.
    pub pending: bool,
}

/// The two-collection cart store.
///
/// ## Ownership
/// CartStore exclusively owns both collections. Pricing reads them through
/// [`CartStore::display_lines`] / [`CartStore::merged_lines`] and never
/// mutates; the ledger takes a merged snapshot copy at confirmation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    /// Lines from direct add/remove/quick-buy actions.
    committed: Vec<CartLine>,

    /// Lines queued from reorder / add-whole-basket actions.
    staged: Vec<CartLine>,
}

/// Folds one line into a collection: accumulate quantity when the product
/// id already exists, otherwise append (preserving insertion order).
fn accumulate(lines: &mut Vec<CartLine>, incoming: CartLine) {
    if let Some(existing) = lines.iter_mut().find(|l| l.product_id == incoming.product_id) {
        existing.quantity += incoming.quantity;
    } else {
        lines.push(incoming);
    }
}

impl CartStore {
    /// Creates an empty cart store.
    pub fn new() -> Self {
        CartStore::default()
    }

    // =========================================================================
    // Committed-collection operations
    // =========================================================================

    /// Adds a product to the committed cart, stepping by the tier increment.
    ///
    /// ## Behavior
    /// - Already in committed: quantity += increment
    /// - Not in committed: inserted with quantity = increment
    ///
    /// No upper bound: the product's stock field is informational only.
    pub fn add_line(&mut self, product: &Product, tier: BuyerTier) {
        accumulate(
            &mut self.committed,
            CartLine::from_product(product, tier.increment()),
        );
    }

    /// Steps a committed line down by the tier increment.
    ///
    /// ## Behavior
    /// - quantity > increment: quantity -= increment
    /// - quantity <= increment: the line is deleted entirely
    /// - id absent: no-op (treated as already removed)
    ///
    /// Quantity therefore never goes negative and stays a multiple of the
    /// increment given inc-aligned inputs.
    pub fn remove_line(&mut self, product_id: &str, tier: BuyerTier) {
        let inc = tier.increment();
        if let Some(line) = self.committed.iter_mut().find(|l| l.product_id == product_id) {
            if line.quantity > inc {
                line.quantity -= inc;
            } else {
                self.committed.retain(|l| l.product_id != product_id);
            }
        }
    }

    /// Unconditionally removes a product id from BOTH collections.
    ///
    /// The only operation that touches committed and staged together.
    pub fn delete_line(&mut self, product_id: &str) {
        self.committed.retain(|l| l.product_id != product_id);
        self.staged.retain(|l| l.product_id != product_id);
    }

    // =========================================================================
    // Staged-collection operations
    // =========================================================================

    /// Stages one product from a past order, stepping by the tier increment.
    ///
    /// Same accumulate-or-insert rule as [`CartStore::add_line`], but into
    /// the staged collection.
    pub fn stage_reorder(&mut self, product: &Product, tier: BuyerTier) {
        accumulate(
            &mut self.staged,
            CartLine::from_product(product, tier.increment()),
        );
    }

    /// Stages a whole past basket, folding each line in one at a time.
    ///
    /// Quantities come from the past order, not from the tier increment.
    /// Insertion order is preserved for ids new to the staged collection.
    pub fn stage_basket(&mut self, lines: &[CartLine]) {
        for line in lines {
            accumulate(&mut self.staged, line.clone());
        }
    }

    /// Discards the staged collection without committing it.
    ///
    /// Happens when the cart drawer is closed with pending lines still
    /// unconfirmed.
    pub fn discard_staged(&mut self) {
        self.staged.clear();
    }

    /// Merges every staged line into committed, then empties staged.
    ///
    /// Accumulation is associative and commutative per id, so the result is
    /// independent of staged ordering; with an empty staged collection the
    /// call is a no-op, which makes the operation idempotent in effect.
    pub fn merge_staged(&mut self) {
        for line in self.staged.drain(..) {
            accumulate(&mut self.committed, line);
        }
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    /// The committed lines, in insertion order.
    pub fn committed(&self) -> &[CartLine] {
        &self.committed
    }

    /// The staged lines, in insertion order.
    pub fn staged(&self) -> &[CartLine] {
        &self.staged
    }

    /// Display view: committed lines followed by staged lines flagged as
    /// pending. Used for totals and rendering only, never for storage.
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        self.committed
            .iter()
            .cloned()
            .map(|line| DisplayLine {
                line,
                pending: false,
            })
            .chain(self.staged.iter().cloned().map(|line| DisplayLine {
                line,
                pending: true,
            }))
            .collect()
    }

    /// Merged committed + staged snapshot WITHOUT mutating the live store.
    ///
    /// This is what the ledger prices and freezes at confirmation time.
    pub fn merged_lines(&self) -> Vec<CartLine> {
        let mut merged = self.committed.clone();
        for line in &self.staged {
            accumulate(&mut merged, line.clone());
        }
        merged
    }

    /// Quantity of a committed line, if present.
    pub fn committed_quantity(&self, product_id: &str) -> Option<i64> {
        self.committed
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
    }

    /// Number of unique committed lines (the cart badge count).
    pub fn unique_count(&self) -> usize {
        self.committed.len()
    }

    /// True when both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.staged.is_empty()
    }

    /// Clears both collections. Part of the order-placement transaction.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.staged.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
