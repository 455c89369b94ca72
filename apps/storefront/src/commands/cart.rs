//! # Cart Commands
//!
//! Cart mutations plus the cart-drawer lifecycle.
//!
//! ## Cart Drawer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Drawer Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────────┐                │
//! │  │  Shop    │────►│ Drawer Open  │────►│  Confirmed   │                │
//! │  │  Grid    │     │ (committed + │     │  (order.rs)  │                │
//! │  └──────────┘     │  staged)     │     └──────────────┘                │
//! │                   └──┬───────┬───┘                                      │
//! │   "add to basket"    │       │ close without confirming                 │
//! │         ┌────────────┘       ▼                                          │
//! │         ▼             staged lines DISCARDED,                           │
//! │   staged lines        committed lines survive                           │
//! │   fold into committed                                                   │
//! │                                                                         │
//! │  Staged lines come from reorder taps on past orders; they ride along    │
//! │  in the drawer (flagged pending) until confirmed or discarded.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::SessionState;
use aura_catalog::Catalog;
use aura_core::cart::DisplayLine;
use aura_core::pricing::{self, Totals};
use aura_core::validation::validate_product_id;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// Committed + staged lines, staged ones flagged pending.
    pub lines: Vec<DisplayLine>,

    /// Unique committed lines (the cart badge count).
    pub unique_count: usize,

    /// Totals over everything in the drawer.
    pub totals: Totals,
}

impl CartView {
    pub(crate) fn snapshot(session: &crate::state::Session) -> Self {
        let merged = session.cart.merged_lines();
        CartView {
            lines: session.cart.display_lines(),
            unique_count: session.cart.unique_count(),
            totals: pricing::quote(&merged, session.voucher.active()),
        }
    }
}

/// Gets the current cart contents and totals.
pub fn get_cart(session: &SessionState) -> CartView {
    debug!("get_cart command");
    session.with_session(CartView::snapshot)
}

/// Adds one tier increment of a product to the committed cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by the tier increment
/// - Otherwise: added as a new line with a frozen price snapshot
pub fn add_to_cart(
    session: &SessionState,
    catalog: &Catalog,
    product_id: &str,
) -> Result<CartView, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(session.with_session_mut(|s| {
        s.cart.add_line(product, s.tier());
        CartView::snapshot(s)
    }))
}

/// Removes one tier increment of a product from the committed cart.
///
/// Dropping to or below zero deletes the line; an absent line is a silent
/// no-op.
pub fn remove_from_cart(session: &SessionState, product_id: &str) -> Result<CartView, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "remove_from_cart command");

    Ok(session.with_session_mut(|s| {
        s.cart.remove_line(product_id, s.tier());
        CartView::snapshot(s)
    }))
}

/// Deletes a product line entirely, from both committed and staged.
pub fn delete_from_cart(session: &SessionState, product_id: &str) -> Result<CartView, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "delete_from_cart command");

    Ok(session.with_session_mut(|s| {
        s.cart.delete_line(product_id);
        CartView::snapshot(s)
    }))
}

/// Quick-buy from the bulk dashboard: same as an add, returned with the
/// drawer view so the UI can open straight into it.
pub fn quick_buy(
    session: &SessionState,
    catalog: &Catalog,
    product_id: &str,
) -> Result<CartView, ApiError> {
    debug!(product_id = %product_id, "quick_buy command");
    add_to_cart(session, catalog, product_id)
}

/// Commits the staged reorder lines into the cart proper ("add to basket").
///
/// Quantities accumulate into existing committed lines; the pending flag
/// disappears from the drawer view. No order is placed.
pub fn commit_staged(session: &SessionState) -> CartView {
    debug!("commit_staged command");

    session.with_session_mut(|s| {
        s.cart.merge_staged();
        CartView::snapshot(s)
    })
}

/// Closes the cart drawer without ordering: staged lines are discarded.
pub fn close_cart_drawer(session: &SessionState) -> CartView {
    debug!("close_cart_drawer command");

    session.with_session_mut(|s| {
        s.cart.discard_staged();
        CartView::snapshot(s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::User;
    use aura_core::types::{BulkType, BuyerTier};

    fn state(tier: BuyerTier) -> SessionState {
        SessionState::new(User {
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            phone: "9876543210".to_string(),
            state: "Tamil Nadu".to_string(),
            district: "Chennai".to_string(),
            taluk: "Egmore".to_string(),
            place: "12 Harvest Lane".to_string(),
            buyer_tier: tier,
            bulk_type: (tier == BuyerTier::Bulk).then_some(BulkType::Hotel),
        })
    }

    #[test]
    fn test_add_and_remove_follow_tier_increment() {
        let catalog = Catalog::new();
        let session = state(BuyerTier::Bulk);

        let view = add_to_cart(&session, &catalog, "v1").unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].line.quantity, 5);
        assert_eq!(view.unique_count, 1);

        let view = add_to_cart(&session, &catalog, "v1").unwrap();
        assert_eq!(view.lines[0].line.quantity, 10);

        let view = remove_from_cart(&session, "v1").unwrap();
        assert_eq!(view.lines[0].line.quantity, 5);

        // Last increment deletes the line
        let view = remove_from_cart(&session, "v1").unwrap();
        assert!(view.lines.is_empty());
        assert!(view.totals.total.is_zero());
    }

    #[test]
    fn test_unknown_product_rejected() {
        let catalog = Catalog::new();
        let session = state(BuyerTier::Home);

        let err = add_to_cart(&session, &catalog, "x99").unwrap_err();
        assert_eq!(err.message, "Product not found: x99");

        assert!(add_to_cart(&session, &catalog, "").is_err());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let session = state(BuyerTier::Home);
        let view = remove_from_cart(&session, "v1").unwrap();
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_close_drawer_discards_staged_only() {
        let catalog = Catalog::new();
        let session = state(BuyerTier::Home);

        add_to_cart(&session, &catalog, "v1").unwrap();
        session.with_session_mut(|s| {
            let product = catalog.find("d1").unwrap();
            s.cart.stage_reorder(product, s.tier());
        });

        assert_eq!(get_cart(&session).lines.len(), 2);

        let view = close_cart_drawer(&session);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].line.product_id, "v1");
        assert!(!view.lines[0].pending);
    }

    #[test]
    fn test_commit_staged_folds_lines_into_cart() {
        let catalog = Catalog::new();
        let session = state(BuyerTier::Home);

        add_to_cart(&session, &catalog, "v1").unwrap();
        session.with_session_mut(|s| {
            let same = catalog.find("v1").unwrap();
            let fresh = catalog.find("d1").unwrap();
            s.cart.stage_reorder(same, s.tier());
            s.cart.stage_reorder(fresh, s.tier());
        });

        let view = commit_staged(&session);

        // Duplicate accumulates, new line joins; nothing is pending anymore
        assert_eq!(view.lines.len(), 2);
        assert!(view.lines.iter().all(|l| !l.pending));
        let v1 = view
            .lines
            .iter()
            .find(|l| l.line.product_id == "v1")
            .unwrap();
        assert_eq!(v1.line.quantity, 2);
        assert_eq!(view.unique_count, 2);

        // Committed lines survive a drawer close
        let view = close_cart_drawer(&session);
        assert_eq!(view.lines.len(), 2);
    }

    #[test]
    fn test_delete_removes_staged_copy_too() {
        let catalog = Catalog::new();
        let session = state(BuyerTier::Home);

        add_to_cart(&session, &catalog, "v1").unwrap();
        session.with_session_mut(|s| {
            let product = catalog.find("v1").unwrap();
            s.cart.stage_reorder(product, s.tier());
        });

        let view = delete_from_cart(&session, "v1").unwrap();
        assert!(view.lines.is_empty());
    }
}
