//! # Order Commands
//!
//! Order confirmation, history, reorder staging, and delivery scheduling.
//!
//! ## Confirmation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  confirm_order                                                          │
//! │       │                                                                 │
//! │       ├── phase == Placing? ──────────► AlreadyPlacing (no change)      │
//! │       ├── merged cart empty? ─────────► EmptyCart      (no change)      │
//! │       │                                                                 │
//! │       ▼  phase := Placing, lock released                                │
//! │  sleep(placement_latency)          ◄── session stays browsable          │
//! │       │                                                                 │
//! │       ▼  lock reacquired                                                │
//! │  ledger.place_order(cart, voucher, schedule, address)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  phase := Idle, success notice posted (expires after TTL)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::cart::CartView;
use crate::error::ApiError;
use crate::state::{
    delivery_window, DeliveryDate, OrderNotice, PlacementPhase, SessionState, StoreConfig,
    TimeSlot,
};
use aura_core::types::Order;
use aura_core::validation::validate_product_id;

/// Result of a confirmation attempt.
///
/// Guard failures are outcomes, not errors: a double-tap on the confirm
/// button is expected behavior, not something to toast about.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum ConfirmOutcome {
    /// The order is in history; the cart and voucher were reset.
    Placed { order: Order },

    /// Nothing in the cart; no state changed.
    EmptyCart,

    /// A confirmation is already in flight; this one was rejected.
    AlreadyPlacing,
}

/// The live success notification.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NoticeView {
    pub order_id: String,
}

/// Delivery picker contents.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryOptions {
    pub dates: Vec<DeliveryDate>,
    pub slots: Vec<SlotView>,
}

/// A selectable time slot.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SlotView {
    pub label: String,
    pub time: String,
}

/// Confirms the order currently in the drawer.
///
/// The session mutex is NOT held across the latency sleep; only the
/// `Placing` phase guards against concurrent confirms.
pub async fn confirm_order(session: &SessionState, config: &StoreConfig) -> ConfirmOutcome {
    // Guard + phase transition under one lock
    let guarded = session.with_session_mut(|s| {
        if s.phase == PlacementPhase::Placing {
            return Some(ConfirmOutcome::AlreadyPlacing);
        }
        if s.cart.merged_lines().is_empty() {
            return Some(ConfirmOutcome::EmptyCart);
        }
        s.phase = PlacementPhase::Placing;
        None
    });
    if let Some(outcome) = guarded {
        debug!(?outcome, "confirm_order rejected by guard");
        return outcome;
    }

    // Simulated farm round-trip
    sleep(config.placement_latency).await;

    session.with_session_mut(|s| {
        let schedule = s.schedule.clone();
        let address = s.user.delivery_address();

        let crate::state::Session {
            cart,
            voucher,
            ledger,
            ..
        } = s;
        let placed = ledger.place_order(cart, voucher, &schedule, &address);

        s.phase = PlacementPhase::Idle;

        match placed {
            Some(order) => {
                info!(order_id = %order.id, total = %order.total, "order placed");
                s.notice = Some(OrderNotice::new(order.id.clone(), config.notice_ttl));
                ConfirmOutcome::Placed { order }
            }
            // Cart drained between guard and placement (delete commands
            // can run during the latency window)
            None => ConfirmOutcome::EmptyCart,
        }
    })
}

/// Order history, most recent first.
pub fn order_history(session: &SessionState) -> Vec<Order> {
    debug!("order_history command");
    session.with_session(|s| s.ledger.history().to_vec())
}

/// The success notification if it hasn't expired yet.
pub fn current_notice(session: &SessionState) -> Option<NoticeView> {
    session.with_session_mut(|s| {
        s.active_notice().map(|n| NoticeView {
            order_id: n.order_id.clone(),
        })
    })
}

/// Stages one tier increment of a single past-order product.
pub fn stage_reorder_item(
    session: &SessionState,
    catalog: &aura_catalog::Catalog,
    product_id: &str,
) -> Result<CartView, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "stage_reorder_item command");

    let product = catalog
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(session.with_session_mut(|s| {
        s.cart.stage_reorder(product, s.tier());
        CartView::snapshot(s)
    }))
}

/// Stages a whole past order's basket for reorder.
pub fn stage_order_basket(session: &SessionState, order_id: &str) -> Result<CartView, ApiError> {
    debug!(order_id = %order_id, "stage_order_basket command");

    session.with_session_mut(|s| {
        let lines = s
            .ledger
            .find(order_id)
            .map(|o| o.lines.clone())
            .ok_or_else(|| ApiError::not_found("Order", order_id))?;

        s.cart.stage_basket(&lines);
        Ok(CartView::snapshot(s))
    })
}

/// Dates and slots offered in the cart drawer.
pub fn delivery_options() -> DeliveryOptions {
    DeliveryOptions {
        dates: delivery_window(chrono::Utc::now()),
        slots: TimeSlot::ALL
            .iter()
            .map(|slot| SlotView {
                label: slot.label().to_string(),
                time: slot.time().to_string(),
            })
            .collect(),
    }
}

/// Selects a delivery date; must be inside the current four-day window.
pub fn select_delivery_date(session: &SessionState, date: &str) -> Result<(), ApiError> {
    let window = delivery_window(chrono::Utc::now());
    if !window.iter().any(|d| d.full == date) {
        return Err(ApiError::validation(format!(
            "Delivery date out of window: {}",
            date
        )));
    }

    session.with_session_mut(|s| s.schedule.date = date.to_string());
    Ok(())
}

/// Selects a delivery time slot.
pub fn select_delivery_slot(session: &SessionState, slot: TimeSlot) {
    session.with_session_mut(|s| s.schedule.slot = slot.time().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::voucher::apply_voucher;
    use crate::state::User;
    use aura_catalog::{Catalog, OfferBook};
    use aura_core::types::{BuyerTier, OrderStatus};
    use std::time::Duration;

    fn state() -> SessionState {
        SessionState::new(User {
            name: "Meera K".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9876543210".to_string(),
            state: "Tamil Nadu".to_string(),
            district: "Chennai".to_string(),
            taluk: "Egmore".to_string(),
            place: "12 Harvest Lane".to_string(),
            buyer_tier: BuyerTier::Home,
            bulk_type: None,
        })
    }

    fn fast_config() -> StoreConfig {
        StoreConfig {
            store_name: "Agri Aura".to_string(),
            placement_latency: Duration::from_millis(5),
            notice_ttl: Duration::from_millis(50),
        }
    }

    #[tokio::test]
    async fn test_confirm_empty_cart() {
        let session = state();
        let outcome = confirm_order(&session, &fast_config()).await;

        assert!(matches!(outcome, ConfirmOutcome::EmptyCart));
        assert!(order_history(&session).is_empty());
        assert!(current_notice(&session).is_none());
    }

    #[tokio::test]
    async fn test_confirm_places_order_and_resets() {
        let catalog = Catalog::new();
        let session = state();
        let config = fast_config();

        add_to_cart(&session, &catalog, "v1").unwrap();
        add_to_cart(&session, &catalog, "v1").unwrap();

        let outcome = confirm_order(&session, &config).await;
        let ConfirmOutcome::Placed { order } = outcome else {
            panic!("expected Placed");
        };

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.address, "12 Harvest Lane, Chennai");
        assert_eq!(order.delivery_slot, "4:00 AM");
        assert_eq!(order_history(&session)[0].id, order.id);

        // Cart and phase reset; notice live
        session.with_session(|s| {
            assert!(s.cart.is_empty());
            assert_eq!(s.phase, PlacementPhase::Idle);
        });
        assert_eq!(current_notice(&session).unwrap().order_id, order.id);
    }

    #[tokio::test]
    async fn test_concurrent_confirm_rejected() {
        let catalog = Catalog::new();
        let session = state();
        let config = fast_config();

        add_to_cart(&session, &catalog, "v1").unwrap();

        let (first, second) = tokio::join!(
            confirm_order(&session, &config),
            confirm_order(&session, &config)
        );

        // Exactly one placement; the loser sees AlreadyPlacing
        let placed = matches!(first, ConfirmOutcome::Placed { .. }) as u8
            + matches!(second, ConfirmOutcome::Placed { .. }) as u8;
        let rejected = matches!(first, ConfirmOutcome::AlreadyPlacing) as u8
            + matches!(second, ConfirmOutcome::AlreadyPlacing) as u8;
        assert_eq!(placed, 1);
        assert_eq!(rejected, 1);
        assert_eq!(order_history(&session).len(), 1);
    }

    #[tokio::test]
    async fn test_notice_expires() {
        let catalog = Catalog::new();
        let session = state();
        let config = fast_config();

        add_to_cart(&session, &catalog, "v1").unwrap();
        confirm_order(&session, &config).await;

        assert!(current_notice(&session).is_some());
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(current_notice(&session).is_none());
    }

    #[tokio::test]
    async fn test_voucher_consumed_by_order() {
        let catalog = Catalog::new();
        let offers = OfferBook::new();
        let session = state();
        let config = fast_config();

        apply_voucher(&session, &catalog, &offers, "VEGIE30").unwrap();
        let outcome = confirm_order(&session, &config).await;

        let ConfirmOutcome::Placed { order } = outcome else {
            panic!("expected Placed");
        };
        // 15% flat discount was applied to the auto-added line
        let subtotal: i64 = order.lines.iter().map(|l| l.line_total().amount()).sum();
        assert_eq!(order.total.amount(), subtotal - subtotal * 15 / 100);

        session.with_session(|s| assert!(s.voucher.active().is_none()));
    }

    #[tokio::test]
    async fn test_reorder_staging_and_basket() {
        let catalog = Catalog::new();
        let session = state();
        let config = fast_config();

        add_to_cart(&session, &catalog, "v1").unwrap();
        add_to_cart(&session, &catalog, "d1").unwrap();
        let ConfirmOutcome::Placed { order } = confirm_order(&session, &config).await else {
            panic!("expected Placed");
        };

        // Single-item reorder stages a pending line
        let view = stage_reorder_item(&session, &catalog, "v1").unwrap();
        assert_eq!(view.lines.len(), 1);
        assert!(view.lines[0].pending);

        // Whole-basket reorder stages the full order on top
        let view = stage_order_basket(&session, &order.id).unwrap();
        assert_eq!(view.lines.len(), 2);
        assert!(view.lines.iter().all(|l| l.pending));

        assert!(stage_order_basket(&session, "ORD-999999").is_err());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(ConfirmOutcome::AlreadyPlacing).unwrap();
        assert_eq!(json["status"], "alreadyPlacing");

        let json = serde_json::to_value(ConfirmOutcome::EmptyCart).unwrap();
        assert_eq!(json["status"], "emptyCart");
    }

    #[test]
    fn test_delivery_selection() {
        let session = state();

        let options = delivery_options();
        assert_eq!(options.dates.len(), 4);
        assert_eq!(options.slots.len(), 3);

        select_delivery_date(&session, &options.dates[2].full).unwrap();
        select_delivery_slot(&session, TimeSlot::Afternoon);

        session.with_session(|s| {
            assert_eq!(s.schedule.date, options.dates[2].full);
            assert_eq!(s.schedule.slot, "3:00 PM");
        });

        assert!(select_delivery_date(&session, "1 Jan 1999").is_err());
    }
}
