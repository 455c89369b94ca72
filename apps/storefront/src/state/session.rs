//! # Session State
//!
//! The per-user session: cart, voucher, order history, placement phase, and
//! the transient success notification.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify it at a time
//! 3. Commands can run concurrently (the async placement task in particular)
//!
//! ## Placement State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Placement Phases                              │
//! │                                                                         │
//! │        confirm_order                 latency elapses                    │
//! │  Idle ───────────────► Placing ───────────────────────► Idle           │
//! │    ▲                      │                               │             │
//! │    │                      │ confirm_order again           │             │
//! │    │                      ▼                               ▼             │
//! │    │                  rejected                    notice posted,        │
//! │    └──────────────── (AlreadyPlacing)             expires after TTL     │
//! │                                                                         │
//! │  The mutex is NOT held across the latency sleep: the session stays      │
//! │  browsable while Placing, only a second confirm is rejected.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::state::profile::User;
use crate::state::schedule::{delivery_window, TimeSlot};
use aura_core::types::{BuyerTier, DeliverySchedule};
use aura_core::{CartStore, OrderLedger, VoucherEngine};

/// Where the session is in the order-placement state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPhase {
    /// Normal shopping; confirm_order is accepted.
    #[default]
    Idle,

    /// An order is in flight; further confirms are rejected.
    Placing,
}

/// The transient order-success notification.
///
/// Self-expiring: readers check [`OrderNotice::is_expired`] instead of a
/// background timer mutating the session.
#[derive(Debug, Clone)]
pub struct OrderNotice {
    /// Id of the order that was just placed.
    pub order_id: String,

    posted_at: Instant,
    ttl: Duration,
}

impl OrderNotice {
    pub fn new(order_id: String, ttl: Duration) -> Self {
        OrderNotice {
            order_id,
            posted_at: Instant::now(),
            ttl,
        }
    }

    /// Whether the notification has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= self.ttl
    }
}

/// A logged-in user's session.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub cart: CartStore,
    pub voucher: VoucherEngine,
    pub ledger: OrderLedger,
    pub phase: PlacementPhase,
    pub notice: Option<OrderNotice>,

    /// Currently selected delivery date + slot; defaults to today's date
    /// and the earliest slot.
    pub schedule: DeliverySchedule,
}

impl Session {
    /// Starts a fresh session for a logged-in user.
    pub fn new(user: User, now: DateTime<Utc>) -> Self {
        let window = delivery_window(now);
        let schedule = DeliverySchedule::new(window[0].full.clone(), TimeSlot::default().time());

        Session {
            user,
            cart: CartStore::new(),
            voucher: VoucherEngine::new(),
            ledger: OrderLedger::new(),
            phase: PlacementPhase::Idle,
            notice: None,
            schedule,
        }
    }

    /// The buyer tier driving every cart quantity step.
    pub fn tier(&self) -> BuyerTier {
        self.user.buyer_tier
    }

    /// The live success notification, pruning it first if expired.
    pub fn active_notice(&mut self) -> Option<&OrderNotice> {
        if self.notice.as_ref().is_some_and(|n| n.is_expired()) {
            self.notice = None;
        }
        self.notice.as_ref()
    }
}

/// Shared, thread-safe session handle.
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a session state for a freshly logged-in user.
    pub fn new(user: User) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new(user, Utc::now()))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let tier = session_state.with_session(|s| s.tier());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.cart.add_line(&product, s.user.buyer_tier));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}
