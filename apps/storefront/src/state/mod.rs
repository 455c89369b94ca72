//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   SessionState   │  │   StoreConfig    │  │  Catalog / OfferBook │  │
//! │  │                  │  │                  │  │  (aura-catalog)      │  │
//! │  │  Arc<Mutex<      │  │  store_name      │  │                      │  │
//! │  │    Session       │  │  latency, TTL    │  │  read-only data      │  │
//! │  │  >>              │  │                  │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • StoreConfig: Read-only after initialization                         │
//! │  • Catalog/OfferBook: Immutable after construction                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod profile;
mod schedule;
mod session;

pub use config::StoreConfig;
pub use profile::{ProfileField, User};
pub use schedule::{delivery_window, DeliveryDate, TimeSlot};
pub use session::{OrderNotice, PlacementPhase, Session, SessionState};
