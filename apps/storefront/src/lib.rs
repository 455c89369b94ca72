//! # Agri Aura Storefront Library
//!
//! Orchestration layer for the Agri Aura storefront backend.
//!
//! ## Module Organization
//! ```text
//! aura_storefront/
//! ├── lib.rs          ◄─── You are here (setup & dev harness)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Cart/voucher/ledger session (Arc<Mutex>)
//! │   ├── config.rs   ◄─── Store configuration
//! │   ├── profile.rs  ◄─── User profile & field edits
//! │   └── schedule.rs ◄─── Delivery slots and the four-day window
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── voucher.rs  ◄─── Offer/voucher commands
//! │   ├── order.rs    ◄─── Confirmation & history commands
//! │   └── profile.rs  ◄─── Profile commands
//! ├── services/
//! │   ├── mod.rs      ◄─── Collaborator seams
//! │   ├── advice.rs   ◄─── "Aura" assistant with fallback policy
//! │   └── geocode.rs  ◄─── Address auto-mapping
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod services;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use aura_catalog::{Catalog, OfferBook};
use aura_core::types::BuyerTier;
use state::{SessionState, StoreConfig, User};

/// Runs the storefront dev harness: boots the full stack and walks one
/// shopping session end to end so the whole pipeline is exercised without
/// a frontend attached.
pub async fn run() {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Starting storefront");

    let catalog = Catalog::new();
    let offers = OfferBook::new();
    info!(
        products = catalog.products().len(),
        offers = offers.all().len(),
        "Catalog loaded"
    );

    let session = SessionState::new(demo_user());

    let grid = commands::catalog::browse_products(&catalog, None, "tomato")
        .expect("browse with static query");
    info!(hits = grid.len(), "Browsed for tomatoes");

    commands::cart::add_to_cart(&session, &catalog, "v1").expect("add known product");
    commands::cart::add_to_cart(&session, &catalog, "s1").expect("add known product");
    let claim = commands::voucher::apply_voucher(&session, &catalog, &offers, "VEGIE30")
        .expect("claim known offer");
    info!(
        code = %claim.offer.code,
        total = %claim.cart.totals.total,
        "Voucher applied"
    );

    match commands::order::confirm_order(&session, &config).await {
        commands::order::ConfirmOutcome::Placed { order } => {
            info!(order_id = %order.id, total = %order.total, "Order placed");
        }
        outcome => info!(?outcome, "Order not placed"),
    }

    let history = commands::order::order_history(&session);
    info!(orders = history.len(), "Session complete");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aura=trace` - Show trace for aura crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,aura=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// The walk-through user the harness logs in with.
fn demo_user() -> User {
    User {
        name: "Meera K".to_string(),
        email: "meera@example.com".to_string(),
        phone: "9876543210".to_string(),
        state: "Tamil Nadu".to_string(),
        district: "Chennai".to_string(),
        taluk: "Egmore".to_string(),
        place: "12 Harvest Lane".to_string(),
        buyer_tier: BuyerTier::Home,
        bulk_type: None,
    }
}
