//! # aura-catalog: Product Catalog & Offer Book
//!
//! Owns the static product catalog and the promotional voucher book for the
//! Agri Aura storefront.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  apps/storefront                                                    │
//! │       │ browse / search / quick-buy / claim offer                   │
//! │       ▼                                                             │
//! │  ★ aura-catalog (THIS CRATE) ★                                      │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐         │
//! │  │         Catalog          │  │        OfferBook         │         │
//! │  │  170 deterministic       │  │  VEGIE30  FRUITJOY       │         │
//! │  │  products, 7 categories  │  │  ORGANIC25  DAIRY25      │         │
//! │  └──────────────────────────┘  └──────────────────────────┘         │
//! │       │ Product / Offer (types owned by aura-core)                  │
//! │       ▼                                                             │
//! │  aura-core                                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! The catalog is generated, not hand-listed: prices, ratings, and stock
//! derive from each product's seed index, so the same ids always map to the
//! same products across runs and tests.

pub mod data;
pub mod offers;

pub use data::Catalog;
pub use offers::OfferBook;
