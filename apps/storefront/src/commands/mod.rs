//! # Commands Module
//!
//! The storefront's invokable surface. Each command is a thin function:
//! validate input, delegate to aura-core / aura-catalog, return a
//! serializable view.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Browse, search, frequent bulk picks
//! ├── cart.rs     ◄─── Cart mutations and the cart drawer lifecycle
//! ├── voucher.rs  ◄─── Offer listing and voucher claims
//! ├── order.rs    ◄─── Confirmation state machine, history, reorders
//! └── profile.rs  ◄─── Profile reads and field edits
//! ```

pub mod cart;
pub mod catalog;
pub mod order;
pub mod profile;
pub mod voucher;
