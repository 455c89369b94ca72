//! # Collaborator Services
//!
//! Seams for the external collaborators the storefront talks to: the
//! farming-advice assistant and the reverse-geocoding lookup.
//!
//! Both are trait objects so the app can run (and be tested) with stub
//! implementations; the real HTTP clients live behind the same traits.

mod advice;
mod geocode;

pub use advice::{AdviceClient, Advisor, ChatRole, ChatTurn, FALLBACK_ADVICE};
pub use geocode::{auto_map_address, AddressLookup, ResolvedAddress};

use thiserror::Error;

/// Errors from collaborator calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The collaborator could not be reached or returned garbage.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
