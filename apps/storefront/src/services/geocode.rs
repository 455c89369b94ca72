//! # Address Auto-Mapping
//!
//! Reverse-geocodes device coordinates into the profile's district, taluk,
//! and place fields.
//!
//! ## Degradation Policy
//! ```text
//! auto_map_address(lat, lng)
//!      │
//!      ├── lookup Ok ──► overwrite district, taluk, place
//!      │
//!      └── lookup Err ─► keep district/taluk, stamp place with the raw
//!                        coordinates ("Geo-Mapped: 13.0827, 80.2707")
//! ```
//! The profile is never left blank: a failed lookup still records where
//! the device was.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::services::ServiceError;
use crate::state::SessionState;

/// A resolved street address.
///
/// Lookup implementations fill missing components with the regional hub
/// defaults ("Chennai Central" / "Egmore Hub") rather than empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub district: String,
    pub taluk: String,
    pub place: String,
}

/// The reverse-geocoding seam.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn resolve(&self, lat: f64, lng: f64) -> Result<ResolvedAddress, ServiceError>;
}

/// Resolves coordinates and writes the result into the session profile.
///
/// Returns the address now stored on the profile.
pub async fn auto_map_address(
    session: &SessionState,
    lookup: &dyn AddressLookup,
    lat: f64,
    lng: f64,
) -> ResolvedAddress {
    match lookup.resolve(lat, lng).await {
        Ok(resolved) => {
            debug!(district = %resolved.district, "auto-mapped address");
            session.with_session_mut(|s| {
                s.user.district = resolved.district.clone();
                s.user.taluk = resolved.taluk.clone();
                s.user.place = resolved.place.clone();
            });
            resolved
        }
        Err(err) => {
            warn!(%err, "reverse geocoding failed, stamping raw coordinates");
            let fallback_place = format!("Geo-Mapped: {:.4}, {:.4}", lat, lng);
            session.with_session_mut(|s| {
                s.user.place = fallback_place.clone();
                ResolvedAddress {
                    district: s.user.district.clone(),
                    taluk: s.user.taluk.clone(),
                    place: fallback_place,
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::User;
    use aura_core::types::BuyerTier;

    struct FixedLookup {
        result: Option<ResolvedAddress>,
    }

    #[async_trait]
    impl AddressLookup for FixedLookup {
        async fn resolve(&self, _: f64, _: f64) -> Result<ResolvedAddress, ServiceError> {
            self.result
                .clone()
                .ok_or_else(|| ServiceError::Unavailable("geocoder offline".to_string()))
        }
    }

    fn session() -> SessionState {
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

    #[tokio::test]
    async fn test_successful_lookup_updates_profile() {
        let state = session();
        let lookup = FixedLookup {
            result: Some(ResolvedAddress {
                district: "Madurai".to_string(),
                taluk: "Melur".to_string(),
                place: "7 Temple Street".to_string(),
            }),
        };

        let resolved = auto_map_address(&state, &lookup, 9.9252, 78.1198).await;

        assert_eq!(resolved.district, "Madurai");
        state.with_session(|s| {
            assert_eq!(s.user.district, "Madurai");
            assert_eq!(s.user.taluk, "Melur");
            assert_eq!(s.user.place, "7 Temple Street");
        });
    }

    #[tokio::test]
    async fn test_failed_lookup_stamps_coordinates() {
        let state = session();
        let lookup = FixedLookup { result: None };

        let resolved = auto_map_address(&state, &lookup, 13.0827, 80.2707).await;

        assert_eq!(resolved.place, "Geo-Mapped: 13.0827, 80.2707");
        // District and taluk are untouched by the fallback
        assert_eq!(resolved.district, "Chennai");
        state.with_session(|s| {
            assert_eq!(s.user.taluk, "Egmore");
            assert_eq!(s.user.place, "Geo-Mapped: 13.0827, 80.2707");
        });
    }
}
