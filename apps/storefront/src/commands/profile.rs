//! # Profile Commands
//!
//! Profile reads and single-field edits.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{ProfileField, SessionState, User};

/// The logged-in user's profile.
pub fn get_profile(session: &SessionState) -> User {
    session.with_session(|s| s.user.clone())
}

/// Edits one profile field, returning the updated profile.
pub fn update_profile_field(
    session: &SessionState,
    field: ProfileField,
    value: &str,
) -> Result<User, ApiError> {
    debug!(?field, "update_profile_field command");

    session.with_session_mut(|s| {
        s.user.apply_edit(field, value)?;
        Ok(s.user.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::types::BuyerTier;

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

    #[test]
    fn test_update_profile_field() {
        let session = state();

        let user = update_profile_field(&session, ProfileField::Place, "9 Farm Gate").unwrap();
        assert_eq!(user.place, "9 Farm Gate");
        assert_eq!(get_profile(&session).place, "9 Farm Gate");
    }

    #[test]
    fn test_invalid_edit_leaves_profile_untouched() {
        let session = state();

        assert!(update_profile_field(&session, ProfileField::Email, "bad").is_err());
        assert_eq!(get_profile(&session).email, "meera@example.com");
    }
}
