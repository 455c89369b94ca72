//! # User Profile
//!
//! The logged-in user and the closed set of fields the profile screen can
//! edit.
//!
//! The original profile editor keyed edits by raw field-name strings; here
//! the editable surface is the [`ProfileField`] enum, so a typo'd field name
//! fails to deserialize instead of silently writing nowhere.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use aura_core::types::{BulkType, BuyerTier};
use aura_core::validation::validate_profile_value;
use aura_core::ValidationError;

/// The logged-in user.
///
/// `district` and `place` feed the order delivery address; `buyer_tier`
/// drives every cart quantity step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub taluk: String,
    pub place: String,
    pub buyer_tier: BuyerTier,

    /// Kind of bulk buyer; only set for [`BuyerTier::Bulk`].
    pub bulk_type: Option<BulkType>,
}

impl User {
    /// The delivery address printed on orders: "{place}, {district}".
    pub fn delivery_address(&self) -> String {
        format!("{}, {}", self.place, self.district)
    }
}

/// An editable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    State,
    District,
    Taluk,
    Place,
}

impl ProfileField {
    /// Field name used in validation error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::State => "state",
            ProfileField::District => "district",
            ProfileField::Taluk => "taluk",
            ProfileField::Place => "place",
        }
    }
}

impl User {
    /// Applies a single profile edit after validating the new value.
    ///
    /// Email additionally requires an "@"; other fields only need to be
    /// non-empty and within length bounds.
    pub fn apply_edit(&mut self, field: ProfileField, value: &str) -> Result<(), ValidationError> {
        let value = validate_profile_value(field.name(), value)?;

        if field == ProfileField::Email && !value.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "must contain @".to_string(),
            });
        }

        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::State => self.state = value,
            ProfileField::District => self.district = value,
            ProfileField::Taluk => self.taluk = value,
            ProfileField::Place => self.place = value,
        }

        Ok(())
    }
}
