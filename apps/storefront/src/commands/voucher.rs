//! # Voucher Commands
//!
//! Offer listing and voucher claims.
//!
//! Claiming replaces any active voucher (never stacks) and, when the offer
//! targets a category, auto-adds the first catalog product of that category
//! to the committed cart.

use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::cart::CartView;
use crate::error::ApiError;
use crate::state::SessionState;
use aura_catalog::{Catalog, OfferBook};
use aura_core::types::Offer;
use aura_core::validation::validate_voucher_code;

/// Response to a successful claim: the activated offer plus the cart it
/// may have auto-populated.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VoucherResponse {
    pub offer: Offer,
    pub cart: CartView,
}

/// Every offer, in carousel order.
pub fn list_offers(offers: &OfferBook) -> Vec<Offer> {
    debug!("list_offers command");
    offers.all().to_vec()
}

/// The currently active voucher, if any.
pub fn active_voucher(session: &SessionState) -> Option<Offer> {
    session.with_session(|s| s.voucher.active().cloned())
}

/// Claims an offer by voucher code.
///
/// The code is trimmed and uppercased before lookup, so "vegie30" claims
/// VEGIE30.
pub fn apply_voucher(
    session: &SessionState,
    catalog: &Catalog,
    offers: &OfferBook,
    code: &str,
) -> Result<VoucherResponse, ApiError> {
    let code = validate_voucher_code(code)?;

    let offer = offers
        .find_by_code(&code)
        .ok_or_else(|| ApiError::not_found("Voucher", &code))?;

    info!(code = %code, "apply_voucher command");

    let cart = session.with_session_mut(|s| {
        let tier = s.tier();
        s.voucher
            .claim(offer.clone(), catalog.products(), &mut s.cart, tier);
        CartView::snapshot(s)
    });

    Ok(VoucherResponse {
        offer: offer.clone(),
        cart,
    })
}
