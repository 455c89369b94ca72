//! # Offer Book
//!
//! The fixed set of promotional offers shown on the home carousel.
//!
//! Claiming any of these activates the single cart voucher (see
//! `aura_core::voucher`); the advertised `discount_label` is marketing copy
//! and does not drive the computed discount.

use aura_core::types::{Category, Offer};

/// The promotional offer book.
#[derive(Debug, Clone)]
pub struct OfferBook {
    offers: Vec<Offer>,
}

impl Default for OfferBook {
    fn default() -> Self {
        OfferBook::new()
    }
}

impl OfferBook {
    /// Builds the standard four-offer book.
    pub fn new() -> Self {
        let offers = vec![
            Offer {
                id: "1".to_string(),
                code: "VEGIE30".to_string(),
                title: "Seasonal Veggie Feast".to_string(),
                subtitle: "Direct from the morning harvest.".to_string(),
                discount_label: "30% FLAT OFF".to_string(),
                target_category: Some(Category::Vegetables),
            },
            Offer {
                id: "2".to_string(),
                code: "FRUITJOY".to_string(),
                title: "Tropical Sunshine Pack".to_string(),
                subtitle: "Nature's candy, delivered in 60 mins.".to_string(),
                discount_label: "BUY 2 GET 1 FREE".to_string(),
                target_category: Some(Category::Fruits),
            },
            Offer {
                id: "3".to_string(),
                code: "ORGANIC25".to_string(),
                title: "Heritage Organic Box".to_string(),
                subtitle: "Pure seeds, zero chemicals, 100% taste.".to_string(),
                discount_label: "SAVE ₹250 NOW".to_string(),
                target_category: Some(Category::Organic),
            },
            Offer {
                id: "4".to_string(),
                code: "DAIRY25".to_string(),
                title: "Farm-to-Kitchen Dairy".to_string(),
                subtitle: "Raw, untouched, and chilled for freshness.".to_string(),
                discount_label: "FLASH 25% OFF".to_string(),
                target_category: Some(Category::Dairy),
            },
        ];

        OfferBook { offers }
    }

    /// Every offer, in carousel order.
    pub fn all(&self) -> &[Offer] {
        &self.offers
    }

    /// Looks up an offer by its voucher code (codes are stored uppercase).
    pub fn find_by_code(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.code == code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
