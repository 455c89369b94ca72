//! # Voucher Engine
//!
//! Tracks the single active promotional voucher and the side effect of
//! claiming one.
//!
//! ## Rules
//! - At most ONE voucher is active at a time; claiming another replaces it
//!   (vouchers never stack).
//! - When the claimed offer carries a target category, the first catalog
//!   product in that category is auto-added to the committed cart as part
//!   of the claim. No matching product: the side effect is skipped silently
//!   and the voucher is still recorded active.
//! - The voucher is cleared when the order that consumed it is placed; it
//!   never survives past that order.
//!
//! The discount the active voucher produces is computed in [`crate::pricing`];
//! this module only owns WHICH voucher is active.

use crate::cart::CartStore;
use crate::types::{BuyerTier, Offer, Product};

/// The single-active-voucher engine.
#[derive(Debug, Clone, Default)]
pub struct VoucherEngine {
    active: Option<Offer>,
}

impl VoucherEngine {
    /// Creates an engine with no active voucher.
    pub fn new() -> Self {
        VoucherEngine::default()
    }

    /// Claims an offer, replacing any previously active voucher.
    ///
    /// When the offer targets a category, the first catalog product of that
    /// category is added to the committed cart (stepping by the tier
    /// increment) as the claim's side effect.
    pub fn claim(
        &mut self,
        offer: Offer,
        catalog: &[Product],
        cart: &mut CartStore,
        tier: BuyerTier,
    ) {
        if let Some(category) = offer.target_category {
            if let Some(product) = catalog.iter().find(|p| p.category == category) {
                cart.add_line(product, tier);
            }
        }
        self.active = Some(offer);
    }

    /// The currently active voucher, if any.
    pub fn active(&self) -> Option<&Offer> {
        self.active.as_ref()
    }

    /// Clears the active voucher. Part of the order-placement transaction.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Rupees;
    use crate::types::Category;

    fn product(id: &str, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category,
            price: Rupees::new(40),
            unit: "1kg".to_string(),
            description: String::new(),
            stock: 50,
            rating: 4.5,
            is_fresh: false,
        }
    }

    fn offer(code: &str, target: Option<Category>) -> Offer {
        Offer {
            id: "1".to_string(),
            code: code.to_string(),
            title: String::new(),
            subtitle: String::new(),
            discount_label: "30% FLAT OFF".to_string(),
            target_category: target,
        }
    }

    #[test]
    fn test_claim_sets_active_and_auto_adds() {
        let catalog = vec![
            product("f1", Category::Fruits),
            product("v1", Category::Vegetables),
            product("v2", Category::Vegetables),
        ];
        let mut cart = CartStore::new();
        let mut engine = VoucherEngine::new();

        engine.claim(
            offer("VEGIE30", Some(Category::Vegetables)),
            &catalog,
            &mut cart,
            BuyerTier::Home,
        );

        assert_eq!(engine.active().unwrap().code, "VEGIE30");
        // First matching product in catalog order, not "v2"
        assert_eq!(cart.committed_quantity("v1"), Some(1));
        assert_eq!(cart.committed().len(), 1);
    }

    #[test]
    fn test_claim_respects_tier_increment() {
        let catalog = vec![product("v1", Category::Vegetables)];
        let mut cart = CartStore::new();
        let mut engine = VoucherEngine::new();

        engine.claim(
            offer("VEGIE30", Some(Category::Vegetables)),
            &catalog,
            &mut cart,
            BuyerTier::Bulk,
        );

        assert_eq!(cart.committed_quantity("v1"), Some(5));
    }

    #[test]
    fn test_claim_without_matching_product_still_activates() {
        let catalog = vec![product("f1", Category::Fruits)];
        let mut cart = CartStore::new();
        let mut engine = VoucherEngine::new();

        engine.claim(
            offer("DAIRY25", Some(Category::Dairy)),
            &catalog,
            &mut cart,
            BuyerTier::Home,
        );

        // Side effect skipped, voucher still recorded
        assert!(cart.is_empty());
        assert_eq!(engine.active().unwrap().code, "DAIRY25");
    }

    #[test]
    fn test_claim_without_target_category() {
        let catalog = vec![product("v1", Category::Vegetables)];
        let mut cart = CartStore::new();
        let mut engine = VoucherEngine::new();

        engine.claim(offer("FLAT15", None), &catalog, &mut cart, BuyerTier::Home);

        assert!(cart.is_empty());
        assert!(engine.active().is_some());
    }

    #[test]
    fn test_second_claim_replaces_not_stacks() {
        let catalog = vec![product("v1", Category::Vegetables)];
        let mut cart = CartStore::new();
        let mut engine = VoucherEngine::new();

        engine.claim(offer("VEGIE30", None), &catalog, &mut cart, BuyerTier::Home);
        engine.claim(offer("FRUITJOY", None), &catalog, &mut cart, BuyerTier::Home);

        assert_eq!(engine.active().unwrap().code, "FRUITJOY");
    }

    #[test]
    fn test_clear() {
        let mut engine = VoucherEngine::new();
        engine.claim(
            offer("VEGIE30", None),
            &[],
            &mut CartStore::new(),
            BuyerTier::Home,
        );

        engine.clear();

        assert!(engine.active().is_none());
    }
}
