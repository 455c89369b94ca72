//! # Pricing
//!
//! Pure, stateless totals computation over cart lines and an optional
//! voucher, plus the bulk-tier unit-price display helpers.
//!
//! ## Where Totals Flow
//! ```text
//! display_lines (committed ⧺ staged)
//!      │
//!      ▼
//! quote(lines, voucher) ◄── recomputed after every mutation, never stored
//!      │
//!      ├── subtotal = Σ price × quantity
//!      ├── discount = voucher && subtotal > 0 ? floor(subtotal × 15%) : 0
//!      └── total    = max(0, subtotal − discount)
//! ```
//!
//! Totals are derived state: the orchestrator recomputes them on demand and
//! nothing caches them, so they can never drift from the cart contents.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Rupees;
use crate::types::{BuyerTier, CartLine, Offer, Product};
use crate::VOUCHER_DISCOUNT_BPS;

/// Computed cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    pub subtotal: Rupees,
    pub discount: Rupees,
    pub total: Rupees,
}

/// Prices a set of cart lines under an optional active voucher.
///
/// ## Rules
/// - `subtotal` sums `price × quantity` over every line given (the caller
///   passes the full display set: committed plus staged).
/// - `discount` is a flat 15% of the subtotal, floored, whenever a voucher
///   is active and the subtotal is positive — regardless of what the
///   offer's marketing label promises.
/// - `total` is the subtotal minus the discount, clamped at zero.
///
/// ## Example
/// ```rust
/// use aura_core::pricing::quote;
/// use aura_core::types::{CartLine, Category, Offer};
/// use aura_core::Rupees;
///
/// let lines = vec![CartLine {
///     product_id: "v1".into(),
///     name: "Tomatoes".into(),
///     category: Category::Vegetables,
///     price: Rupees::new(100),
///     unit: "1kg".into(),
///     quantity: 2,
/// }];
/// let voucher = Offer {
///     id: "1".into(),
///     code: "VEGIE30".into(),
///     title: String::new(),
///     subtitle: String::new(),
///     discount_label: "30% FLAT OFF".into(),
///     target_category: None,
/// };
///
/// let totals = quote(&lines, Some(&voucher));
/// assert_eq!(totals.subtotal.amount(), 200);
/// assert_eq!(totals.discount.amount(), 30); // flat 15%, label ignored
/// assert_eq!(totals.total.amount(), 170);
/// ```
pub fn quote(lines: &[CartLine], voucher: Option<&Offer>) -> Totals {
    let subtotal: Rupees = lines.iter().map(|l| l.line_total()).sum();

    let discount = if voucher.is_some() && subtotal.is_positive() {
        subtotal.discount(VOUCHER_DISCOUNT_BPS)
    } else {
        Rupees::zero()
    };

    Totals {
        subtotal,
        discount,
        total: subtotal.saturating_sub_floor(discount),
    }
}

/// Tier-aware unit price for a single product.
///
/// Bulk buyers see the price of one bulk step (`price × 5`); the stored
/// product price is untouched. Presentation only.
pub fn unit_price(product: &Product, tier: BuyerTier) -> Rupees {
    product.price * tier.increment()
}

/// Tier-aware unit label for a single product.
///
/// Scales the unit string's leading numeric magnitude by the tier
/// increment: "1kg" → "5kg", "1L" → "5L". A unit with no leading number is
/// prefixed with the increment.
pub fn unit_label(unit: &str, tier: BuyerTier) -> String {
    let inc = tier.increment();
    if inc == 1 {
        return unit.to_string();
    }

    let digits: String = unit.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest = &unit[digits.len()..];

    match digits.parse::<i64>() {
        Ok(magnitude) => format!("{}{}", magnitude * inc, rest),
        Err(_) => format!("{}{}", inc, rest),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn line(id: &str, price: i64, qty: i64) -> CartLine {
        CartLine {
            product_id: id.to_string(),
            name: format!("Product {}", id),
            category: Category::Vegetables,
            price: Rupees::new(price),
            unit: "1kg".to_string(),
            quantity: qty,
        }
    }

    fn voucher() -> Offer {
        Offer {
            id: "1".to_string(),
            code: "VEGIE30".to_string(),
            title: "Seasonal Veggie Feast".to_string(),
            subtitle: String::new(),
            discount_label: "30% FLAT OFF".to_string(),
            target_category: Some(Category::Vegetables),
        }
    }

    #[test]
    fn test_subtotal_sums_all_lines() {
        let totals = quote(&[line("v1", 100, 2), line("d1", 60, 1)], None);
        assert_eq!(totals.subtotal.amount(), 260);
        assert_eq!(totals.discount.amount(), 0);
        assert_eq!(totals.total.amount(), 260);
    }

    #[test]
    fn test_voucher_discount_is_flat_fifteen_percent() {
        // Subtotal 200 → discount floor(200 × 0.15) = 30 → total 170.
        // The "30% FLAT OFF" label on the offer is marketing copy only.
        let totals = quote(&[line("v1", 100, 2)], Some(&voucher()));
        assert_eq!(totals.subtotal.amount(), 200);
        assert_eq!(totals.discount.amount(), 30);
        assert_eq!(totals.total.amount(), 170);
    }

    #[test]
    fn test_discount_floors_never_rounds_up() {
        // 135 × 0.15 = 20.25 → 20
        let totals = quote(&[line("v1", 135, 1)], Some(&voucher()));
        assert_eq!(totals.discount.amount(), 20);
        assert_eq!(totals.total.amount(), 115);
    }

    #[test]
    fn test_no_discount_on_empty_cart() {
        let totals = quote(&[], Some(&voucher()));
        assert_eq!(totals.subtotal.amount(), 0);
        assert_eq!(totals.discount.amount(), 0);
        assert_eq!(totals.total.amount(), 0);
    }

    #[test]
    fn test_total_never_negative() {
        let totals = quote(&[line("v1", 1, 1)], Some(&voucher()));
        assert!(totals.total.amount() >= 0);
        assert_eq!(totals.total.amount(), 1); // discount floors to 0
    }

    #[test]
    fn test_bulk_unit_price_is_five_times_base() {
        let product = Product {
            id: "s1".to_string(),
            name: "Premium Basmati Rice".to_string(),
            category: Category::Staples,
            price: Rupees::new(100),
            unit: "1kg".to_string(),
            description: String::new(),
            stock: 50,
            rating: 4.8,
            is_fresh: false,
        };

        assert_eq!(unit_price(&product, BuyerTier::Home).amount(), 100);
        assert_eq!(unit_price(&product, BuyerTier::Bulk).amount(), 500);
    }

    #[test]
    fn test_unit_label_scaling() {
        assert_eq!(unit_label("1kg", BuyerTier::Home), "1kg");
        assert_eq!(unit_label("1kg", BuyerTier::Bulk), "5kg");
        assert_eq!(unit_label("1L", BuyerTier::Bulk), "5L");
        // No leading magnitude: prefix with the increment
        assert_eq!(unit_label("bunch", BuyerTier::Bulk), "5bunch");
    }
}
