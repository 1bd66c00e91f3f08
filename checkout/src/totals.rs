//! Order-level totals
//!
//! Folds the cart into the figures persisted with an order. The
//! subtotal/tax split is computed from the order grand total by the same
//! remainder method used per line, but *independently* of the per-line
//! splits: ledgers use these order-level figures, detail views use the
//! per-line ones, and the two rounding remainders are not reconciled.
//! That divergence is a documented property of the system, not a bug.

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::money::{self, round2, to_decimal, to_f64};
use crate::pricing;
use rust_decimal::prelude::*;
use shared::order::OrderTotals;

/// Compute order totals for a cart snapshot at a uniform tax rate
///
/// Pure function of (cart, rate); performs no I/O and never mutates the
/// cart. An empty cart yields all-zero totals; rejecting empty checkouts
/// is the calling workflow's job.
pub fn compute_order_totals(cart: &Cart, tax_rate: f64) -> Result<OrderTotals, CheckoutError> {
    money::validate_tax_rate(tax_rate)?;

    let grand_total = to_decimal(cart.total_gross());
    let subtotal = round2(grand_total / (Decimal::ONE + to_decimal(tax_rate)));
    let tax = grand_total - subtotal;

    let discount_total: Decimal = cart
        .items()
        .iter()
        .map(|item| to_decimal(pricing::line_discount(item)))
        .sum();

    Ok(OrderTotals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        discount_total: to_f64(discount_total),
        grand_total: to_f64(grand_total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::ModifierSelection;
    use shared::models::{Modifier, Product};

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            category_id: "cat-1".to_string(),
            image: None,
            has_salsas: false,
            has_extras: true,
            has_beverages: true,
            is_active: true,
        }
    }

    #[test]
    fn test_order_totals_two_lines() {
        // Spec scenario (d): gross 30.00 + 18.50 at 18%
        let mut cart = Cart::new();
        cart.add_item(&product("prod-a", 15.0), 2, ModifierSelection::default())
            .unwrap();
        cart.add_item(
            &product("prod-a", 15.0),
            1,
            ModifierSelection {
                salsas: vec![],
                extras: vec![Modifier::new("queso", "Queso", 3.5)],
                beverages: vec![],
            },
        )
        .unwrap();

        let totals = compute_order_totals(&cart, 0.18).unwrap();
        assert_eq!(totals.grand_total, 48.5);
        assert_eq!(totals.subtotal, 41.1);
        assert_eq!(totals.tax, 7.4);
        assert_eq!(totals.discount_total, 0.0);
    }

    #[test]
    fn test_subtotal_plus_tax_equals_grand_total() {
        // Additivity must hold exactly at the order level for any cart
        let prices = [15.0, 8.5, 3.33, 12.99, 0.99];
        let mut cart = Cart::new();
        for (i, price) in prices.iter().enumerate() {
            cart.add_item(
                &product(&format!("prod-{}", i), *price),
                (i as i32 % 3) + 1,
                ModifierSelection::default(),
            )
            .unwrap();
        }
        let totals = compute_order_totals(&cart, 0.18).unwrap();
        assert_eq!(
            to_decimal(totals.subtotal) + to_decimal(totals.tax),
            to_decimal(totals.grand_total)
        );
    }

    #[test]
    fn test_order_split_independent_of_line_splits() {
        // Order-level figures come from the grand total, not from summing
        // per-line splits; both must be internally exact even when their
        // rounding remainders differ.
        let mut cart = Cart::new();
        cart.add_item(&product("prod-a", 9.99), 1, ModifierSelection::default())
            .unwrap();
        cart.add_item(&product("prod-b", 4.44), 1, ModifierSelection::default())
            .unwrap();

        let totals = compute_order_totals(&cart, 0.18).unwrap();
        assert_eq!(
            to_decimal(totals.subtotal) + to_decimal(totals.tax),
            to_decimal(totals.grand_total)
        );
        for item in cart.items() {
            let (s, t) = pricing::line_subtotal_and_tax(item, 0.18).unwrap();
            assert_eq!(
                to_decimal(s) + to_decimal(t),
                to_decimal(pricing::line_gross(item))
            );
        }
    }

    #[test]
    fn test_discount_total_sums_line_discounts() {
        let mut cart = Cart::new();
        let k1 = cart
            .add_item(&product("prod-a", 15.0), 3, ModifierSelection::default())
            .unwrap();
        let k2 = cart
            .add_item(&product("prod-b", 10.0), 2, ModifierSelection::default())
            .unwrap();
        cart.set_unit_price(&k1, 12.0).unwrap();
        cart.set_unit_price(&k2, 9.5).unwrap();

        let totals = compute_order_totals(&cart, 0.18).unwrap();
        // (15-12)*3 + (10-9.5)*2
        assert_eq!(totals.discount_total, 10.0);
    }

    #[test]
    fn test_zero_rate_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("prod-a", 15.0), 1, ModifierSelection::default())
            .unwrap();
        let totals = compute_order_totals(&cart, 0.0).unwrap();
        assert_eq!(totals.subtotal, 15.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.grand_total, 15.0);
    }

    #[test]
    fn test_empty_cart_yields_zero_totals() {
        let cart = Cart::new();
        let totals = compute_order_totals(&cart, 0.18).unwrap();
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.discount_total, 0.0);
    }

    #[test]
    fn test_rejects_invalid_rate() {
        let cart = Cart::new();
        assert!(matches!(
            compute_order_totals(&cart, 1.5),
            Err(CheckoutError::InvalidTaxRate(_))
        ));
    }
}
