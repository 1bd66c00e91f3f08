//! Per-line pricing
//!
//! Computes a single cart line's gross contribution and its tax/discount
//! breakdown. All functions are pure; the tax rate is supplied by the
//! caller (e.g. 0.18 for 18% IGV) and applied uniformly.

use crate::error::CheckoutError;
use crate::money::{self, round2, to_decimal, to_f64};
use rust_decimal::prelude::*;
use shared::cart::LineItem;
use shared::order::LineTotals;

/// Per-unit gross price as Decimal: effective unit price plus the sum of
/// paid modifier prices. Salsas carry no price and contribute nothing.
pub(crate) fn unit_gross_decimal(item: &LineItem) -> Decimal {
    let paid_modifiers: Decimal = item
        .modifiers
        .extras
        .iter()
        .chain(item.modifiers.beverages.iter())
        .map(|m| to_decimal(m.price))
        .sum();
    to_decimal(item.effective_unit_price) + paid_modifiers
}

/// Per-unit price charged, modifiers included
pub fn unit_gross_price(item: &LineItem) -> f64 {
    to_f64(unit_gross_decimal(item))
}

/// Rounded line gross as Decimal (unit gross × quantity)
pub(crate) fn line_gross_decimal(item: &LineItem) -> Decimal {
    round2(unit_gross_decimal(item) * Decimal::from(item.quantity))
}

/// Tax-inclusive line total
pub fn line_gross(item: &LineItem) -> f64 {
    to_f64(line_gross_decimal(item))
}

/// Split a gross (tax-inclusive) line total into subtotal and tax
///
/// The subtotal is `round2(gross / (1 + rate))` and the tax is the
/// remainder `gross - subtotal`, never an independently rounded
/// `gross * r / (1 + r)`. This guarantees `subtotal + tax == gross`
/// exactly for every line, with no penny leaks.
pub fn line_subtotal_and_tax(item: &LineItem, tax_rate: f64) -> Result<(f64, f64), CheckoutError> {
    money::validate_tax_rate(tax_rate)?;
    let gross = line_gross_decimal(item);
    let subtotal = round2(gross / (Decimal::ONE + to_decimal(tax_rate)));
    let tax = gross - subtotal;
    Ok((to_f64(subtotal), to_f64(tax)))
}

/// Discount of this line relative to the undiscounted catalog price
///
/// Floored at zero: an effective price above the catalog price indicates
/// upstream misconfiguration and must never surface as a negative
/// discount on a receipt or ledger. The condition is logged so it can be
/// chased upstream; it is not an error here.
pub fn line_discount(item: &LineItem) -> f64 {
    let raw = (to_decimal(item.unit_base_price) - to_decimal(item.effective_unit_price))
        * Decimal::from(item.quantity);
    if raw < Decimal::ZERO {
        tracing::warn!(
            product_id = %item.product_id,
            unit_base_price = item.unit_base_price,
            effective_unit_price = item.effective_unit_price,
            "effective unit price exceeds catalog price, clamping discount to zero"
        );
    }
    to_f64(raw.max(Decimal::ZERO))
}

/// All derived figures for one line
pub fn line_totals(item: &LineItem, tax_rate: f64) -> Result<LineTotals, CheckoutError> {
    let (line_subtotal, line_tax) = line_subtotal_and_tax(item, tax_rate)?;
    Ok(LineTotals {
        line_gross: line_gross(item),
        line_subtotal,
        line_tax,
        line_discount: line_discount(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::{LineKey, ModifierSelection};
    use shared::models::Modifier;

    fn line(base: f64, effective: f64, quantity: i32, modifiers: ModifierSelection) -> LineItem {
        LineItem {
            key: LineKey::compute("prod-a", &modifiers),
            product_id: "prod-a".to_string(),
            name: "Sanguche de Chicharrón".to_string(),
            unit_base_price: base,
            effective_unit_price: effective,
            quantity,
            modifiers,
        }
    }

    #[test]
    fn test_unit_gross_includes_paid_modifiers() {
        // Spec scenario (b): base 15.00 plus one 3.50 extra
        let item = line(
            15.0,
            15.0,
            1,
            ModifierSelection {
                salsas: vec!["aji".into(), "golf".into()],
                extras: vec![Modifier::new("queso", "Queso", 3.5)],
                beverages: vec![],
            },
        );
        assert_eq!(unit_gross_price(&item), 18.5);
        assert_eq!(line_gross(&item), 18.5);
    }

    #[test]
    fn test_salsas_are_free() {
        let item = line(
            15.0,
            15.0,
            2,
            ModifierSelection {
                salsas: vec!["aji".into(), "golf".into(), "tartara".into()],
                extras: vec![],
                beverages: vec![],
            },
        );
        assert_eq!(unit_gross_price(&item), 15.0);
        assert_eq!(line_gross(&item), 30.0);
    }

    #[test]
    fn test_line_tax_split_is_exact() {
        // Spec scenario (a): 30.00 gross at 18% -> 25.42 + 4.58
        let item = line(15.0, 15.0, 2, ModifierSelection::default());
        let (subtotal, tax) = line_subtotal_and_tax(&item, 0.18).unwrap();
        assert_eq!(subtotal, 25.42);
        assert_eq!(tax, 4.58);
        assert_eq!(subtotal + tax, line_gross(&item));
    }

    #[test]
    fn test_line_tax_split_exact_for_awkward_gross() {
        // Gross values not evenly divisible by 1.18 must still sum back
        for gross in [0.01, 0.99, 9.99, 17.77, 123.45, 999.99] {
            let item = line(gross, gross, 1, ModifierSelection::default());
            let (subtotal, tax) = line_subtotal_and_tax(&item, 0.18).unwrap();
            assert_eq!(
                to_decimal(subtotal) + to_decimal(tax),
                to_decimal(gross),
                "penny leak at gross {}",
                gross
            );
        }
    }

    #[test]
    fn test_line_tax_split_rejects_bad_rate() {
        let item = line(15.0, 15.0, 1, ModifierSelection::default());
        assert!(matches!(
            line_subtotal_and_tax(&item, -0.18),
            Err(CheckoutError::InvalidTaxRate(_))
        ));
        assert!(matches!(
            line_subtotal_and_tax(&item, f64::NAN),
            Err(CheckoutError::InvalidTaxRate(_))
        ));
    }

    #[test]
    fn test_line_discount_from_pos_override() {
        // Spec scenario (c): base 15.00, overridden to 12.00, x3
        let item = line(15.0, 12.0, 3, ModifierSelection::default());
        assert_eq!(line_discount(&item), 9.0);
    }

    #[test]
    fn test_line_discount_zero_when_undiscounted() {
        let item = line(15.0, 15.0, 4, ModifierSelection::default());
        assert_eq!(line_discount(&item), 0.0);
    }

    #[test]
    fn test_line_discount_clamped_never_negative() {
        // Effective above base is an upstream bug; report zero, not a
        // negative discount
        let item = line(15.0, 17.5, 2, ModifierSelection::default());
        assert_eq!(line_discount(&item), 0.0);
    }

    #[test]
    fn test_discount_ignores_modifier_prices() {
        // Discount compares unit prices only; paid modifiers are not
        // part of the catalog price
        let item = line(
            15.0,
            12.0,
            1,
            ModifierSelection {
                salsas: vec![],
                extras: vec![Modifier::new("queso", "Queso", 3.5)],
                beverages: vec![],
            },
        );
        assert_eq!(line_discount(&item), 3.0);
        assert_eq!(line_gross(&item), 15.5);
    }

    #[test]
    fn test_line_totals_consistent() {
        let item = line(
            15.0,
            12.0,
            3,
            ModifierSelection {
                salsas: vec![],
                extras: vec![],
                beverages: vec![Modifier::new("chicha", "Chicha Morada", 5.0)],
            },
        );
        let totals = line_totals(&item, 0.18).unwrap();
        assert_eq!(totals.line_gross, 51.0); // (12 + 5) * 3
        assert_eq!(totals.line_subtotal + totals.line_tax, totals.line_gross);
        assert_eq!(totals.line_discount, 9.0);
    }
}
