//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done on `Decimal` internally, then converted
//! to `f64` for storage/serialization. Every value that crosses a module
//! boundary is rounded to 2 decimal places so floating-point drift cannot
//! accumulate across many small additions.

use crate::error::CheckoutError;
use rust_decimal::prelude::*;
use shared::cart::ModifierSelection;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per unit
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub(crate) fn require_finite(value: f64, field_name: &str) -> Result<(), CheckoutError> {
    if !value.is_finite() {
        return Err(CheckoutError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a monetary value: finite, non-negative and within bounds
pub fn validate_price(value: f64, field_name: &str) -> Result<(), CheckoutError> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(CheckoutError::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_PRICE {
        return Err(CheckoutError::InvalidAmount(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_PRICE, value
        )));
    }
    Ok(())
}

/// Validate a line quantity: positive and within bounds
pub fn validate_quantity(quantity: i32) -> Result<(), CheckoutError> {
    if quantity <= 0 {
        return Err(CheckoutError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(CheckoutError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Validate a value-added tax rate expressed as a fraction (e.g. 0.18)
pub fn validate_tax_rate(rate: f64) -> Result<(), CheckoutError> {
    if !rate.is_finite() || !(0.0..1.0).contains(&rate) {
        return Err(CheckoutError::InvalidTaxRate(format!(
            "tax rate must be a fraction in [0, 1), got {}",
            rate
        )));
    }
    Ok(())
}

/// Validate every paid modifier price in a selection
pub fn validate_selection(selection: &ModifierSelection) -> Result<(), CheckoutError> {
    for modifier in selection.extras.iter().chain(selection.beverages.iter()) {
        validate_price(
            modifier.price,
            &format!("price of modifier '{}'", modifier.id),
        )?;
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption in monetary calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a Decimal to 2 decimal places, midpoint away from zero
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with max input ≤ 1_000_000 (validated at boundary)
        // is always within f64 representable range (~1.8e308)
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
