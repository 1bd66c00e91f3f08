//! Engine error taxonomy
//!
//! Every engine function validates its inputs before mutating any state,
//! so a returned error always leaves the cart exactly as it was.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the checkout engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Quantity is non-positive or exceeds the per-line limit
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Monetary value is non-finite, negative or exceeds the price limit
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Tax rate outside [0, 1)
    #[error("invalid tax rate: {0}")]
    InvalidTaxRate(String),

    /// No cart line matches the given key
    #[error("line item not found: {0}")]
    ItemNotFound(String),

    /// Checkout attempted on an empty cart
    #[error("cart is empty")]
    EmptyCart,

    /// Delivery order submitted without an address
    #[error("delivery order requires an address")]
    MissingAddress,
}

impl CheckoutError {
    /// Map to the unified error code space
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            CheckoutError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            CheckoutError::InvalidTaxRate(_) => ErrorCode::InvalidTaxRate,
            CheckoutError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            CheckoutError::MissingAddress => ErrorCode::MissingAddress,
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_maps_to_unified_code() {
        let err = CheckoutError::EmptyCart;
        assert_eq!(err.code(), ErrorCode::EmptyCart);

        let app: AppError = CheckoutError::InvalidQuantity("got -5".to_string()).into();
        assert_eq!(app.code, ErrorCode::InvalidQuantity);
        assert_eq!(app.message, "invalid quantity: got -5");
    }
}
