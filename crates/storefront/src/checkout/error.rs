//! Error types for checkout.

use crate::cart_actor::CartError;
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// Submit was pressed with no courier picked.
    #[error("Please select a courier")]
    CourierNotSelected,

    #[error("Unknown courier: {0}")]
    UnknownCourier(String),

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),
}
