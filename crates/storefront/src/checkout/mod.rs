//! # Checkout
//!
//! Pricing and the shipping form shown between the cart and order placement.
//!
//! Pricing is pure: the total is always `subtotal + shipping`, with shipping
//! taken from the fixed [`COURIERS`] table. [`CheckoutForm`] tracks whether a
//! courier has been picked and refuses to submit until one has.
//!
//! ```rust
//! use storefront::checkout::{CheckoutError, CheckoutForm};
//! use storefront::model::{CartItem, CheckoutData, Product, Rupiah};
//!
//! let mut serum = CartItem::from(Product::new("1", "Serum", Rupiah(250000), ""));
//! serum.quantity = 2;
//! let toner = CartItem::from(Product::new("2", "Toner", Rupiah(180000), ""));
//! let items = vec![serum, toner];
//!
//! let mut form = CheckoutForm::new(CheckoutData::default());
//! assert_eq!(form.submit(&items), Err(CheckoutError::CourierNotSelected));
//!
//! form.select_courier("jne-reg").unwrap();
//! let submission = form.submit(&items).unwrap();
//! assert_eq!(submission.quote.total, Rupiah(695000));
//! ```

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

use crate::model::{CartItem, CheckoutData, Courier, Rupiah, COURIERS};
use serde::Serialize;
use tracing::{debug, warn};

/// Looks up a courier by its form key.
pub fn find_courier(key: &str) -> Option<&'static Courier> {
    COURIERS.iter().find(|courier| courier.value == key)
}

/// Flat shipping cost for `key`. Empty or unknown keys cost nothing.
pub fn shipping_cost(key: &str) -> Rupiah {
    find_courier(key)
        .map(|courier| courier.cost)
        .unwrap_or(Rupiah::ZERO)
}

/// Price breakdown shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub subtotal: Rupiah,
    pub shipping: Rupiah,
    pub total: Rupiah,
}

impl Quote {
    pub fn new(subtotal: Rupiah, shipping: Rupiah) -> Self {
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    pub fn for_items(items: &[CartItem], courier_key: &str) -> Self {
        let subtotal = items.iter().map(CartItem::line_total).sum();
        Self::new(subtotal, shipping_cost(courier_key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourierSelection {
    Unselected,
    Selected(&'static Courier),
}

/// Everything needed to turn a cart into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSubmission {
    pub data: CheckoutData,
    pub courier: &'static Courier,
    pub items: Vec<CartItem>,
    pub quote: Quote,
}

/// The shipping form and its courier validation state.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    data: CheckoutData,
    selection: CourierSelection,
    error: Option<CheckoutError>,
}

impl CheckoutForm {
    /// Starts a form from pre-filled data. A courier key in `data` counts as
    /// picked only if it is in the table; otherwise it is cleared.
    pub fn new(mut data: CheckoutData) -> Self {
        let selection = match find_courier(&data.courier) {
            Some(courier) => CourierSelection::Selected(courier),
            None => {
                data.courier.clear();
                CourierSelection::Unselected
            }
        };
        Self {
            data,
            selection,
            error: None,
        }
    }

    pub fn data(&self) -> &CheckoutData {
        &self.data
    }

    pub fn selection(&self) -> CourierSelection {
        self.selection
    }

    pub fn is_courier_selected(&self) -> bool {
        matches!(self.selection, CourierSelection::Selected(_))
    }

    /// The inline error shown under the courier list, if any.
    pub fn error(&self) -> Option<&CheckoutError> {
        self.error.as_ref()
    }

    /// Picks a courier and clears any pending error.
    ///
    /// Unknown keys are rejected and leave the form as it was.
    pub fn select_courier(&mut self, key: &str) -> Result<&'static Courier, CheckoutError> {
        let courier = find_courier(key).ok_or_else(|| {
            warn!(courier = key, "Unknown courier");
            CheckoutError::UnknownCourier(key.to_string())
        })?;
        self.data.courier = courier.value.to_string();
        self.selection = CourierSelection::Selected(courier);
        self.error = None;
        debug!(courier = courier.value, cost = %courier.cost, "Courier selected");
        Ok(courier)
    }

    /// Summary for the current selection. Shipping is zero until a courier is picked.
    pub fn quote(&self, items: &[CartItem]) -> Quote {
        Quote::for_items(items, &self.data.courier)
    }

    /// Validates the form. Without a courier the error is recorded on the
    /// form and nothing is produced.
    pub fn submit(&mut self, items: &[CartItem]) -> Result<CheckoutSubmission, CheckoutError> {
        let courier = match self.selection {
            CourierSelection::Selected(courier) => courier,
            CourierSelection::Unselected => {
                self.error = Some(CheckoutError::CourierNotSelected);
                return Err(CheckoutError::CourierNotSelected);
            }
        };
        Ok(CheckoutSubmission {
            data: self.data.clone(),
            courier,
            items: items.to_vec(),
            quote: self.quote(items),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn worked_example() -> Vec<CartItem> {
        let mut serum = CartItem::from(Product::new("1", "Niacinamide Serum", Rupiah(250000), ""));
        serum.quantity = 2;
        let toner = CartItem::from(Product::new("2", "Hydrating Toner", Rupiah(180000), ""));
        vec![serum, toner]
    }

    #[test]
    fn test_shipping_cost_table() {
        assert_eq!(shipping_cost("jne-reg"), Rupiah(15000));
        assert_eq!(shipping_cost("jne-yes"), Rupiah(25000));
        assert_eq!(shipping_cost("jnt-reg"), Rupiah(15000));
        assert_eq!(shipping_cost("sicepat-reg"), Rupiah(12000));
        assert_eq!(shipping_cost("sicepat-best"), Rupiah(22000));
        assert_eq!(shipping_cost("anteraja-reg"), Rupiah(13000));
        assert_eq!(shipping_cost(""), Rupiah::ZERO);
        assert_eq!(shipping_cost("pos-kilat"), Rupiah::ZERO);
    }

    #[test]
    fn test_total_is_subtotal_plus_shipping() {
        let items = worked_example();
        for courier in COURIERS {
            let quote = Quote::for_items(&items, courier.value);
            assert_eq!(quote.subtotal, Rupiah(680000));
            assert_eq!(quote.total, quote.subtotal + courier.cost);
        }
        assert_eq!(Quote::for_items(&items, "jne-reg").total, Rupiah(695000));
    }

    #[test]
    fn test_quote_saturates_instead_of_overflowing() {
        let quote = Quote::new(Rupiah(u64::MAX - 5000), shipping_cost("jne-yes"));
        assert_eq!(quote.shipping, Rupiah(25000));
        assert_eq!(quote.total, Rupiah(u64::MAX));
    }

    #[test]
    fn test_submit_blocked_until_courier_picked() {
        let items = worked_example();
        let mut form = CheckoutForm::new(CheckoutData::default());
        assert!(!form.is_courier_selected());
        assert_eq!(form.quote(&items).shipping, Rupiah::ZERO);

        assert_eq!(form.submit(&items), Err(CheckoutError::CourierNotSelected));
        assert_eq!(form.error(), Some(&CheckoutError::CourierNotSelected));

        form.select_courier("sicepat-reg").unwrap();
        assert!(form.error().is_none());
        let submission = form.submit(&items).unwrap();
        assert_eq!(submission.courier.value, "sicepat-reg");
        assert_eq!(submission.data.courier, "sicepat-reg");
        assert_eq!(submission.quote.total, Rupiah(692000));
    }

    #[test]
    fn test_unknown_courier_leaves_form_unchanged() {
        let mut form = CheckoutForm::new(CheckoutData::default());
        form.select_courier("jne-yes").unwrap();

        let err = form.select_courier("gojek").unwrap_err();
        assert_eq!(err, CheckoutError::UnknownCourier("gojek".to_string()));
        assert_eq!(form.data().courier, "jne-yes");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_prefilled_unknown_courier_is_cleared() {
        let form = CheckoutForm::new(CheckoutData {
            courier: "gojek".to_string(),
            ..Default::default()
        });
        assert_eq!(form.selection(), CourierSelection::Unselected);
        assert_eq!(form.data().courier, "");
    }
}
