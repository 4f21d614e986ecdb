//! Hands a cart to the order back-office.

use super::{CheckoutError, CheckoutForm, Quote};
use crate::clients::{CartClient, OrderClient};
use crate::model::{CartId, OrderCreate, OrderId};
use tracing::{info, instrument};

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub quote: Quote,
}

/// Turns a cart and a completed form into a pending order.
#[derive(Clone)]
pub struct CheckoutService {
    carts: CartClient,
    orders: OrderClient,
}

impl CheckoutService {
    pub fn new(carts: CartClient, orders: OrderClient) -> Self {
        Self { carts, orders }
    }

    /// Places an order for `cart_id`.
    ///
    /// The order starts in `PENDING_PAYMENT` with `total = subtotal + shipping`.
    /// The cart is emptied once the order exists. Nothing changes when the cart
    /// is empty or the form has no courier.
    #[instrument(skip(self, form))]
    pub async fn place_order(
        &self,
        cart_id: CartId,
        form: &mut CheckoutForm,
    ) -> Result<PlacedOrder, CheckoutError> {
        let cart = self.carts.get_cart(cart_id.clone()).await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let submission = form.submit(&cart.items)?;
        let quote = submission.quote;

        let order_id = self
            .orders
            .create_order(OrderCreate {
                customer_name: submission.data.full_name,
                phone: submission.data.phone,
                total: quote.total,
                courier: submission.courier.value.to_string(),
                items: submission.items,
                created_at: None,
            })
            .await?;

        let cleared = self.carts.clear(cart_id).await?;
        info!(order_id = %order_id, total = %quote.total, lines = cleared, "Order placed");

        Ok(PlacedOrder { order_id, quote })
    }
}
