//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Every action delegates to the cart methods in [`crate::model::cart`]; the
//! actor guarantees they run one at a time.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{Cart, CartCreate, CartId, MAX_LINE_QUANTITY};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::collections::HashSet;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    /// Opens a cart. Pre-filled lines must be unique and have a quantity
    /// between 1 and [`MAX_LINE_QUANTITY`].
    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for line in &params.items {
            if !seen.insert(line.id.clone()) {
                return Err(CartError::DuplicateItem(line.id.clone()));
            }
            if line.quantity == 0 || line.quantity > MAX_LINE_QUANTITY {
                return Err(CartError::InvalidQuantity {
                    product_id: line.id.clone(),
                    quantity: line.quantity,
                });
            }
        }
        let mut cart = Cart::new(id);
        cart.items = params.items;
        Ok(cart)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartActionResult, CartError> {
        let result = match action {
            CartAction::AddItem(product) => CartActionResult::AddItem(self.add_item(product)?),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => CartActionResult::UpdateQuantity(self.update_quantity(&product_id, quantity)?),
            CartAction::RemoveItem(product_id) => {
                CartActionResult::RemoveItem(self.remove_item(&product_id))
            }
            CartAction::Subtotal => CartActionResult::Subtotal(self.subtotal()),
            CartAction::Clear => CartActionResult::Clear(self.clear()),
        };
        Ok(result)
    }
}
