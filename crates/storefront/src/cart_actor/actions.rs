//! Custom actions for the Cart actor.
//!
//! These carry the storefront callbacks (`onAddToCart`, `onUpdateQuantity`,
//! `onRemoveItem`) into the cart's own task.

use crate::model::{Product, ProductId, Rupiah};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit; repeats increment the existing line.
    AddItem(Product),
    /// Sets a line's quantity, floored at 1.
    UpdateQuantity { product_id: ProductId, quantity: u32 },
    /// Deletes a line. Unknown ids are ignored.
    RemoveItem(ProductId),
    /// Reads Σ price × quantity.
    Subtotal,
    /// Empties the cart after checkout.
    Clear,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Quantity of the line after the add.
    AddItem(u32),
    /// Whether a line matched.
    UpdateQuantity(bool),
    /// Whether a line was removed.
    RemoveItem(bool),
    Subtotal(Rupiah),
    /// Number of lines dropped.
    Clear(usize),
}
