/// A shopping cart and its line items.
///
/// # Actor Framework
/// [`Cart`] implements [`ActorEntity`](resource_actor::ActorEntity) in
/// [`cart_actor`](crate::cart_actor), one cart per shopper session.
///
/// The methods below are the cart rules themselves; the actor only routes
/// [`CartAction`](crate::cart_actor::CartAction)s to them.
use crate::cart_actor::CartError;
use crate::model::{Product, ProductId, Rupiah};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 9_999;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product entry in the cart with its own quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Rupiah,
    /// Between 1 and [`MAX_LINE_QUANTITY`].
    pub quantity: u32,
    pub image_url: String,
}

impl CartItem {
    pub fn line_total(&self) -> Rupiah {
        self.price * self.quantity
    }
}

impl From<Product> for CartItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: 1,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    /// Lines in order of first addition.
    pub items: Vec<CartItem>,
}

/// Payload for opening a cart, optionally pre-filled.
#[derive(Debug, Clone, Default)]
pub struct CartCreate {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line with the same id is incremented; otherwise a new line
    /// with quantity 1 is appended. Returns the line's quantity afterwards.
    /// A line already at [`MAX_LINE_QUANTITY`] is left as is.
    pub fn add_item(&mut self, product: Product) -> Result<u32, CartError> {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == product.id) {
            let next = line
                .quantity
                .checked_add(1)
                .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
                .ok_or_else(|| CartError::InvalidQuantity {
                    product_id: line.id.clone(),
                    quantity: line.quantity.saturating_add(1),
                })?;
            line.quantity = next;
            return Ok(next);
        }
        self.items.push(CartItem::from(product));
        Ok(1)
    }

    /// Sets the quantity of the matching line, floored at 1.
    ///
    /// A line is never removed this way; use [`Cart::remove_item`]. Returns
    /// `false` when no line matches. Quantities above [`MAX_LINE_QUANTITY`]
    /// are rejected and the line keeps its old value.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<bool, CartError> {
        let Some(line) = self.items.iter_mut().find(|line| &line.id == id) else {
            return Ok(false);
        };
        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::InvalidQuantity {
                product_id: id.clone(),
                quantity,
            });
        }
        line.quantity = quantity.max(1);
        Ok(true)
    }

    /// Deletes the matching line. Returns `false` when no line matches.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        self.items.len() != before
    }

    /// Σ price × quantity over all lines.
    pub fn subtotal(&self) -> Rupiah {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units, for the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the cart and returns how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }
}
