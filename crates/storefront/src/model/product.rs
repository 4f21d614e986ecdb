/// A catalog product as seen by the storefront.
///
/// Products are not a resource of their own here; they are the payload of
/// [`CartAction::AddItem`](crate::cart_actor::CartAction::AddItem) and the
/// source a [`CartItem`](crate::model::CartItem) is built from.
use crate::model::Rupiah;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier. Cart lines are unique by this id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Rupiah,
    pub image_url: String,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Catalog id
    /// * `name` - Display name
    /// * `price` - Unit price in rupiah
    /// * `image_url` - Thumbnail shown in the cart
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Rupiah,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
