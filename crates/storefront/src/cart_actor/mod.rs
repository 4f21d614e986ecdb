//! # Cart Actor
//!
//! One [`Cart`] per shopper session, each mutated only from the cart actor's
//! task.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::cart_actor;
//! use storefront::clients::CartClient;
//! use storefront::model::{Product, Rupiah};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32);
//!     let carts = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let cart = carts.create_cart().await?;
//!     let serum = Product::new("1", "Niacinamide Serum", Rupiah(250000), "/img/serum.jpg");
//!     carts.add_to_cart(cart.clone(), serum.clone()).await?;
//!     carts.add_to_cart(cart.clone(), serum).await?;
//!
//!     assert_eq!(carts.subtotal(cart).await?, Rupiah(500000));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Cart;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
