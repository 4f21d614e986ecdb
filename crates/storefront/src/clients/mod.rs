//! Typed wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! These are the storefront's callback surface: `onAddToCart`,
//! `onUpdateQuantity`, `onRemoveItem` on [`CartClient`]; `onUpdateStatus` on
//! [`OrderClient`]; `onSubmit(adjustment)` on [`InventoryClient`]. Checkout
//! itself lives in [`crate::checkout`].

pub mod cart_client;
pub mod inventory_client;
pub mod order_client;

pub use cart_client::*;
pub use inventory_client::*;
pub use order_client::*;
pub use resource_actor::ActorClient;
