//! # Inventory Actor
//!
//! Stock counts for the admin inventory page, adjusted by operator
//! corrections.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`InventoryItem`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]
//!
//! A `Remove` larger than the stock empties it instead of failing:
//!
//! ```rust
//! use storefront::inventory_actor::{self, InventoryAction, InventoryActionResult};
//! use storefront::model::{InventoryCreate, StockAdjustment, StockTier};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = inventory_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create(InventoryCreate {
//!             product_name: "Sheet Mask".to_string(),
//!             current_stock: 5,
//!             reserved_stock: 0,
//!             reorder_point: Some(2),
//!         })
//!         .await
//!         .unwrap();
//!
//!     let result = client
//!         .perform_action(id, InventoryAction::Adjust(StockAdjustment::remove(8)))
//!         .await
//!         .unwrap();
//!     match result {
//!         InventoryActionResult::Adjust(level) => {
//!             assert_eq!(level.current, 0);
//!             assert_eq!(level.tier, StockTier::Out);
//!         }
//!         other => panic!("unexpected {:?}", other),
//!     }
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::InventoryItem;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<InventoryItem>, ResourceClient<InventoryItem>) {
    ResourceActor::new(buffer_size)
}
