//! # Order Actor
//!
//! Back-office orders: created by checkout, then moved through
//! [`OrderStatus`](crate::model::OrderStatus) by an operator.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`AdminOrder`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::AdminOrder;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<AdminOrder>, ResourceClient<AdminOrder>) {
    ResourceActor::new(buffer_size)
}
