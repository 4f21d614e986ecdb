//! # ActorEntity Trait
//!
//! The contract every storefront resource (cart, admin order, inventory item)
//! implements so that a single generic [`ResourceActor`](crate::ResourceActor)
//! can own and mutate it.
//!
//! Associated types pin each resource to its own payloads: a cart only accepts
//! cart actions, an order only accepts order actions, and the compiler rejects
//! anything else.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource managed by a `ResourceActor` must implement.
///
/// # Async & Context
/// Hooks are `async` so that a resource may consult other actors while it is
/// being created or mutated. The `Context` type carries those dependencies and
/// is injected once, when the actor loop starts (`run(context)`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier assigned by the actor.
    ///
    /// Ids are generated from a `u32` counter, and `Ord` keeps `List`
    /// responses in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AddItem`, `UpdateStatus`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error type for this resource.
    ///
    /// One error enum per resource, shared by every action on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and creation payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
