//! # Resource Actor
//!
//! Generic plumbing for stateful resources that live behind a tokio task.
//!
//! Each resource type (a shopping cart, an admin order, an inventory record)
//! implements [`ActorEntity`]. A [`ResourceActor`] owns every instance of that
//! type and applies requests one at a time; a [`ResourceClient`] is the cheap,
//! cloneable handle the rest of the program talks to.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - domain state and the rules that mutate it.
//! 2. **Runtime** ([`ResourceActor`]) - the request loop and the id-keyed store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! Requests are the CRUD lifecycle plus `List` and a resource-specific
//! `Action`:
//!
//! ```text
//! client.create(params)            -> Id
//! client.get(id)                   -> Option<T>
//! client.list()                    -> Vec<T>   (ordered by id)
//! client.update(id, update)        -> T
//! client.delete(id)                -> ()
//! client.perform_action(id, act)   -> ActionResult
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`. Actors are
//! created first, then started with the clients of the actors they need, so
//! construction never has to be ordered around the dependency graph.
//!
//! ## Concurrency Model
//!
//! - One tokio task per actor.
//! - Requests on one actor are applied sequentially; no locks around state.
//! - Different actors run in parallel.
//! - Dropping every client ends the loop (graceful shutdown).
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations so that
//! code depending on a client can be tested without the real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
