//! # Storefront
//!
//! Cart, checkout pricing and admin back-office for a small skincare shop,
//! built on the [`resource_actor`] framework.
//!
//! - **[model]**: data types ([`Cart`](model::Cart), [`AdminOrder`](model::AdminOrder),
//!   [`InventoryItem`](model::InventoryItem)) and the courier table.
//! - **[cart_actor]**, **[order_actor]**, **[inventory_actor]**: the entities as actors.
//! - **[clients]**: typed wrappers hiding the message passing.
//! - **[checkout]**: pricing, the shipping form, and order placement.
//! - **[export]**: CSV downloads for the admin tables.
//! - **[lifecycle]**: spawns and shuts down the whole system.
//! - **[config]**: environment settings.

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod export;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
