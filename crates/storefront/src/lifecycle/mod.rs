//! # System Lifecycle & Orchestration
//!
//! Starts the storefront's actors, hands out their clients and shuts them
//! down again.
//!
//! ## The StorefrontSystem Pattern
//!
//! ```rust,ignore
//! let config = StorefrontConfig::from_env()?;
//! let system = StorefrontSystem::new(&config);
//!
//! let cart = system.cart_client.create_cart().await?;
//! system.cart_client.add_to_cart(cart.clone(), product).await?;
//!
//! let placed = system.checkout().place_order(cart, &mut form).await?;
//! system.order_client.verify_payment(placed.order_id, true).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Actors are created first and only then spawned with their context. None
//! of the storefront actors depend on each other (`Context = ()`); the only
//! cross-actor flow is checkout, which runs in [`CheckoutService`](crate::checkout::CheckoutService)
//! on the caller's task using cloned clients.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Clones held elsewhere (a `CheckoutService`, a spawned task) keep their
//! actor alive until they are dropped too.
//!
//! ## Observability
//!
//! Tracing is set up by the binary through
//! [`setup_tracing_with_default`](resource_actor::tracing::setup_tracing_with_default),
//! with [`StorefrontConfig::log_filter`](crate::config::StorefrontConfig) as the
//! fallback when `RUST_LOG` is unset.

pub mod storefront_system;

pub use storefront_system::*;
