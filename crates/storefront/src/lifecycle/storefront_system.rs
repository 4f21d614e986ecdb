use crate::checkout::CheckoutService;
use crate::clients::{CartClient, InventoryClient, OrderClient};
use crate::config::StorefrontConfig;
use tracing::{error, info};

/// Runtime orchestrator for the storefront and its back-office.
///
/// # Architecture
///
/// - **Cart Actor**: one cart per shopper session
/// - **Order Actor**: admin orders and their status
/// - **Inventory Actor**: stock records and adjustments
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns every actor with the configured mailbox size.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Self {
        // 1. Create actors
        let (cart_actor, cart_client) = crate::cart_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);
        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(config.channel_buffer);

        // 2. Start actors; none of them has dependencies
        let handles = vec![
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(inventory_actor.run(())),
        ];

        info!(
            channel_buffer = config.channel_buffer,
            default_reorder_point = config.default_reorder_point,
            "Storefront started"
        );

        Self {
            cart_client: CartClient::new(cart_client),
            order_client: OrderClient::new(order_client),
            inventory_client: InventoryClient::new(
                inventory_client,
                config.default_reorder_point,
            ),
            handles,
        }
    }

    /// A checkout service bound to this system's cart and order actors.
    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(self.cart_client.clone(), self.order_client.clone())
    }

    /// Drops all clients and waits for every actor to stop.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.order_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
