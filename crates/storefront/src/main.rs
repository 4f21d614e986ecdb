//! # Storefront demo
//!
//! Walks one shopper through cart and checkout, then plays the admin:
//! verifying the payment, moving the order along, and adjusting stock.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

use resource_actor::tracing::setup_tracing_with_default;
use storefront::cart_actor::CartError;
use storefront::checkout::{CheckoutError, CheckoutForm};
use storefront::config::StorefrontConfig;
use storefront::export::{inventory_csv, orders_csv};
use storefront::inventory_actor::InventoryError;
use storefront::lifecycle::StorefrontSystem;
use storefront::order_actor::OrderError;
use storefront::model::{
    CheckoutData, InventoryCreate, OrderStatus, Product, Rupiah, StockAdjustment,
};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing_with_default(&config.log_filter);

    info!("Starting storefront");
    let system = StorefrontSystem::new(&config);

    let serum = Product::new("1", "Niacinamide Serum", Rupiah(250000), "/img/serum.jpg");
    let toner = Product::new("2", "Hydrating Toner", Rupiah(180000), "/img/toner.jpg");

    // Shopper
    let span = tracing::info_span!("shopping");
    let cart_id = async {
        let cart_id = system.cart_client.create_cart().await?;
        system.cart_client.add_to_cart(cart_id.clone(), serum.clone()).await?;
        system.cart_client.add_to_cart(cart_id.clone(), serum).await?;
        system.cart_client.add_to_cart(cart_id.clone(), toner).await?;
        let subtotal = system.cart_client.subtotal(cart_id.clone()).await?;
        info!(cart_id = %cart_id, subtotal = %subtotal, "Cart filled");
        Ok::<_, CartError>(cart_id)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let mut form = CheckoutForm::new(CheckoutData {
        full_name: "Ayu Lestari".to_string(),
        phone: "081234567890".to_string(),
        street_address: "Jl. Melati No. 5".to_string(),
        city: "Bandung".to_string(),
        province: "Jawa Barat".to_string(),
        postal_code: "40115".to_string(),
        ..Default::default()
    });

    let checkout = system.checkout();
    let span = tracing::info_span!("checkout");
    let placed = async {
        if let Err(e) = checkout.place_order(cart_id.clone(), &mut form).await {
            warn!(error = %e, "Checkout blocked");
        }
        form.select_courier("jne-reg")?;
        let placed = checkout.place_order(cart_id.clone(), &mut form).await?;
        Ok::<_, CheckoutError>(placed)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    drop(checkout);

    info!(
        order_id = %placed.order_id,
        subtotal = %placed.quote.subtotal,
        shipping = %placed.quote.shipping,
        total = %placed.quote.total,
        "Order placed"
    );

    // Admin
    let span = tracing::info_span!("back_office");
    let admin = async {
        let orders = &system.order_client;
        let status = orders.verify_payment(placed.order_id.clone(), true).await?;
        info!(status = %status, "Payment verified");
        orders
            .update_status(placed.order_id.clone(), OrderStatus::Processing)
            .await?;
        orders
            .update_status(placed.order_id.clone(), OrderStatus::Shipped)
            .await?;
        Ok::<_, OrderError>(orders.list_orders(None).await?)
    }
    .instrument(span)
    .await;

    match admin {
        Ok(orders) => print!("{}", orders_csv(&orders)),
        Err(e) => error!(error = %e, "Order handling failed"),
    }

    let inventory = &system.inventory_client;
    let span = tracing::info_span!("inventory");
    let stock = async {
        let id = inventory
            .create_item(InventoryCreate {
                product_name: "Niacinamide Serum".to_string(),
                current_stock: 12,
                reserved_stock: 2,
                reorder_point: None,
            })
            .await?;
        let level = inventory
            .adjust_stock(id, StockAdjustment::remove(5).with_reason("damaged in transit"))
            .await?;
        info!(current = level.current, available = level.available, tier = %level.tier, "Stock adjusted");
        Ok::<_, InventoryError>(inventory.low_stock().await?)
    }
    .instrument(span)
    .await;

    match stock {
        Ok(low) => print!("{}", inventory_csv(&low)),
        Err(e) => error!(error = %e, "Inventory handling failed"),
    }

    let cart = system
        .cart_client
        .get_cart(cart_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(items = cart.item_count(), "Cart after checkout");

    system.shutdown().await?;
    info!("Storefront demo completed");
    Ok(())
}
