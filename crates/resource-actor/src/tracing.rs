//! # Observability
//!
//! Structured logging for every actor in the process.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) and each request
//! with an `entity_type` field, so module paths are hidden from the output.
//! Payloads (`?params`, `?action`) are only recorded at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per state change
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=storefront=debug,resource_actor=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout reads roughly as:
//!
//! ```text
//! INFO checkout: Action ok entity_type="Cart" id=cart_1
//! INFO checkout: Created entity_type="AdminOrder" id=order_1 size=1
//! INFO checkout: Action ok entity_type="Cart" id=cart_1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, reading the filter from `RUST_LOG`.
///
/// Falls back to `default_filter` when `RUST_LOG` is unset or invalid.
/// Calling it twice is harmless; the second install is ignored.
pub fn setup_tracing_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Installs the global subscriber with an `info` fallback.
///
/// ```rust
/// resource_actor::tracing::setup_tracing();
/// // A second call leaves the first subscriber in place.
/// resource_actor::tracing::setup_tracing();
/// tracing::info!("ready");
/// ```
pub fn setup_tracing() {
    setup_tracing_with_default("info");
}
