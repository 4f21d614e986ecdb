//! Checkout reference data and form payload.

use crate::model::Rupiah;
use serde::{Deserialize, Serialize};

/// A shipping provider and service tier with a flat cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Courier {
    /// Form key, e.g. `jne-reg`.
    pub value: &'static str,
    pub label: &'static str,
    pub cost: Rupiah,
}

/// The courier table offered at checkout. Not editable at runtime.
pub const COURIERS: &[Courier] = &[
    Courier {
        value: "jne-reg",
        label: "JNE Reguler",
        cost: Rupiah(15000),
    },
    Courier {
        value: "jne-yes",
        label: "JNE YES",
        cost: Rupiah(25000),
    },
    Courier {
        value: "jnt-reg",
        label: "J&T Express",
        cost: Rupiah(15000),
    },
    Courier {
        value: "sicepat-reg",
        label: "SiCepat REG",
        cost: Rupiah(12000),
    },
    Courier {
        value: "sicepat-best",
        label: "SiCepat BEST",
        cost: Rupiah(22000),
    },
    Courier {
        value: "anteraja-reg",
        label: "AnterAja Reguler",
        cost: Rupiah(13000),
    },
];

/// Shipping form contents. `courier` holds a [`Courier::value`] or is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    pub full_name: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub courier: String,
    pub notes: String,
}
