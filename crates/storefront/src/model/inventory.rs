/// Stock records shown on the admin inventory page.
///
/// # Actor Framework
/// [`InventoryItem`] implements [`ActorEntity`](resource_actor::ActorEntity)
/// in [`inventory_actor`](crate::inventory_actor).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Reorder point used when an item is created without one.
pub const DEFAULT_REORDER_POINT: u32 = 10;

/// Type-safe identifier for inventory records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InventoryId(pub u32);

impl From<u32> for InventoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for InventoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "inventory_{}", self.0)
    }
}

/// Stock health tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    Out,
    Low,
    Good,
}

impl StockTier {
    pub fn as_str(self) -> &'static str {
        match self {
            StockTier::Out => "out",
            StockTier::Low => "low",
            StockTier::Good => "good",
        }
    }
}

impl Display for StockTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryId,
    pub product_name: String,
    pub current_stock: u32,
    /// Units held by unpaid orders.
    pub reserved_stock: u32,
    pub reorder_point: u32,
}

/// Payload for registering a product in the inventory.
#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub product_name: String,
    pub current_stock: u32,
    pub reserved_stock: u32,
    /// Falls back to the configured default.
    pub reorder_point: Option<u32>,
}

/// Settings edits from the item detail form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub product_name: Option<String>,
    pub reserved_stock: Option<u32>,
    pub reorder_point: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    Add,
    Remove,
}

/// A stock correction submitted by an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub kind: AdjustmentKind,
    pub quantity: u32,
    pub reason: Option<String>,
}

impl StockAdjustment {
    pub fn add(quantity: u32) -> Self {
        Self {
            kind: AdjustmentKind::Add,
            quantity,
            reason: None,
        }
    }

    pub fn remove(quantity: u32) -> Self {
        Self {
            kind: AdjustmentKind::Remove,
            quantity,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Stock figures of one item at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub current: u32,
    pub available: i64,
    pub tier: StockTier,
}

impl InventoryItem {
    pub fn new(id: InventoryId, params: InventoryCreate) -> Self {
        Self {
            id,
            product_name: params.product_name,
            current_stock: params.current_stock,
            reserved_stock: params.reserved_stock,
            reorder_point: params.reorder_point.unwrap_or(DEFAULT_REORDER_POINT),
        }
    }

    /// `current - reserved`. Negative when a removal cut below the reservations.
    pub fn available_stock(&self) -> i64 {
        i64::from(self.current_stock) - i64::from(self.reserved_stock)
    }

    pub fn tier(&self) -> StockTier {
        if self.current_stock == 0 {
            StockTier::Out
        } else if self.available_stock() <= i64::from(self.reorder_point) {
            StockTier::Low
        } else {
            StockTier::Good
        }
    }

    pub fn level(&self) -> StockLevel {
        StockLevel {
            current: self.current_stock,
            available: self.available_stock(),
            tier: self.tier(),
        }
    }

    /// `Add` raises the count; `Remove` lowers it, stopping at zero.
    pub fn apply(&mut self, adjustment: &StockAdjustment) {
        self.current_stock = match adjustment.kind {
            AdjustmentKind::Add => self.current_stock.saturating_add(adjustment.quantity),
            AdjustmentKind::Remove => self.current_stock.saturating_sub(adjustment.quantity),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: u32, reserved: u32, reorder: u32) -> InventoryItem {
        InventoryItem::new(
            InventoryId(1),
            InventoryCreate {
                product_name: "Centella Ampoule".to_string(),
                current_stock: current,
                reserved_stock: reserved,
                reorder_point: Some(reorder),
            },
        )
    }

    #[test]
    fn test_tiers() {
        assert_eq!(item(0, 0, 10).tier(), StockTier::Out);
        assert_eq!(item(15, 5, 10).tier(), StockTier::Low);
        assert_eq!(item(12, 0, 10).tier(), StockTier::Good);
        assert_eq!(item(11, 0, 10).tier(), StockTier::Good);
        assert_eq!(item(10, 0, 10).tier(), StockTier::Low);
    }

    #[test]
    fn test_remove_floors_at_zero() {
        let mut it = item(4, 0, 10);
        it.apply(&StockAdjustment::remove(9));
        assert_eq!(it.current_stock, 0);
        assert_eq!(it.tier(), StockTier::Out);
    }

    #[test]
    fn test_available_goes_negative_below_reservations() {
        let mut it = item(20, 8, 5);
        it.apply(&StockAdjustment::remove(15));
        assert_eq!(it.current_stock, 5);
        assert_eq!(it.available_stock(), -3);
        assert_eq!(it.tier(), StockTier::Low);
    }

    #[test]
    fn test_default_reorder_point() {
        let it = InventoryItem::new(
            InventoryId(2),
            InventoryCreate {
                product_name: "Lip Balm".to_string(),
                current_stock: 3,
                reserved_stock: 0,
                reorder_point: None,
            },
        );
        assert_eq!(it.reorder_point, DEFAULT_REORDER_POINT);
    }
}
