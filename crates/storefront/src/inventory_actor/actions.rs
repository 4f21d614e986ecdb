//! Custom actions for the Inventory actor.

use crate::model::{StockAdjustment, StockLevel};

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Applies an operator's stock correction.
    Adjust(StockAdjustment),
    /// Reads the current figures without changing them.
    CheckStatus,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Figures after the adjustment.
    Adjust(StockLevel),
    CheckStatus(StockLevel),
}
