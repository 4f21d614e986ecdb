//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::model::{InventoryCreate, InventoryId, InventoryItem, InventoryUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: InventoryId, params: InventoryCreate) -> Result<Self, InventoryError> {
        if params.product_name.trim().is_empty() {
            return Err(InventoryError::ValidationError(
                "product name is required".to_string(),
            ));
        }
        Ok(InventoryItem::new(id, params))
    }

    async fn on_update(&mut self, update: InventoryUpdate, _ctx: &()) -> Result<(), InventoryError> {
        if let Some(name) = update.product_name {
            if name.trim().is_empty() {
                return Err(InventoryError::ValidationError(
                    "product name is required".to_string(),
                ));
            }
            self.product_name = name;
        }
        if let Some(reserved) = update.reserved_stock {
            self.reserved_stock = reserved;
        }
        if let Some(reorder_point) = update.reorder_point {
            self.reorder_point = reorder_point;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::Adjust(adjustment) => {
                if adjustment.quantity == 0 {
                    return Err(InventoryError::InvalidQuantity(0));
                }
                let before = self.current_stock;
                self.apply(&adjustment);
                info!(
                    product = %self.product_name,
                    kind = ?adjustment.kind,
                    quantity = adjustment.quantity,
                    before,
                    after = self.current_stock,
                    reason = adjustment.reason.as_deref().unwrap_or(""),
                    "Stock adjusted"
                );
                Ok(InventoryActionResult::Adjust(self.level()))
            }
            InventoryAction::CheckStatus => Ok(InventoryActionResult::CheckStatus(self.level())),
        }
    }
}
