//! # Inventory Client
//!
//! Back-office API for the `InventoryItem` actor.
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{
    InventoryCreate, InventoryId, InventoryItem, InventoryUpdate, StockAdjustment, StockLevel,
    StockTier,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
    default_reorder_point: u32,
}

impl InventoryClient {
    /// `default_reorder_point` fills in items created without one.
    pub fn new(inner: ResourceClient<InventoryItem>, default_reorder_point: u32) -> Self {
        Self {
            inner,
            default_reorder_point,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        mut params: InventoryCreate,
    ) -> Result<InventoryId, InventoryError> {
        params.reorder_point.get_or_insert(self.default_reorder_point);
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: InventoryId,
        update: InventoryUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Applies an operator's adjustment and returns the new figures.
    #[instrument(skip(self))]
    pub async fn adjust_stock(
        &self,
        id: InventoryId,
        adjustment: StockAdjustment,
    ) -> Result<StockLevel, InventoryError> {
        match self
            .inner
            .perform_action(id, InventoryAction::Adjust(adjustment))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Adjust(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn check_status(&self, id: InventoryId) -> Result<StockLevel, InventoryError> {
        match self
            .inner
            .perform_action(id, InventoryAction::CheckStatus)
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::CheckStatus(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Items in the `low` or `out` tier, for the restock panel.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self.list().await?;
        items.retain(|item| item.tier() != StockTier::Good);
        Ok(items)
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<InventoryError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected inventory result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_create};

    #[tokio::test]
    async fn test_create_item_fills_default_reorder_point() {
        let (client, mut receiver) = create_mock_client::<InventoryItem>(10);
        let inventory = InventoryClient::new(client, 25);

        let task = tokio::spawn(async move {
            inventory
                .create_item(InventoryCreate {
                    product_name: "Micellar Water".to_string(),
                    current_stock: 40,
                    reserved_stock: 0,
                    reorder_point: None,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params.reorder_point, Some(25));
        responder.send(Ok(InventoryId(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), InventoryId(1));
    }

    #[tokio::test]
    async fn test_explicit_reorder_point_kept() {
        let (client, mut receiver) = create_mock_client::<InventoryItem>(10);
        let inventory = InventoryClient::new(client, 25);

        let task = tokio::spawn(async move {
            inventory
                .create_item(InventoryCreate {
                    product_name: "Clay Mask".to_string(),
                    current_stock: 8,
                    reserved_stock: 0,
                    reorder_point: Some(3),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params.reorder_point, Some(3));
        responder.send(Ok(InventoryId(2))).unwrap();
        task.await.unwrap().unwrap();
    }
}
