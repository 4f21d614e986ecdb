//! # Order Client
//!
//! Back-office API for the `AdminOrder` actor.
use crate::model::{AdminOrder, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<AdminOrder>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<AdminOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer = %params.customer_name, total = %params.total))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Corrects the customer's contact details.
    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<AdminOrder, OrderError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Overwrites the status of an order. Returns the previous status.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::UpdateStatus(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::UpdateStatus(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Records the outcome of a payment check. Returns the new status.
    #[instrument(skip(self))]
    pub async fn verify_payment(
        &self,
        id: OrderId,
        approved: bool,
    ) -> Result<OrderStatus, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::VerifyPayment { approved })
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::VerifyPayment(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    /// Orders for the admin table, oldest first, optionally filtered by status.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<AdminOrder>, OrderError> {
        let mut orders = self.list().await?;
        if let Some(status) = status {
            orders.retain(|order| order.status == status);
        }
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<AdminOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<AdminOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<OrderError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected order result: {:?}", result))
}
