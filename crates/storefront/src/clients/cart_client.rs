//! # Cart Client
//!
//! High-level API for the `Cart` actor.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, Product, ProductId, Rupiah};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    /// Cart errors raised inside the actor come back as themselves.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<CartError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Opens an empty cart.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CartId, CartError> {
        self.create_cart_with(CartCreate::default()).await
    }

    /// Opens a cart with pre-filled lines.
    #[instrument(skip(self))]
    pub async fn create_cart_with(&self, params: CartCreate) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a cart, failing with `NotFound` when it does not exist.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, id: CartId) -> Result<Cart, CartError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| CartError::NotFound(id.to_string()))
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of `product`. Returns the line's new quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, id: CartId, product: Product) -> Result<u32, CartError> {
        debug!("Adding to cart");
        match self.act(id, CartAction::AddItem(product)).await? {
            CartActionResult::AddItem(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Sets a line's quantity; values below 1 become 1, values above
    /// [`MAX_LINE_QUANTITY`](crate::model::MAX_LINE_QUANTITY) are rejected.
    /// Returns `false` when the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, CartError> {
        let quantity = quantity.max(1);
        match self
            .act(
                id,
                CartAction::UpdateQuantity {
                    product_id,
                    quantity,
                },
            )
            .await?
        {
            CartActionResult::UpdateQuantity(matched) => Ok(matched),
            other => Err(unexpected(other)),
        }
    }

    /// Removes a line. Returns `false` when the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, product_id: ProductId) -> Result<bool, CartError> {
        match self.act(id, CartAction::RemoveItem(product_id)).await? {
            CartActionResult::RemoveItem(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn subtotal(&self, id: CartId) -> Result<Rupiah, CartError> {
        match self.act(id, CartAction::Subtotal).await? {
            CartActionResult::Subtotal(amount) => Ok(amount),
            other => Err(unexpected(other)),
        }
    }

    /// Empties the cart. Returns the number of lines dropped.
    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<usize, CartError> {
        match self.act(id, CartAction::Clear).await? {
            CartActionResult::Clear(lines) => Ok(lines),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected cart result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action, expect_get, MockClient};

    #[tokio::test]
    async fn test_update_quantity_clamps_before_sending() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move {
            carts
                .update_quantity(CartId(1), ProductId::from("7"), 0)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                assert_eq!(product_id, ProductId::from("7"));
                assert_eq!(quantity, 1);
            }
            other => panic!("Expected UpdateQuantity, got {:?}", other),
        }
        responder
            .send(Ok(CartActionResult::UpdateQuantity(true)))
            .unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_get_cart_asks_for_the_right_id() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move { carts.get_cart(CartId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, CartId(4));
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CartError::NotFound("cart_4".to_string()))
        );
    }

    #[tokio::test]
    async fn test_entity_error_is_preserved() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CartError::DuplicateItem(ProductId::from("3")),
            )));

        let carts = CartClient::new(mock.client());
        let err = carts.create_cart().await.unwrap_err();
        assert_eq!(err, CartError::DuplicateItem(ProductId::from("3")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_cart_maps_to_not_found() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(9))
            .return_err(FrameworkError::NotFound("cart_9".to_string()));
        mock.expect_get(CartId(9)).return_ok(None);

        let carts = CartClient::new(mock.client());
        let err = carts.subtotal(CartId(9)).await.unwrap_err();
        assert_eq!(err, CartError::NotFound("cart_9".to_string()));

        let err = carts.get_cart(CartId(9)).await.unwrap_err();
        assert_eq!(err, CartError::NotFound("cart_9".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1))
            .return_ok(CartActionResult::Clear(0));

        let carts = CartClient::new(mock.client());
        let err = carts.subtotal(CartId(1)).await.unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
    }
}
