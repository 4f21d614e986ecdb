//! # ActorClient Trait
//!
//! Shared read/delete surface for resource-specific clients, built on top of a
//! generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// A wrapper only supplies `inner` and `map_error`; `get`, `list` and `delete`
/// come for free.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Voucher { id: u32 }
/// #[derive(Debug)] struct VoucherCreate;
/// #[derive(Debug)] struct VoucherUpdate;
/// #[derive(Debug)] enum VoucherAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct VoucherError(String);
///
/// impl From<String> for VoucherError {
///     fn from(s: String) -> Self { VoucherError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Voucher {
///     type Id = u32;
///     type Create = VoucherCreate;
///     type Update = VoucherUpdate;
///     type Action = VoucherAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = VoucherError;
///
///     fn from_create_params(id: u32, _: VoucherCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: VoucherUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: VoucherAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct VoucherClient {
///     inner: ResourceClient<Voucher>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Voucher> for VoucherClient {
///     type Error = VoucherError;
///
///     fn inner(&self) -> &ResourceClient<Voucher> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         VoucherError(e.to_string())
///     }
/// }
///
/// async fn usage(client: VoucherClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
