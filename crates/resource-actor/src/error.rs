//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of any resource.
//! Resource clients translate these into their own error enums.

/// Errors that can occur while talking to a resource actor.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the resource error carried by an `EntityError`, if it is of type `E`.
    ///
    /// Clients use this to hand a domain error back to callers unchanged instead
    /// of flattening it into a string.
    pub fn entity_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
