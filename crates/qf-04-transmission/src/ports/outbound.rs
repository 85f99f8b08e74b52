//! # Outbound Ports (Event Gateway)
//!
//! The durable event sink the pipeline publishes to after a state
//! transition commits. Publication failures surface to the caller but can
//! no longer undo the transition.

use crate::events::payloads::NewTransmissionPayload;
use async_trait::async_trait;
use qf_01_config_registry::ConfigRotatedPayload;
use thiserror::Error;

/// Errors from the event sink.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventSinkError {
    /// The sink rejected or failed to persist the event
    #[error("event publication failed: {0}")]
    PublishFailed(String),
}

/// Durable event gateway.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish a config rotation event.
    async fn config_rotated(&self, payload: ConfigRotatedPayload) -> Result<(), EventSinkError>;

    /// Publish a transmission event.
    async fn new_transmission(&self, payload: NewTransmissionPayload)
        -> Result<(), EventSinkError>;
}

#[async_trait]
impl<E: EventSink> EventSink for std::sync::Arc<E> {
    async fn config_rotated(&self, payload: ConfigRotatedPayload) -> Result<(), EventSinkError> {
        (**self).config_rotated(payload).await
    }

    async fn new_transmission(
        &self,
        payload: NewTransmissionPayload,
    ) -> Result<(), EventSinkError> {
        (**self).new_transmission(payload).await
    }
}
