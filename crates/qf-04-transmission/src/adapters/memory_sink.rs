//! # In-Memory Event Sink
//!
//! Reference implementation of the `EventSink` port: keeps the typed events
//! for assertions and a JSON journal line per event, the shape a downstream
//! indexer would consume.

use crate::events::payloads::NewTransmissionPayload;
use crate::ports::outbound::{EventSink, EventSinkError};
use async_trait::async_trait;
use parking_lot::Mutex;
use qf_01_config_registry::ConfigRotatedPayload;
use serde::{Deserialize, Serialize};

/// One published event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedEvent {
    /// A config rotation was applied.
    ConfigRotated(ConfigRotatedPayload),
    /// A transmission was accepted.
    NewTransmission(NewTransmissionPayload),
}

/// In-memory implementation of `EventSink`.
#[derive(Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<FeedEvent>>,
    journal: Mutex<Vec<String>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event published so far, in order.
    pub fn events(&self) -> Vec<FeedEvent> {
        self.events.lock().clone()
    }

    /// The serialized journal, one JSON line per event.
    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().clone()
    }

    fn record(&self, event: FeedEvent) -> Result<(), EventSinkError> {
        let line = serde_json::to_string(&event)
            .map_err(|e| EventSinkError::PublishFailed(e.to_string()))?;
        self.events.lock().push(event);
        self.journal.lock().push(line);
        Ok(())
    }
}

#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn config_rotated(&self, payload: ConfigRotatedPayload) -> Result<(), EventSinkError> {
        self.record(FeedEvent::ConfigRotated(payload))
    }

    async fn new_transmission(
        &self,
        payload: NewTransmissionPayload,
    ) -> Result<(), EventSinkError> {
        self.record(FeedEvent::NewTransmission(payload))
    }
}
