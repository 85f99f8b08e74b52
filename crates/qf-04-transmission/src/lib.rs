//! # Transmission Pipeline Subsystem (QF-04)
//!
//! The application service that orchestrates one transmission as a single
//! atomic unit: Verify → assign round ids → write Ledger → update the hot
//! summary. Also the home of the privileged `set_config` surface and the
//! read API that the access gate decorates.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Ports Layer** (`ports/`): the inbound `FeedReader` API and the
//!   outbound `EventSink` gateway
//! - **Service Layer** (`service.rs`): the `Aggregator`, wiring registry,
//!   verifier and ledger together
//! - **Adapters** (`adapters/`): in-memory event journal
//!
//! ## Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Atomic Transmission | All validation precedes the first write |
//! | 2 | One Read, One Write | The hot summary is read once and written once per call |
//! | 3 | Serialized Writers | State transitions never interleave |
//! | 4 | Events After Commit | Publication follows the state transition |

pub mod adapters;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory_sink::{FeedEvent, InMemoryEventSink};
pub use errors::AggregatorError;
pub use events::payloads::NewTransmissionPayload;
pub use ports::inbound::FeedReader;
pub use ports::outbound::{EventSink, EventSinkError};
pub use service::{Aggregator, TransmissionDetails, TransmissionReceipt};
