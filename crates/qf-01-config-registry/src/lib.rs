//! # Config Registry Subsystem (QF-01)
//!
//! Owns the current participant set (signer/transmitter identities) and the
//! protocol threshold. The only mutation path is the privileged rotation
//! operation, which replaces the configuration wholesale.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): participant table, digest computation,
//!   the registry state machine
//! - **Events** (`events/`): durable payloads for downstream indexers
//!
//! ## Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Single Role | An address holds at most one role at a time |
//! | 2 | Atomic Rotation | A rotation is fully applied or not at all |
//! | 3 | Monotonic Count | `config_count` increases by 1 per rotation |
//! | 4 | Ordinal Reset | Every rotation resets epoch/round to zero |

pub mod domain;
pub mod events;

// Re-export public API
pub use domain::entities::{ConfigDetails, ConfigProposal};
pub use domain::errors::ConfigError;
pub use domain::registry::ConfigRegistry;
pub use domain::table::ParticipantTable;
pub use events::payloads::ConfigRotatedPayload;
