//! # Round Ledger Subsystem (QF-03)
//!
//! Append-only store of accepted (answer, timestamp) entries indexed by
//! sequential round id, plus the non-reverting read helpers layered on top.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): record and read-surface value types,
//!   read helpers
//! - **Ports Layer** (`ports/`): the `RoundStore` storage trait
//! - **Adapters** (`adapters/`): in-memory reference implementation
//!
//! ## Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Write Once | A record is never updated after its batch commits |
//! | 2 | Batch Atomicity | A transmission's records land together |
//! | 3 | Non-Reverting Reads | Absent or out-of-range ids read as zero |

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::memory::InMemoryRoundStore;
pub use domain::reads;
pub use domain::entities::{RoundData, RoundRecord};
pub use domain::errors::LedgerError;
pub use domain::reads::{answer_for, latest_round_data, round_data, timestamp_for};
pub use ports::store::RoundStore;
