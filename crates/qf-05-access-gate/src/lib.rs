//! # Access Gate Subsystem (QF-05)
//!
//! Capability model for read operations, layered around the transmission
//! pipeline's read API. The gate wraps, but never alters, the verifier's
//! semantics: a denied read is the only behavioral difference from the
//! undecorated pipeline.
//!
//! Access is granted when any of the following holds:
//! - the caller address is on the explicit allow-list,
//! - enforcement is globally disabled,
//! - the call is end-user-originated rather than contract-to-contract.
//!
//! Allow-list and enforcement flag are mutable only by the administrative
//! identity.

pub mod domain;
pub mod service;

// Re-export public API
pub use domain::controller::AccessController;
pub use domain::errors::AccessError;
pub use service::GatedReader;
