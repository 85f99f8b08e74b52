//! Cross-subsystem integration flows.

pub mod adversarial;
pub mod e2e_feed;
