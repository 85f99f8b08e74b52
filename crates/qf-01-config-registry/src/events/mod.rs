//! Durable event payloads published after a successful rotation.

pub mod payloads;
