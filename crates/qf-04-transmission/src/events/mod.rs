//! Durable event payloads published after an accepted transmission.

pub mod payloads;
