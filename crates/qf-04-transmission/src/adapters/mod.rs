//! Event gateway adapters.

pub mod memory_sink;
