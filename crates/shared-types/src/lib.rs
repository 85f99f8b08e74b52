//! # Shared Types Crate
//!
//! This crate contains the domain entities and cross-subsystem traits shared
//! across the Quorum-Feed subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//!   A subsystem crate never redeclares a shared primitive.
//! - **Value Semantics**: Everything in this crate is a plain value or a
//!   trait over plain values; no I/O, no locks, no global state.

pub mod entities;
pub mod participants;

pub use entities::*;
pub use participants::*;
