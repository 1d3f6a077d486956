//! # lucent-types
//!
//! Shared types, error types, and the floating-point policy
//! for the Lucent rendering system.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Lucent crates share.

pub mod constants;
pub mod error;
pub mod precision;

pub use error::{LucentError, LucentResult};
pub use precision::Float;
