//! # lucent-math
//!
//! Math primitives for the Lucent renderer.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, etc.)
//! - Axis-aligned bounding box
//! - Orthonormal basis construction and angle helpers
//! - Piecewise-constant 1D distribution for CDF sampling

pub mod aabb;
pub mod basis;
pub mod distribution;

pub use aabb::Aabb;
pub use distribution::Distribution1D;

// Re-export glam types as the canonical math types for Lucent.
pub use glam::{Mat3, Vec2, Vec3};
