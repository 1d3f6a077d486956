//! # lucent-material
//!
//! The material capability boundary consumed by the mesh subsystem.
//!
//! Mesh preprocessing never evaluates materials; it only asks three
//! questions (anisotropy, glossiness, ray-differential use) to decide
//! whether UV tangent frames are mandatory or opportunistic.

pub mod conductor;
pub mod matte;
pub mod traits;

pub use conductor::RoughConductor;
pub use matte::Matte;
pub use traits::SurfaceMaterial;
