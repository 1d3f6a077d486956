//! Floating-point policy for the renderer.
//!
//! Geometry is stored in `f32`. This alias makes it easy to experiment
//! with `f64` builds if needed; the mesh codec reads files written at
//! either width regardless of the build's own width.

/// The floating-point type used for geometry throughout the renderer.
pub type Float = f32;

/// Whether this build stores geometry in double precision.
///
/// The mesh codec stamps the matching precision flag when writing and
/// converts element-wise when a file's width differs from this one.
pub const DOUBLE_PRECISION: bool = false;
