//! Surface material trait — the capability boundary.
//!
//! Geometry preprocessing interrogates the attached material through
//! these predicates only; BSDF evaluation lives elsewhere.

/// Capability queries a surface material answers for mesh preprocessing.
///
/// The answers steer tangent-frame construction:
/// - An anisotropic material *requires* UV tangents (missing texture
///   coordinates become a hard error).
/// - A glossy material or one using ray differentials makes tangent
///   construction worthwhile but optional.
pub trait SurfaceMaterial: Send + Sync {
    /// Does the BSDF depend on the orientation of the tangent frame?
    fn is_anisotropic(&self) -> bool;

    /// Does the BSDF contain a glossy (non-diffuse, non-specular) lobe?
    fn is_glossy(&self) -> bool;

    /// Does shading consume ray differentials (e.g. texture filtering)?
    fn uses_ray_differentials(&self) -> bool;

    /// Returns a human-readable name for this material.
    fn name(&self) -> &str;
}
