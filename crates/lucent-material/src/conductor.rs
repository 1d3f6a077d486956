//! Rough (microfacet) conductor material.

use crate::traits::SurfaceMaterial;

/// A glossy metal surface with optional anisotropic roughness.
///
/// The anisotropic variant stretches its microfacet distribution along
/// the tangent directions, so meshes carrying it must provide texture
/// coordinates for tangent-frame construction.
#[derive(Debug, Clone, Copy)]
pub struct RoughConductor {
    /// Whether roughness differs along the two tangent directions.
    pub anisotropic: bool,
    /// Whether textured parameters request ray differentials.
    pub textured: bool,
}

impl RoughConductor {
    /// An isotropic rough conductor with constant parameters.
    pub fn isotropic() -> Self {
        Self {
            anisotropic: false,
            textured: false,
        }
    }

    /// An anisotropic rough conductor.
    pub fn anisotropic() -> Self {
        Self {
            anisotropic: true,
            textured: false,
        }
    }
}

impl SurfaceMaterial for RoughConductor {
    fn is_anisotropic(&self) -> bool {
        self.anisotropic
    }

    fn is_glossy(&self) -> bool {
        true
    }

    fn uses_ray_differentials(&self) -> bool {
        self.textured
    }

    fn name(&self) -> &str {
        "rough_conductor"
    }
}
