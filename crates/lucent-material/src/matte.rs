//! Smooth diffuse material.

use crate::traits::SurfaceMaterial;

/// A Lambertian surface. Needs no tangent frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matte;

impl SurfaceMaterial for Matte {
    fn is_anisotropic(&self) -> bool {
        false
    }

    fn is_glossy(&self) -> bool {
        false
    }

    fn uses_ray_differentials(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "matte"
    }
}
