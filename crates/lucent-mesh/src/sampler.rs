//! Area-weighted position sampling.
//!
//! The area CDF over triangles is built lazily: the first caller of
//! [`TriMesh::surface_area`] or [`TriMesh::sample_position`] constructs
//! it, concurrent callers block on the same initialization, and every
//! later caller reads the finished table.

use lucent_math::{Distribution1D, Vec2, Vec3};
use lucent_types::{Float, LucentError, LucentResult};

use crate::mesh::TriMesh;

/// Lazily built sampling state: total area, reciprocal, and the
/// piecewise-constant CDF over triangles.
#[derive(Debug, Clone)]
pub struct SamplingTable {
    pub area_distribution: Distribution1D,
    pub surface_area: Float,
    pub inv_surface_area: Float,
}

/// A position sampled uniformly over the mesh surface.
#[derive(Debug, Clone, Copy)]
pub struct PositionSample {
    /// Sampled point on the surface.
    pub p: Vec3,
    /// Shading normal at the point: interpolated vertex normals when
    /// present, the geometric face normal otherwise.
    pub n: Vec3,
    /// Density with respect to the area measure; always the reciprocal
    /// of the total surface area.
    pub pdf: Float,
}

/// Maps a uniform point on the unit square to uniform barycentric
/// coordinates on the unit triangle.
fn square_to_uniform_triangle(sample: Vec2) -> Vec2 {
    let a = (1.0 - sample.x).max(0.0).sqrt();
    Vec2::new(1.0 - a, a * sample.y)
}

impl TriMesh {
    /// Returns the sampling table, building it on first use.
    ///
    /// Sampling an empty mesh is a configuration error, surfaced
    /// before the lazy state is touched.
    fn sampling_table(&self) -> LucentResult<&SamplingTable> {
        if self.triangles.is_empty() {
            return Err(LucentError::InvalidConfig(format!(
                "\"{}\": encountered an empty triangle mesh",
                self.name
            )));
        }

        Ok(self.sampling.get_or_init(|| {
            let mut distribution = Distribution1D::with_capacity(self.triangle_count());
            for t in 0..self.triangle_count() {
                distribution.append(self.triangle_area(t));
            }
            let surface_area = distribution.normalize();
            SamplingTable {
                area_distribution: distribution,
                surface_area,
                inv_surface_area: 1.0 / surface_area,
            }
        }))
    }

    /// Total surface area, computed on first use.
    pub fn surface_area(&self) -> LucentResult<Float> {
        Ok(self.sampling_table()?.surface_area)
    }

    /// Reciprocal of the total surface area.
    pub fn inverse_surface_area(&self) -> LucentResult<Float> {
        Ok(self.sampling_table()?.inv_surface_area)
    }

    /// Samples a position uniformly with respect to surface area.
    ///
    /// One coordinate of `sample` selects a triangle by inverse-CDF
    /// lookup; its residual is reused for the within-triangle
    /// barycentric sample, preserving stratification.
    pub fn sample_position(&self, sample: Vec2) -> LucentResult<PositionSample> {
        let table = self.sampling_table()?;

        let mut residual = sample.y;
        let index = table.area_distribution.sample_reuse(&mut residual);

        let bary = square_to_uniform_triangle(Vec2::new(sample.x, residual));
        let [i0, i1, i2] = self.triangles[index];
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);

        let p0 = self.positions[i0];
        let side_a = self.positions[i1] - p0;
        let side_b = self.positions[i2] - p0;
        let p = p0 + side_a * bary.x + side_b * bary.y;

        let n = if self.has_normals() {
            let w = 1.0 - bary.x - bary.y;
            (self.normals[i0] * w + self.normals[i1] * bary.x + self.normals[i2] * bary.y)
                .normalize()
        } else {
            side_a.cross(side_b).normalize()
        };

        Ok(PositionSample {
            p,
            n,
            pdf: table.inv_surface_area,
        })
    }
}
