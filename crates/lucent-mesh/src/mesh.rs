//! Core triangle mesh type.
//!
//! The mesh owns all of its buffers. Per-vertex attributes (normals,
//! texture coordinates, colors) are optional: an empty buffer means the
//! attribute is absent, a non-empty one must match the vertex count.

use std::sync::OnceLock;

use lucent_material::SurfaceMaterial;
use lucent_math::{Aabb, Vec2, Vec3};
use lucent_types::{Float, LucentError, LucentResult};

use crate::normals::compute_normals;
use crate::sampler::SamplingTable;
use crate::shading::{compute_uv_tangents, TangentFrame};

/// A triangle mesh with optional per-vertex attributes.
///
/// Triangle indices reference into the vertex buffers. Tangent frames
/// are per-triangle. Sampling state (surface area and the area CDF) is
/// built lazily on first use and shared between render workers.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    /// Informational identifier, carried through serialization.
    pub name: String,

    /// Vertex positions. Length defines the vertex count.
    pub positions: Vec<Vec3>,
    /// Per-vertex shading normals. Empty when absent.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates. Empty when absent.
    pub texcoords: Vec<Vec2>,
    /// Per-vertex colors (3 channels). Empty when absent.
    pub colors: Vec<Vec3>,

    /// Triangle indices — each triangle is `[v0, v1, v2]`.
    pub triangles: Vec<[u32; 3]>,

    /// Per-triangle UV tangent frames. Empty until computed.
    pub tangents: Vec<TangentFrame>,

    /// Axis-aligned bounding box; finalized by [`configure`](Self::configure).
    pub aabb: Aabb,

    /// Use flat per-face shading instead of interpolated vertex normals.
    pub face_normals: bool,
    /// One-shot instruction to flip normal orientation, consumed and
    /// cleared by the next normal synthesis pass.
    pub flip_normals: bool,

    /// Lazily built area/CDF state. First sampling caller builds it,
    /// concurrent callers block, everyone afterwards reads.
    pub(crate) sampling: OnceLock<SamplingTable>,
}

impl TriMesh {
    /// Creates an empty mesh with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if per-vertex normals are present.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Returns true if per-vertex texture coordinates are present.
    #[inline]
    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// Returns true if per-vertex colors are present.
    #[inline]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Returns true if per-triangle tangent frames are present.
    #[inline]
    pub fn has_tangents(&self) -> bool {
        !self.tangents.is_empty()
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle_positions(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[t];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// Returns the unit geometric normal of triangle `t`, or zero for a
    /// degenerate triangle.
    pub fn geometric_normal(&self, t: usize) -> Vec3 {
        let [p0, p1, p2] = self.triangle_positions(t);
        (p1 - p0).cross(p2 - p0).normalize_or_zero()
    }

    /// Returns the area of triangle `t`.
    pub fn triangle_area(&self, t: usize) -> Float {
        let [p0, p1, p2] = self.triangle_positions(t);
        0.5 * (p1 - p0).cross(p2 - p0).length()
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Optional attribute buffers are empty or match the vertex count
    /// - Triangle indices are within bounds
    /// - Tangent buffer is empty or matches the triangle count
    pub fn validate(&self) -> LucentResult<()> {
        let n = self.vertex_count();

        for (name, len) in [
            ("normals", self.normals.len()),
            ("texcoords", self.texcoords.len()),
            ("colors", self.colors.len()),
        ] {
            if len != 0 && len != n {
                return Err(LucentError::InvalidMesh(format!(
                    "Attribute '{}' has {} entries, expected 0 or {}",
                    name, len, n
                )));
            }
        }

        for (t, tri) in self.triangles.iter().enumerate() {
            for &idx in tri {
                if idx as usize >= n {
                    return Err(LucentError::InvalidMesh(format!(
                        "Triangle {} references vertex {} (vertex count: {})",
                        t, idx, n
                    )));
                }
            }
        }

        if !self.tangents.is_empty() && self.tangents.len() != self.triangle_count() {
            return Err(LucentError::InvalidMesh(format!(
                "Tangent frame count ({}) != triangle count ({})",
                self.tangents.len(),
                self.triangle_count()
            )));
        }

        Ok(())
    }

    /// Recomputes the bounding box from the position buffer.
    pub fn recompute_aabb(&mut self) {
        self.aabb = Aabb::from_points(&self.positions);
    }

    /// Drops derived shading data (normals and tangent frames).
    ///
    /// Called before topology-changing operations; the data must be
    /// rebuilt via [`configure`](Self::configure) before use.
    pub fn invalidate_shading_data(&mut self) {
        self.normals.clear();
        self.tangents.clear();
    }

    /// Post-load configuration.
    ///
    /// Finalizes the bounding box, synthesizes or adjusts normals, and
    /// builds UV tangent frames when the attached material needs them:
    /// mandatory for anisotropic materials, opportunistic for glossy
    /// ones and for materials using ray differentials.
    pub fn configure(&mut self, material: Option<&dyn SurfaceMaterial>) -> LucentResult<()> {
        if !self.aabb.is_valid() {
            self.recompute_aabb();
        }

        compute_normals(self);

        if let Some(material) = material {
            if material.is_anisotropic()
                || material.uses_ray_differentials()
                || material.is_glossy()
            {
                compute_uv_tangents(self, Some(material))?;
            }
        }

        Ok(())
    }
}
