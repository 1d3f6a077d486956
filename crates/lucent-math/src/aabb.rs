//! Axis-aligned bounding box.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box.
///
/// A freshly created box is inverted (min > max) and reports itself
/// as invalid until at least one point has been merged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates an empty (invalid) bounding box.
    pub fn new() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Creates a bounding box from explicit corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a bounding box enclosing a set of points.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut aabb = Self::new();
        for &p in points {
            aabb.expand(p);
        }
        aabb
    }

    /// Returns true if the box encloses a non-degenerate region.
    ///
    /// An untouched box (min > max on every axis) is invalid.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Grows the box to contain `p`.
    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Returns true if `p` lies inside or on the boundary of the box.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Resets the box to the empty (invalid) state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new()
    }
}
