//! Vertex normal synthesis.
//!
//! Implements the angle-weighted accumulation of Thuermer & Wuethrich,
//! "Computing Vertex Normals from Polygonal Facets" (JGT 1998), which
//! stays well-behaved around irregular vertex fans.

use lucent_math::basis::unit_angle;
use lucent_math::Vec3;

use crate::mesh::TriMesh;

/// Fallback direction assigned to vertices whose accumulated normal
/// comes out exactly zero.
const FALLBACK_NORMAL: Vec3 = Vec3::X;

/// Computes, flips, or discards vertex normals as requested by the
/// mesh's `face_normals` / `flip_normals` flags.
///
/// - Face-normal meshes drop any stored vertex normals; a pending flip
///   swaps the winding of every triangle instead of touching data.
/// - Meshes with stored normals keep them, negated in place if a flip
///   is pending.
/// - Otherwise normals are synthesized by angle-weighted accumulation
///   of unit face normals; zero accumulations receive a fixed fallback
///   direction and are reported as a warning.
///
/// `flip_normals` is cleared on exit regardless of the branch taken.
pub fn compute_normals(mesh: &mut TriMesh) {
    let mut invalid = 0usize;

    if mesh.face_normals {
        mesh.normals.clear();

        if mesh.flip_normals {
            // Reverse the winding order; the implicit face normal
            // flips at shading time.
            for tri in &mut mesh.triangles {
                tri.swap(0, 1);
            }
        }
    } else if mesh.has_normals() {
        if mesh.flip_normals {
            for n in &mut mesh.normals {
                *n = -*n;
            }
        }
    } else {
        mesh.normals = vec![Vec3::ZERO; mesh.vertex_count()];

        for t in 0..mesh.triangles.len() {
            let tri = mesh.triangles[t];
            let mut face = Vec3::ZERO;
            for j in 0..3 {
                let v0 = mesh.positions[tri[j] as usize];
                let v1 = mesh.positions[tri[(j + 1) % 3] as usize];
                let v2 = mesh.positions[tri[(j + 2) % 3] as usize];
                let side_a = v1 - v0;
                let side_b = v2 - v0;
                if j == 0 {
                    face = side_a.cross(side_b);
                    let length = face.length();
                    if length == 0.0 {
                        // Degenerate triangle contributes nothing.
                        break;
                    }
                    face /= length;
                }
                let angle = unit_angle(side_a.normalize(), side_b.normalize());
                mesh.normals[tri[j] as usize] += face * angle;
            }
        }

        let flip = mesh.flip_normals;
        for n in &mut mesh.normals {
            let mut length = n.length();
            if flip {
                length = -length;
            }
            if length != 0.0 {
                *n /= length;
            } else {
                *n = FALLBACK_NORMAL;
                invalid += 1;
            }
        }
    }

    mesh.flip_normals = false;

    if invalid > 0 {
        tracing::warn!(
            mesh = %mesh.name,
            count = invalid,
            "unable to generate vertex normals; substituted fallback direction"
        );
    }
}
