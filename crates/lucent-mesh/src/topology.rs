//! Topology reconstruction by crease-angle vertex clustering.
//!
//! Collapses exactly duplicate vertices and splits shared vertices at
//! creases, based on the angle between incident face normals. The
//! rebuilt mesh generally has a different vertex count than the input.

use std::collections::BTreeMap;

use lucent_material::SurfaceMaterial;
use lucent_math::{Vec2, Vec3};
use lucent_types::constants::INVALID_INDEX;
use lucent_types::{Float, LucentResult};

use crate::mesh::TriMesh;

/// Exact-equality key over a corner's (position, uv, color).
///
/// Comparing bit patterns keeps the key `Eq + Ord`, which a float tuple
/// is not, and makes bucket iteration deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct VertexKey {
    pos: [u32; 3],
    uv: [u32; 2],
    col: [u32; 3],
}

impl VertexKey {
    fn new(pos: Vec3, uv: Option<Vec2>, col: Option<Vec3>) -> Self {
        let uv = uv.unwrap_or(Vec2::ZERO);
        let col = col.unwrap_or(Vec3::ZERO);
        Self {
            pos: [pos.x.to_bits(), pos.y.to_bits(), pos.z.to_bits()],
            uv: [uv.x.to_bits(), uv.y.to_bits()],
            col: [col.x.to_bits(), col.y.to_bits(), col.z.to_bits()],
        }
    }
}

/// One (triangle, corner) sharing a vertex key.
#[derive(Debug, Clone, Copy)]
struct Occurrence {
    tri: usize,
    corner: usize,
    clustered: bool,
}

/// Rebuilds mesh topology with the given crease angle (degrees).
///
/// Corners with identical (position, uv, color) are clustered greedily:
/// each cluster seed emits one output vertex and absorbs the remaining
/// occurrences whose face normal is bit-identical to, or within
/// `cos(max_angle)` of, the seed's. A 180° angle merges all exact
/// duplicates; 0° keeps every crease split.
///
/// Stored normals and tangent frames are invalidated and rebuilt by the
/// final [`TriMesh::configure`] pass, using `material` for the
/// tangent-frame policy.
///
/// Runs in amortized linear time for bounded vertex degree.
pub fn rebuild_topology(
    mesh: &mut TriMesh,
    max_angle: Float,
    material: Option<&dyn SurfaceMaterial>,
) -> LucentResult<()> {
    let dp_thresh = max_angle.to_radians().cos();

    mesh.invalidate_shading_data();
    mesh.sampling.take();

    tracing::info!(
        mesh = %mesh.name,
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        max_angle,
        "rebuilding topology"
    );

    // Bucket every (triangle, corner) occurrence by its exact attribute
    // key, and precompute unit face normals.
    let mut buckets: BTreeMap<VertexKey, Vec<Occurrence>> = BTreeMap::new();
    let mut face_normals = Vec::with_capacity(mesh.triangle_count());

    for (t, tri) in mesh.triangles.iter().enumerate() {
        for (corner, &idx) in tri.iter().enumerate() {
            let idx = idx as usize;
            let key = VertexKey::new(
                mesh.positions[idx],
                mesh.texcoords.get(idx).copied(),
                mesh.colors.get(idx).copied(),
            );
            buckets.entry(key).or_default().push(Occurrence {
                tri: t,
                corner,
                clustered: false,
            });
        }

        let p0 = mesh.positions[tri[0] as usize];
        let p1 = mesh.positions[tri[1] as usize];
        let p2 = mesh.positions[tri[2] as usize];
        face_normals.push((p1 - p0).cross(p2 - p0).normalize_or_zero());
    }

    let mut new_triangles = vec![[INVALID_INDEX; 3]; mesh.triangle_count()];
    let mut new_positions: Vec<Vec3> = Vec::with_capacity(mesh.vertex_count());
    let mut new_texcoords: Vec<Vec2> = Vec::new();
    let mut new_colors: Vec<Vec3> = Vec::new();

    // Greedy clustering of face normals within each bucket.
    for occurrences in buckets.values_mut() {
        for seed in 0..occurrences.len() {
            if occurrences[seed].clustered {
                continue;
            }
            let n1 = face_normals[occurrences[seed].tri];

            let new_index = new_positions.len() as u32;
            let src = mesh.triangles[occurrences[seed].tri][occurrences[seed].corner] as usize;
            new_positions.push(mesh.positions[src]);
            if mesh.has_texcoords() {
                new_texcoords.push(mesh.texcoords[src]);
            }
            if mesh.has_colors() {
                new_colors.push(mesh.colors[src]);
            }

            for occ in occurrences[seed..].iter_mut() {
                if occ.clustered {
                    continue;
                }
                let n2 = face_normals[occ.tri];
                if n1 == n2 || n1.dot(n2) > dp_thresh {
                    new_triangles[occ.tri][occ.corner] = new_index;
                    occ.clustered = true;
                }
            }
        }
    }

    // Every corner must have been remapped; anything else is a defect
    // in the clustering pass itself.
    for (t, tri) in new_triangles.iter().enumerate() {
        for (corner, &idx) in tri.iter().enumerate() {
            assert!(
                idx != INVALID_INDEX,
                "topology rebuild left corner {} of triangle {} unassigned",
                corner,
                t
            );
        }
    }

    mesh.triangles = new_triangles;
    if mesh.has_texcoords() {
        mesh.texcoords = new_texcoords;
    }
    if mesh.has_colors() {
        mesh.colors = new_colors;
    }
    mesh.positions = new_positions;

    tracing::info!(
        mesh = %mesh.name,
        vertices = mesh.vertex_count(),
        "topology rebuild complete"
    );

    mesh.configure(material)
}
