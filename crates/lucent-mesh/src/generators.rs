//! Procedural mesh generators for tests and tools.
//!
//! These generators produce deterministic, resolution-configurable
//! meshes with correct winding order and UV coordinates.

use lucent_math::{Vec2, Vec3};

use crate::mesh::TriMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0. Texture coordinates cover the
/// unit square; vertex normals are left absent so normal synthesis can
/// be exercised on the result.
///
/// # Example
/// ```
/// use lucent_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = TriMesh::new("quad_grid");
    mesh.positions.reserve(verts_x * verts_y);
    mesh.texcoords.reserve(verts_x * verts_y);
    mesh.triangles.reserve(cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.positions
                .push(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
            mesh.texcoords.push(Vec2::new(u, v));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.triangles.push([top_left, bot_left, top_right]);
            mesh.triangles.push([top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin, with outward vertex
/// normals and spherical texture coordinates.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriMesh {
    let mut mesh = TriMesh::new("uv_sphere");
    let vertex_count = (stacks + 1) * (slices + 1);
    mesh.positions.reserve(vertex_count);
    mesh.normals.reserve(vertex_count);
    mesh.texcoords.reserve(vertex_count);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let n = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.positions.push(n * radius);
            mesh.normals.push(n);
            mesh.texcoords
                .push(Vec2::new(j as f32 / slices as f32, i as f32 / stacks as f32));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at the poles.
            if i != 0 {
                mesh.triangles.push([a, b, a + 1]);
            }
            if i != stacks - 1 {
                mesh.triangles.push([a + 1, b, b + 1]);
            }
        }
    }

    mesh
}
