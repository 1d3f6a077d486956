//! UV tangent frames and shading-normal differentials.

use lucent_material::SurfaceMaterial;
use lucent_math::basis::coordinate_system;
use lucent_math::Vec3;
use lucent_types::{LucentError, LucentResult};

use crate::mesh::TriMesh;

/// Per-triangle rate of change of surface position with respect to the
/// texture parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TangentFrame {
    /// Position derivative along the U texture direction.
    pub dpdu: Vec3,
    /// Position derivative along the V texture direction.
    pub dpdv: Vec3,
}

/// Builds per-triangle UV tangent frames by solving the 2×2 system
/// mapping UV-space edge deltas to object-space edge deltas.
///
/// Idempotent: a mesh that already carries tangent frames is left
/// untouched. Texture coordinates are required; without them this is a
/// hard error for anisotropic materials (tangents are mandatory for
/// correct shading there) and a silent no-op otherwise.
///
/// Triangles with a zero-length geometric normal or a singular UV
/// system receive an arbitrary orthonormal basis perpendicular to the
/// normal; their count is reported as a warning.
pub fn compute_uv_tangents(
    mesh: &mut TriMesh,
    material: Option<&dyn SurfaceMaterial>,
) -> LucentResult<()> {
    if mesh.has_tangents() {
        return Ok(());
    }

    if !mesh.has_texcoords() {
        let anisotropic = material.is_some_and(|m| m.is_anisotropic());
        if anisotropic {
            return Err(LucentError::InvalidConfig(format!(
                "\"{}\": texture coordinates are required to generate tangent \
                 vectors. To render with an anisotropic material, make sure all \
                 associated shapes have valid texture coordinates.",
                mesh.name
            )));
        }
        return Ok(());
    }

    let mut degenerate = 0usize;
    let mut tangents = Vec::with_capacity(mesh.triangle_count());

    for tri in &mesh.triangles {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

        let v0 = mesh.positions[i0];
        let v1 = mesh.positions[i1];
        let v2 = mesh.positions[i2];

        let uv0 = mesh.texcoords[i0];
        let uv1 = mesh.texcoords[i1];
        let uv2 = mesh.texcoords[i2];

        let dp1 = v1 - v0;
        let dp2 = v2 - v0;
        let duv1 = uv1 - uv0;
        let duv2 = uv2 - uv0;

        let n = dp1.cross(dp2);
        let length = n.length();
        let determinant = duv1.x * duv2.y - duv1.y * duv2.x;

        if length == 0.0 || determinant == 0.0 {
            // Degenerate geometry or parameterization: pick arbitrary
            // tangents perpendicular to the (possibly zero) normal.
            degenerate += 1;
            let unit_n = if length == 0.0 { Vec3::ZERO } else { n / length };
            let (dpdu, dpdv) = coordinate_system(unit_n);
            tangents.push(TangentFrame { dpdu, dpdv });
        } else {
            let inv_det = 1.0 / determinant;
            tangents.push(TangentFrame {
                dpdu: (duv2.y * dp1 - duv1.y * dp2) * inv_det,
                dpdv: (-duv2.x * dp1 + duv1.x * dp2) * inv_det,
            });
        }
    }

    mesh.tangents = tangents;

    if degenerate > 0 {
        tracing::warn!(
            mesh = %mesh.name,
            count = degenerate,
            "mesh contains degenerate triangles; substituted arbitrary tangents"
        );
    }

    Ok(())
}

/// Derivative of the renormalized shading-normal field at a point on a
/// triangle, with respect to the triangle's parameterization — or to
/// the UV parameterization when tangent frames are present.
///
/// The barycentric coordinates are re-derived from `p` because the
/// caller's stored surface coordinates may have been overwritten for
/// texture lookup purposes. Singular systems yield zero derivatives.
pub fn normal_derivative(
    mesh: &TriMesh,
    p: Vec3,
    prim_index: usize,
    shading_frame: bool,
) -> (Vec3, Vec3) {
    if !shading_frame || !mesh.has_normals() {
        return (Vec3::ZERO, Vec3::ZERO);
    }

    assert!(prim_index < mesh.triangle_count());

    let [i0, i1, i2] = mesh.triangles[prim_index];
    let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);

    let p0 = mesh.positions[i0];
    let p1 = mesh.positions[i1];
    let p2 = mesh.positions[i2];

    // Recompute barycentric coordinates via the normal equations of
    // the triangle's edge basis.
    let rel = p - p0;
    let du = p1 - p0;
    let dv = p2 - p0;

    let b1 = du.dot(rel);
    let b2 = dv.dot(rel);
    let a11 = du.dot(du);
    let a12 = du.dot(dv);
    let a22 = dv.dot(dv);
    let det = a11 * a22 - a12 * a12;

    if det == 0.0 {
        return (Vec3::ZERO, Vec3::ZERO);
    }

    let inv_det = 1.0 / det;
    let u = (a22 * b1 - a12 * b2) * inv_det;
    let v = (-a12 * b1 + a11 * b2) * inv_det;
    let w = 1.0 - u - v;

    let n0 = mesh.normals[i0];
    let n1 = mesh.normals[i1];
    let n2 = mesh.normals[i2];

    // Derivative of normalize(u*n1 + v*n2 + w*n0) with respect to
    // [u, v]: since d/du [f/|f|] = f'/|f| - f <f, f'> / |f|^3, the
    // renormalization contributes a projection along the result.
    let mut n = u * n1 + v * n2 + w * n0;
    let inv_len = 1.0 / n.length();
    n *= inv_len;

    let mut dndu = (n1 - n0) * inv_len;
    dndu -= n * n.dot(dndu);
    let mut dndv = (n2 - n0) * inv_len;
    dndv -= n * n.dot(dndv);

    if mesh.has_tangents() {
        // Re-express in the texture UV parameterization.
        let uv0 = mesh.texcoords[i0];
        let uv1 = mesh.texcoords[i1];
        let uv2 = mesh.texcoords[i2];

        let duv1 = uv1 - uv0;
        let duv2 = uv2 - uv0;

        let det = duv1.x * duv2.y - duv1.y * duv2.x;
        if det == 0.0 {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        let inv_det = 1.0 / det;
        let dndu_uv = (duv2.y * dndu - duv1.y * dndv) * inv_det;
        let dndv_uv = (-duv2.x * dndu + duv1.x * dndv) * inv_det;
        return (dndu_uv, dndv_uv);
    }

    (dndu, dndv)
}
