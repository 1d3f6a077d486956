//! Orthonormal basis construction and angle helpers.

use glam::Vec3;
use lucent_types::Float;

/// Builds an arbitrary orthonormal basis `(s, t)` perpendicular to `n`.
///
/// `n` is expected to be normalized. Degenerate inputs (including the
/// zero vector) still produce finite, mutually orthogonal outputs.
pub fn coordinate_system(n: Vec3) -> (Vec3, Vec3) {
    if n.x.abs() > n.y.abs() {
        let len = (n.x * n.x + n.z * n.z).sqrt();
        if len > 0.0 {
            let s = Vec3::new(-n.z / len, 0.0, n.x / len);
            return (s, n.cross(s));
        }
    } else {
        let len = (n.y * n.y + n.z * n.z).sqrt();
        if len > 0.0 {
            let s = Vec3::new(0.0, n.z / len, -n.y / len);
            return (s, n.cross(s));
        }
    }
    // Zero-length input: any orthonormal pair will do.
    (Vec3::X, Vec3::Y)
}

/// Numerically stable angle between two unit vectors.
///
/// Avoids the precision loss of `acos(dot)` for nearly parallel or
/// nearly opposite inputs.
pub fn unit_angle(u: Vec3, v: Vec3) -> Float {
    if u.dot(v) < 0.0 {
        std::f32::consts::PI - 2.0 * (0.5 * (v + u).length()).asin()
    } else {
        2.0 * (0.5 * (v - u).length()).asin()
    }
}
