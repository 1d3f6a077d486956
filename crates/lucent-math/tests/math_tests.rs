//! Integration tests for lucent-math.

use lucent_math::basis::{coordinate_system, unit_angle};
use lucent_math::{Aabb, Distribution1D, Vec3};

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn new_aabb_is_invalid() {
    let aabb = Aabb::new();
    assert!(!aabb.is_valid());
}

#[test]
fn expand_makes_valid() {
    let mut aabb = Aabb::new();
    aabb.expand(Vec3::new(1.0, 2.0, 3.0));
    assert!(aabb.is_valid());
    assert!(aabb.contains(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn from_points_contains_all() {
    let points = vec![
        Vec3::new(-1.0, 0.0, 2.0),
        Vec3::new(3.0, -2.0, 0.5),
        Vec3::new(0.0, 1.0, -4.0),
    ];
    let aabb = Aabb::from_points(&points);
    for &p in &points {
        assert!(aabb.contains(p));
    }
    assert!(!aabb.contains(Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn single_point_box_is_degenerate_but_valid() {
    let aabb = Aabb::from_points(&[Vec3::ONE]);
    assert!(aabb.is_valid());
    assert_eq!(aabb.min, aabb.max);
}

// ─── Basis Tests ──────────────────────────────────────────────

#[test]
fn coordinate_system_is_orthonormal() {
    let normals = [
        Vec3::Z,
        Vec3::X,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(-0.3, 0.9, 0.2).normalize(),
    ];
    for n in normals {
        let (s, t) = coordinate_system(n);
        assert!((s.length() - 1.0).abs() < 1e-5);
        assert!((t.length() - 1.0).abs() < 1e-5);
        assert!(s.dot(n).abs() < 1e-5);
        assert!(t.dot(n).abs() < 1e-5);
        assert!(s.dot(t).abs() < 1e-5);
    }
}

#[test]
fn coordinate_system_zero_input_is_finite() {
    let (s, t) = coordinate_system(Vec3::ZERO);
    assert!((s.length() - 1.0).abs() < 1e-5);
    assert!((t.length() - 1.0).abs() < 1e-5);
    assert!(s.dot(t).abs() < 1e-5);
}

#[test]
fn unit_angle_matches_acos_for_moderate_angles() {
    let u = Vec3::X;
    let v = Vec3::new(1.0, 1.0, 0.0).normalize();
    let angle = unit_angle(u, v);
    assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
}

#[test]
fn unit_angle_handles_opposite_vectors() {
    let angle = unit_angle(Vec3::X, -Vec3::X);
    assert!((angle - std::f32::consts::PI).abs() < 1e-5);
}

#[test]
fn unit_angle_of_identical_vectors_is_zero() {
    assert!(unit_angle(Vec3::Y, Vec3::Y).abs() < 1e-6);
}

// ─── Distribution1D Tests ─────────────────────────────────────

#[test]
fn normalize_returns_sum() {
    let mut d = Distribution1D::new();
    d.append(1.0);
    d.append(3.0);
    assert_eq!(d.len(), 2);
    let sum = d.normalize();
    assert!((sum - 4.0).abs() < 1e-6);
}

#[test]
fn sample_respects_weights() {
    let mut d = Distribution1D::new();
    d.append(1.0);
    d.append(3.0);
    d.normalize();
    // First entry covers [0, 0.25), second covers [0.25, 1).
    assert_eq!(d.sample(0.0), 0);
    assert_eq!(d.sample(0.2), 0);
    assert_eq!(d.sample(0.25), 1);
    assert_eq!(d.sample(0.99), 1);
}

#[test]
fn sample_reuse_rescales_residual() {
    let mut d = Distribution1D::new();
    d.append(1.0);
    d.append(1.0);
    d.normalize();
    let mut u = 0.75;
    let index = d.sample_reuse(&mut u);
    assert_eq!(index, 1);
    assert!((u - 0.5).abs() < 1e-6);
}

#[test]
fn zero_weight_entries_are_never_selected() {
    let mut d = Distribution1D::new();
    d.append(0.0);
    d.append(2.0);
    d.normalize();
    for i in 0..100 {
        let u = i as f32 / 100.0;
        assert_eq!(d.sample(u), 1);
    }
}

#[test]
fn empirical_selection_matches_weights() {
    let mut d = Distribution1D::new();
    d.append(1.0);
    d.append(2.0);
    d.append(1.0);
    d.normalize();
    let n = 10_000;
    let mut counts = [0usize; 3];
    for i in 0..n {
        let u = (i as f32 + 0.5) / n as f32;
        counts[d.sample(u)] += 1;
    }
    assert!((counts[0] as f32 / n as f32 - 0.25).abs() < 0.01);
    assert!((counts[1] as f32 / n as f32 - 0.50).abs() < 0.01);
    assert!((counts[2] as f32 / n as f32 - 0.25).abs() < 0.01);
}
