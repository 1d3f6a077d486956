//! Integration tests for lucent-material.

use lucent_material::{Matte, RoughConductor, SurfaceMaterial};

#[test]
fn matte_needs_no_tangents() {
    let m = Matte;
    assert!(!m.is_anisotropic());
    assert!(!m.is_glossy());
    assert!(!m.uses_ray_differentials());
}

#[test]
fn rough_conductor_is_glossy() {
    let m = RoughConductor::isotropic();
    assert!(m.is_glossy());
    assert!(!m.is_anisotropic());
}

#[test]
fn anisotropic_conductor_reports_anisotropy() {
    let m = RoughConductor::anisotropic();
    assert!(m.is_anisotropic());
    assert!(m.is_glossy());
}

#[test]
fn trait_objects_work_across_the_boundary() {
    let materials: Vec<Box<dyn SurfaceMaterial>> =
        vec![Box::new(Matte), Box::new(RoughConductor::anisotropic())];
    let names: Vec<&str> = materials.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["matte", "rough_conductor"]);
}
