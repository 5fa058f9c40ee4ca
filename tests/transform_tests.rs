use glam::{Mat4, Vec3};
use viewport_fp::math::model_matrix;

const EPS: f32 = 1e-5;

#[test]
fn test_identity_inputs_give_identity() {
    let m = model_matrix(Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
    assert!(m.abs_diff_eq(Mat4::IDENTITY, EPS));
}

#[test]
fn test_translation_only() {
    let m = model_matrix(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE);
    let p = m.transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < EPS);
}

#[test]
fn test_scale_applied_before_translation() {
    let m = model_matrix(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::splat(0.5));
    let p = m.transform_point3(Vec3::new(2.0, 2.0, 2.0));
    assert!((p - Vec3::new(1.0, 1.0, -4.0)).length() < EPS, "got {}", p);
}

#[test]
fn test_rotation_in_degrees() {
    let m = model_matrix(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), Vec3::ONE);
    let p = m.transform_point3(Vec3::X);
    assert!((p - Vec3::NEG_Z).length() < EPS, "got {}", p);
}

#[test]
fn test_z_rotation_applied_before_x() {
    // Z turns +X into +Y, then X turns +Y into +Z.
    let m = model_matrix(Vec3::ZERO, Vec3::new(90.0, 0.0, 90.0), Vec3::ONE);
    let p = m.transform_point3(Vec3::X);
    assert!((p - Vec3::Z).length() < EPS, "got {}", p);
}

#[test]
fn test_rotation_before_non_uniform_scale() {
    let m = model_matrix(Vec3::ZERO, Vec3::new(0.0, 0.0, 90.0), Vec3::new(2.0, 1.0, 1.0));
    let p = m.transform_point3(Vec3::X);
    // Rotated onto +Y first, so the X scale has no effect.
    assert!((p - Vec3::Y).length() < EPS, "got {}", p);
}
