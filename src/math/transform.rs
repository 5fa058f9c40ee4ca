use glam::{Mat4, Vec3};

/// Model matrix from a position, Euler angles in degrees and a scale
///
/// Vertices are rotated about Z, then Y, then X, then scaled, then
/// translated.
pub fn model_matrix(position: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_scale(scale)
        * Mat4::from_rotation_x(rotation_degrees.x.to_radians())
        * Mat4::from_rotation_y(rotation_degrees.y.to_radians())
        * Mat4::from_rotation_z(rotation_degrees.z.to_radians())
}
