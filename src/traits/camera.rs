use glam::{Mat4, Vec3};

/// Camera driven by a host tick and read by a renderer
pub trait CameraController {
    /// Advance the camera by one fixed tick
    fn tick(&mut self);

    /// Get the projection matrix for rendering
    fn projection_matrix(&self) -> Mat4;

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;
}
