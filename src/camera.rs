use glam::{Mat4, Vec3};

use crate::config::ViewportConfig;

pub const PITCH_LIMIT: f32 = 89.0;

/// Unit view direction for yaw/pitch given in degrees
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Camera pose - eye, look-at point and orientation angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, up: Vec3, world_up: Vec3) -> Self {
        let mut state = Self {
            position,
            target: position,
            up,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        };
        state.retarget();
        state
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(
            config.position,
            config.yaw,
            config.pitch,
            config.up,
            config.world_up,
        )
    }

    /// Add angle deltas (degrees), clamp pitch and re-aim the target
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.retarget();
    }

    /// Move eye and target together, keeping the view direction
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.target += offset;
    }

    pub fn front(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Lateral axis; zero when front is parallel to world up
    pub fn side(&self) -> Vec3 {
        self.front().cross(self.world_up).normalize_or_zero()
    }

    pub fn look_at(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    fn retarget(&mut self) {
        self.target = self.position + front_from_angles(self.yaw, self.pitch);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_faces_negative_z() {
        let state = CameraState::default();
        assert!((state.target - Vec3::NEG_Z).length() < EPS);
        assert!((state.front() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn initial_pitch_is_clamped() {
        let state = CameraState::new(Vec3::ZERO, 0.0, 120.0, Vec3::Y, Vec3::Y);
        assert_eq!(state.pitch, PITCH_LIMIT);
    }

    #[test]
    fn rotate_keeps_target_at_unit_distance() {
        let mut state = CameraState::new(Vec3::new(3.0, -2.0, 7.0), 10.0, 5.0, Vec3::Y, Vec3::Y);
        state.rotate(33.3, -71.0);
        assert!(((state.target - state.position).length() - 1.0).abs() < EPS);
    }

    #[test]
    fn translate_preserves_direction() {
        let mut state = CameraState::default();
        let before = state.front();
        state.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.position, Vec3::new(1.0, 2.0, 3.0));
        assert!((state.front() - before).length() < EPS);
    }

    #[test]
    fn side_points_right_when_facing_negative_z() {
        let state = CameraState::default();
        assert!((state.side() - Vec3::X).length() < EPS);
    }

    #[test]
    fn side_is_zero_when_looking_along_world_up() {
        let mut state = CameraState::default();
        state.target = state.position + Vec3::Y;
        assert_eq!(state.side(), Vec3::ZERO);
    }
}
