use std::collections::HashSet;

use anyhow::Result;
use glam::{Mat4, Vec3};
use log::{debug, trace, warn};

use crate::camera::CameraState;
use crate::config::ViewportConfig;
use crate::traits::{Action, CameraController, Controller};

/// Host-neutral input, already mapped from platform events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Action),
    KeyUp(Action),
    /// Relative pointer motion; `dy` is positive when moving up
    MouseMotion { dx: f32, dy: f32 },
}

/// Request the viewport passes back to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Exit,
}

/// First-person viewport controller
///
/// Turns held actions, mouse deltas and a host-driven tick into a camera
/// pose, and caches the projection and view matrices a renderer needs.
/// Speed and sensitivity are per tick, so the effective speed follows the
/// host's tick rate.
#[derive(Debug, Clone)]
pub struct Viewport {
    config: ViewportConfig,
    state: CameraState,
    projection: Mat4,
    view: Mat4,
    pressed_keys: HashSet<Action>,
    pressed_vec: Vec<Action>,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Result<Self> {
        config.validate()?;

        let projection = Mat4::perspective_rh_gl(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near,
            config.far,
        );
        let state = CameraState::from_config(&config);
        let view = state.look_at();

        debug!(
            "Viewport {}x{} fov={} position={} yaw={} pitch={}",
            config.width, config.height, config.fov_degrees, state.position, state.yaw, state.pitch
        );

        Ok(Self {
            config,
            state,
            projection,
            view,
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
        })
    }

    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        Self::new(ViewportConfig::with_size(width, height))
    }

    /// Dispatch a mapped input event to the matching handler
    pub fn handle(&mut self, event: InputEvent) -> Option<Signal> {
        match event {
            InputEvent::KeyDown(action) => self.on_key_down(action),
            InputEvent::KeyUp(action) => {
                self.on_key_up(action);
                None
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.on_mouse_motion(dx, dy);
                None
            }
        }
    }

    pub fn on_key_down(&mut self, action: Action) -> Option<Signal> {
        if self.pressed_keys.insert(action) {
            self.pressed_vec.push(action);
        }

        if action == Action::Exit {
            debug!("Exit requested");
            return Some(Signal::Exit);
        }
        None
    }

    pub fn on_key_up(&mut self, action: Action) {
        if self.pressed_keys.remove(&action) {
            self.pressed_vec.retain(|&a| a != action);
        }
    }

    pub fn on_mouse_motion(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            warn!("Ignoring non-finite mouse motion ({}, {})", dx, dy);
            return;
        }

        let sensitivity = self.config.mouse_sensitivity;
        let pitch_sign = if self.config.invert_mouse_y { -1.0 } else { 1.0 };
        let (yaw_delta, pitch_delta) = (dx * sensitivity, pitch_sign * dy * sensitivity);

        // Scaling or accumulating can overflow even when the raw sample is finite.
        if !pitch_delta.is_finite() || !(self.state.yaw + yaw_delta).is_finite() {
            warn!("Ignoring mouse motion ({}, {}) that overflows the camera angles", dx, dy);
            return;
        }

        self.state.rotate(yaw_delta, pitch_delta);
    }

    /// Apply held movement actions, then rebuild the view matrix
    pub fn tick(&mut self) {
        if !self.pressed_vec.is_empty() {
            let front = self.state.front();
            let side = self.state.side();
            let world_up = self.state.world_up;

            let displacement: Vec3 = self
                .pressed_vec
                .iter()
                .map(|action| match action {
                    Action::Forward => front,
                    Action::Back => -front,
                    Action::Left => -side,
                    Action::Right => side,
                    Action::Up => world_up,
                    Action::Down => -world_up,
                    Action::Exit => Vec3::ZERO,
                })
                .sum::<Vec3>()
                * self.config.speed;

            self.state.translate(displacement);
            trace!("Camera moved by {} to {}", displacement, self.state.position);
        }

        self.view = self.state.look_at();
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn camera_position(&self) -> Vec3 {
        self.state.position
    }

    pub fn target(&self) -> Vec3 {
        self.state.target
    }

    pub fn front(&self) -> Vec3 {
        self.state.front()
    }

    pub fn yaw(&self) -> f32 {
        self.state.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.state.pitch
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }
}

impl Controller for Viewport {
    fn is_down(&self, action: Action) -> bool {
        self.pressed_keys.contains(&action)
    }

    fn get_down_keys(&self) -> &[Action] {
        &self.pressed_vec
    }
}

impl CameraController for Viewport {
    fn tick(&mut self) {
        Viewport::tick(self);
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn position(&self) -> Vec3 {
        self.state.position
    }

    fn forward(&self) -> Vec3 {
        self.state.front()
    }
}
