// config.rs - Viewport construction parameters
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_SPEED: f32 = 0.1;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.3;
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_TITLE: &str = "OpenGL Window";

/// Everything needed to build a [`crate::viewport::Viewport`]
///
/// Missing fields fall back to the defaults above when deserializing, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// World units per tick for each held movement action
    pub speed: f32,
    /// Degrees per mouse device unit
    pub mouse_sensitivity: f32,
    pub invert_mouse_y: bool,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
    pub world_up: Vec3,
    pub title: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            invert_mouse_y: false,
            position: Vec3::ZERO,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            up: Vec3::Y,
            world_up: Vec3::Y,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ViewportConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse viewport config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read viewport config: {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid viewport config: {}", path.display()))
    }

    /// Reject parameters that would produce a degenerate projection, a non-finite
    /// pose, or a zero-length up axis
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("Viewport size must be non-zero, got {}x{}", self.width, self.height);
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            bail!("Field of view must be within (0, 180) degrees, got {}", self.fov_degrees);
        }
        if !(self.near > 0.0 && self.near.is_finite()) {
            bail!("Near plane must be positive, got {}", self.near);
        }
        if !(self.far > self.near && self.far.is_finite()) {
            bail!("Far plane ({}) must lie beyond near plane ({})", self.far, self.near);
        }
        if !(self.speed > 0.0 && self.speed.is_finite()) {
            bail!("Camera speed must be positive, got {}", self.speed);
        }
        if !(self.mouse_sensitivity > 0.0 && self.mouse_sensitivity.is_finite()) {
            bail!("Mouse sensitivity must be positive, got {}", self.mouse_sensitivity);
        }
        if !self.position.is_finite() || !self.yaw.is_finite() || !self.pitch.is_finite() {
            bail!("Initial camera pose must be finite");
        }
        if self.up.try_normalize().is_none() {
            bail!("Up vector must be non-zero, got {}", self.up);
        }
        if self.world_up.try_normalize().is_none() {
            bail!("World up vector must be non-zero, got {}", self.world_up);
        }
        Ok(())
    }
}
