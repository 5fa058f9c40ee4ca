// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ViewportConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "viewport-fp")]
#[command(about = "First-person viewport demo", long_about = None)]
pub struct Cli {
    /// JSON file with viewport settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Camera speed in world units per tick
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse sensitivity in degrees per device unit
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Invert vertical mouse look
    #[arg(long = "invert-mouse", default_value = "false")]
    pub invert_mouse: bool,

    /// Camera ticks per second
    #[arg(long = "tick-rate", default_value = "60")]
    pub tick_rate: f32,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags
    pub fn viewport_config(&self) -> Result<ViewportConfig> {
        let mut config = match &self.config {
            Some(path) => ViewportConfig::load(path)?,
            None => ViewportConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fov) = self.fov {
            config.fov_degrees = fov;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.mouse_sensitivity = sensitivity;
        }
        if self.invert_mouse {
            config.invert_mouse_y = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["viewport-fp", "--width", "640", "--fov", "60", "--invert-mouse"]);
        let config = cli.viewport_config().unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 720);
        assert_eq!(config.fov_degrees, 60.0);
        assert!(config.invert_mouse_y);
        assert_eq!(cli.tick_rate, 60.0);
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let cli = Cli::parse_from(["viewport-fp", "--speed", "0"]);
        assert!(cli.viewport_config().is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["viewport-fp", "--config", "/nonexistent/viewport.json"]);
        assert!(cli.viewport_config().is_err());
    }
}
