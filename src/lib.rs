pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod traits;
pub mod types;
pub mod viewport;

pub use camera::CameraState;
pub use config::ViewportConfig;
pub use traits::{Action, CameraController, Controller};
pub use viewport::{InputEvent, Signal, Viewport};
