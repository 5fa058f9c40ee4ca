use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::Action;
use crate::viewport::InputEvent;

/// Adapter that maps Winit events onto viewport input
///
/// Keyboard state itself lives in the viewport; this only translates key
/// codes and tracks pointer capture plus the per-frame mouse delta.
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Raw mouse motion is forwarded only while the pointer is captured
    captured: bool,
    /// Mouse movement delta since last reset, in up-positive units
    mouse_delta: (f32, f32),
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Translate a keyboard WindowEvent, `None` for anything unmapped
    pub fn process_window_event(&self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let action = Self::keycode_to_action(keycode)?;
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(action),
                    ElementState::Released => InputEvent::KeyUp(action),
                })
            }
            _ => None,
        }
    }

    /// Translate raw mouse motion into an up-positive delta
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> Option<InputEvent> {
        match event {
            DeviceEvent::MouseMotion { delta } if self.captured => {
                Some(self.record_motion(delta.0 as f32, delta.1 as f32))
            }
            _ => None,
        }
    }

    /// Reset per-frame state (mouse delta)
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Get accumulated mouse delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    // Winit reports y growing downward.
    fn record_motion(&mut self, dx: f32, dy_down: f32) -> InputEvent {
        let dy = -dy_down;
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
        InputEvent::MouseMotion { dx, dy }
    }

    /// Map Winit KeyCode to Action
    pub fn keycode_to_action(keycode: KeyCode) -> Option<Action> {
        match keycode {
            KeyCode::KeyW => Some(Action::Forward),
            KeyCode::KeyS => Some(Action::Back),
            KeyCode::KeyA => Some(Action::Left),
            KeyCode::KeyD => Some(Action::Right),
            KeyCode::Space => Some(Action::Up),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Action::Down),
            KeyCode::Escape => Some(Action::Exit),
            _ => None,
        }
    }
}
