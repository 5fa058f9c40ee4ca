/// Logical input action recognized by the viewport
///
/// The host maps its platform key codes onto these seven actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
    Exit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Forward,
        Action::Back,
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Exit,
    ];

    /// True for the six actions that translate the camera
    pub const fn is_movement(self) -> bool {
        !matches!(self, Action::Exit)
    }
}

/// Controller - exposes which actions are currently held
pub trait Controller {
    /// Check if action is currently down
    fn is_down(&self, action: Action) -> bool;

    /// Get all currently held actions, in press order
    fn get_down_keys(&self) -> &[Action];
}
