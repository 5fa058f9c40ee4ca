pub mod clock;
pub mod input_adapter;
pub mod timer;

pub use clock::{Clock, FpsCounter};
pub use input_adapter::WinitController;
pub use timer::FixedHz;
