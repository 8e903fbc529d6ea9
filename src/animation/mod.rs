// Continuous animation mode: spin clock and frame-rate accounting.

pub mod clock;
pub mod frame_rate;

pub use clock::{AnimationClock, Toggle};
pub use frame_rate::FrameRate;
