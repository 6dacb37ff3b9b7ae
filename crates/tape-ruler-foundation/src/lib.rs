//! Foundation pieces for the tape ruler: pointer input, velocity tracking,
//! gesture thresholds and frame scheduling.

pub mod frame_clock;
pub mod pointer;
pub mod velocity_tracker;
pub mod view_configuration;

pub use frame_clock::{FrameScheduler, ManualFrameClock};
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;
pub use view_configuration::ViewConfiguration;
