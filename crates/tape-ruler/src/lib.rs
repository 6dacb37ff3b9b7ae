//! Horizontal tape-measure value picker.
//!
//! The user drags or flings a ruler under a fixed center indicator to pick an
//! integer amount in `0..=max_value`, quantized to `value_unit`. Rendering,
//! layout and event delivery belong to the host; this crate turns pointer
//! input and frame callbacks into a value, redraw requests and change
//! notifications.
//!
//! ```
//! use std::rc::Rc;
//! use tape_ruler::{RulerConfig, TapeRuler};
//! use tape_ruler_foundation::{ManualFrameClock, ViewConfiguration};
//!
//! let clock = ManualFrameClock::new();
//! let config = RulerConfig::default().with_range(150, 50).with_unit_gap_dp(20.0);
//! let mut ruler = TapeRuler::new(config, ViewConfiguration::default(), Rc::new(clock.clone()))?;
//! ruler.on_size_changed(400, 60);
//!
//! ruler.pointer_down(200, 30);
//! ruler.pointer_move(160, 30)?;
//! ruler.pointer_up(160, 30, 0.0)?;
//! assert_eq!(ruler.value(), 52);
//! # Ok::<(), tape_ruler::RulerError>(())
//! ```

pub mod animator;
pub mod config;
pub mod error;
pub mod gesture;
pub mod mapper;
pub mod ruler;
pub mod state;
pub mod ticks;

pub use animator::{AnimatorStep, FlingAnimator};
pub use config::RulerConfig;
pub use error::{Result, RulerError};
pub use gesture::{GestureAction, GestureInterpreter, GesturePhase, GestureSession};
pub use mapper::Snapped;
pub use ruler::{TapeRuler, ValueChangedListener};
pub use state::{RulerState, ViewportGeometry};
pub use ticks::{RulerCanvas, TickKind, TickLayout, TickMark};
