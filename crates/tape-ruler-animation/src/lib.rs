//! Fling physics for the tape ruler control.
//!
//! Port of the platform scroller's spline-based fling: a release velocity is
//! turned into a decelerating, bounded trajectory that the control samples once
//! per frame.

pub mod fling;
pub mod spline;

pub use fling::{
    FlingCalculator, FlingFrame, FlingTrajectory, Flinger, SplineFlinger, SplineTrajectory,
};
pub use spline::SplineSample;
