//! Bubbleburst Animation System
//!
//! Tick-driven value ramps with easing, sized for the two animations the
//! drag bubble plays: the sprite-sheet burst and the elastic snap-back.
//!
//! Nothing here owns a timer. The host's frame clock feeds elapsed
//! milliseconds into [`FrameRamp::tick`]/[`PointRamp::tick`], which makes
//! every animation deterministic under test: inject the tick values, assert
//! the outputs.

pub mod easing;
pub mod ramp;

pub use easing::Easing;
pub use ramp::{FrameRamp, PointRamp};
