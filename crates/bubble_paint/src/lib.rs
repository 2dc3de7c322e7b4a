//! Bubbleburst Paint Contract
//!
//! The drawing vocabulary the drag-bubble widget speaks to its renderer.
//! The widget never rasterizes anything; it records shape descriptions and
//! hands them to whatever drawing backend the host embeds.
//!
//! # Features
//!
//! - Geometry primitives (point, circle, rect)
//! - Path building (lines, quadratic curves)
//! - The blob membrane outline connecting two circles
//! - Recorded paint commands for the external rasterizer

pub mod blob;
pub mod color;
pub mod context;
pub mod path;
pub mod primitives;

pub use blob::membrane_path;
pub use color::Color;
pub use context::{PaintCommand, PaintContext};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::{Circle, Rect};
