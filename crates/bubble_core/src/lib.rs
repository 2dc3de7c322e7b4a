//! Bubbleburst Core
//!
//! The pointer-driven state machine behind a "liquid bubble" badge: a small
//! circular bubble the user can drag away from its anchor. While dragging,
//! a deformable membrane tethers it to the anchor; release close by and it
//! snaps back elastically, release far away and it bursts into a
//! sprite-sheet explosion.
//!
//! The crate is pure logic. Pointer events come in through
//! [`PointerEvent`], the host frame clock drives [`DragBubble::update`],
//! and everything the widget wants on screen is recorded into a
//! [`bubble_paint::PaintContext`] for an external rasterizer.
//!
//! # Example
//!
//! ```rust
//! use bubble_core::{BubbleConfig, BubbleState, DragBubble, PointerEvent};
//!
//! let mut bubble = DragBubble::new(BubbleConfig::default().label("9+")).unwrap();
//! bubble.resize(400.0, 400.0);
//!
//! bubble.handle_event(PointerEvent::Down { x: 210.0, y: 200.0 });
//! assert_eq!(bubble.state(), BubbleState::Connected);
//!
//! bubble.handle_event(PointerEvent::Move { x: 260.0, y: 200.0 });
//! bubble.handle_event(PointerEvent::Up);
//!
//! // Snap-back runs on injected frame ticks.
//! while bubble.is_animating() {
//!     bubble.update(16.0);
//! }
//! assert_eq!(bubble.state(), BubbleState::Default);
//! ```

pub mod bubble;
pub mod burst;
pub mod config;
pub mod events;

pub use bubble::{BubbleState, DragBubble};
pub use burst::{BurstSequence, BURST_FRAME_COUNT};
pub use config::{BubbleConfig, ConfigError};
pub use events::PointerEvent;
