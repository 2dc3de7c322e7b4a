//! The drag-bubble widget
//!
//! Owns the two circles, the interaction state, and the at-most-one ramp
//! animating them. Pointer events drive the transitions; the host frame
//! clock drives [`DragBubble::update`]; [`DragBubble::paint`] records what
//! the renderer should draw for the current state.
//!
//! State model:
//! - `Default` - at rest, only the drag bubble is drawn
//! - `Connected` - dragging with the membrane attached; the anchor shrinks
//!   as the separation grows
//! - `Apart` - dragged past membrane range; one-way, never re-connects
//! - `Dismiss` - burst; terminal until the widget is re-initialized

use bubble_animation::{Easing, FrameRamp, PointRamp};
use bubble_paint::{membrane_path, Circle, PaintContext, Point, Rect};

use crate::burst::{BurstSequence, BURST_FRAME_COUNT};
use crate::config::{BubbleConfig, ConfigError};
use crate::events::PointerEvent;

/// Duration of the elastic snap-back, in milliseconds
const REST_DURATION_MS: u32 = 200;
/// Tension of the snap-back overshoot curve
const REST_OVERSHOOT_TENSION: f32 = 5.0;
/// Duration of the burst sprite playback, in milliseconds
const BURST_DURATION_MS: u32 = 500;

/// Interaction state of the bubble pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleState {
    #[default]
    Default,
    Connected,
    Apart,
    Dismiss,
}

/// The ramp currently driving the bubble, if any
#[derive(Debug, Default)]
enum ActiveRamp {
    #[default]
    None,
    Rest(PointRamp),
    Burst(FrameRamp),
}

/// The liquid drag-bubble widget
pub struct DragBubble {
    config: BubbleConfig,
    state: BubbleState,
    /// The bubble the finger did not grab; fixed in place, shrinks while
    /// connected
    anchor: Circle,
    /// The bubble tracking the pointer
    drag: Circle,
    /// Center separation as of the last pointer event
    dist: f32,
    burst: BurstSequence,
    ramp: ActiveRamp,
    needs_redraw: bool,
}

impl DragBubble {
    /// Create a widget from a config. Rejects a non-positive base radius.
    pub fn new(config: BubbleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let circle = Circle::new(Point::ZERO, config.base_radius);
        Ok(Self {
            config,
            state: BubbleState::Default,
            anchor: circle,
            drag: circle,
            dist: 0.0,
            burst: BurstSequence::default(),
            ramp: ActiveRamp::None,
            needs_redraw: false,
        })
    }

    /// Re-initialize for a new widget size: both circles at the widget
    /// center, state back to rest, any in-flight animation dropped.
    pub fn resize(&mut self, width: f32, height: f32) {
        let center = Point::new(width / 2.0, height / 2.0);
        self.anchor = Circle::new(center, self.config.base_radius);
        self.drag = Circle::new(center, self.config.base_radius);
        self.state = BubbleState::Default;
        self.dist = 0.0;
        self.burst = BurstSequence::default();
        self.ramp = ActiveRamp::None;
        self.needs_redraw = true;
        tracing::debug!(width, height, "bubble re-initialized");
    }

    /// Feed a pointer event through the state machine
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(Point::new(x, y)),
            PointerEvent::Move { x, y } => self.on_pointer_move(Point::new(x, y)),
            PointerEvent::Up => self.on_pointer_up(),
        }
    }

    fn on_pointer_down(&mut self, pointer: Point) {
        if self.state == BubbleState::Dismiss || self.burst.active {
            tracing::debug!("pointer down ignored while dismissed");
            return;
        }

        // A new gesture interrupts a running snap-back: drop the ramp and
        // settle the geometry before evaluating the grab guard.
        if let ActiveRamp::Rest(_) = self.ramp {
            tracing::debug!("pointer down interrupts snap-back");
            self.ramp = ActiveRamp::None;
            self.anchor.radius = self.config.base_radius;
            self.state = BubbleState::Default;
        }

        self.dist = pointer.distance_to(self.anchor.center);
        if self.dist < self.config.base_radius + self.config.move_offset() {
            self.state = BubbleState::Connected;
            tracing::debug!(dist = self.dist, "grabbed, membrane connected");
        } else {
            self.state = BubbleState::Default;
        }
    }

    fn on_pointer_move(&mut self, pointer: Point) {
        match self.state {
            BubbleState::Connected => {
                self.drag.center = pointer;
                self.dist = pointer.distance_to(self.anchor.center);
                if self.dist < self.config.max_distance() - self.config.move_offset() {
                    // The anchor gives up volume as the membrane stretches.
                    self.anchor.radius = (self.config.base_radius - self.dist / 8.0)
                        .clamp(0.0, self.config.base_radius);
                } else {
                    // One-way: moving back in range does not re-connect.
                    self.state = BubbleState::Apart;
                    tracing::debug!(dist = self.dist, "membrane snapped");
                }
                self.needs_redraw = true;
            }
            BubbleState::Apart => {
                self.drag.center = pointer;
                self.dist = pointer.distance_to(self.anchor.center);
                self.needs_redraw = true;
            }
            // No transition defined: the bubble stays put.
            BubbleState::Default | BubbleState::Dismiss => {}
        }
    }

    fn on_pointer_up(&mut self) {
        match self.state {
            BubbleState::Connected => self.start_rest_ramp(),
            BubbleState::Apart => {
                if self.dist < 2.0 * self.config.base_radius {
                    self.start_rest_ramp();
                } else {
                    self.start_burst_ramp();
                }
            }
            BubbleState::Default | BubbleState::Dismiss => {}
        }
    }

    fn start_rest_ramp(&mut self) {
        let mut ramp = PointRamp::new(
            self.drag.center,
            self.anchor.center,
            REST_DURATION_MS,
            Easing::Overshoot(REST_OVERSHOOT_TENSION),
        );
        ramp.start();
        // At most one ramp runs at a time; launching replaces the slot.
        self.ramp = ActiveRamp::Rest(ramp);
        self.needs_redraw = true;
        tracing::debug!(dist = self.dist, "snap-back launched");
    }

    fn start_burst_ramp(&mut self) {
        let mut ramp = FrameRamp::new(BURST_FRAME_COUNT, BURST_DURATION_MS);
        ramp.start();
        self.ramp = ActiveRamp::Burst(ramp);
        // Dismissal and the overlay flag flip together; the bubble itself
        // is never drawn again.
        self.state = BubbleState::Dismiss;
        self.burst = BurstSequence {
            current_frame: 0,
            active: true,
        };
        self.needs_redraw = true;
        tracing::debug!(dist = self.dist, "burst launched");
    }

    /// Advance the active animation by `dt_ms` milliseconds of frame time.
    ///
    /// Each tick applies the ramp's value before checking for completion,
    /// so the terminal transition always runs after the final update.
    pub fn update(&mut self, dt_ms: f32) {
        match std::mem::take(&mut self.ramp) {
            ActiveRamp::None => {}
            ActiveRamp::Rest(mut ramp) => {
                ramp.tick(dt_ms);
                self.drag.center = ramp.value();
                self.needs_redraw = true;
                if ramp.is_playing() {
                    self.ramp = ActiveRamp::Rest(ramp);
                } else {
                    self.drag.center = self.anchor.center;
                    self.anchor.radius = self.config.base_radius;
                    self.dist = 0.0;
                    self.state = BubbleState::Default;
                    tracing::debug!("snap-back settled");
                }
            }
            ActiveRamp::Burst(mut ramp) => {
                ramp.tick(dt_ms);
                self.burst.current_frame = ramp.frame_index();
                self.needs_redraw = true;
                if ramp.is_playing() {
                    self.ramp = ActiveRamp::Burst(ramp);
                } else {
                    self.burst.active = false;
                    tracing::debug!("burst finished");
                }
            }
        }
    }

    /// Record this frame's shapes into the paint context
    pub fn paint(&self, ctx: &mut PaintContext) {
        if self.state != BubbleState::Dismiss {
            ctx.fill_circle(self.drag, self.config.color);
            ctx.draw_label(
                &self.config.label,
                self.drag.center,
                self.config.label_color,
                self.config.label_size,
            );
        }

        if self.state == BubbleState::Connected {
            ctx.fill_circle(self.anchor, self.config.color);
            // Coincident centers have no tangent direction; the circles
            // alone are the right picture there.
            if let Some(path) = membrane_path(self.anchor, self.drag) {
                ctx.fill_path(path, self.config.color);
            }
        }

        if self.burst.active {
            ctx.draw_burst_frame(
                self.burst.current_frame,
                Rect::centered(self.drag.center, self.drag.radius),
            );
        }
    }

    /// Check whether a redraw was requested, clearing the flag
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Whether a snap-back or burst ramp is running
    pub fn is_animating(&self) -> bool {
        !matches!(self.ramp, ActiveRamp::None)
    }

    pub fn state(&self) -> BubbleState {
        self.state
    }

    pub fn anchor(&self) -> Circle {
        self.anchor
    }

    pub fn drag(&self) -> Circle {
        self.drag
    }

    /// Center separation as of the last pointer event
    pub fn distance(&self) -> f32 {
        self.dist
    }

    pub fn burst(&self) -> BurstSequence {
        self.burst
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }
}
