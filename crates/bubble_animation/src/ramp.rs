//! Timed value ramps
//!
//! A ramp is the unit the sequencer hands to the frame clock: a fixed
//! duration, an accumulated elapsed time, and a value derived from progress.
//! `tick` clamps at the end of the ramp and clears `playing`; the caller
//! applies the final value first and then runs its terminal transition, so
//! completion is always observed after the last update.

use crate::easing::Easing;
use bubble_paint::Point;

/// Discrete frame-index ramp for sprite-sheet playback.
///
/// Walks the integer domain `[0, frame_count)` at linear pace. The index is
/// clamped to the last frame so it never runs off the end of the sheet, and
/// every frame is visited in order exactly once over the ramp's duration.
#[derive(Clone, Debug)]
pub struct FrameRamp {
    frame_count: usize,
    duration_ms: u32,
    current_time: f32,
    playing: bool,
}

impl FrameRamp {
    pub fn new(frame_count: usize, duration_ms: u32) -> Self {
        Self {
            frame_count,
            duration_ms,
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
        tracing::trace!(
            frames = self.frame_count,
            duration_ms = self.duration_ms,
            "frame ramp started"
        );
    }

    pub fn cancel(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// The frame to display at the current progress
    pub fn frame_index(&self) -> usize {
        let raw = (self.progress() * self.frame_count as f32) as usize;
        raw.min(self.frame_count.saturating_sub(1))
    }

    /// Advance the ramp by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }
}

/// Two-dimensional position ramp between two points.
///
/// Progress runs linearly over the duration; the configured easing shapes
/// the interpolation parameter. An overshooting ease takes the value past
/// `to` before settling, which is the elastic snap-back.
#[derive(Clone, Debug)]
pub struct PointRamp {
    from: Point,
    to: Point,
    duration_ms: u32,
    current_time: f32,
    playing: bool,
    easing: Easing,
}

impl PointRamp {
    pub fn new(from: Point, to: Point, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            current_time: 0.0,
            playing: false,
            easing,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
        tracing::trace!(duration_ms = self.duration_ms, "point ramp started");
    }

    pub fn cancel(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// The interpolated position at the current progress
    pub fn value(&self) -> Point {
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// The ramp's destination
    pub fn target(&self) -> Point {
        self.to
    }

    /// Advance the ramp by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }
}
