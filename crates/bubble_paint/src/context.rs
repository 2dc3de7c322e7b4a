//! Paint context - the command recording API
//!
//! The widget describes what should appear on screen as a list of
//! [`PaintCommand`]s; the host's rasterizer drains them and does the actual
//! drawing. Burst frames are referenced by index only - decoding the frame
//! images is the host's frame provider's concern.

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::{Circle, Rect};

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillCircle {
        circle: Circle,
        color: Color,
    },
    FillPath {
        path: Path,
        color: Color,
    },
    DrawLabel {
        text: String,
        center: Point,
        color: Color,
        size: f32,
    },
    DrawBurstFrame {
        frame_index: usize,
        rect: Rect,
    },
}

/// Records paint commands for one frame
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(PaintCommand::FillCircle { circle, color });
    }

    pub fn fill_path(&mut self, path: Path, color: Color) {
        self.commands.push(PaintCommand::FillPath { path, color });
    }

    pub fn draw_label(&mut self, text: &str, center: Point, color: Color, size: f32) {
        self.commands.push(PaintCommand::DrawLabel {
            text: text.to_owned(),
            center,
            color,
            size,
        });
    }

    pub fn draw_burst_frame(&mut self, frame_index: usize, rect: Rect) {
        self.commands
            .push(PaintCommand::DrawBurstFrame { frame_index, rect });
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
