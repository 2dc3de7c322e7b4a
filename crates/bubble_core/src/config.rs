//! Bubble configuration

use bubble_paint::Color;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bubble radius must be positive, got {0}")]
    NonPositiveRadius(f32),
}

/// Bubble configuration
///
/// Immutable per widget instance. Every interaction threshold derives from
/// `base_radius`; the rest is presentation handed through to the renderer.
#[derive(Clone, Debug)]
pub struct BubbleConfig {
    /// Radius of the drag bubble, and the anchor's resting radius
    pub base_radius: f32,
    /// Bubble fill color
    pub color: Color,
    /// Badge label text (unread count, typically)
    pub label: String,
    /// Label text color
    pub label_color: Color,
    /// Label font size
    pub label_size: f32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            base_radius: 24.0,
            color: Color::RED,
            label: String::new(),
            label_color: Color::WHITE,
            label_size: 12.0,
        }
    }
}

impl BubbleConfig {
    /// Create a config with a given base radius
    pub fn new(base_radius: f32) -> Self {
        Self {
            base_radius,
            ..Default::default()
        }
    }

    /// Set the base radius
    pub fn base_radius(mut self, radius: f32) -> Self {
        self.base_radius = radius;
        self
    }

    /// Set the bubble color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the label text
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the label color
    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set the label font size
    pub fn label_size(mut self, size: f32) -> Self {
        self.label_size = size;
        self
    }

    /// Separation at which the membrane visually gives up entirely
    pub fn max_distance(&self) -> f32 {
        8.0 * self.base_radius
    }

    /// Finger slack added to the grab zone and subtracted from the
    /// connection range
    pub fn move_offset(&self) -> f32 {
        self.max_distance() / 4.0
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.base_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.base_radius));
        }
        Ok(())
    }
}
