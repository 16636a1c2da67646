//! Style parameters shared by every styling call of an assigner.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::style::{Color, Stroke};

/// Outline and marker settings applied on top of ramp colors.
///
/// A negative `stroke_weight` means "no stroke" for polygons and points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub stroke_weight: f64,
    pub stroke_color: Color,
    pub point_size: f64,
    pub include_stroke_for_points: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            stroke_weight: 1.0,
            stroke_color: Color::BLACK,
            point_size: 15.0,
            include_stroke_for_points: false,
        }
    }
}

impl StyleOptions {
    #[must_use]
    pub fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = weight;
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    #[must_use]
    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    #[must_use]
    pub fn with_include_stroke_for_points(mut self, include: bool) -> Self {
        self.include_stroke_for_points = include;
        self
    }

    pub fn draws_stroke(&self) -> bool {
        self.stroke_weight >= 0.0
    }

    /// Outline stroke for polygons, `None` when disabled by a negative weight.
    pub fn outline(&self) -> Result<Option<Stroke>, StyleError> {
        if self.stroke_weight.is_nan() {
            return Err(StyleError::InvalidStrokeWidth(self.stroke_weight));
        }
        if !self.draws_stroke() {
            return Ok(None);
        }
        Stroke::new(self.stroke_color, self.stroke_weight).map(Some)
    }

    /// Marker stroke for points: also requires `include_stroke_for_points`.
    pub fn point_outline(&self) -> Result<Option<Stroke>, StyleError> {
        if !self.include_stroke_for_points {
            return Ok(None);
        }
        self.outline()
    }
}
