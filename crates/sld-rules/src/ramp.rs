//! Color ramps: ordered, resizable, reversible color sequences.

use std::fmt;
use std::str::FromStr;

use sld_model::Color;

use crate::error::RampError;

/// Source of one color per class.
pub trait ColorRamp {
    /// Regenerate the ramp with exactly `classes` colors, in forward order.
    fn resize(&mut self, classes: usize) -> Result<(), RampError>;

    /// Flip the current colors. The next resize restores forward order.
    fn reverse(&mut self);

    fn colors(&self) -> &[Color];
}

/// Piecewise-linear gradient through a list of anchor colors.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRamp {
    anchors: Vec<Color>,
    max_classes: Option<usize>,
    colors: Vec<Color>,
}

impl GradientRamp {
    /// Gradient through `anchors`, initially sized to the anchor count.
    pub fn custom(anchors: Vec<Color>) -> Result<Self, RampError> {
        if anchors.is_empty() {
            return Err(RampError::NoAnchors);
        }
        let colors = anchors.clone();
        Ok(Self {
            anchors,
            max_classes: None,
            colors,
        })
    }

    pub fn red() -> Self {
        Self::preset(&[Color::rgb(0xFF, 0xF5, 0xF0), Color::rgb(0x67, 0x00, 0x0D)])
    }

    pub fn blue() -> Self {
        Self::preset(&[Color::rgb(0xF7, 0xFB, 0xFF), Color::rgb(0x08, 0x30, 0x6B)])
    }

    pub fn gray() -> Self {
        Self::preset(&[Color::rgb(0xF0, 0xF0, 0xF0), Color::rgb(0x25, 0x25, 0x25)])
    }

    /// Blue through cyan and yellow to red.
    pub fn jet() -> Self {
        Self::preset(&[
            Color::rgb(0x00, 0x00, 0x8F),
            Color::rgb(0x00, 0x00, 0xFF),
            Color::rgb(0x00, 0xFF, 0xFF),
            Color::rgb(0xFF, 0xFF, 0x00),
            Color::rgb(0xFF, 0x00, 0x00),
            Color::rgb(0x80, 0x00, 0x00),
        ])
    }

    fn preset(anchors: &[Color]) -> Self {
        Self {
            anchors: anchors.to_vec(),
            max_classes: None,
            colors: anchors.to_vec(),
        }
    }

    /// Refuse to resize beyond `max` classes.
    #[must_use]
    pub fn with_max_classes(mut self, max: usize) -> Self {
        self.max_classes = Some(max);
        self
    }

    pub fn anchors(&self) -> &[Color] {
        &self.anchors
    }

    fn sample(&self, classes: usize) -> Vec<Color> {
        let first = self.anchors[0];
        let segments = self.anchors.len() - 1;
        if classes == 1 || segments == 0 {
            return vec![first; classes];
        }
        (0..classes)
            .map(|index| {
                let position = index as f64 / (classes - 1) as f64 * segments as f64;
                let segment = (position.floor() as usize).min(segments - 1);
                self.anchors[segment].lerp(self.anchors[segment + 1], position - segment as f64)
            })
            .collect()
    }
}

impl ColorRamp for GradientRamp {
    fn resize(&mut self, classes: usize) -> Result<(), RampError> {
        if let Some(max) = self.max_classes
            && classes > max
        {
            return Err(RampError::TooManyClasses {
                requested: classes,
                max,
            });
        }
        self.colors = self.sample(classes);
        Ok(())
    }

    fn reverse(&mut self) {
        self.colors.reverse();
    }

    fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Named ramps selectable from front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampPreset {
    Red,
    Blue,
    Gray,
    Jet,
    Custom,
}

impl RampPreset {
    /// Build the ramp; `anchors` is only read for [`RampPreset::Custom`].
    pub fn build(self, anchors: &[Color]) -> Result<GradientRamp, RampError> {
        match self {
            RampPreset::Red => Ok(GradientRamp::red()),
            RampPreset::Blue => Ok(GradientRamp::blue()),
            RampPreset::Gray => Ok(GradientRamp::gray()),
            RampPreset::Jet => Ok(GradientRamp::jet()),
            RampPreset::Custom => GradientRamp::custom(anchors.to_vec()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RampPreset::Red => "red",
            RampPreset::Blue => "blue",
            RampPreset::Gray => "gray",
            RampPreset::Jet => "jet",
            RampPreset::Custom => "custom",
        }
    }
}

impl fmt::Display for RampPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RampPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(RampPreset::Red),
            "blue" => Ok(RampPreset::Blue),
            "gray" | "grey" => Ok(RampPreset::Gray),
            "jet" => Ok(RampPreset::Jet),
            "custom" => Ok(RampPreset::Custom),
            _ => Err(format!("Unknown color ramp: {}", s)),
        }
    }
}
