//! Symbolizer descriptors attached to rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseColorError, StyleError};

/// Opaque RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Result<Self, StyleError> {
        if !width.is_finite() || width < 0.0 {
            return Err(StyleError::InvalidStrokeWidth(width));
        }
        Ok(Self { color, width })
    }
}

/// Marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkShape {
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub shape: MarkShape,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
}

/// Point graphic: a mark drawn at `size` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub mark: Mark,
    pub size: f64,
    pub opacity: f64,
    pub rotation: f64,
}

impl Graphic {
    /// Fully opaque, unrotated graphic.
    pub fn new(mark: Mark, size: f64) -> Result<Self, StyleError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(StyleError::InvalidMarkerSize(size));
        }
        Ok(Self {
            mark,
            size,
            opacity: 1.0,
            rotation: 0.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Symbolizer {
    Polygon { fill: Fill, stroke: Option<Stroke> },
    Line { stroke: Stroke },
    Point { graphic: Graphic },
}

impl Symbolizer {
    pub fn kind(&self) -> SymbolizerKind {
        match self {
            Symbolizer::Polygon { .. } => SymbolizerKind::Polygon,
            Symbolizer::Line { .. } => SymbolizerKind::Line,
            Symbolizer::Point { .. } => SymbolizerKind::Point,
        }
    }

    /// The color that distinguishes this class: polygon fill, line stroke or
    /// marker fill.
    pub fn class_color(&self) -> Color {
        match self {
            Symbolizer::Polygon { fill, .. } => fill.color,
            Symbolizer::Line { stroke } => stroke.color,
            Symbolizer::Point { graphic } => graphic.mark.fill.color,
        }
    }

    /// Outline stroke, if any. Line symbolizers report their own stroke.
    pub fn outline(&self) -> Option<&Stroke> {
        match self {
            Symbolizer::Polygon { stroke, .. } => stroke.as_ref(),
            Symbolizer::Line { stroke } => Some(stroke),
            Symbolizer::Point { graphic } => graphic.mark.stroke.as_ref(),
        }
    }
}

/// Geometry family a rule set is styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolizerKind {
    Polygon,
    Line,
    Point,
}

impl SymbolizerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolizerKind::Polygon => "polygon",
            SymbolizerKind::Line => "line",
            SymbolizerKind::Point => "point",
        }
    }
}

impl fmt::Display for SymbolizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polygon" | "fill" => Ok(SymbolizerKind::Polygon),
            "line" | "linestring" => Ok(SymbolizerKind::Line),
            "point" | "marker" => Ok(SymbolizerKind::Point),
            _ => Err(format!("Unknown symbolizer kind: {}", s)),
        }
    }
}
