//! Attach ramp colors to finished rules as polygon, line or point symbolizers.

use tracing::{debug, info};

use sld_model::{
    Color, Fill, Graphic, Mark, MarkShape, Rule, Stroke, StyleError, StyleOptions, Symbolizer,
    SymbolizerKind,
};

use crate::error::StylingError;
use crate::ramp::ColorRamp;

/// Width of the ramp-colored stroke drawn for line rules.
pub const LINE_STROKE_WIDTH: f64 = 1.0;

/// Colors rule lists from a ramp using a fixed set of [`StyleOptions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAssigner {
    options: StyleOptions,
}

impl StyleAssigner {
    pub fn new(options: StyleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    /// Negative disables polygon and point outlines.
    pub fn set_stroke_weight(&mut self, weight: f64) {
        self.options.stroke_weight = weight;
    }

    /// `None` keeps the current color.
    pub fn set_stroke_color(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.options.stroke_color = color;
        }
    }

    pub fn set_point_size(&mut self, size: f64) {
        self.options.point_size = size;
    }

    pub fn set_include_stroke_for_points(&mut self, include: bool) {
        self.options.include_stroke_for_points = include;
    }

    pub fn polygon_style<R: ColorRamp + ?Sized>(
        &self,
        rules: &mut [Rule],
        ramp: &mut R,
        reverse: bool,
    ) -> Result<usize, StylingError> {
        self.apply(rules, ramp, reverse, SymbolizerKind::Polygon)
    }

    pub fn line_style<R: ColorRamp + ?Sized>(
        &self,
        rules: &mut [Rule],
        ramp: &mut R,
        reverse: bool,
    ) -> Result<usize, StylingError> {
        self.apply(rules, ramp, reverse, SymbolizerKind::Line)
    }

    pub fn point_style<R: ColorRamp + ?Sized>(
        &self,
        rules: &mut [Rule],
        ramp: &mut R,
        reverse: bool,
    ) -> Result<usize, StylingError> {
        self.apply(rules, ramp, reverse, SymbolizerKind::Point)
    }

    /// Resize `ramp` to the rule count, optionally reverse it, and give each
    /// rule the color at its position. Returns how many rules were styled.
    ///
    /// If the ramp yields fewer colors than rules, the trailing rules are
    /// left untouched. Invalid options or a failing ramp leave every rule
    /// untouched.
    pub fn apply<R: ColorRamp + ?Sized>(
        &self,
        rules: &mut [Rule],
        ramp: &mut R,
        reverse: bool,
        kind: SymbolizerKind,
    ) -> Result<usize, StylingError> {
        let template = SymbolizerTemplate::new(&self.options, kind).map_err(|source| {
            info!(%kind, error = %source, "failed to build symbolizer");
            StylingError::Style { kind, source }
        })?;
        ramp.resize(rules.len()).map_err(|source| {
            info!(%kind, error = %source, "failed to resize color ramp");
            StylingError::Ramp { kind, source }
        })?;
        if reverse {
            ramp.reverse();
        }

        let colors = ramp.colors();
        let mut styled = 0;
        for (rule, color) in rules.iter_mut().zip(colors) {
            rule.symbolizer = Some(template.with_color(*color));
            styled += 1;
        }
        if styled < rules.len() {
            debug!(%kind, styled, rules = rules.len(), "ramp produced fewer colors than rules");
        }
        debug!(%kind, styled, reverse, "applied ramp colors");
        Ok(styled)
    }
}

/// Everything about a symbolizer except its ramp color, validated once per
/// styling call.
enum SymbolizerTemplate {
    Polygon { stroke: Option<Stroke> },
    Line,
    Point { stroke: Option<Stroke>, size: f64 },
}

impl SymbolizerTemplate {
    fn new(options: &StyleOptions, kind: SymbolizerKind) -> Result<Self, StyleError> {
        match kind {
            SymbolizerKind::Polygon => Ok(Self::Polygon {
                stroke: options.outline()?,
            }),
            SymbolizerKind::Line => Ok(Self::Line),
            SymbolizerKind::Point => {
                let stroke = options.point_outline()?;
                Graphic::new(point_mark(Color::BLACK, stroke), options.point_size)?;
                Ok(Self::Point {
                    stroke,
                    size: options.point_size,
                })
            }
        }
    }

    fn with_color(&self, color: Color) -> Symbolizer {
        match self {
            Self::Polygon { stroke } => Symbolizer::Polygon {
                fill: Fill::new(color),
                stroke: *stroke,
            },
            Self::Line => Symbolizer::Line {
                stroke: Stroke {
                    color,
                    width: LINE_STROKE_WIDTH,
                },
            },
            Self::Point { stroke, size } => Symbolizer::Point {
                graphic: Graphic {
                    mark: point_mark(color, *stroke),
                    size: *size,
                    opacity: 1.0,
                    rotation: 0.0,
                },
            },
        }
    }
}

fn point_mark(color: Color, stroke: Option<Stroke>) -> Mark {
    Mark {
        shape: MarkShape::Circle,
        fill: Fill::new(color),
        stroke,
    }
}
