use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ArcPath, Color, Point};
use crate::error::{ChartError, ChartResult};

fn finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn non_negative_extent(width: f64, height: f64, what: &str) -> ChartResult<()> {
    if width < 0.0 || height < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} extent must be >= 0"
        )));
    }
    Ok(())
}

/// Dash pattern applied to strokes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash: f64,
        gap: f64,
    },
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn between(from: Point, to: Point, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let LineStrokeStyle::Dashed { dash, gap } = self.stroke_style {
            if !(dash.is_finite() && gap.is_finite() && dash > 0.0 && gap >= 0.0) {
                return Err(ChartError::InvalidData(
                    "dash pattern must be finite with dash > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Filled rectangle with optional border and rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn from_rect(rect: crate::core::Rect, fill_color: Color) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height, fill_color)
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        finite(
            &[
                self.x,
                self.y,
                self.width,
                self.height,
                self.border_width,
                self.corner_radius,
            ],
            "rect geometry",
        )?;
        non_negative_extent(self.width, self.height, "rect")?;
        if self.border_width < 0.0 || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width and corner radius must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Filled pie or donut slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub arc: ArcPath,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl ArcPrimitive {
    #[must_use]
    pub const fn new(arc: ArcPath, fill_color: Color) -> Self {
        Self {
            arc,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        let arc = self.arc;
        finite(
            &[
                arc.center.x,
                arc.center.y,
                arc.radius,
                arc.inner_radius,
                arc.start_angle,
                arc.sweep_angle,
            ],
            "arc geometry",
        )?;
        if arc.radius <= 0.0 || arc.inner_radius < 0.0 || arc.inner_radius > arc.radius {
            return Err(ChartError::InvalidData(
                "arc radii must satisfy 0 <= inner <= outer and outer > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Closed filled polygon, used for arrowheads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[Point; 4]>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point>, fill_color: Color) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill_color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        for point in &self.points {
            finite(&[point.x, point.y], "polygon points")?;
        }
        Ok(())
    }
}

/// Filled circular data-point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill_color: Color,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(center: Point, radius: f64, fill_color: Color) -> Self {
        Self {
            center,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        finite(&[self.center.x, self.center.y, self.radius], "marker geometry")?;
        if self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Draw command for one label; `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    #[serde(default)]
    pub bold: bool,
    /// Clockwise rotation around `(x, y)`; `-90` reads bottom-to-top.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        finite(&[self.x, self.y, self.rotation_deg], "text placement")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One drawable produced by a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Arc(ArcPrimitive),
    Polygon(PolygonPrimitive),
    Marker(MarkerPrimitive),
    Label(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Marker(marker) => marker.validate(),
            Self::Label(text) => text.validate(),
        }
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<ArcPrimitive> for Primitive {
    fn from(value: ArcPrimitive) -> Self {
        Self::Arc(value)
    }
}

impl From<PolygonPrimitive> for Primitive {
    fn from(value: PolygonPrimitive) -> Self {
        Self::Polygon(value)
    }
}

impl From<MarkerPrimitive> for Primitive {
    fn from(value: MarkerPrimitive) -> Self {
        Self::Marker(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Label(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LinePrimitive, LineStrokeStyle, Primitive, RectPrimitive, TextHAlign, TextPrimitive,
    };
    use crate::core::Color;

    #[test]
    fn rejects_non_finite_geometry() {
        let line = LinePrimitive::new(0.0, f64::NAN, 1.0, 1.0, 1.0, Color::BLACK);
        assert!(line.validate().is_err());
        let rect = RectPrimitive::new(0.0, 0.0, -1.0, 1.0, Color::BLACK);
        assert!(rect.validate().is_err());
    }

    #[test]
    fn rejects_empty_label() {
        let text = TextPrimitive::new("", 0.0, 0.0, 12.0, Color::BLACK, TextHAlign::Left);
        assert!(Primitive::from(text).validate().is_err());
    }

    #[test]
    fn dashed_line_is_valid() {
        let line = LinePrimitive::new(0.0, 0.0, 0.0, 10.0, 1.0, Color::RED)
            .with_stroke_style(LineStrokeStyle::Dashed { dash: 4.0, gap: 4.0 });
        assert!(line.validate().is_ok());
    }
}
