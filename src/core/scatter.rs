use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::color::Color;
use crate::core::scale::{Scale, ScaleKind};
use crate::core::ticks::{AxisSpan, Tick, decade_ticks, generate_ticks};
use crate::core::types::{PlotArea, Point};

pub const GRID_DIVISIONS: usize = 10;
pub const LINEAR_TICK_COUNT: usize = 6;
pub const MARKER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
    pub color: Color,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, category: impl Into<String>, color: Color) -> Self {
        Self {
            x,
            y,
            category: category.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub index: usize,
    pub center: Point,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterLayout {
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub points: Vec<ProjectedPoint>,
    /// Grid segments as `(from, to)` pairs.
    pub grid: Vec<(Point, Point)>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// One entry per category in first-appearance order; the first colour wins.
    pub legend: Vec<(String, Color)>,
}

/// Fits both axes, projects every finite point (Y grows upwards) and derives
/// the grid, axis ticks and legend.
#[must_use]
pub fn layout_scatter(
    points: &[ScatterPoint],
    plot: PlotArea,
    x_kind: ScaleKind,
    y_kind: ScaleKind,
) -> Option<ScatterLayout> {
    if !plot.is_valid() {
        return None;
    }
    let x_scale = Scale::from_values(x_kind, points.iter().map(|p| p.x))?;
    let y_scale = Scale::from_values(y_kind, points.iter().map(|p| p.y))?;

    let x_span = AxisSpan::new(plot.x, plot.right());
    let y_span = AxisSpan::new(plot.bottom(), plot.y);

    let project = |(index, point): (usize, &ScatterPoint)| {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        Some(ProjectedPoint {
            index,
            center: Point::new(
                x_span.position_of(x_scale.normalize(point.x)),
                y_span.position_of(y_scale.normalize(point.y)),
            ),
            color: point.color,
        })
    };

    #[cfg(feature = "parallel-projection")]
    let projected: Vec<ProjectedPoint> = points
        .par_iter()
        .enumerate()
        .filter_map(project)
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let projected: Vec<ProjectedPoint> = points.iter().enumerate().filter_map(project).collect();

    let mut legend: IndexMap<&str, Color> = IndexMap::new();
    for point in points {
        legend.entry(point.category.as_str()).or_insert(point.color);
    }

    Some(ScatterLayout {
        x_scale,
        y_scale,
        points: projected,
        grid: grid_lines(plot, GRID_DIVISIONS),
        x_ticks: axis_ticks(x_scale, x_span),
        y_ticks: axis_ticks(y_scale, y_span),
        legend: legend
            .into_iter()
            .map(|(name, color)| (name.to_owned(), color))
            .collect(),
    })
}

fn axis_ticks(scale: Scale, span: AxisSpan) -> Vec<Tick> {
    let (min, max) = scale.domain();
    match scale.kind {
        ScaleKind::Linear => {
            generate_ticks(min, max, ScaleKind::Linear, LINEAR_TICK_COUNT, 0, span)
        }
        ScaleKind::Logarithmic => decade_ticks(min, max, span),
    }
}

/// `divisions + 1` vertical and horizontal lines across the plot area.
#[must_use]
pub fn grid_lines(plot: PlotArea, divisions: usize) -> Vec<(Point, Point)> {
    if divisions == 0 {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity((divisions + 1) * 2);
    for index in 0..=divisions {
        let t = index as f64 / divisions as f64;
        let x = plot.x + t * plot.width;
        let y = plot.y + t * plot.height;
        lines.push((Point::new(x, plot.y), Point::new(x, plot.bottom())));
        lines.push((Point::new(plot.x, y), Point::new(plot.right(), y)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{ScatterPoint, layout_scatter};
    use crate::core::color::Color;
    use crate::core::scale::ScaleKind;
    use crate::core::types::PlotArea;

    fn points() -> Vec<ScatterPoint> {
        vec![
            ScatterPoint::new(1.0, 10.0, "a", Color::RED),
            ScatterPoint::new(100.0, 1000.0, "b", Color::BLACK),
            ScatterPoint::new(10.0, 100.0, "a", Color::WHITE),
        ]
    }

    #[test]
    fn y_axis_is_inverted() {
        let plot = PlotArea::new(40.0, 40.0, 200.0, 100.0);
        let layout = layout_scatter(&points(), plot, ScaleKind::Linear, ScaleKind::Linear)
            .expect("layout");
        assert_eq!(layout.points[0].center.x, 40.0);
        assert_eq!(layout.points[0].center.y, 140.0);
        assert_eq!(layout.points[1].center.y, 40.0);
        assert_eq!(layout.x_ticks.len(), 6);
        assert_eq!(layout.grid.len(), 22);
    }

    #[test]
    fn log_axes_use_decades() {
        let plot = PlotArea::new(0.0, 0.0, 200.0, 100.0);
        let layout = layout_scatter(&points(), plot, ScaleKind::Logarithmic, ScaleKind::Logarithmic)
            .expect("layout");
        assert!((layout.points[2].center.x - 100.0).abs() < 1e-9);
        assert!((layout.points[2].center.y - 50.0).abs() < 1e-9);
        assert_eq!(layout.x_ticks.iter().filter(|t| t.is_major).count(), 3);
    }

    #[test]
    fn legend_groups_by_category() {
        let plot = PlotArea::new(0.0, 0.0, 200.0, 100.0);
        let layout = layout_scatter(&points(), plot, ScaleKind::Linear, ScaleKind::Linear)
            .expect("layout");
        assert_eq!(
            layout.legend,
            vec![("a".to_owned(), Color::RED), ("b".to_owned(), Color::BLACK)]
        );
    }
}
