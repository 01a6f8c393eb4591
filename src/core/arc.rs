use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Distance from the slice edge to the plot-area border.
pub const PIE_EDGE_PADDING: f64 = 10.0;
/// Fraction of the radius at which slice labels are anchored.
pub const LABEL_RADIUS_RATIO: f64 = 0.6;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Path description of one pie (or donut) slice.
///
/// Angles are in degrees, `0` points along +X and sweeps run clockwise in
/// screen space (Y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    /// `0.0` for a plain pie slice.
    pub inner_radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub start_point: Point,
    pub end_point: Point,
    pub is_large_arc: bool,
    /// A 360° slice cannot be expressed by start/end points alone.
    pub is_full_circle: bool,
}

impl ArcPath {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Anchor for the slice's label: mid angle at 60% of the radius.
    #[must_use]
    pub fn label_anchor(&self) -> Point {
        point_on_circle(
            self.center,
            self.radius * LABEL_RADIUS_RATIO,
            self.start_angle + self.sweep_angle / 2.0,
        )
    }
}

#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let radians = angle_deg.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

#[must_use]
pub fn build_slice(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> ArcPath {
    ArcPath {
        center,
        radius,
        inner_radius: 0.0,
        start_angle,
        sweep_angle,
        start_point: point_on_circle(center, radius, start_angle),
        end_point: point_on_circle(center, radius, start_angle + sweep_angle),
        is_large_arc: sweep_angle > 180.0,
        is_full_circle: sweep_angle >= 360.0 - FULL_CIRCLE_EPSILON,
    }
}

/// Slice produced for one input value, carrying its source index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    /// Share of the total in percent.
    pub percent: f64,
    pub arc: ArcPath,
}

/// Lays out slices clockwise from 0° in input order.
///
/// Non-positive and non-finite values are skipped; when nothing positive is
/// left the result is empty.
#[must_use]
pub fn pie_slices(
    values: &[f64],
    center: Point,
    radius: f64,
    inner_radius: f64,
) -> Vec<PieSlice> {
    let counted = |value: &f64| value.is_finite() && *value > 0.0;
    let total: f64 = values.iter().copied().filter(counted).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    let mut slices = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        if !counted(&value) {
            continue;
        }
        let sweep_angle = value / total * 360.0;
        let mut arc = build_slice(center, radius, start_angle, sweep_angle);
        arc.inner_radius = inner_radius.clamp(0.0, radius);
        slices.push(PieSlice {
            index,
            value,
            percent: value / total * 100.0,
            arc,
        });
        start_angle += sweep_angle;
    }
    slices
}
