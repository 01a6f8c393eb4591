use tracing::trace;

use crate::core::scatter::MARKER_RADIUS;
use crate::core::{Color, PlotArea, ScatterPoint, layout_scatter};
use crate::render::{
    LayoutResult, LinePrimitive, MarkerPrimitive, TextHAlign, TextPrimitive, TickAxis,
};

use super::ChartConfig;
use super::axis_label_format::format_trimmed;
use super::axis_render_frame_builder::{
    AXIS_COLOR, AXIS_STROKE_WIDTH, LABEL_HALF_HEIGHT, TICK_LABEL_FONT_SIZE, TICK_MARK_LENGTH,
    push_axis_lines, push_axis_titles,
};

const GRID_STROKE_WIDTH: f64 = 0.5;
const TICK_LABEL_GAP: f64 = 8.0;

/// Grid, markers and linear or decade ticks on both axes.
pub(super) fn build_scatter_frame(
    points: &[ScatterPoint],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let (x_kind, y_kind) = config.scatter_scale_kinds();
    let Some(layout) = layout_scatter(points, plot, x_kind, y_kind) else {
        return LayoutResult::empty();
    };
    trace!(points = layout.points.len(), x_kind = ?x_kind, y_kind = ?y_kind, "scatter projected");

    let mut result = LayoutResult::empty();
    if config.show_grid_lines {
        for (from, to) in &layout.grid {
            result.push(LinePrimitive::between(
                *from,
                *to,
                GRID_STROKE_WIDTH,
                Color::LIGHT_GRAY,
            ));
        }
    }
    push_axis_lines(&mut result, plot);

    for point in &layout.points {
        result.push(MarkerPrimitive::new(point.center, MARKER_RADIUS, point.color));
    }

    for tick in &layout.x_ticks {
        result.push(LinePrimitive::new(
            tick.position,
            plot.bottom(),
            tick.position,
            plot.bottom() + TICK_MARK_LENGTH,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        result.push(TextPrimitive::new(
            format_trimmed(tick.value, 2, config.label_locale),
            tick.position,
            plot.bottom() + TICK_LABEL_GAP,
            TICK_LABEL_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }
    for tick in &layout.y_ticks {
        result.push(LinePrimitive::new(
            plot.x - TICK_MARK_LENGTH,
            tick.position,
            plot.x,
            tick.position,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        result.push(TextPrimitive::new(
            format_trimmed(tick.value, 2, config.label_locale),
            plot.x - TICK_LABEL_GAP,
            tick.position - LABEL_HALF_HEIGHT,
            TICK_LABEL_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
    push_axis_titles(&mut result, plot, config);

    result.push_ticks(TickAxis::X, layout.x_ticks);
    result.push_ticks(TickAxis::Y, layout.y_ticks);
    result
}
