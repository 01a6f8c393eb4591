use tracing::trace;

use crate::core::{
    CategoryLayoutMode, CategoryTable, Color, PlotArea, Series, layout_categories, layout_lines,
};
use crate::render::{LayoutResult, LinePrimitive, MarkerPrimitive, RectPrimitive};

use super::axis_render_frame_builder::{CategoryAxes, push_category_axes, push_value_grid};
use super::{ChartConfig, ChartKind};

const LINE_STROKE_WIDTH: f64 = 2.0;
const LINE_MARKER_RADIUS: f64 = 4.0;

/// Bar, column and horizontal-bar charts: gridlines, bars, then axis chrome.
pub(super) fn build_category_frame(
    kind: ChartKind,
    series: &[Series],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let table = CategoryTable::build(series);
    let mode = config
        .category_layout
        .or(kind.default_category_layout())
        .unwrap_or(CategoryLayoutMode::Stacked);
    let orientation = kind.bar_orientation();
    let layout = layout_categories(&table, plot, mode, orientation);
    if layout.is_empty() {
        return LayoutResult::empty();
    }
    trace!(
        categories = table.category_count(),
        segments = layout.segments.len(),
        value_domain_max = layout.value_domain_max,
        "category layout computed"
    );

    let axes = CategoryAxes {
        plot,
        orientation,
        table: &table,
        bands: &layout.bands,
        value_domain_max: layout.value_domain_max,
    };
    let value_ticks = axes.value_ticks(config.tick_count);

    let mut result = LayoutResult::empty();
    push_value_grid(&mut result, &axes, &value_ticks, config);
    for segment in &layout.segments {
        let color = series
            .get(segment.series_index)
            .map(|series| series.color)
            .unwrap_or(Color::BLACK);
        result.push(RectPrimitive::from_rect(segment.rect, color));
    }
    push_category_axes(&mut result, &axes, value_ticks, config);
    result
}

/// Line chart: one polyline per series over the same category axes as bars.
pub(super) fn build_line_frame(
    series: &[Series],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let table = CategoryTable::build(series);
    let lines = layout_lines(&table, plot);
    if lines.paths.is_empty() {
        return LayoutResult::empty();
    }
    // Line vertices sit on the same band centres as unstacked columns.
    let bands = layout_categories(
        &table,
        plot,
        CategoryLayoutMode::Grouped,
        ChartKind::Line.bar_orientation(),
    )
    .bands;

    let axes = CategoryAxes {
        plot,
        orientation: ChartKind::Line.bar_orientation(),
        table: &table,
        bands: &bands,
        value_domain_max: lines.value_domain_max,
    };
    let value_ticks = axes.value_ticks(config.tick_count);

    let mut result = LayoutResult::empty();
    push_value_grid(&mut result, &axes, &value_ticks, config);
    for path in &lines.paths {
        let color = series
            .get(path.series_index)
            .map(|series| series.color)
            .unwrap_or(Color::BLACK);
        for pair in path.points.windows(2) {
            result.push(LinePrimitive::between(
                pair[0],
                pair[1],
                LINE_STROKE_WIDTH,
                color,
            ));
        }
        for point in &path.points {
            result.push(MarkerPrimitive::new(*point, LINE_MARKER_RADIUS, color));
        }
    }
    push_category_axes(&mut result, &axes, value_ticks, config);
    result
}
