use tracing::trace;

use crate::core::{Color, HeatmapCell, HeatmapLayout, PlotArea, ScaleKind, Tick, layout_heatmap};
use crate::render::{
    LayoutResult, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TickAxis,
};

use super::ChartConfig;
use super::axis_label_format::{format_scientific, format_trimmed};
use super::axis_render_frame_builder::{
    AXIS_COLOR, LABEL_FONT_SIZE, LABEL_HALF_HEIGHT, TICK_LABEL_FONT_SIZE, align_between,
    push_axis_lines, push_axis_titles,
};

const CELL_BORDER_WIDTH: f64 = 0.5;
const X_LABEL_GAP: f64 = 5.0;
const Y_LABEL_GAP: f64 = 10.0;
const MAJOR_TICK_LENGTH: f64 = 8.0;
const MINOR_TICK_LENGTH: f64 = 4.0;
const MAJOR_TICK_STROKE: f64 = 1.4;
const MINOR_TICK_STROKE: f64 = 0.8;
const LEGEND_LABEL_GAP: f64 = 12.0;
const LEGEND_TITLE_GAP: f64 = 6.0;
/// The title box extends this far past each side of the strip.
const LEGEND_TITLE_OVERHANG: f64 = 30.0;

/// Cell grid, row/column labels and the gradient colour legend.
pub(super) fn build_heatmap_frame(
    cells: &[HeatmapCell],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let Some(layout) = layout_heatmap(
        cells,
        plot,
        config.heatmap_scale,
        config.min_color,
        config.max_color,
    ) else {
        return LayoutResult::empty();
    };
    trace!(
        columns = layout.x_labels.len(),
        rows = layout.y_labels.len(),
        cells = layout.cells.len(),
        "heatmap grid computed"
    );

    let mut result = LayoutResult::empty();
    for cell in &layout.cells {
        result.push(
            RectPrimitive::from_rect(cell.rect, cell.color)
                .with_border(CELL_BORDER_WIDTH, Color::WHITE),
        );
    }
    push_axis_lines(&mut result, plot);

    let rows = layout.y_labels.len();
    let x_ticks: Vec<Tick> = layout
        .x_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let x = plot.x + (index as f64 + 0.5) * layout.cell_width;
            if !label.is_empty() {
                result.push(TextPrimitive::new(
                    label.clone(),
                    x,
                    plot.bottom() + X_LABEL_GAP,
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
            category_tick(index, x)
        })
        .collect();
    let y_ticks: Vec<Tick> = layout
        .y_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let y = plot.y + ((rows - 1 - index) as f64 + 0.5) * layout.cell_height;
            if !label.is_empty() {
                result.push(TextPrimitive::new(
                    label.clone(),
                    plot.x - Y_LABEL_GAP,
                    y - LABEL_HALF_HEIGHT,
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
            category_tick(index, y)
        })
        .collect();

    push_axis_titles(&mut result, plot, config);
    result.push_ticks(TickAxis::X, x_ticks);
    result.push_ticks(TickAxis::Y, y_ticks);
    if config.show_color_legend {
        push_color_legend(&mut result, &layout, config);
        result.push_ticks(TickAxis::ColorLegend, layout.legend.ticks);
    }
    result
}

/// Gradient strip, tick marks, tick labels and the optional title above it.
fn push_color_legend(result: &mut LayoutResult, layout: &HeatmapLayout, config: &ChartConfig) {
    let legend = &layout.legend;
    if let Some(title) = config
        .color_legend_title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
    {
        let style = config.color_legend_title_style;
        result.push(TextPrimitive::new(
            title,
            align_between(
                legend.strip.x - LEGEND_TITLE_OVERHANG,
                legend.strip.right() + LEGEND_TITLE_OVERHANG,
                style.alignment,
            ),
            legend.strip.y - LEGEND_TITLE_GAP - config.axis_title_font_size,
            config.axis_title_font_size,
            style.color,
            style.alignment,
        ));
    }
    for (rect, color) in &legend.steps {
        result.push(RectPrimitive::from_rect(*rect, *color));
    }
    let strip_right = legend.strip.right();
    for tick in &legend.ticks {
        let (length, stroke) = if tick.is_major {
            (MAJOR_TICK_LENGTH, MAJOR_TICK_STROKE)
        } else {
            (MINOR_TICK_LENGTH, MINOR_TICK_STROKE)
        };
        result.push(LinePrimitive::new(
            strip_right,
            tick.position,
            strip_right + length,
            tick.position,
            stroke,
            AXIS_COLOR,
        ));
        if !tick.is_major && !config.heatmap_minor_tick_labels {
            continue;
        }
        let text = match layout.scale.kind {
            ScaleKind::Linear => format_trimmed(tick.value, 2, config.label_locale),
            ScaleKind::Logarithmic => format_scientific(tick.value, config.label_locale),
        };
        let label = TextPrimitive::new(
            text,
            strip_right + LEGEND_LABEL_GAP,
            tick.position - LABEL_HALF_HEIGHT,
            TICK_LABEL_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Left,
        );
        result.push(if tick.is_major { label.bold() } else { label });
    }
}

fn category_tick(index: usize, position: f64) -> Tick {
    Tick {
        value: index as f64,
        position,
        is_major: true,
    }
}
