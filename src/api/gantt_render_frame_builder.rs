use tracing::trace;

use crate::core::timeline::BAR_CORNER_RADIUS;
use crate::core::{Color, PlotArea, TaskDependency, Tick, TimeSpan, layout_timeline};
use crate::render::{
    LayoutResult, LineStrokeStyle, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive, TickAxis,
};

use super::axis_label_format::format_date_label;
use super::axis_render_frame_builder::{
    AXIS_COLOR, AXIS_STROKE_WIDTH, LABEL_FONT_SIZE, TICK_LABEL_FONT_SIZE, TICK_MARK_LENGTH,
    push_axis_lines, push_axis_titles,
};
use super::{ChartConfig, GanttTask};

const TITLE_GAP: f64 = 10.0;
const DATE_LABEL_GAP: f64 = 8.0;
const CONNECTOR_STROKE_WIDTH: f64 = 1.0;
const TODAY_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash: 4.0,
    gap: 4.0,
};

/// Timeline rows, dependency connectors, the today marker and date ticks.
pub(super) fn build_gantt_frame(
    tasks: &[GanttTask],
    dependencies: &[TaskDependency],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let spans = tasks.iter().map(GanttTask::span).collect::<Vec<TimeSpan>>();
    let today = config
        .gantt
        .show_today_line
        .then_some(config.gantt.today)
        .flatten();
    let layout = layout_timeline(&spans, dependencies, plot, today, config.gantt.tick_count);
    if layout.bars.is_empty() {
        return LayoutResult::empty();
    }
    trace!(
        bars = layout.bars.len(),
        connectors = layout.connectors.len(),
        today_x = ?layout.today_x,
        "timeline laid out"
    );

    let mut result = LayoutResult::empty();
    if config.show_grid_lines {
        for tick in layout.ticks.iter().skip(1) {
            result.push(LinePrimitive::new(
                tick.x,
                plot.y,
                tick.x,
                plot.bottom(),
                AXIS_STROKE_WIDTH,
                Color::LIGHT_GRAY,
            ));
        }
    }

    for bar in &layout.bars {
        let task = &tasks[bar.task_index];
        result.push(
            RectPrimitive::from_rect(bar.rect, task.color).with_corner_radius(BAR_CORNER_RADIUS),
        );
        if !task.title.is_empty() {
            result.push(TextPrimitive::new(
                task.title.clone(),
                plot.x - TITLE_GAP,
                bar.rect.y,
                LABEL_FONT_SIZE,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }
    }

    for connector in &layout.connectors {
        for pair in connector.path.windows(2) {
            result.push(LinePrimitive::between(
                pair[0],
                pair[1],
                CONNECTOR_STROKE_WIDTH,
                AXIS_COLOR,
            ));
        }
        result.push(PolygonPrimitive::new(connector.arrow_head, AXIS_COLOR));
    }

    push_axis_lines(&mut result, plot);
    for tick in &layout.ticks {
        result.push(LinePrimitive::new(
            tick.x,
            plot.bottom(),
            tick.x,
            plot.bottom() + TICK_MARK_LENGTH,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        result.push(TextPrimitive::new(
            format_date_label(tick.at, &config.gantt.date_format),
            tick.x,
            plot.bottom() + DATE_LABEL_GAP,
            TICK_LABEL_FONT_SIZE,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    if let Some(x) = layout.today_x {
        result.push(
            LinePrimitive::new(
                x,
                plot.y,
                x,
                plot.bottom(),
                config.gantt.today_line_width,
                config.gantt.today_line_color,
            )
            .with_stroke_style(TODAY_DASH),
        );
    }
    push_axis_titles(&mut result, plot, config);

    let ticks = layout
        .ticks
        .iter()
        .map(|tick| Tick {
            value: tick.at.and_utc().timestamp() as f64,
            position: tick.x,
            is_major: true,
        })
        .collect();
    result.push_ticks(TickAxis::X, ticks);
    result
}
