use crate::core::{
    AxisSpan, BarOrientation, CategoryBand, CategoryTable, Color, PlotArea, ScaleKind, Tick,
    generate_ticks,
};
use crate::render::{LayoutResult, LinePrimitive, TextHAlign, TextPrimitive, TickAxis};

use super::ChartConfig;
use super::axis_label_format::format_scaled_value;

pub(super) const AXIS_COLOR: Color = Color::BLACK;
pub(super) const AXIS_STROKE_WIDTH: f64 = 1.0;
pub(super) const TICK_MARK_LENGTH: f64 = 5.0;
pub(super) const LABEL_FONT_SIZE: f64 = 12.0;
pub(super) const TICK_LABEL_FONT_SIZE: f64 = 11.0;
/// Half a label line; used to centre single-line labels on a coordinate.
pub(super) const LABEL_HALF_HEIGHT: f64 = 8.0;
const VALUE_LABEL_GAP: f64 = 8.0;
const CATEGORY_LABEL_GAP: f64 = 5.0;
const X_TITLE_OFFSET: f64 = 25.0;
const Y_TITLE_OFFSET: f64 = 58.0;

/// Inputs shared by every chart drawn against a category axis and a value axis.
#[derive(Debug, Clone, Copy)]
pub(super) struct CategoryAxes<'a> {
    pub plot: PlotArea,
    pub orientation: BarOrientation,
    pub table: &'a CategoryTable,
    pub bands: &'a [CategoryBand],
    pub value_domain_max: f64,
}

impl CategoryAxes<'_> {
    /// `tick_count` evenly spaced values from zero to the domain ceiling.
    pub(super) fn value_ticks(&self, tick_count: usize) -> Vec<Tick> {
        let span = match self.orientation {
            BarOrientation::Vertical => AxisSpan::new(self.plot.bottom(), self.plot.y),
            BarOrientation::Horizontal => AxisSpan::new(self.plot.x, self.plot.right()),
        };
        generate_ticks(
            0.0,
            self.value_domain_max,
            ScaleKind::Linear,
            tick_count,
            0,
            span,
        )
    }

    /// One major tick per band centre; the value is the category index.
    pub(super) fn category_ticks(&self) -> Vec<Tick> {
        self.bands
            .iter()
            .map(|band| Tick {
                value: band.category_index as f64,
                position: band.center(),
                is_major: true,
            })
            .collect()
    }
}

/// Light-gray gridlines at every value tick except the baseline.
pub(super) fn push_value_grid(
    result: &mut LayoutResult,
    axes: &CategoryAxes<'_>,
    ticks: &[Tick],
    config: &ChartConfig,
) {
    if !config.show_grid_lines {
        return;
    }
    let plot = axes.plot;
    for tick in ticks.iter().skip(1) {
        let line = match axes.orientation {
            BarOrientation::Vertical => LinePrimitive::new(
                plot.x,
                tick.position,
                plot.right(),
                tick.position,
                AXIS_STROKE_WIDTH,
                Color::LIGHT_GRAY,
            ),
            BarOrientation::Horizontal => LinePrimitive::new(
                tick.position,
                plot.y,
                tick.position,
                plot.bottom(),
                AXIS_STROKE_WIDTH,
                Color::LIGHT_GRAY,
            ),
        };
        result.push(line);
    }
}

/// Axis lines, value tick marks and labels, category labels and titles.
///
/// Records the value and category tick lists on `result`.
pub(super) fn push_category_axes(
    result: &mut LayoutResult,
    axes: &CategoryAxes<'_>,
    value_ticks: Vec<Tick>,
    config: &ChartConfig,
) {
    let plot = axes.plot;
    push_axis_lines(result, plot);

    for tick in &value_ticks {
        let text = format_scaled_value(tick.value, config.axis_scale_format, config.label_locale);
        match axes.orientation {
            BarOrientation::Vertical => {
                result.push(LinePrimitive::new(
                    plot.x - TICK_MARK_LENGTH,
                    tick.position,
                    plot.x,
                    tick.position,
                    AXIS_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
                result.push(TextPrimitive::new(
                    text,
                    plot.x - VALUE_LABEL_GAP,
                    tick.position - LABEL_HALF_HEIGHT,
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
            BarOrientation::Horizontal => {
                result.push(LinePrimitive::new(
                    tick.position,
                    plot.bottom(),
                    tick.position,
                    plot.bottom() + TICK_MARK_LENGTH,
                    AXIS_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
                result.push(TextPrimitive::new(
                    text,
                    tick.position,
                    plot.bottom() + VALUE_LABEL_GAP,
                    LABEL_FONT_SIZE,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }
    }

    for band in axes.bands {
        let Some(category) = axes.table.category(band.category_index) else {
            continue;
        };
        if category.is_empty() {
            continue;
        }
        let label = match axes.orientation {
            BarOrientation::Vertical => TextPrimitive::new(
                category,
                band.center(),
                plot.bottom() + CATEGORY_LABEL_GAP,
                LABEL_FONT_SIZE,
                AXIS_COLOR,
                TextHAlign::Center,
            ),
            BarOrientation::Horizontal => TextPrimitive::new(
                category,
                plot.x - VALUE_LABEL_GAP,
                band.center() - LABEL_HALF_HEIGHT,
                LABEL_FONT_SIZE,
                AXIS_COLOR,
                TextHAlign::Right,
            ),
        };
        result.push(label);
    }

    push_axis_titles(result, plot, config);

    let category_ticks = axes.category_ticks();
    let (value_axis, category_axis) = match axes.orientation {
        BarOrientation::Vertical => (TickAxis::Y, TickAxis::X),
        BarOrientation::Horizontal => (TickAxis::X, TickAxis::Y),
    };
    result.push_ticks(category_axis, category_ticks);
    result.push_ticks(value_axis, value_ticks);
}

/// Left and bottom axis lines of `plot`.
pub(super) fn push_axis_lines(result: &mut LayoutResult, plot: PlotArea) {
    result.push(LinePrimitive::new(
        plot.x,
        plot.y,
        plot.x,
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
    result.push(LinePrimitive::new(
        plot.x,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
}

/// Anchor between `start` and `end` (in reading order) for `alignment`.
pub(super) fn align_between(start: f64, end: f64, alignment: TextHAlign) -> f64 {
    match alignment {
        TextHAlign::Left => start,
        TextHAlign::Center => start + (end - start) / 2.0,
        TextHAlign::Right => end,
    }
}

/// X title below the category labels, Y title rotated left of the axis.
/// Each title is placed along its axis according to its style.
pub(super) fn push_axis_titles(result: &mut LayoutResult, plot: PlotArea, config: &ChartConfig) {
    let non_empty = |title: &Option<String>| {
        title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_owned)
    };

    if let Some(title) = non_empty(&config.x_axis_title) {
        let style = config.x_axis_title_style;
        result.push(TextPrimitive::new(
            title,
            align_between(plot.x, plot.right(), style.alignment),
            plot.bottom() + X_TITLE_OFFSET,
            config.axis_title_font_size,
            style.color,
            style.alignment,
        ));
    }
    if let Some(title) = non_empty(&config.y_axis_title) {
        let style = config.y_axis_title_style;
        result.push(
            TextPrimitive::new(
                title,
                plot.x - Y_TITLE_OFFSET,
                align_between(plot.bottom(), plot.y, style.alignment),
                config.axis_title_font_size,
                style.color,
                style.alignment,
            )
            .rotated(-90.0),
        );
    }
}
