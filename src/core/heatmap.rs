use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::color::{Color, interpolate};
use crate::core::scale::{Scale, ScaleKind};
use crate::core::ticks::{AxisSpan, Tick, generate_ticks};
use crate::core::types::{PlotArea, Rect};

pub const LEGEND_GAP: f64 = 10.0;
pub const LEGEND_WIDTH: f64 = 20.0;
pub const LEGEND_STEPS: usize = 120;
pub const LEGEND_MAJOR_TICKS: usize = 5;
pub const LEGEND_MINOR_TICKS_PER_SEGMENT: usize = 4;
/// Share of the value range counted as "close" when cross-highlighting.
pub const HIGHLIGHT_TOLERANCE_RATIO: f64 = 0.05;

/// One `(x, y) -> value` sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: String,
    pub y: String,
    pub value: f64,
}

impl HeatmapCell {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>, value: f64) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedCell {
    pub index: usize,
    pub x_index: usize,
    pub y_index: usize,
    pub value: f64,
    pub color: Color,
    pub rect: Rect,
}

/// Vertical gradient strip and its ticks, placed right of the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLegend {
    pub strip: Rect,
    /// Top-to-bottom gradient steps, highest value first.
    pub steps: Vec<(Rect, Color)>,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapLayout {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub cell_width: f64,
    pub cell_height: f64,
    pub scale: Scale,
    pub cells: Vec<PlacedCell>,
    pub legend: ColorLegend,
}

/// Lays out the cell grid and its colour legend.
///
/// Labels keep first-appearance order; row 0 is drawn at the bottom. Cells
/// with non-finite values are left out. Returns `None` when no finite value
/// exists or the plot area is not drawable.
#[must_use]
pub fn layout_heatmap(
    cells: &[HeatmapCell],
    plot: PlotArea,
    kind: ScaleKind,
    min_color: Color,
    max_color: Color,
) -> Option<HeatmapLayout> {
    if !plot.is_valid() {
        return None;
    }
    let scale = Scale::from_values(kind, cells.iter().map(|cell| cell.value))?;

    let x_labels: IndexSet<&str> = cells.iter().map(|cell| cell.x.as_str()).collect();
    let y_labels: IndexSet<&str> = cells.iter().map(|cell| cell.y.as_str()).collect();
    let cell_width = plot.width / x_labels.len() as f64;
    let cell_height = plot.height / y_labels.len() as f64;
    let rows = y_labels.len();

    let placed = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.value.is_finite())
        .filter_map(|(index, cell)| {
            let x_index = x_labels.get_index_of(cell.x.as_str())?;
            let y_index = y_labels.get_index_of(cell.y.as_str())?;
            Some(PlacedCell {
                index,
                x_index,
                y_index,
                value: cell.value,
                color: interpolate(min_color, max_color, scale.normalize(cell.value)),
                rect: Rect::new(
                    plot.x + x_index as f64 * cell_width,
                    plot.y + (rows - 1 - y_index) as f64 * cell_height,
                    cell_width,
                    cell_height,
                ),
            })
        })
        .collect();

    Some(HeatmapLayout {
        x_labels: x_labels.iter().map(|label| (*label).to_owned()).collect(),
        y_labels: y_labels.iter().map(|label| (*label).to_owned()).collect(),
        cell_width,
        cell_height,
        scale,
        cells: placed,
        legend: color_legend(scale, plot, min_color, max_color),
    })
}

/// Gradient strip sampled linearly in value space, with 5 major and 4 minor
/// ticks per segment positioned along the strip.
#[must_use]
pub fn color_legend(
    scale: Scale,
    plot: PlotArea,
    min_color: Color,
    max_color: Color,
) -> ColorLegend {
    let strip = Rect::new(plot.right() + LEGEND_GAP, plot.y, LEGEND_WIDTH, plot.height);
    let step_height = strip.height / LEGEND_STEPS as f64;
    let (min, max) = scale.domain();

    let steps = (0..LEGEND_STEPS)
        .map(|index| {
            let fraction = 1.0 - index as f64 / (LEGEND_STEPS - 1) as f64;
            let value = min + (max - min) * fraction;
            let color = interpolate(min_color, max_color, scale.normalize(value));
            // +1 overlap hides seams between neighbouring steps.
            let rect = Rect::new(
                strip.x,
                strip.y + index as f64 * step_height,
                strip.width,
                step_height + 1.0,
            );
            (rect, color)
        })
        .collect();

    let ticks = generate_ticks(
        min,
        max,
        scale.kind,
        LEGEND_MAJOR_TICKS,
        LEGEND_MINOR_TICKS_PER_SEGMENT,
        AxisSpan::new(strip.bottom(), strip.y),
    );

    ColorLegend {
        strip,
        steps,
        ticks,
    }
}

/// Indices of every value within `tolerance` of `hovered`.
///
/// Pure helper for renderers that cross-highlight cells and legend ticks.
#[must_use]
pub fn highlight_set(values: &[f64], hovered: f64, tolerance: f64) -> BTreeSet<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| (**value - hovered).abs() <= tolerance)
        .map(|(index, _)| index)
        .collect()
}

/// `(max - min) * 0.05` over finite values; `0.0` when there are none.
#[must_use]
pub fn default_highlight_tolerance(values: &[f64]) -> f64 {
    let finite = values.iter().copied().filter(|value| value.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });
    if min > max {
        return 0.0;
    }
    (max - min) * HIGHLIGHT_TOLERANCE_RATIO
}

#[cfg(test)]
mod tests {
    use super::{HeatmapCell, default_highlight_tolerance, highlight_set, layout_heatmap};
    use crate::core::color::Color;
    use crate::core::scale::ScaleKind;
    use crate::core::types::PlotArea;

    fn cells() -> Vec<HeatmapCell> {
        vec![
            HeatmapCell::new("Mon", "AM", 0.0),
            HeatmapCell::new("Tue", "AM", 5.0),
            HeatmapCell::new("Mon", "PM", 10.0),
            HeatmapCell::new("Tue", "PM", 2.5),
        ]
    }

    #[test]
    fn first_row_is_drawn_at_bottom() {
        let plot = PlotArea::new(80.0, 20.0, 200.0, 100.0);
        let layout = layout_heatmap(&cells(), plot, ScaleKind::Linear, Color::WHITE, Color::RED)
            .expect("layout");
        assert_eq!(layout.x_labels, vec!["Mon", "Tue"]);
        assert_eq!(layout.cells[0].rect.y, 70.0);
        assert_eq!(layout.cells[2].rect.y, 20.0);
        assert_eq!(layout.cells[1].rect.x, 180.0);
        assert_eq!(layout.cells[0].color, Color::WHITE);
        assert_eq!(layout.cells[2].color, Color::RED);
    }

    #[test]
    fn legend_strip_and_ticks() {
        let plot = PlotArea::new(80.0, 20.0, 200.0, 100.0);
        let layout = layout_heatmap(&cells(), plot, ScaleKind::Linear, Color::WHITE, Color::RED)
            .expect("layout");
        let legend = &layout.legend;
        assert_eq!(legend.strip.x, 290.0);
        assert_eq!(legend.steps.len(), 120);
        assert_eq!(legend.steps[0].1, Color::RED);
        assert_eq!(legend.ticks.len(), 5 + 4 * 4);
        assert_eq!(legend.ticks[0].position, 120.0);
        assert_eq!(legend.ticks[20].position, 20.0);
    }

    #[test]
    fn equal_values_widen_domain() {
        let same = vec![HeatmapCell::new("a", "b", 5.0), HeatmapCell::new("c", "b", 5.0)];
        let layout = layout_heatmap(
            &same,
            PlotArea::new(0.0, 0.0, 10.0, 10.0),
            ScaleKind::Linear,
            Color::WHITE,
            Color::RED,
        )
        .expect("layout");
        assert_eq!(layout.scale.domain(), (5.0, 6.0));
    }

    #[test]
    fn highlight_uses_tolerance() {
        let values = [0.0, 5.0, 10.0, 5.4];
        let tolerance = default_highlight_tolerance(&values);
        assert!((tolerance - 0.5).abs() < 1e-12);
        let hits = highlight_set(&values, 5.0, tolerance);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
