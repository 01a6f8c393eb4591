use serde::{Deserialize, Serialize};

use crate::core::scale::widen_degenerate;
use crate::core::series::CategoryTable;
use crate::core::stack::StackAccumulator;
use crate::core::types::{PlotArea, Rect};

/// Share of a category band covered by a stacked vertical bar.
pub const STACKED_COLUMN_BAND_RATIO: f64 = 0.5;
/// Share of a category row covered by a stacked horizontal bar.
pub const STACKED_ROW_BAND_RATIO: f64 = 0.6;
/// Share of a category band covered by a group of side-by-side columns.
pub const GROUP_BAND_RATIO: f64 = 0.8;
/// Narrowest column a grouped layout will produce.
pub const MIN_COLUMN_EXTENT: f64 = 2.0;

/// How series sharing a category are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLayoutMode {
    Stacked,
    Grouped,
}

/// Direction in which values grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarOrientation {
    /// Categories along X, values grow upwards.
    #[default]
    Vertical,
    /// Categories along Y, values grow to the right.
    Horizontal,
}

/// Slot reserved for one category along the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBand {
    pub category_index: usize,
    /// Pixel coordinate where the band begins.
    pub start: f64,
    pub extent: f64,
}

impl CategoryBand {
    #[must_use]
    pub fn center(self) -> f64 {
        self.start + self.extent / 2.0
    }
}

/// One drawn bar (or stacked bar piece).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub series_index: usize,
    pub category_index: usize,
    pub value: f64,
    /// Sum of the positive values stacked below this segment; zero when grouped.
    pub stack_base: f64,
    pub rect: Rect,
}

/// Bands, bars and the value-axis ceiling of one category layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryLayout {
    pub bands: Vec<CategoryBand>,
    pub segments: Vec<BarSegment>,
    /// Value mapped onto the full plot extent (stack total max or max single value).
    pub value_domain_max: f64,
}

impl CategoryLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Positions bands and bars for a stacked or grouped category chart.
///
/// Stacked layouts scale every category against the largest stack total;
/// grouped layouts scale against the largest single value. Values `<= 0`
/// are never drawn. No categories or no series yields an empty layout.
#[must_use]
pub fn layout_categories(
    table: &CategoryTable,
    plot: PlotArea,
    mode: CategoryLayoutMode,
    orientation: BarOrientation,
) -> CategoryLayout {
    if table.is_empty() || !plot.is_valid() {
        return CategoryLayout::default();
    }

    let category_count = table.category_count();
    let (band_origin, band_axis, value_axis) = match orientation {
        BarOrientation::Vertical => (plot.x, plot.width, plot.height),
        BarOrientation::Horizontal => (plot.y, plot.height, plot.width),
    };
    let step = band_axis / category_count as f64;
    let bands = (0..category_count)
        .map(|category_index| CategoryBand {
            category_index,
            start: band_origin + step * category_index as f64,
            extent: step,
        })
        .collect::<Vec<_>>();

    let raw_max = match mode {
        CategoryLayoutMode::Stacked => StackAccumulator::from_table(table).max_total(),
        CategoryLayoutMode::Grouped => table.max_value(),
    };
    let (_, value_domain_max) = widen_degenerate(0.0, raw_max);
    let to_extent = |value: f64| value / value_domain_max * value_axis;

    let mut segments = Vec::new();
    match mode {
        CategoryLayoutMode::Stacked => {
            let ratio = match orientation {
                BarOrientation::Vertical => STACKED_COLUMN_BAND_RATIO,
                BarOrientation::Horizontal => STACKED_ROW_BAND_RATIO,
            };
            let thickness = step * ratio;
            for band in &bands {
                let offset = band.start + (step - thickness) / 2.0;
                let mut stack_base = 0.0;
                for series_index in 0..table.series_count() {
                    let value = table.value(series_index, band.category_index);
                    if value <= 0.0 {
                        continue;
                    }
                    let along = to_extent(value);
                    let base = to_extent(stack_base);
                    let rect = match orientation {
                        BarOrientation::Vertical => {
                            Rect::new(offset, plot.bottom() - base - along, thickness, along)
                        }
                        BarOrientation::Horizontal => {
                            Rect::new(plot.x + base, offset, along, thickness)
                        }
                    };
                    segments.push(BarSegment {
                        series_index,
                        category_index: band.category_index,
                        value,
                        stack_base,
                        rect,
                    });
                    stack_base += value;
                }
            }
        }
        CategoryLayoutMode::Grouped => {
            let series_count = table.series_count();
            let group = (step * GROUP_BAND_RATIO).max(series_count as f64 * 2.0);
            let column = (group / series_count as f64).max(MIN_COLUMN_EXTENT);
            // 1px gap between neighbouring columns.
            let drawn = column - 1.0;
            for band in &bands {
                let group_start = band.start + (step - group) / 2.0;
                for series_index in 0..series_count {
                    let value = table.value(series_index, band.category_index);
                    if value <= 0.0 {
                        continue;
                    }
                    let along = to_extent(value);
                    let offset = group_start + column * series_index as f64;
                    let rect = match orientation {
                        BarOrientation::Vertical => {
                            Rect::new(offset, plot.bottom() - along, drawn, along)
                        }
                        BarOrientation::Horizontal => Rect::new(plot.x, offset, along, drawn),
                    };
                    segments.push(BarSegment {
                        series_index,
                        category_index: band.category_index,
                        value,
                        stack_base: 0.0,
                        rect,
                    });
                }
            }
        }
    }

    CategoryLayout {
        bands,
        segments,
        value_domain_max,
    }
}

#[cfg(test)]
mod tests {
    use super::{BarOrientation, CategoryLayoutMode, layout_categories};
    use crate::core::Color;
    use crate::core::series::{CategoryTable, Series};
    use crate::core::types::PlotArea;

    fn table() -> CategoryTable {
        CategoryTable::build(&[
            Series::new("a", Color::RED)
                .with_point("x", 10.0)
                .with_point("y", 0.0),
            Series::new("b", Color::BLACK)
                .with_point("x", 30.0)
                .with_point("y", 20.0),
        ])
    }

    #[test]
    fn stacked_vertical_grows_from_bottom() {
        let plot = PlotArea::new(0.0, 0.0, 200.0, 100.0);
        let layout = layout_categories(
            &table(),
            plot,
            CategoryLayoutMode::Stacked,
            BarOrientation::Vertical,
        );
        assert_eq!(layout.value_domain_max, 40.0);
        assert_eq!(layout.segments.len(), 3);

        let first = layout.segments[0];
        assert_eq!(first.rect.x, 25.0);
        assert_eq!(first.rect.width, 50.0);
        assert_eq!(first.rect.height, 25.0);
        assert_eq!(first.rect.bottom(), 100.0);

        let second = layout.segments[1];
        assert_eq!(second.stack_base, 10.0);
        assert_eq!(second.rect.bottom(), first.rect.y);
        assert_eq!(second.rect.y, 0.0);
    }

    #[test]
    fn stacked_horizontal_grows_rightwards() {
        let plot = PlotArea::new(10.0, 0.0, 400.0, 100.0);
        let layout = layout_categories(
            &table(),
            plot,
            CategoryLayoutMode::Stacked,
            BarOrientation::Horizontal,
        );
        let second = layout.segments[1];
        assert_eq!(second.rect.x, 10.0 + 100.0);
        assert_eq!(second.rect.width, 300.0);
        assert!((second.rect.height - 30.0).abs() < 1e-9);
        assert!((second.rect.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn grouped_skips_non_positive_and_uses_max_value() {
        let plot = PlotArea::new(0.0, 0.0, 200.0, 90.0);
        let layout = layout_categories(
            &table(),
            plot,
            CategoryLayoutMode::Grouped,
            BarOrientation::Vertical,
        );
        assert_eq!(layout.value_domain_max, 30.0);
        assert_eq!(layout.segments.len(), 3);
        assert_eq!(layout.segments[1].rect.height, 90.0);
        assert_eq!(layout.segments[1].rect.width, 39.0);
    }

    #[test]
    fn many_series_keep_minimum_column_width() {
        let series = (0..100)
            .map(|i| Series::new(format!("s{i}"), Color::RED).with_point("only", 1.0))
            .collect::<Vec<_>>();
        let layout = layout_categories(
            &CategoryTable::build(&series),
            PlotArea::new(0.0, 0.0, 50.0, 50.0),
            CategoryLayoutMode::Grouped,
            BarOrientation::Vertical,
        );
        let gap = layout.segments[1].rect.x - layout.segments[0].rect.x;
        assert_eq!(gap, 2.0);
    }

    #[test]
    fn empty_table_yields_empty_layout() {
        let layout = layout_categories(
            &CategoryTable::build(&[]),
            PlotArea::new(0.0, 0.0, 100.0, 100.0),
            CategoryLayoutMode::Stacked,
            BarOrientation::Vertical,
        );
        assert!(layout.is_empty());
        assert!(layout.segments.is_empty());
    }
}
