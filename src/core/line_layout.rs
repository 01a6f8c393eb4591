use serde::{Deserialize, Serialize};

use crate::core::scale::widen_degenerate;
use crate::core::series::CategoryTable;
use crate::core::types::{PlotArea, Point};

/// Polyline vertices of one series, one per category band centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub series_index: usize,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineLayout {
    pub paths: Vec<LinePath>,
    pub value_domain_max: f64,
}

/// Maps each series onto band centres against a `[0, max value]` domain.
#[must_use]
pub fn layout_lines(table: &CategoryTable, plot: PlotArea) -> LineLayout {
    if table.is_empty() || !plot.is_valid() {
        return LineLayout::default();
    }

    let (_, value_domain_max) = widen_degenerate(0.0, table.max_value());
    let step = plot.width / table.category_count() as f64;
    let paths = (0..table.series_count())
        .map(|series_index| LinePath {
            series_index,
            points: (0..table.category_count())
                .map(|category| {
                    let value = table.value(series_index, category);
                    Point::new(
                        plot.x + step * (category as f64 + 0.5),
                        plot.bottom() - value / value_domain_max * plot.height,
                    )
                })
                .collect(),
        })
        .collect();

    LineLayout {
        paths,
        value_domain_max,
    }
}

#[cfg(test)]
mod tests {
    use super::layout_lines;
    use crate::core::Color;
    use crate::core::series::{CategoryTable, Series};
    use crate::core::types::PlotArea;

    #[test]
    fn vertices_sit_on_band_centres() {
        let table = CategoryTable::build(&[Series::new("a", Color::RED)
            .with_point("x", 5.0)
            .with_point("y", 10.0)]);
        let layout = layout_lines(&table, PlotArea::new(0.0, 0.0, 100.0, 50.0));
        let points = &layout.paths[0].points;
        assert_eq!(points[0].x, 25.0);
        assert_eq!(points[1].x, 75.0);
        assert_eq!(points[0].y, 25.0);
        assert_eq!(points[1].y, 0.0);
    }
}
