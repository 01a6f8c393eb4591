use serde::{Deserialize, Serialize};

use crate::core::{BarOrientation, CategoryLayoutMode, ChartMargins};

/// Chart type dispatched by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Column,
    HorizontalBar,
    Pie,
    Line,
    Gantt,
    Heatmap,
    Scatter,
    Treemap,
}

impl ChartKind {
    pub const ALL: [Self; 9] = [
        Self::Bar,
        Self::Column,
        Self::HorizontalBar,
        Self::Pie,
        Self::Line,
        Self::Gantt,
        Self::Heatmap,
        Self::Scatter,
        Self::Treemap,
    ];

    /// Dataset shape this kind lays out.
    #[must_use]
    pub const fn dataset_kind(self) -> DatasetKind {
        match self {
            Self::Bar | Self::Column | Self::HorizontalBar | Self::Line => DatasetKind::Categorical,
            Self::Pie => DatasetKind::Pie,
            Self::Gantt => DatasetKind::Gantt,
            Self::Heatmap => DatasetKind::Heatmap,
            Self::Scatter => DatasetKind::Scatter,
            Self::Treemap => DatasetKind::Treemap,
        }
    }

    /// Stacking mode used when the config does not override it.
    #[must_use]
    pub const fn default_category_layout(self) -> Option<CategoryLayoutMode> {
        match self {
            Self::Bar | Self::HorizontalBar => Some(CategoryLayoutMode::Stacked),
            Self::Column => Some(CategoryLayoutMode::Grouped),
            _ => None,
        }
    }

    #[must_use]
    pub const fn bar_orientation(self) -> BarOrientation {
        match self {
            Self::HorizontalBar => BarOrientation::Horizontal,
            _ => BarOrientation::Vertical,
        }
    }

    /// Space reserved around the plot area for this kind's axes and labels.
    #[must_use]
    pub const fn default_margins(self) -> ChartMargins {
        match self {
            Self::Bar | Self::Column | Self::Line => ChartMargins::new(60.0, 20.0, 20.0, 60.0),
            Self::HorizontalBar => ChartMargins::new(60.0, 20.0, 30.0, 60.0),
            Self::Gantt => ChartMargins::new(120.0, 20.0, 20.0, 60.0),
            Self::Heatmap => ChartMargins::new(80.0, 20.0, 20.0, 60.0),
            Self::Scatter => ChartMargins::uniform(40.0),
            Self::Pie | Self::Treemap => ChartMargins::none(),
        }
    }
}

/// Shape of the data handed to `layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Categorical,
    Pie,
    Gantt,
    Heatmap,
    Scatter,
    Treemap,
}
