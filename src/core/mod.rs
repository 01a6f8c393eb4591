pub mod arc;
pub mod category_layout;
pub mod color;
pub mod heatmap;
pub mod line_layout;
pub mod scale;
pub mod scatter;
pub mod series;
pub mod stack;
pub mod ticks;
pub mod timeline;
pub mod treemap;
pub mod types;

pub use arc::{ArcPath, PieSlice, build_slice, pie_slices};
pub use category_layout::{
    BarOrientation, BarSegment, CategoryBand, CategoryLayout, CategoryLayoutMode,
    layout_categories,
};
pub use color::{Color, interpolate};
pub use heatmap::{
    ColorLegend, HeatmapCell, HeatmapLayout, PlacedCell, default_highlight_tolerance,
    highlight_set, layout_heatmap,
};
pub use line_layout::{LineLayout, LinePath, layout_lines};
pub use scale::{Scale, ScaleKind, denormalize, normalize, widen_degenerate};
pub use scatter::{ScatterLayout, ScatterPoint, layout_scatter};
pub use series::{CategoryPoint, CategoryTable, Series};
pub use stack::StackAccumulator;
pub use ticks::{AxisSpan, Tick, decade_ticks, generate_ticks};
pub use timeline::{
    DependencyConnector, TaskBar, TaskDependency, TimeSpan, Timeline, TimelineLayout,
    layout_timeline,
};
pub use treemap::{TreemapLeaf, TreemapNode, drawable_leaves, partition};
pub use types::{ChartMargins, PlotArea, Point, Rect};
