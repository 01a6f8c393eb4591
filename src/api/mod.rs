mod axis_config;
mod axis_label_format;
mod axis_render_frame_builder;
mod category_render_frame_builder;
mod chart_config;
mod chart_kind;
mod dataset;
mod engine;
mod gantt_render_frame_builder;
mod heatmap_render_frame_builder;
mod json_contract;
mod layout;
mod pie_render_frame_builder;
mod scatter_render_frame_builder;
mod treemap_render_frame_builder;

pub use axis_config::{AxisLabelLocale, AxisScaleFormat};
pub use chart_config::{ChartConfig, GanttOptions, TitleStyle};
pub use chart_kind::{ChartKind, DatasetKind};
pub use dataset::{Dataset, GanttTask, PieSegment, TreemapGroup, TreemapItem};
pub use engine::ChartLayoutEngine;
pub use json_contract::{LAYOUT_RESULT_JSON_SCHEMA_V1, LayoutResultJsonContractV1};
pub use layout::layout;
