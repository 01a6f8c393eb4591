//! chart-layout: renderer-agnostic chart geometry.
//!
//! `layout` turns a chart kind, a dataset snapshot, a configuration and a
//! plot-area rectangle into a flat list of drawing primitives plus axis ticks
//! and legend entries. Rendering is delegated to a [`render::Renderer`]; the
//! optional `cairo-backend` feature ships a Cairo/Pango implementation with
//! PNG export.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartConfig, ChartKind, ChartLayoutEngine, Dataset, DatasetKind, GanttOptions, GanttTask,
    PieSegment, TitleStyle, TreemapGroup, TreemapItem, layout,
};
pub use error::{ChartError, ChartResult};
