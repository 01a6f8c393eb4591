mod frame;
mod null_renderer;
mod primitives;

pub use crate::core::Color;
pub use frame::{AxisTicks, LayoutResult, LegendEntry, LegendPosition, TickAxis};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, LinePrimitive, LineStrokeStyle, MarkerPrimitive, PolygonPrimitive, Primitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `LayoutResult` so
/// drawing code stays isolated from chart domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &LayoutResult) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{BASE_DPI, CairoContextRenderer, CairoRenderStats, CairoRenderer};
