use crate::core::PlotArea;
use crate::error::ChartResult;
use crate::render::{LayoutResult, Renderer};

use super::{ChartConfig, ChartKind, Dataset, layout};

/// Pairs the stateless layout pass with a renderer.
///
/// The engine keeps no layout state between calls; every `layout` and
/// `render` call recomputes the full result from its arguments.
pub struct ChartLayoutEngine<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> ChartLayoutEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn layout(
        &self,
        kind: ChartKind,
        dataset: &Dataset,
        config: &ChartConfig,
        plot: PlotArea,
    ) -> ChartResult<LayoutResult> {
        layout(kind, dataset, config, plot)
    }

    /// Lays out inside a `width x height` viewport using the kind's default
    /// margins.
    pub fn layout_in_viewport(
        &self,
        kind: ChartKind,
        dataset: &Dataset,
        config: &ChartConfig,
        width: f64,
        height: f64,
    ) -> ChartResult<LayoutResult> {
        let plot = PlotArea::from_viewport(width, height, kind.default_margins());
        layout(kind, dataset, config, plot)
    }

    /// Lays out and hands the result to the renderer; returns the rendered result.
    pub fn render(
        &mut self,
        kind: ChartKind,
        dataset: &Dataset,
        config: &ChartConfig,
        plot: PlotArea,
    ) -> ChartResult<LayoutResult> {
        let frame = layout(kind, dataset, config, plot)?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
