use tracing::debug;

use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};
use crate::render::LayoutResult;

use super::category_render_frame_builder::{build_category_frame, build_line_frame};
use super::gantt_render_frame_builder::build_gantt_frame;
use super::heatmap_render_frame_builder::build_heatmap_frame;
use super::pie_render_frame_builder::build_pie_frame;
use super::scatter_render_frame_builder::build_scatter_frame;
use super::treemap_render_frame_builder::build_treemap_frame;
use super::{ChartConfig, ChartKind, Dataset};

/// Computes every drawable primitive, tick and legend entry for one chart.
///
/// An empty dataset or a plot area without positive extent yields an empty
/// result. Sparse or malformed data degrades to a partially drawn chart; the
/// only errors are a dataset shape that does not match `kind` and an invalid
/// `config`.
pub fn layout(
    kind: ChartKind,
    dataset: &Dataset,
    config: &ChartConfig,
    plot: PlotArea,
) -> ChartResult<LayoutResult> {
    if dataset.is_empty() || !plot.is_valid() {
        debug!(
            kind = ?kind,
            items = dataset.item_count(),
            width = plot.width,
            height = plot.height,
            "nothing to lay out"
        );
        return Ok(LayoutResult::empty());
    }
    if kind.dataset_kind() != dataset.kind() {
        return Err(ChartError::DatasetMismatch {
            kind,
            dataset: dataset.kind(),
        });
    }
    config.validate()?;

    let mut result = match (kind, dataset) {
        (ChartKind::Line, Dataset::Categorical(series)) => build_line_frame(series, config, plot),
        (_, Dataset::Categorical(series)) => build_category_frame(kind, series, config, plot),
        (_, Dataset::Pie(segments)) => build_pie_frame(segments, config, plot),
        (
            _,
            Dataset::Gantt {
                tasks,
                dependencies,
            },
        ) => build_gantt_frame(tasks, dependencies, config, plot),
        (_, Dataset::Heatmap(cells)) => build_heatmap_frame(cells, config, plot),
        (_, Dataset::Scatter(points)) => build_scatter_frame(points, config, plot),
        (_, Dataset::Treemap(groups)) => build_treemap_frame(groups, config, plot),
    };

    result.legend_entries = dataset.legend_entries();
    result.legend_position = config.show_legend.then_some(config.legend_position);

    debug!(
        kind = ?kind,
        items = dataset.item_count(),
        primitives = result.primitives.len(),
        tick_axes = result.ticks.len(),
        legend_entries = result.legend_entries.len(),
        "layout pass complete"
    );
    Ok(result)
}
