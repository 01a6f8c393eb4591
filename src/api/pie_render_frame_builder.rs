use tracing::trace;

use crate::core::arc::{PIE_EDGE_PADDING, point_on_circle};
use crate::core::{Color, PlotArea, pie_slices};
use crate::render::{ArcPrimitive, LayoutResult, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::PieSegment;
use super::axis_render_frame_builder::{LABEL_FONT_SIZE, LABEL_HALF_HEIGHT};
use super::axis_label_format::format_trimmed;

const SLICE_BORDER_WIDTH: f64 = 1.0;

/// Slices clockwise from 0° around the plot centre, optionally with a donut
/// hole and "label (share%)" captions.
pub(super) fn build_pie_frame(
    segments: &[PieSegment],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let radius = plot.width.min(plot.height) / 2.0 - PIE_EDGE_PADDING;
    if radius <= 0.0 {
        return LayoutResult::empty();
    }
    let inner_radius = radius * config.pie_inner_radius_ratio;
    let center = plot.center();
    let values = segments.iter().map(|s| s.value).collect::<Vec<_>>();

    let mut result = LayoutResult::empty();
    let slices = pie_slices(&values, center, radius, inner_radius);
    trace!(slices = slices.len(), radius, inner_radius, "pie slices computed");
    for slice in &slices {
        let color = segments[slice.index].color;
        let mut arc = ArcPrimitive::new(slice.arc, color);
        arc.border_width = SLICE_BORDER_WIDTH;
        arc.border_color = Color::WHITE;
        result.push(arc);
    }

    if !config.show_labels {
        return result;
    }
    for slice in &slices {
        let segment = &segments[slice.index];
        if segment.label.is_empty() {
            continue;
        }
        let anchor = if inner_radius > 0.0 {
            let mid_angle = slice.arc.start_angle + slice.arc.sweep_angle / 2.0;
            point_on_circle(center, (inner_radius + radius) / 2.0, mid_angle)
        } else {
            slice.arc.label_anchor()
        };
        let text = format!(
            "{} ({}%)",
            segment.label,
            format_trimmed(slice.percent, 1, config.label_locale)
        );
        result.push(
            TextPrimitive::new(
                text,
                anchor.x,
                anchor.y - LABEL_HALF_HEIGHT,
                LABEL_FONT_SIZE,
                Color::WHITE,
                TextHAlign::Center,
            )
            .bold(),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::build_pie_frame;
    use crate::api::{ChartConfig, PieSegment};
    use crate::core::{Color, PlotArea};
    use crate::render::Primitive;

    fn segments() -> Vec<PieSegment> {
        vec![
            PieSegment::new("A", 1.0, Color::RED),
            PieSegment::new("B", 0.0, Color::BLACK),
            PieSegment::new("C", 3.0, Color::STEEL_BLUE),
        ]
    }

    #[test]
    fn zero_segment_draws_nothing() {
        let plot = PlotArea::new(0.0, 0.0, 220.0, 220.0);
        let result = build_pie_frame(&segments(), &ChartConfig::default(), plot);
        let arcs: Vec<_> = result
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Arc(arc) => Some(arc.arc),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].radius, 100.0);
        assert!((arcs[0].sweep_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn labels_carry_share() {
        let plot = PlotArea::new(0.0, 0.0, 220.0, 220.0);
        let result = build_pie_frame(&segments(), &ChartConfig::default(), plot);
        let labels: Vec<_> = result
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Label(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["A (25%)", "C (75%)"]);
    }

    #[test]
    fn donut_hole_follows_ratio() {
        let plot = PlotArea::new(0.0, 0.0, 220.0, 220.0);
        let config = ChartConfig {
            pie_inner_radius_ratio: 0.5,
            show_labels: false,
            ..ChartConfig::default()
        };
        let result = build_pie_frame(&segments(), &config, plot);
        assert_eq!(result.primitives.len(), 2);
        let Primitive::Arc(arc) = &result.primitives[0] else {
            panic!("expected arc");
        };
        assert_eq!(arc.arc.inner_radius, 50.0);
    }
}
