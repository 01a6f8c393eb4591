use tracing::trace;

use crate::core::treemap::LEAF_PADDING;
use crate::core::{Color, PlotArea, drawable_leaves, partition};
use crate::render::{LayoutResult, RectPrimitive, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::TreemapGroup;
use super::axis_render_frame_builder::LABEL_FONT_SIZE;

const LEAF_BORDER_WIDTH: f64 = 1.0;
const LEAF_LABEL_OFFSET: f64 = 4.0;

/// Slice-and-dice treemap; each leaf takes its group's colour.
pub(super) fn build_treemap_frame(
    groups: &[TreemapGroup],
    config: &ChartConfig,
    plot: PlotArea,
) -> LayoutResult {
    let weights = groups
        .iter()
        .map(|group| group.items.iter().map(|item| item.value).collect())
        .collect::<Vec<Vec<f64>>>();
    let nodes = partition(&weights, plot);

    let leaves = drawable_leaves(&nodes, LEAF_PADDING);
    trace!(groups = nodes.len(), leaves = leaves.len(), "treemap partitioned");

    let mut result = LayoutResult::empty();
    for leaf in leaves {
        let group = &groups[leaf.group_index];
        result.push(
            RectPrimitive::from_rect(leaf.rect, group.color)
                .with_border(LEAF_BORDER_WIDTH, Color::WHITE),
        );

        let label = &group.items[leaf.item_index].label;
        if config.show_labels && leaf.fits_label && !label.is_empty() {
            result.push(TextPrimitive::new(
                label.clone(),
                leaf.rect.x + LEAF_LABEL_OFFSET,
                leaf.rect.y + LEAF_LABEL_OFFSET,
                LABEL_FONT_SIZE,
                Color::WHITE,
                TextHAlign::Left,
            ));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::build_treemap_frame;
    use crate::api::{ChartConfig, TreemapGroup};
    use crate::core::{Color, PlotArea};
    use crate::render::Primitive;

    #[test]
    fn leaves_take_group_colour_and_label() {
        let groups = vec![
            TreemapGroup::new("fruit", Color::RED)
                .with_item("apple", 3.0)
                .with_item("pear", 1.0),
            TreemapGroup::new("veg", Color::STEEL_BLUE).with_item("kale", 4.0),
        ];
        let plot = PlotArea::new(0.0, 0.0, 400.0, 200.0);
        let result = build_treemap_frame(&groups, &ChartConfig::default(), plot);

        let rects: Vec<_> = result
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(rect) => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].fill_color, Color::RED);
        assert_eq!(rects[2].fill_color, Color::STEEL_BLUE);
        assert!(
            result
                .primitives
                .iter()
                .any(|p| matches!(p, Primitive::Label(text) if text.text == "kale"))
        );
    }

    #[test]
    fn non_positive_items_are_not_drawn() {
        let groups = vec![TreemapGroup::new("g", Color::RED).with_item("zero", 0.0)];
        let plot = PlotArea::new(0.0, 0.0, 400.0, 200.0);
        let result = build_treemap_frame(&groups, &ChartConfig::default(), plot);
        assert!(result.primitives.is_empty());
    }
}
