use serde::{Deserialize, Serialize};

use crate::core::types::Rect;

/// Inset subtracted from every leaf before it is drawn.
pub const LEAF_PADDING: f64 = 4.0;
/// Leaves whose inset width or height is at or below this are dropped.
pub const MIN_LEAF_EXTENT: f64 = 2.0;
pub const LABEL_MIN_WIDTH: f64 = 40.0;
pub const LABEL_MIN_HEIGHT: f64 = 20.0;

/// One partitioned rectangle; groups carry their items as children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapNode {
    /// Position of the source group or item in its input list.
    pub index: usize,
    pub weight: f64,
    pub rect: Rect,
    pub children: Vec<TreemapNode>,
}

impl TreemapNode {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Leaf ready for drawing after inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreemapLeaf {
    pub group_index: usize,
    pub item_index: usize,
    pub weight: f64,
    /// Rectangle before the inset is applied.
    pub outer: Rect,
    pub rect: Rect,
    pub fits_label: bool,
}

/// Slices `area` along its longer side in proportion to `weights`.
///
/// Non-positive weights are skipped, so every returned rectangle has a
/// strictly positive extent. Returns `(input index, weight, rect)`.
#[must_use]
pub fn slice(weights: &[f64], area: Rect) -> Vec<(usize, f64, Rect)> {
    let positive = |weight: &f64| weight.is_finite() && *weight > 0.0;
    let total: f64 = weights.iter().copied().filter(positive).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let horizontal = area.width >= area.height;
    let mut offset = 0.0;
    let mut out = Vec::with_capacity(weights.len());
    for (index, weight) in weights.iter().copied().enumerate() {
        if !positive(&weight) {
            continue;
        }
        let ratio = weight / total;
        let rect = if horizontal {
            Rect::new(area.x + offset, area.y, area.width * ratio, area.height)
        } else {
            Rect::new(area.x, area.y + offset, area.width, area.height * ratio)
        };
        offset += if horizontal {
            area.width * ratio
        } else {
            area.height * ratio
        };
        out.push((index, weight, rect));
    }
    out
}

/// Two-level slice-and-dice partition: groups first, then items inside each
/// group, re-choosing the slice direction from each sub-rectangle's aspect.
///
/// A group weighs the sum of its positive item weights.
#[must_use]
pub fn partition(groups: &[Vec<f64>], area: Rect) -> Vec<TreemapNode> {
    let group_weights = groups
        .iter()
        .map(|items| items.iter().copied().filter(|w| w.is_finite() && *w > 0.0).sum())
        .collect::<Vec<f64>>();

    slice(&group_weights, area)
        .into_iter()
        .map(|(index, weight, rect)| TreemapNode {
            index,
            weight,
            rect,
            children: slice(&groups[index], rect)
                .into_iter()
                .map(|(index, weight, rect)| TreemapNode {
                    index,
                    weight,
                    rect,
                    children: Vec::new(),
                })
                .collect(),
        })
        .collect()
}

/// Insets every item rectangle and drops those too small to draw.
#[must_use]
pub fn drawable_leaves(nodes: &[TreemapNode], padding: f64) -> Vec<TreemapLeaf> {
    nodes
        .iter()
        .flat_map(|group| {
            group.children.iter().filter_map(move |item| {
                let rect = item.rect.inset(padding);
                if rect.width <= MIN_LEAF_EXTENT || rect.height <= MIN_LEAF_EXTENT {
                    return None;
                }
                Some(TreemapLeaf {
                    group_index: group.index,
                    item_index: item.index,
                    weight: item.weight,
                    outer: item.rect,
                    rect,
                    fits_label: rect.width > LABEL_MIN_WIDTH && rect.height > LABEL_MIN_HEIGHT,
                })
            })
        })
        .collect()
}
