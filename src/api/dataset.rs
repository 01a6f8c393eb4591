use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Color, HeatmapCell, ScatterPoint, Series, TaskDependency, TimeSpan};
use crate::render::LegendEntry;

use super::DatasetKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl PieSegment {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Color,
}

impl GanttTask {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: Color,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            color,
        }
    }

    #[must_use]
    pub fn span(&self) -> TimeSpan {
        TimeSpan {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapItem {
    pub label: String,
    pub value: f64,
}

impl TreemapItem {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Colored group of treemap items; items share the group's fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapGroup {
    pub title: String,
    pub color: Color,
    pub items: Vec<TreemapItem>,
}

impl TreemapGroup {
    #[must_use]
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            color,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, label: impl Into<String>, value: f64) -> Self {
        self.items.push(TreemapItem::new(label, value));
        self
    }
}

/// Immutable snapshot of the data for one layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Dataset {
    /// Series sharing a category axis (bar, column, horizontal bar, line).
    Categorical(Vec<Series>),
    Pie(Vec<PieSegment>),
    Gantt {
        tasks: Vec<GanttTask>,
        #[serde(default)]
        dependencies: Vec<TaskDependency>,
    },
    Heatmap(Vec<HeatmapCell>),
    Scatter(Vec<ScatterPoint>),
    Treemap(Vec<TreemapGroup>),
}

impl Dataset {
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Categorical(_) => DatasetKind::Categorical,
            Self::Pie(_) => DatasetKind::Pie,
            Self::Gantt { .. } => DatasetKind::Gantt,
            Self::Heatmap(_) => DatasetKind::Heatmap,
            Self::Scatter(_) => DatasetKind::Scatter,
            Self::Treemap(_) => DatasetKind::Treemap,
        }
    }

    /// `true` when there is nothing to lay out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Categorical(series) => series.is_empty(),
            Self::Pie(segments) => segments.is_empty(),
            Self::Gantt { tasks, .. } => tasks.is_empty(),
            Self::Heatmap(cells) => cells.is_empty(),
            Self::Scatter(points) => points.is_empty(),
            Self::Treemap(groups) => groups.is_empty(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Categorical(series) => series.len(),
            Self::Pie(segments) => segments.len(),
            Self::Gantt { tasks, .. } => tasks.len(),
            Self::Heatmap(cells) => cells.len(),
            Self::Scatter(points) => points.len(),
            Self::Treemap(groups) => groups.len(),
        }
    }

    /// Legend entries in input order: one per series, segment, task or group.
    ///
    /// Scatter points collapse by category (first colour wins); heatmaps are
    /// described by their colour legend instead.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        match self {
            Self::Categorical(series) => series
                .iter()
                .map(|s| LegendEntry::new(s.title.clone(), s.color))
                .collect(),
            Self::Pie(segments) => segments
                .iter()
                .map(|segment| LegendEntry::new(segment.label.clone(), segment.color))
                .collect(),
            Self::Gantt { tasks, .. } => tasks
                .iter()
                .map(|task| LegendEntry::new(task.title.clone(), task.color))
                .collect(),
            Self::Heatmap(_) => Vec::new(),
            Self::Scatter(points) => {
                let mut seen: IndexMap<&str, Color> = IndexMap::new();
                for point in points {
                    seen.entry(point.category.as_str()).or_insert(point.color);
                }
                seen.into_iter()
                    .map(|(label, color)| LegendEntry::new(label, color))
                    .collect()
            }
            Self::Treemap(groups) => groups
                .iter()
                .map(|group| LegendEntry::new(group.title.clone(), group.color))
                .collect(),
        }
    }
}
