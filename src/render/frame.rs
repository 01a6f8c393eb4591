use serde::{Deserialize, Serialize};

use crate::core::{Color, Tick};
use crate::error::ChartResult;
use crate::render::Primitive;

/// Where the host places the legend panel relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LegendPosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

/// Axis a tick list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickAxis {
    X,
    Y,
    /// Heatmap colour-legend gradient.
    ColorLegend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub axis: TickAxis,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Backend-agnostic output of one layout pass.
///
/// Primitives are listed in paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub primitives: Vec<Primitive>,
    pub ticks: Vec<AxisTicks>,
    pub legend_entries: Vec<LegendEntry>,
    /// `None` when the legend is hidden.
    #[serde(default)]
    pub legend_position: Option<LegendPosition>,
}

impl LayoutResult {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn push_ticks(&mut self, axis: TickAxis, ticks: Vec<Tick>) {
        if !ticks.is_empty() {
            self.ticks.push(AxisTicks { axis, ticks });
        }
    }

    #[must_use]
    pub fn ticks_for(&self, axis: TickAxis) -> Option<&[Tick]> {
        self.ticks
            .iter()
            .find(|group| group.axis == axis)
            .map(|group| group.ticks.as_slice())
    }

    /// Validates every primitive; the first failure is returned.
    pub fn validate(&self) -> ChartResult<()> {
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.ticks.is_empty() && self.legend_entries.is_empty()
    }
}
