use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::{CategoryLayoutMode, Color, ScaleKind};
use crate::error::{ChartError, ChartResult};
use crate::render::{LegendPosition, TextHAlign};

use super::{AxisLabelLocale, AxisScaleFormat};

/// Colour and alignment of a chart title.
///
/// Alignment runs along the title's reading direction: for the rotated Y
/// title `Left` sits at the bottom of the plot and `Right` at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleStyle {
    #[serde(default = "default_title_color")]
    pub color: Color,
    #[serde(default = "default_title_alignment")]
    pub alignment: TextHAlign,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            color: default_title_color(),
            alignment: default_title_alignment(),
        }
    }
}

impl TitleStyle {
    #[must_use]
    pub const fn new(color: Color, alignment: TextHAlign) -> Self {
        Self { color, alignment }
    }
}

/// Gantt-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttOptions {
    #[serde(default = "default_true")]
    pub show_today_line: bool,
    /// Calendar date of the "today" marker; no marker when `None`.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Number of time ticks including both ends.
    #[serde(default = "default_gantt_tick_count")]
    pub tick_count: usize,
    /// `chrono` strftime pattern for tick labels.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_today_line_color")]
    pub today_line_color: Color,
    #[serde(default = "default_today_line_width")]
    pub today_line_width: f64,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            show_today_line: true,
            today: None,
            tick_count: default_gantt_tick_count(),
            date_format: default_date_format(),
            today_line_color: default_today_line_color(),
            today_line_width: default_today_line_width(),
        }
    }
}

/// Options recognized by `layout`, passed by value on every call.
///
/// This type is serializable so host applications can persist chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub axis_scale_format: AxisScaleFormat,
    #[serde(default)]
    pub heatmap_scale: ScaleKind,
    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    /// Major value-axis ticks including both ends.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_min_color")]
    pub min_color: Color,
    #[serde(default = "default_max_color")]
    pub max_color: Color,
    /// Overrides the kind's default stacked/grouped arrangement.
    #[serde(default)]
    pub category_layout: Option<CategoryLayoutMode>,
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default)]
    pub x_axis_title_style: TitleStyle,
    #[serde(default)]
    pub y_axis_title_style: TitleStyle,
    /// Font size of the axis titles and the colour legend title.
    #[serde(default = "default_axis_title_font_size")]
    pub axis_title_font_size: f64,
    #[serde(default)]
    pub label_locale: AxisLabelLocale,
    /// Treemap leaf and pie slice labels.
    #[serde(default = "default_true")]
    pub show_labels: bool,
    /// Donut hole as a fraction of the pie radius; `0` draws a full pie.
    #[serde(default)]
    pub pie_inner_radius_ratio: f64,
    #[serde(default)]
    pub heatmap_minor_tick_labels: bool,
    /// Heatmap gradient strip with its ticks and labels.
    #[serde(default = "default_true")]
    pub show_color_legend: bool,
    /// Drawn above the heatmap gradient strip.
    #[serde(default)]
    pub color_legend_title: Option<String>,
    #[serde(default)]
    pub color_legend_title_style: TitleStyle,
    #[serde(default)]
    pub scatter_log_x: bool,
    #[serde(default)]
    pub scatter_log_y: bool,
    #[serde(default)]
    pub gantt: GanttOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            legend_position: LegendPosition::default(),
            show_legend: true,
            axis_scale_format: AxisScaleFormat::default(),
            heatmap_scale: ScaleKind::default(),
            show_grid_lines: true,
            tick_count: default_tick_count(),
            min_color: default_min_color(),
            max_color: default_max_color(),
            category_layout: None,
            x_axis_title: None,
            y_axis_title: None,
            x_axis_title_style: TitleStyle::default(),
            y_axis_title_style: TitleStyle::default(),
            axis_title_font_size: default_axis_title_font_size(),
            label_locale: AxisLabelLocale::default(),
            show_labels: true,
            pie_inner_radius_ratio: 0.0,
            heatmap_minor_tick_labels: false,
            show_color_legend: true,
            color_legend_title: None,
            color_legend_title_style: TitleStyle::default(),
            scatter_log_x: false,
            scatter_log_y: false,
            gantt: GanttOptions::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_axis_scale_format(mut self, format: AxisScaleFormat) -> Self {
        self.axis_scale_format = format;
        self
    }

    #[must_use]
    pub fn with_category_layout(mut self, mode: CategoryLayoutMode) -> Self {
        self.category_layout = Some(mode);
        self
    }

    #[must_use]
    pub fn with_heatmap_scale(mut self, scale: ScaleKind) -> Self {
        self.heatmap_scale = scale;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = Some(x_axis_title.into());
        self.y_axis_title = Some(y_axis_title.into());
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.gantt.today = Some(today);
        self
    }

    #[must_use]
    pub fn with_color_legend_title(mut self, title: impl Into<String>) -> Self {
        self.color_legend_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_color_range(mut self, min_color: Color, max_color: Color) -> Self {
        self.min_color = min_color;
        self.max_color = max_color;
        self
    }

    #[must_use]
    pub fn scatter_scale_kinds(&self) -> (ScaleKind, ScaleKind) {
        let kind = |log: bool| {
            if log {
                ScaleKind::Logarithmic
            } else {
                ScaleKind::Linear
            }
        };
        (kind(self.scatter_log_x), kind(self.scatter_log_y))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tick_count < 2 {
            return Err(ChartError::InvalidConfig(format!(
                "tick_count must be >= 2, got {}",
                self.tick_count
            )));
        }
        if !self.axis_title_font_size.is_finite() || self.axis_title_font_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "axis_title_font_size must be finite and > 0".to_owned(),
            ));
        }
        if !self.pie_inner_radius_ratio.is_finite()
            || !(0.0..1.0).contains(&self.pie_inner_radius_ratio)
        {
            return Err(ChartError::InvalidConfig(
                "pie_inner_radius_ratio must be in [0, 1)".to_owned(),
            ));
        }
        if self.gantt.date_format.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "gantt date_format must not be empty".to_owned(),
            ));
        }
        if StrftimeItems::new(&self.gantt.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidConfig(format!(
                "gantt date_format `{}` is not a valid strftime pattern",
                self.gantt.date_format
            )));
        }
        if !self.gantt.today_line_width.is_finite() || self.gantt.today_line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "gantt today_line_width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses and validates a config document; missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_count() -> usize {
    6
}

fn default_gantt_tick_count() -> usize {
    5
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_owned()
}

fn default_today_line_color() -> Color {
    Color::RED
}

fn default_today_line_width() -> f64 {
    2.0
}

fn default_title_color() -> Color {
    Color::BLACK
}

fn default_title_alignment() -> TextHAlign {
    TextHAlign::Center
}

fn default_axis_title_font_size() -> f64 {
    12.0
}

fn default_min_color() -> Color {
    Color::LIGHT_BLUE
}

fn default_max_color() -> Color {
    Color::DARK_RED
}
