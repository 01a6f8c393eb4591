use serde::{Deserialize, Serialize};

/// Locale preset used by axis label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    /// Comma decimal separator.
    DeDe,
}

/// Value-axis number style for category charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisScaleFormat {
    /// Whole numbers: `1250`.
    #[default]
    Number,
    /// Thousands abbreviated: `1.3k`.
    NumberK,
    /// Millions abbreviated, thousands as `k`: `1.25M`.
    NumberM,
    /// Fraction shown as percent: `0.25` -> `25 %`.
    Percent,
}
