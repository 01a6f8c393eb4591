use serde::{Deserialize, Serialize};

/// Smallest value accepted by logarithmic mapping; anything lower is clamped.
pub const LOG_FLOOR: f64 = 1e-6;

/// Domains narrower than this are widened to `min + 1`.
pub const DEGENERATE_SPAN_EPSILON: f64 = 1e-4;

/// Mapping applied between data values and the normalized `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw value units.
    #[default]
    Linear,
    /// Uniform spacing in `log10` units; values <= 0 are clamped to [`LOG_FLOOR`].
    Logarithmic,
}

/// Value domain derived from a dataset for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub kind: ScaleKind,
    pub domain_min: f64,
    pub domain_max: f64,
}

impl Scale {
    /// Creates a scale from explicit bounds without any correction.
    #[must_use]
    pub const fn new(kind: ScaleKind, domain_min: f64, domain_max: f64) -> Self {
        Self {
            kind,
            domain_min,
            domain_max,
        }
    }

    /// Creates a scale whose degenerate domain is widened to `min + 1`.
    ///
    /// Logarithmic scales additionally lift both bounds to [`LOG_FLOOR`].
    #[must_use]
    pub fn fitted(kind: ScaleKind, domain_min: f64, domain_max: f64) -> Self {
        let (mut min, mut max) = match kind {
            ScaleKind::Linear => (domain_min, domain_max),
            ScaleKind::Logarithmic => (domain_min.max(LOG_FLOOR), domain_max.max(LOG_FLOOR)),
        };
        if max < min {
            std::mem::swap(&mut min, &mut max);
        }
        let (min, max) = widen_degenerate(min, max);
        Self::new(kind, min, max)
    }

    /// Fits a scale over every finite value; returns `None` when there is none.
    pub fn from_values<I>(kind: ScaleKind, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }
        if min > max {
            return None;
        }
        Some(Self::fitted(kind, min, max))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        normalize(value, self.domain_min, self.domain_max, self.kind)
    }

    #[must_use]
    pub fn denormalize(self, t: f64) -> f64 {
        denormalize(t, self.domain_min, self.domain_max, self.kind)
    }
}

/// Widens a degenerate domain so that callers never divide by zero.
#[must_use]
pub fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < DEGENERATE_SPAN_EPSILON {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

/// Maps `value` into the normalized fraction of `[min, max]`.
///
/// Values outside the domain are not clamped so overshoot stays visible.
/// A zero-width domain yields `0.0`.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64, kind: ScaleKind) -> f64 {
    let (value, min, max) = match kind {
        ScaleKind::Linear => (value, min, max),
        ScaleKind::Logarithmic => (
            value.max(LOG_FLOOR).log10(),
            min.max(LOG_FLOOR).log10(),
            max.max(LOG_FLOOR).log10(),
        ),
    };
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    (value - min) / span
}

/// Inverse of [`normalize`]; a zero-width domain yields `min`.
#[must_use]
pub fn denormalize(t: f64, min: f64, max: f64, kind: ScaleKind) -> f64 {
    match kind {
        ScaleKind::Linear => {
            if max == min {
                return min;
            }
            min + t * (max - min)
        }
        ScaleKind::Logarithmic => {
            let log_min = min.max(LOG_FLOOR).log10();
            let log_max = max.max(LOG_FLOOR).log10();
            if log_max == log_min {
                return min.max(LOG_FLOOR);
            }
            10_f64.powf(log_min + t * (log_max - log_min))
        }
    }
}
