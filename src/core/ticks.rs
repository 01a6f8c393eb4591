use serde::{Deserialize, Serialize};

use crate::core::scale::{LOG_FLOOR, ScaleKind, normalize};

/// Labeled reference point on an axis or colour-legend gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    /// Pixel coordinate along the axis the tick was generated for.
    pub position: f64,
    pub is_major: bool,
}

/// Pixel extent of an axis. `start` receives the domain minimum, so a
/// vertical value axis passes its bottom edge as `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpan {
    pub start: f64,
    pub end: f64,
}

impl AxisSpan {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn position_of(self, t: f64) -> f64 {
        self.start + t * (self.end - self.start)
    }
}

/// Generates `major_count` evenly spaced majors (inclusive of both ends) and
/// `minor_per_segment` interpolated minors between each adjacent pair.
///
/// Logarithmic domains are spaced evenly in `log10` space. The returned list
/// is ordered by increasing value.
#[must_use]
pub fn generate_ticks(
    min: f64,
    max: f64,
    kind: ScaleKind,
    major_count: usize,
    minor_per_segment: usize,
    span: AxisSpan,
) -> Vec<Tick> {
    if major_count == 0 {
        return Vec::new();
    }

    let to_space = |value: f64| match kind {
        ScaleKind::Linear => value,
        ScaleKind::Logarithmic => value.max(LOG_FLOOR).log10(),
    };
    let from_space = |value: f64| match kind {
        ScaleKind::Linear => value,
        ScaleKind::Logarithmic => 10_f64.powf(value),
    };
    let lo = to_space(min);
    let hi = to_space(max);

    let mut ticks = Vec::with_capacity(major_count + (major_count - 1) * minor_per_segment);
    let place = |value: f64, is_major: bool| Tick {
        value,
        position: span.position_of(normalize(value, min, max, kind)),
        is_major,
    };

    if major_count == 1 {
        ticks.push(place(from_space(lo), true));
        return ticks;
    }

    let step = (hi - lo) / (major_count - 1) as f64;
    for index in 0..major_count {
        let major = lo + step * index as f64;
        ticks.push(place(from_space(major), true));

        if index + 1 < major_count {
            for minor in 1..=minor_per_segment {
                let offset = step * minor as f64 / (minor_per_segment + 1) as f64;
                ticks.push(place(from_space(major + offset), false));
            }
        }
    }

    ticks
}

const DECADE_TOLERANCE: f64 = 1e-12;

/// `multiplier * 10^decade`, dividing for negative decades so values such as
/// `0.3` come out as the nearest `f64` rather than `3.0 * 0.1`.
fn decade_multiple(multiplier: u8, decade: i32) -> f64 {
    let multiplier = f64::from(multiplier);
    if decade < 0 {
        multiplier / 10_f64.powi(-decade)
    } else {
        multiplier * 10_f64.powi(decade)
    }
}

/// Enumerates `i * 10^decade` for `i = 1..=9` across every decade touched by
/// the domain, keeping only values inside `[min, max]`.
///
/// Decade starts (`i == 1`) are major ticks.
#[must_use]
pub fn decade_ticks(min: f64, max: f64, span: AxisSpan) -> Vec<Tick> {
    let min = min.max(LOG_FLOOR);
    let max = max.max(LOG_FLOOR);
    let first_decade = min.log10().floor() as i32;
    let last_decade = max.log10().ceil() as i32;

    let lower = min * (1.0 - DECADE_TOLERANCE);
    let upper = max * (1.0 + DECADE_TOLERANCE);

    let mut ticks = Vec::new();
    for decade in first_decade..=last_decade {
        for multiplier in 1..=9_u8 {
            let value = decade_multiple(multiplier, decade);
            if value < lower || value > upper {
                continue;
            }
            ticks.push(Tick {
                value,
                position: span.position_of(normalize(value, min, max, ScaleKind::Logarithmic)),
                is_major: multiplier == 1,
            });
        }
    }
    ticks
}
