use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const STEEL_BLUE: Self = Self::rgb(70, 130, 180);
    pub const DARK_ORANGE: Self = Self::rgb(255, 140, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const DARK_RED: Self = Self::rgb(139, 0, 0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let channel = |index: usize| {
            digits
                .get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ChartError::InvalidData(format!("invalid hex color `{input}`")))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(ChartError::InvalidData(format!(
                "invalid hex color `{input}`"
            ))),
        }
    }

    /// Channel values scaled into `0.0..=1.0` for floating-point backends.
    #[must_use]
    pub fn to_unit_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            f64::from(self.alpha) / 255.0,
        )
    }
}

/// Per-channel linear blend `a + (b - a) * t`, truncated to 8 bits.
///
/// `t` is not clamped; channels saturate at the `u8` bounds instead. Alpha is
/// taken from `a`.
#[must_use]
pub fn interpolate(a: Color, b: Color, t: f64) -> Color {
    let blend = |from: u8, to: u8| {
        let from = f64::from(from);
        (from + (f64::from(to) - from) * t) as u8
    };
    Color::rgba(
        blend(a.red, b.red),
        blend(a.green, b.green),
        blend(a.blue, b.blue),
        a.alpha,
    )
}
