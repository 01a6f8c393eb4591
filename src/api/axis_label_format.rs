use std::fmt::Write;

use chrono::NaiveDateTime;

use super::{AxisLabelLocale, AxisScaleFormat};

/// Up to `max_decimals` decimals with trailing zeros dropped (`0.##` style).
pub(crate) fn format_trimmed(value: f64, max_decimals: usize, locale: AxisLabelLocale) -> String {
    let mut text = format!("{value:.max_decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    localize(text, locale)
}

fn localize(text: String, locale: AxisLabelLocale) -> String {
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::DeDe => text.replace('.', ","),
    }
}

/// Value-axis label for category charts.
pub(crate) fn format_scaled_value(
    value: f64,
    format: AxisScaleFormat,
    locale: AxisLabelLocale,
) -> String {
    let thousands = |value: f64| {
        if value.abs() >= 1_000.0 {
            format!("{}k", format_trimmed(value / 1_000.0, 1, locale))
        } else {
            format_trimmed(value, 0, locale)
        }
    };
    match format {
        AxisScaleFormat::Number => format_trimmed(value, 0, locale),
        AxisScaleFormat::NumberK => thousands(value),
        AxisScaleFormat::NumberM => {
            if value.abs() >= 1_000_000.0 {
                format!("{}M", format_trimmed(value / 1_000_000.0, 2, locale))
            } else {
                thousands(value)
            }
        }
        AxisScaleFormat::Percent => format!("{} %", format_trimmed(value * 100.0, 1, locale)),
    }
}

/// Scientific notation with up to three mantissa decimals: `1.235E+4`.
pub(crate) fn format_scientific(value: f64, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0E+0".to_owned();
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = (value / 10_f64.powi(exponent) * 1_000.0).round() / 1_000.0;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}E{sign}{}",
        format_trimmed(mantissa, 3, locale),
        exponent.unsigned_abs()
    )
}

pub(crate) const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date label rendered with a `chrono` strftime pattern. A pattern chrono
/// cannot render falls back to ISO dates instead of failing.
pub(crate) fn format_date_label(at: NaiveDateTime, pattern: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", at.format(pattern)).is_err() {
        label.clear();
        let _ = write!(label, "{}", at.format(FALLBACK_DATE_FORMAT));
    }
    label
}
