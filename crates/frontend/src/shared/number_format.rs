//! Number formatting for chart ticks, data labels and tooltips.
//!
//! Follows the `es-CO` conventions the reports are read in: `.` groups
//! thousands and `,` separates decimals. The one exception is the one-decimal
//! millions label (`"$ 1.5 M"`), which keeps a `.` decimal point.

/// How the "M" suffix renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MillionsPrecision {
    /// Integer part only: 192 494 889 -> "$ 192 M"
    Whole,
    /// One decimal: 192 494 889 -> "$ 192.5 M"
    OneDecimal,
}

/// Inserts `separator` every 3 digits from the right of an unsigned digit string
pub fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Rounds ties away from zero, the way the browser's `toFixed` does;
/// `{:.N}` alone would round them to even.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Grouped number with at most `max_decimals` fraction digits (trailing zeros dropped)
fn format_grouped(value: f64, max_decimals: usize) -> String {
    let negative = value < 0.0;
    let rounded = round_to(value.abs(), max_decimals);
    let fixed = format!("{:.*}", max_decimals, rounded);

    let (integer_part, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = group_thousands(integer_part, '.');
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    if negative && rounded != 0.0 {
        out.insert(0, '-');
    }
    out
}

/// Compact currency with K/M suffix, used for axis ticks and data labels.
/// Negative values put the sign before the currency symbol ("-$ 2.5 M").
pub fn format_compact_currency(value: f64, precision: MillionsPrecision) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1_000_000.0 {
        let millions = abs / 1_000_000.0;
        let text = match precision {
            MillionsPrecision::Whole => format_grouped(millions.floor(), 0),
            MillionsPrecision::OneDecimal => format!("{:.1}", round_to(millions, 1)),
        };
        return format!("{}$ {} M", sign, text);
    }
    if abs >= 1_000.0 {
        return format!("{}$ {} K", sign, format_grouped((abs / 1_000.0).round(), 0));
    }
    format!("{}$ {}", sign, format_grouped(abs, 3))
}

/// Full COP amount without decimals, used in tooltips
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let sign = if value < 0.0 && value.abs().round() != 0.0 { "-" } else { "" };
    format!("{}$ {}", sign, format_grouped(value.abs(), 0))
}

/// Head counts and other plain quantities
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format_grouped(value, 3)
}

/// Ratio shown as a percentage: 0.1234 -> "12.34 %"
pub fn format_ratio_percent(ratio: f64, decimals: usize) -> String {
    if !ratio.is_finite() {
        return "-".to_string();
    }
    format!("{:.*} %", decimals, round_to(ratio * 100.0, decimals))
}

/// Share of a total with one decimal: (25, 100) -> "25.0%"; empty when the total is 0
pub fn format_share_percent(value: f64, total: f64) -> String {
    if total == 0.0 || !total.is_finite() || !value.is_finite() {
        return String::new();
    }
    format!("{:.1}%", round_to(value / total * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("192494889", '.'), "192.494.889");
        assert_eq!(group_thousands("1500", '.'), "1.500");
        assert_eq!(group_thousands("999", '.'), "999");
        assert_eq!(group_thousands("", '.'), "");
    }

    #[test]
    fn test_millions_whole() {
        assert_eq!(format_compact_currency(192494889.0, MillionsPrecision::Whole), "$ 192 M");
        assert_eq!(format_compact_currency(1500000.0, MillionsPrecision::Whole), "$ 1 M");
        assert_eq!(
            format_compact_currency(2_345_000_000.0, MillionsPrecision::Whole),
            "$ 2.345 M"
        );
    }

    #[test]
    fn test_millions_one_decimal() {
        assert_eq!(format_compact_currency(1500000.0, MillionsPrecision::OneDecimal), "$ 1.5 M");
        assert_eq!(
            format_compact_currency(192494889.0, MillionsPrecision::OneDecimal),
            "$ 192.5 M"
        );
    }

    // Billing keeps the integer part while the payroll family shows one
    // decimal. Both renderings of the same value are pinned here so a change
    // to either is deliberate.
    #[test]
    fn test_millions_precision_differs_between_charts() {
        let whole = format_compact_currency(1500000.0, MillionsPrecision::Whole);
        let one_decimal = format_compact_currency(1500000.0, MillionsPrecision::OneDecimal);
        assert_ne!(whole, one_decimal);
    }

    #[test]
    fn test_thousands_and_small_values() {
        assert_eq!(format_compact_currency(1000.0, MillionsPrecision::Whole), "$ 1 K");
        assert_eq!(format_compact_currency(15_600.0, MillionsPrecision::Whole), "$ 16 K");
        assert_eq!(format_compact_currency(999_999.0, MillionsPrecision::Whole), "$ 1.000 K");
        assert_eq!(format_compact_currency(950.0, MillionsPrecision::Whole), "$ 950");
        assert_eq!(format_compact_currency(12.5, MillionsPrecision::Whole), "$ 12,5");
        assert_eq!(format_compact_currency(0.0, MillionsPrecision::Whole), "$ 0");
    }

    #[test]
    fn test_negative_values_keep_sign_before_currency() {
        assert_eq!(format_compact_currency(-2_500_000.0, MillionsPrecision::OneDecimal), "-$ 2.5 M");
        assert_eq!(format_compact_currency(-3_000.0, MillionsPrecision::Whole), "-$ 3 K");
        assert_eq!(format_compact_currency(-5.0, MillionsPrecision::Whole), "-$ 5");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_compact_currency(f64::NAN, MillionsPrecision::Whole), "-");
        assert_eq!(format_currency(f64::INFINITY), "-");
        assert_eq!(format_count(f64::NAN), "-");
    }

    #[test]
    fn test_full_currency_and_counts() {
        assert_eq!(format_currency(192494889.0), "$ 192.494.889");
        assert_eq!(format_currency(-1234.4), "-$ 1.234");
        assert_eq!(format_count(1500.0), "1.500");
        assert_eq!(format_count(-42.0), "-42");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_ratio_percent(0.1234, 2), "12.34 %");
        assert_eq!(format_ratio_percent(0.25, 0), "25 %");
        assert_eq!(format_share_percent(25.0, 100.0), "25.0%");
        assert_eq!(format_share_percent(1.0, 3.0), "33.3%");
        assert_eq!(format_share_percent(5.0, 0.0), "");
    }

    #[test]
    fn test_exact_halves_round_up() {
        assert_eq!(format_compact_currency(1_250_000.0, MillionsPrecision::OneDecimal), "$ 1.3 M");
        assert_eq!(format_compact_currency(-1_250_000.0, MillionsPrecision::OneDecimal), "-$ 1.3 M");
        assert_eq!(format_ratio_percent(0.125, 0), "13 %");
        assert_eq!(format_share_percent(1.0, 16.0), "6.3%");
    }
}
