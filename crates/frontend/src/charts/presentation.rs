//! How each chart is drawn: shape, stacking, legend placement and the
//! formatting of ticks, tooltips and data labels.

use crate::shared::number_format::{
    format_compact_currency, format_count, format_currency, format_ratio_percent,
    format_share_percent, MillionsPrecision,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartShape {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// Unit of the plotted values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueScale {
    Currency(MillionsPrecision),
    Count,
    /// 0.25 means 25 %
    Ratio,
}

impl ValueScale {
    /// Compact text for axis ticks and data labels
    pub fn tick(&self, value: f64) -> String {
        match self {
            ValueScale::Currency(precision) => format_compact_currency(value, *precision),
            ValueScale::Count => format_count(value),
            ValueScale::Ratio => format_ratio_percent(value, 0),
        }
    }

    /// Full-precision text for tooltips
    pub fn full(&self, value: f64) -> String {
        match self {
            ValueScale::Currency(_) => format_currency(value),
            ValueScale::Count => format_count(value),
            ValueScale::Ratio => format_ratio_percent(value, 2),
        }
    }
}

pub const STACKED_LABEL_THRESHOLD: f64 = 10_000.0;

/// Which points carry a text label on the chart itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataLabelPolicy {
    Hidden,
    /// Compact value for every point except exact zeros
    NonZero,
    /// Compact value only when strictly above the threshold
    AboveThreshold(f64),
    /// First three letters of the series name, positive values only
    Abbreviation,
    /// Percentage of the series total, positive slices only
    Share,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPresentation {
    pub shape: ChartShape,
    pub stacked: bool,
    pub legend: LegendPosition,
    pub scale: ValueScale,
    pub data_labels: DataLabelPolicy,
}

impl ChartPresentation {
    pub fn tick(&self, value: f64) -> String {
        self.scale.tick(value)
    }

    pub fn tooltip(&self, series_label: &str, value: f64) -> String {
        if series_label.is_empty() {
            self.scale.full(value)
        } else {
            format!("{}: {}", series_label, self.scale.full(value))
        }
    }

    /// Slice tooltip: `"Recargo: $ 1.000 (25.0%)"`
    pub fn pie_tooltip(&self, label: &str, value: f64, total: f64) -> String {
        let share = if total > 0.0 {
            format_share_percent(value, total)
        } else {
            "0%".to_string()
        };
        format!("{}: {} ({})", label, self.scale.full(value), share)
    }

    /// Label drawn next to a point, bar segment or slice. `total` is only
    /// consulted by the share policy.
    pub fn data_label(&self, series_label: &str, value: f64, total: f64) -> Option<String> {
        match self.data_labels {
            DataLabelPolicy::Hidden => None,
            DataLabelPolicy::NonZero => (value != 0.0).then(|| self.tick(value)),
            DataLabelPolicy::AboveThreshold(threshold) => {
                (value > threshold).then(|| self.tick(value))
            }
            DataLabelPolicy::Abbreviation => (value > 0.0).then(|| {
                series_label
                    .chars()
                    .take(3)
                    .collect::<String>()
                    .to_uppercase()
            }),
            DataLabelPolicy::Share => {
                (value > 0.0 && total > 0.0).then(|| format_share_percent(value, total))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn billing() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Line,
            stacked: false,
            legend: LegendPosition::Top,
            scale: ValueScale::Currency(MillionsPrecision::Whole),
            data_labels: DataLabelPolicy::NonZero,
        }
    }

    #[test]
    fn test_tick_and_tooltip() {
        let p = billing();
        assert_eq!(p.tick(192494889.0), "$ 192 M");
        assert_eq!(p.tooltip("Facturación", 192494889.0), "Facturación: $ 192.494.889");
        assert_eq!(p.tooltip("", 1000.0), "$ 1.000");
    }

    #[test]
    fn test_non_zero_labels() {
        let p = billing();
        assert_eq!(p.data_label("Facturación", 0.0, 0.0), None);
        assert_eq!(p.data_label("Facturación", 1500.0, 0.0).as_deref(), Some("$ 2 K"));
    }

    #[test]
    fn test_threshold_labels() {
        let p = ChartPresentation {
            data_labels: DataLabelPolicy::AboveThreshold(STACKED_LABEL_THRESHOLD),
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            ..billing()
        };
        assert_eq!(p.data_label("Salario", 10_000.0, 0.0), None);
        assert_eq!(p.data_label("Salario", 2_500_000.0, 0.0).as_deref(), Some("$ 2.5 M"));
    }

    #[test]
    fn test_abbreviation_labels() {
        let p = ChartPresentation {
            data_labels: DataLabelPolicy::Abbreviation,
            ..billing()
        };
        assert_eq!(p.data_label("Bonificación", 12.0, 0.0).as_deref(), Some("BON"));
        assert_eq!(p.data_label("Extras", 0.0, 0.0), None);
        assert_eq!(p.data_label("Extras", -5.0, 0.0), None);
    }

    #[test]
    fn test_share_labels_and_pie_tooltip() {
        let p = ChartPresentation {
            shape: ChartShape::Pie,
            data_labels: DataLabelPolicy::Share,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            ..billing()
        };
        assert_eq!(p.data_label("Recargo", 25.0, 100.0).as_deref(), Some("25.0%"));
        assert_eq!(p.data_label("Recargo", 0.0, 100.0), None);
        assert_eq!(p.pie_tooltip("Recargo", 1000.0, 4000.0), "Recargo: $ 1.000 (25.0%)");
        assert_eq!(p.pie_tooltip("Recargo", 1000.0, 0.0), "Recargo: $ 1.000 (0%)");
    }

    #[test]
    fn test_count_and_ratio_scales() {
        assert_eq!(ValueScale::Count.tick(1500.0), "1.500");
        assert_eq!(ValueScale::Ratio.tick(0.25), "25 %");
        assert_eq!(ValueScale::Ratio.full(0.1234), "12.34 %");
    }
}
