//! Plot geometry shared by the line and bar charts.

use contracts::charts::ChartData;

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 76.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 72.0;
const TARGET_TICKS: f64 = 5.0;
const MAX_TICKS: usize = 20;

/// Maps category indexes and values to SVG coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub categories: usize,
}

/// SVG coordinate attribute
pub fn px(value: f64) -> String {
    format!("{:.1}", value)
}

/// 1, 2 or 5 times a power of ten, at least `raw`
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Value range that includes zero; stacked charts use per-period sums
pub fn value_range(data: &ChartData, stacked: bool) -> (f64, f64) {
    let (mut lo, mut hi) = (0.0f64, 0.0f64);
    if stacked {
        for (pos, neg) in data.stacked_extents() {
            hi = hi.max(pos);
            lo = lo.min(neg);
        }
    } else {
        for v in data.series.iter().flat_map(|s| s.data.iter()) {
            if v.is_finite() {
                hi = hi.max(*v);
                lo = lo.min(*v);
            }
        }
    }
    (lo, hi)
}

impl ChartFrame {
    pub fn new(data: &ChartData, stacked: bool) -> Self {
        let (lo, hi) = match value_range(data, stacked) {
            (lo, hi) if lo.is_finite() && hi.is_finite() => (lo, hi),
            _ => (0.0, 0.0),
        };
        let span = if hi > lo { (hi - lo).min(f64::MAX) } else { 1.0 };
        let step = nice_step(span / TARGET_TICKS);
        let mut min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        // rounding out to a whole step can overflow near f64::MAX
        if !min.is_finite() {
            min = lo;
        }
        if !max.is_finite() {
            max = hi;
        }
        if max <= min {
            max = min + step;
        }
        Self {
            min,
            max,
            step,
            categories: data.labels.len(),
        }
    }

    pub fn plot_left(&self) -> f64 {
        MARGIN_LEFT
    }

    pub fn plot_right(&self) -> f64 {
        WIDTH - MARGIN_RIGHT
    }

    pub fn plot_top(&self) -> f64 {
        MARGIN_TOP
    }

    pub fn plot_bottom(&self) -> f64 {
        HEIGHT - MARGIN_BOTTOM
    }

    pub fn y(&self, value: f64) -> f64 {
        let height = self.plot_bottom() - self.plot_top();
        self.plot_bottom() - (value - self.min) / (self.max - self.min) * height
    }

    /// y of the zero line, clamped into the plot
    pub fn baseline(&self) -> f64 {
        self.y(0.0f64.clamp(self.min, self.max))
    }

    /// Width of one category slot
    pub fn band(&self) -> f64 {
        (self.plot_right() - self.plot_left()) / self.categories.max(1) as f64
    }

    /// Horizontal center of a category
    pub fn x(&self, index: usize) -> f64 {
        self.plot_left() + self.band() * (index as f64 + 0.5)
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round();
        if !count.is_finite() || count > MAX_TICKS as f64 {
            return vec![self.min, self.max];
        }
        (0..=count as usize).map(|i| self.min + self.step * i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::charts::{ChartSeries, SeriesStyle};

    fn data(series: Vec<Vec<f64>>) -> ChartData {
        let len = series.first().map(|s| s.len()).unwrap_or(0);
        ChartData {
            labels: (0..len).map(|i| format!("P{}", i)).collect(),
            series: series
                .into_iter()
                .map(|d| ChartSeries {
                    label: "S".into(),
                    data: d,
                    style: SeriesStyle::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.8), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(38_498_977.8), 50_000_000.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn test_range_starts_at_zero() {
        let frame = ChartFrame::new(&data(vec![vec![192494889.0, 150000000.0]]), false);
        assert_eq!(frame.min, 0.0);
        assert_eq!(frame.max, 200_000_000.0);
        assert_eq!(frame.ticks().len(), 5);
    }

    #[test]
    fn test_stacked_range_uses_totals() {
        let d = data(vec![vec![60.0, 10.0], vec![50.0, 10.0]]);
        assert_eq!(value_range(&d, false), (0.0, 60.0));
        assert_eq!(value_range(&d, true), (0.0, 110.0));
    }

    #[test]
    fn test_negative_values_extend_below_zero() {
        let frame = ChartFrame::new(&data(vec![vec![-0.05, 0.2]]), false);
        assert!(frame.min < 0.0);
        assert!(frame.baseline() < frame.plot_bottom());
        assert!(frame.y(0.2) < frame.baseline());
    }

    #[test]
    fn test_all_zero_values_still_have_a_range() {
        let frame = ChartFrame::new(&data(vec![vec![0.0, 0.0]]), false);
        assert!(frame.max > frame.min);
        assert_eq!(frame.baseline(), frame.plot_bottom());
    }

    #[test]
    fn test_infinite_stacked_value_keeps_a_finite_frame() {
        let frame = ChartFrame::new(&data(vec![vec![f64::INFINITY, 3.0], vec![2.0, 1.0]]), true);
        assert!(frame.min.is_finite() && frame.max.is_finite());
        assert!(frame.ticks().len() <= MAX_TICKS + 1);
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        let frame = ChartFrame::new(&data(vec![vec![f64::MAX, -f64::MAX]]), false);
        assert!(frame.min.is_finite() && frame.max.is_finite());
        assert!(frame.max > frame.min);
        assert!(frame.ticks().len() <= MAX_TICKS + 1);
    }

    #[test]
    fn test_tick_count_is_capped() {
        let frame = ChartFrame {
            min: 0.0,
            max: 1e12,
            step: 1.0,
            categories: 1,
        };
        assert_eq!(frame.ticks(), vec![0.0, 1e12]);
    }

    #[test]
    fn test_category_centers() {
        let frame = ChartFrame::new(&data(vec![vec![1.0, 2.0]]), false);
        let band = frame.band();
        assert_eq!(frame.x(0), frame.plot_left() + band / 2.0);
        assert_eq!(frame.x(1), frame.plot_left() + band * 1.5);
    }
}
