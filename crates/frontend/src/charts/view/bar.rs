use contracts::charts::ChartData;
use leptos::prelude::*;

use super::axes::Axes;
use super::frame::{px, ChartFrame, HEIGHT, WIDTH};
use crate::charts::presentation::ChartPresentation;

/// One drawn rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

/// Side-by-side bars, one slot per series inside each category band
pub fn grouped_bars(data: &ChartData, frame: &ChartFrame) -> Vec<BarRect> {
    let count = data.series.len().max(1) as f64;
    let group = frame.band() * 0.8;
    let width = group / count;
    let baseline = frame.baseline();

    let mut bars = Vec::new();
    for (si, series) in data.series.iter().enumerate() {
        for (ci, value) in series.data.iter().enumerate() {
            let x = frame.x(ci) - group / 2.0 + width * si as f64;
            let top = frame.y(*value);
            bars.push(BarRect {
                series: si,
                category: ci,
                x,
                y: top.min(baseline),
                width,
                height: (baseline - top).abs(),
                value: *value,
            });
        }
    }
    bars
}

/// Segments piled on each other; positives grow up, negatives down
pub fn stacked_bars(data: &ChartData, frame: &ChartFrame) -> Vec<BarRect> {
    let width = frame.band() * 0.6;
    let mut positive = vec![0.0f64; data.labels.len()];
    let mut negative = vec![0.0f64; data.labels.len()];

    let mut bars = Vec::new();
    for (si, series) in data.series.iter().enumerate() {
        for (ci, value) in series.data.iter().enumerate().take(data.labels.len()) {
            let running = if *value >= 0.0 {
                &mut positive[ci]
            } else {
                &mut negative[ci]
            };
            let start = *running;
            let end = start + value;
            *running = end;

            let (y_start, y_end) = (frame.y(start), frame.y(end));
            bars.push(BarRect {
                series: si,
                category: ci,
                x: frame.x(ci) - width / 2.0,
                y: y_start.min(y_end),
                width,
                height: (y_start - y_end).abs(),
                value: *value,
            });
        }
    }
    bars
}

#[component]
pub fn BarChart(data: ChartData, presentation: ChartPresentation) -> impl IntoView {
    let frame = ChartFrame::new(&data, presentation.stacked);
    let bars = if presentation.stacked {
        stacked_bars(&data, &frame)
    } else {
        grouped_bars(&data, &frame)
    };

    let rects = bars
        .into_iter()
        .map(|bar| {
            let series = &data.series[bar.series];
            let label = presentation
                .data_label(&series.label, bar.value, 0.0)
                .map(|text| {
                    let (x, y) = if presentation.stacked {
                        (bar.x + bar.width / 2.0, bar.y + bar.height / 2.0 + 4.0)
                    } else {
                        (bar.x + bar.width / 2.0, bar.y - 6.0)
                    };
                    view! {
                        <text x=px(x) y=px(y) text-anchor="middle" class="chart-data-label">
                            {text}
                        </text>
                    }
                });
            view! {
                <rect
                    x=px(bar.x)
                    y=px(bar.y)
                    width=px(bar.width)
                    height=px(bar.height)
                    fill=series.style.fill_color.clone()
                    stroke=series.style.border_color.clone()
                    class="chart-bar"
                >
                    <title>{presentation.tooltip(&series.label, bar.value)}</title>
                </rect>
                {label}
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
            <Axes frame=frame.clone() labels=data.labels.clone() presentation=presentation />
            <g class="chart-bars">{rects}</g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::charts::{ChartSeries, SeriesStyle};

    fn data() -> ChartData {
        let series = |label: &str, data: Vec<f64>| ChartSeries {
            label: label.into(),
            data,
            style: SeriesStyle::default(),
        };
        ChartData {
            labels: vec!["Ene".into(), "Feb".into()],
            series: vec![series("A", vec![40.0, 10.0]), series("B", vec![60.0, -10.0])],
        }
    }

    #[test]
    fn test_stacked_segments_pile_up() {
        let d = data();
        let frame = ChartFrame::new(&d, true);
        let bars = stacked_bars(&d, &frame);

        let a_jan = &bars[0];
        let b_jan = &bars[2];
        // B sits directly on top of A
        assert!((b_jan.y + b_jan.height - a_jan.y).abs() < 1e-9);
        assert!((frame.y(100.0) - b_jan.y).abs() < 1e-9);

        // negative segment hangs below the baseline
        let b_feb = &bars[3];
        assert!((b_feb.y - frame.baseline()).abs() < 1e-9);
    }

    #[test]
    fn test_grouped_bars_share_the_band() {
        let d = data();
        let frame = ChartFrame::new(&d, false);
        let bars = grouped_bars(&d, &frame);

        assert_eq!(bars.len(), 4);
        let a_jan = &bars[0];
        let b_jan = &bars[2];
        assert!((b_jan.x - (a_jan.x + a_jan.width)).abs() < 1e-9);
        assert!(b_jan.height > a_jan.height);
    }
}
