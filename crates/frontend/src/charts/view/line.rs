use contracts::charts::ChartData;
use leptos::prelude::*;

use super::axes::Axes;
use super::frame::{px, ChartFrame, HEIGHT, WIDTH};
use crate::charts::presentation::ChartPresentation;

/// `M x y L x y ...` through the given points
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{} {:.1} {:.1}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path between the line and the baseline
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some((first_x, _)), Some((last_x, _))) => format!(
            "{} L {:.1} {:.1} L {:.1} {:.1} Z",
            line_path(points),
            last_x,
            baseline,
            first_x,
            baseline
        ),
        _ => String::new(),
    }
}

#[component]
pub fn LineChart(data: ChartData, presentation: ChartPresentation) -> impl IntoView {
    let frame = ChartFrame::new(&data, false);
    let baseline = frame.baseline();

    let series = data
        .series
        .iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .data
                .iter()
                .enumerate()
                .map(|(i, v)| (frame.x(i), frame.y(*v)))
                .collect();
            let area = s.style.fill.then(|| {
                view! { <path d=area_path(&points, baseline) fill=s.style.fill_color.clone() stroke="none" /> }
            });

            let markers = s
                .data
                .iter()
                .zip(points.iter())
                .map(|(value, (x, y))| {
                    let label = presentation.data_label(&s.label, *value, 0.0).map(|text| {
                        view! {
                            <text x=px(*x) y=px(y - 10.0) text-anchor="middle" class="chart-data-label">
                                {text}
                            </text>
                        }
                    });
                    view! {
                        <circle cx=px(*x) cy=px(*y) r="4" fill=s.style.border_color.clone() class="chart-point">
                            <title>{presentation.tooltip(&s.label, *value)}</title>
                        </circle>
                        {label}
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <g class="chart-series">
                    {area}
                    <path
                        d=line_path(&points)
                        fill="none"
                        stroke=s.style.border_color.clone()
                        stroke-width="2"
                    />
                    {markers}
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
            <Axes frame=frame.clone() labels=data.labels.clone() presentation=presentation />
            {series}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_path() {
        assert_eq!(line_path(&[(1.0, 2.0), (3.0, 4.5)]), "M 1.0 2.0 L 3.0 4.5");
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        assert_eq!(
            area_path(&[(10.0, 5.0), (20.0, 8.0)], 100.0),
            "M 10.0 5.0 L 20.0 8.0 L 20.0 100.0 L 10.0 100.0 Z"
        );
        assert_eq!(area_path(&[], 100.0), "");
    }
}
