use std::f64::consts::PI;

use contracts::charts::ChartData;
use leptos::prelude::*;

use super::frame::px;
use crate::charts::presentation::ChartPresentation;

const SIZE: f64 = 320.0;
const RADIUS: f64 = 140.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub value: f64,
}

/// Angles in radians, clockwise from twelve o'clock. Non-positive values get
/// no slice.
pub fn slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, value)| {
            let start = angle;
            angle += value / total * 2.0 * PI;
            Slice {
                index,
                start,
                end: angle,
                value: *value,
            }
        })
        .collect()
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center + radius * angle.sin())
}

pub fn slice_path(slice: &Slice, center: f64, radius: f64) -> String {
    let (x1, y1) = point(center, radius, slice.start);
    let (x2, y2) = point(center, radius, slice.end);
    let large_arc = if slice.end - slice.start > PI { 1 } else { 0 };
    format!(
        "M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 {} 1 {:.1} {:.1} Z",
        center, center, x1, y1, radius, radius, large_arc, x2, y2
    )
}

#[component]
pub fn PieChart(data: ChartData, presentation: ChartPresentation) -> impl IntoView {
    let center = SIZE / 2.0;
    let Some(series) = data.series.first().cloned() else {
        return view! { <svg class="chart-svg chart-svg--pie"></svg> }.into_any();
    };
    let total = series.data.iter().filter(|v| **v > 0.0).sum::<f64>();
    let parts = slices(&series.data);
    let single = parts.len() == 1;

    let shapes = parts
        .into_iter()
        .map(|slice| {
            let label = data.labels.get(slice.index).cloned().unwrap_or_default();
            let color = series
                .style
                .slice_colors
                .get(slice.index)
                .cloned()
                .unwrap_or_else(|| series.style.fill_color.clone());
            let tooltip = presentation.pie_tooltip(&label, slice.value, total);
            let shape = if single {
                view! {
                    <circle cx=px(center) cy=px(center) r=px(RADIUS) fill=color stroke=series.style.border_color.clone()>
                        <title>{tooltip}</title>
                    </circle>
                }
                .into_any()
            } else {
                view! {
                    <path d=slice_path(&slice, center, RADIUS) fill=color stroke=series.style.border_color.clone()>
                        <title>{tooltip}</title>
                    </path>
                }
                .into_any()
            };

            let (lx, ly) = point(center, RADIUS * 0.65, (slice.start + slice.end) / 2.0);
            let text = presentation.data_label(&label, slice.value, total).map(|text| {
                view! {
                    <text x=px(lx) y=px(ly + 4.0) text-anchor="middle" class="chart-data-label chart-data-label--pie">
                        {text}
                    </text>
                }
            });
            view! { {shape} {text} }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart-svg chart-svg--pie" viewBox=format!("0 0 {} {}", SIZE, SIZE) preserveAspectRatio="xMidYMid meet">
            {shapes}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_cover_full_circle() {
        let parts = slices(&[1.0, 3.0]);
        assert_eq!(parts.len(), 2);
        assert!((parts[0].start + PI / 2.0).abs() < 1e-9);
        assert!((parts[0].end - parts[0].start - PI / 2.0).abs() < 1e-9);
        assert!((parts[1].end - (1.5 * PI)).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_values_have_no_slice() {
        let parts = slices(&[0.0, 2.0, -1.0, 2.0]);
        let indexes: Vec<usize> = parts.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![1, 3]);
        assert!(slices(&[0.0, -3.0]).is_empty());
    }

    #[test]
    fn test_large_arc_flag() {
        let parts = slices(&[3.0, 1.0]);
        assert!(slice_path(&parts[0], 160.0, 140.0).contains(" 0 1 1 "));
        assert!(slice_path(&parts[1], 160.0, 140.0).contains(" 0 0 1 "));
    }
}
