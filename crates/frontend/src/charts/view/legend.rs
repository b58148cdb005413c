use contracts::charts::ChartData;
use leptos::prelude::*;

use crate::charts::presentation::ChartShape;

/// (label, color) pairs: one per series, or one per slice for pies
pub fn legend_entries(data: &ChartData, shape: ChartShape) -> Vec<(String, String)> {
    match (shape, data.series.first()) {
        (ChartShape::Pie, Some(series)) => data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = series
                    .style
                    .slice_colors
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| series.style.fill_color.clone());
                (label.clone(), color)
            })
            .collect(),
        _ => data
            .series
            .iter()
            .map(|s| (s.label.clone(), s.style.border_color.clone()))
            .collect(),
    }
}

#[component]
pub fn Legend(entries: Vec<(String, String)>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <li class="chart-legend__item">
                            <span class="chart-legend__swatch" style=format!("background:{}", color)></span>
                            {label}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::charts::{ChartSeries, SeriesStyle};

    #[test]
    fn test_pie_legend_lists_slices() {
        let data = ChartData {
            labels: vec!["Recargo".into(), "Extras".into()],
            series: vec![ChartSeries {
                label: "Total".into(),
                data: vec![1.0, 2.0],
                style: SeriesStyle::default().with_slices(vec!["red".into(), "blue".into()]),
            }],
        };

        assert_eq!(
            legend_entries(&data, ChartShape::Pie),
            vec![("Recargo".to_string(), "red".to_string()), ("Extras".to_string(), "blue".to_string())]
        );
        assert_eq!(legend_entries(&data, ChartShape::Bar), vec![("Total".to_string(), String::new())]);
    }
}
