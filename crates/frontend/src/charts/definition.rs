use contracts::charts::{ChartData, ChartFilter, ChartSeries, FilterField, SeriesStyle, PERIOD_RANGE};
use serde::de::DeserializeOwned;

use super::presentation::ChartPresentation;

/// One chart: where its data lives, which filters it needs, how the response
/// becomes series and how the series are drawn
pub trait ChartDefinition: 'static {
    type Response: DeserializeOwned + 'static;

    /// Stable identifier used in logs
    const KEY: &'static str;
    const TITLE: &'static str;
    /// Path segment under `/api/graficos/`
    const ENDPOINT: &'static str;
    const REQUIRED: &'static [FilterField] = PERIOD_RANGE;

    const INCOMPLETE_MESSAGE: &'static str = "Seleccione un Centro, Año y Rango de Meses.";
    const EMPTY_MESSAGE: &'static str = "No hay datos para este Centro/Período.";
    const FAILURE_MESSAGE: &'static str;

    fn transform(response: Self::Response) -> ChartData;

    fn presentation() -> ChartPresentation;

    /// Card heading for the current filter
    fn heading(_filter: &ChartFilter) -> String {
        Self::TITLE.to_string()
    }
}

/// Maps one numeric field of a row type to a named series
pub struct Column<R> {
    pub label: &'static str,
    pub value: fn(&R) -> f64,
    pub style: SeriesStyle,
}

impl<R> Column<R> {
    pub fn new(label: &'static str, value: fn(&R) -> f64, style: SeriesStyle) -> Self {
        Self { label, value, style }
    }
}

/// Builds a chart from per-period rows: one label per row, one series per column
pub fn series_from_rows<R>(
    rows: &[R],
    period: fn(&R) -> &str,
    columns: Vec<Column<R>>,
) -> ChartData {
    let labels = rows.iter().map(|r| period(r).to_string()).collect();
    let series = columns
        .into_iter()
        .map(|column| ChartSeries {
            label: column.label.to_string(),
            data: rows.iter().map(column.value).collect(),
            style: column.style,
        })
        .collect();

    ChartData { labels, series }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        period: String,
        a: f64,
        b: f64,
    }

    #[test]
    fn test_series_from_rows_keeps_order() {
        let rows = vec![
            Row { period: "Ene".into(), a: 1.0, b: 10.0 },
            Row { period: "Feb".into(), a: 2.0, b: 20.0 },
        ];
        let data = series_from_rows(
            &rows,
            |r| r.period.as_str(),
            vec![
                Column::new("A", |r| r.a, SeriesStyle::default()),
                Column::new("B", |r| r.b, SeriesStyle::default()),
            ],
        );

        assert_eq!(data.labels, vec!["Ene", "Feb"]);
        assert_eq!(data.series[0].label, "A");
        assert_eq!(data.series[0].data, vec![1.0, 2.0]);
        assert_eq!(data.series[1].data, vec![10.0, 20.0]);
    }

    #[test]
    fn test_series_from_no_rows_is_empty() {
        let rows: Vec<Row> = Vec::new();
        let data = series_from_rows(
            &rows,
            |r| r.period.as_str(),
            vec![Column::new("A", |r| r.a, SeriesStyle::default())],
        );
        assert!(data.is_empty());
    }
}
