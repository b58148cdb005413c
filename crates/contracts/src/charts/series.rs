use serde::{Deserialize, Serialize};

/// Colors used to paint one series (or every slice of a pie)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub border_color: String,
    pub fill_color: String,
    /// Fill the area under a line
    pub fill: bool,
    /// One color per slice, pie charts only
    #[serde(default)]
    pub slice_colors: Vec<String>,
}

impl SeriesStyle {
    /// Solid border with a translucent fill of the same color
    pub fn rgb(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            border_color: format!("rgb({}, {}, {})", r, g, b),
            fill_color: format!("rgba({}, {}, {}, {})", r, g, b, alpha),
            fill: false,
            slice_colors: Vec::new(),
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn with_slices(mut self, colors: Vec<String>) -> Self {
        self.slice_colors = colors;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    /// Values aligned by position with `ChartData::labels`
    pub data: Vec<f64>,
    pub style: SeriesStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.data.is_empty())
    }

    /// Sum of one series, used for pie percentages
    pub fn series_total(&self, index: usize) -> f64 {
        self.series
            .get(index)
            .map(|s| s.data.iter().sum())
            .unwrap_or(0.0)
    }

    /// Per-period (positive, negative) sums across all series, for stacked bars
    pub fn stacked_extents(&self) -> Vec<(f64, f64)> {
        (0..self.labels.len())
            .map(|i| {
                self.series.iter().fold((0.0, 0.0), |(pos, neg), s| {
                    match s.data.get(i).copied().unwrap_or(0.0) {
                        v if !v.is_finite() => (pos, neg),
                        v if v >= 0.0 => (pos + v, neg),
                        v => (pos, neg + v),
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, data: Vec<f64>) -> ChartSeries {
        ChartSeries {
            label: label.to_string(),
            data,
            style: SeriesStyle::default(),
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(ChartData::default().is_empty());
        let no_values = ChartData {
            labels: vec!["Ene".into()],
            series: vec![series("A", vec![])],
        };
        assert!(no_values.is_empty());
        let filled = ChartData {
            labels: vec!["Ene".into()],
            series: vec![series("A", vec![0.0])],
        };
        assert!(!filled.is_empty());
    }

    #[test]
    fn test_stacked_extents_split_signs() {
        let data = ChartData {
            labels: vec!["Ene".into(), "Feb".into()],
            series: vec![series("A", vec![10.0, -5.0]), series("B", vec![5.0, 20.0])],
        };
        assert_eq!(data.stacked_extents(), vec![(15.0, 0.0), (20.0, -5.0)]);
        assert_eq!(data.series_total(1), 25.0);
        assert_eq!(data.series_total(9), 0.0);
    }

    #[test]
    fn test_stacked_extents_skip_non_finite() {
        let data = ChartData {
            labels: vec!["Ene".into()],
            series: vec![
                series("A", vec![f64::INFINITY]),
                series("B", vec![f64::NAN]),
                series("C", vec![4.0]),
            ],
        };
        assert_eq!(data.stacked_extents(), vec![(4.0, 0.0)]);
    }

    #[test]
    fn test_style_colors() {
        let style = SeriesStyle::rgb(75, 192, 192, 0.4).filled();
        assert_eq!(style.border_color, "rgb(75, 192, 192)");
        assert_eq!(style.fill_color, "rgba(75, 192, 192, 0.4)");
        assert!(style.fill);
    }
}
