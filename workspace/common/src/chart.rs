use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Title used by placeholder charts when the input dataset is empty.
pub const NO_DATA_TITLE: &str = "No data to display";

/// The kind of visualization a [`ChartSpec`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Histogram,
}

/// One named series within a chart: values aligned with the chart's labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    /// Series name shown in the legend
    pub name: String,
    /// One value per label of the owning chart
    pub values: Vec<f64>,
}

/// A renderer-agnostic chart description.
///
/// The presentation layer is out of scope; consumers bind `labels` to the
/// category/x axis and each series to a line, slice set or bar set
/// depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    /// Visualization kind
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// X axis label, if the kind has axes
    pub x_axis: Option<String>,
    /// Y axis label, if the kind has axes
    pub y_axis: Option<String>,
    /// Category labels (bucket dates, category names or bin ranges)
    pub labels: Vec<String>,
    /// Data series, each aligned with `labels`
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Placeholder chart description used when there is no data to plot.
    pub fn no_data(kind: ChartKind) -> Self {
        Self {
            kind,
            title: NO_DATA_TITLE.to_string(),
            x_axis: None,
            y_axis: None,
            labels: Vec::new(),
            series: Vec::new(),
        }
    }

    /// True when this spec is the "no data" placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.title == NO_DATA_TITLE && self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_placeholder() {
        let chart = ChartSpec::no_data(ChartKind::Pie);
        assert!(chart.is_placeholder());
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.title, NO_DATA_TITLE);
        assert!(chart.labels.is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChartKind::Histogram).unwrap(),
            "\"histogram\""
        );
    }
}
