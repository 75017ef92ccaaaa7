use super::value_objects::{AxisId, SeriesStyle};
use serde::Serialize;

/// One point of a sparse marker series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPoint {
    pub category: String,
    pub value: f64,
}

/// Series values: dense (aligned 1:1 with the category axis) or sparse
/// (explicit category/value pairs for signal markers)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesPoints {
    Dense(Vec<f64>),
    Sparse(Vec<MarkerPoint>),
}

impl SeriesPoints {
    pub fn len(&self) -> usize {
        match self {
            Self::Dense(values) => values.len(),
            Self::Sparse(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One renderable series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub axis: AxisId,
    pub style: SeriesStyle,
    pub points: SeriesPoints,
}

/// Domain entity - the full chart handed to the external renderer
///
/// Hidden series are absent from `series`, never present-but-empty, so a
/// consumer iterating the list needs no separate visibility check. NaN
/// values serialize as JSON null, which the chart engine draws as a gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartDescription {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartDescription {
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn find_series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.label == label)
    }

    /// JSON payload for the JS chart engine
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
