//! Header metrics and the per-borough breakdown

use serde::Serialize;

use crate::domain::{
    complaint::Dataset,
    stats,
    text::{format_count, format_days},
};

/// Shown instead of the most common complaint when there are no rows.
pub const PLACEHOLDER: &str = "—";

/// The three scalar summaries shown above the tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub total: usize,
    pub median_response: f64,
    pub most_common_type: String,
}

impl MetricsSummary {
    /// Summarizes `dataset`. An empty dataset yields `0`, `0.0` and the placeholder.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        if dataset.is_empty() {
            return Self::default();
        }

        Self {
            total: dataset.len(),
            median_response: stats::median(dataset.response_times()).unwrap_or(0.0),
            most_common_type: stats::mode(dataset.complaint_types())
                .unwrap_or(PLACEHOLDER)
                .to_string(),
        }
    }

    pub fn total_display(&self) -> String {
        format_count(self.total)
    }

    pub fn median_display(&self) -> String {
        format_days(self.median_response)
    }
}

impl Default for MetricsSummary {
    fn default() -> Self {
        Self {
            total: 0,
            median_response: 0.0,
            most_common_type: PLACEHOLDER.to_string(),
        }
    }
}

/// One row of the complaints-by-borough table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoroughCount {
    pub borough: String,
    pub complaints: usize,
}

/// Complaint counts per borough, most frequent first.
pub fn borough_counts(dataset: &Dataset) -> Vec<BoroughCount> {
    stats::value_counts(dataset.boroughs())
        .into_iter()
        .map(|(borough, complaints)| BoroughCount {
            borough,
            complaints,
        })
        .collect()
}
