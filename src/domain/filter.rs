use serde::Deserialize;

use crate::domain::complaint::{ComplaintRecord, Dataset};

/// Row filter applied before any view is built.
///
/// Empty lists place no constraint. Matching on categories ignores case and
/// surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub boroughs: Vec<String>,
    #[serde(default)]
    pub complaint_types: Vec<String>,
    #[serde(default)]
    pub max_response_days: Option<f64>,
}

fn matches_any(candidates: &[String], value: &str) -> bool {
    let value = value.trim();
    candidates.is_empty()
        || candidates
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(value))
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.boroughs.is_empty()
            && self.complaint_types.is_empty()
            && self.max_response_days.is_none()
    }

    pub fn matches(&self, record: &ComplaintRecord) -> bool {
        matches_any(&self.boroughs, record.borough())
            && matches_any(&self.complaint_types, record.complaint_type())
            && self
                .max_response_days
                .map_or(true, |max| record.response_time_days() <= max)
    }

    /// Keeps the matching rows, in their original order.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        if self.is_empty() {
            return dataset.clone();
        }
        let filtered = dataset.filtered(|record| self.matches(record));
        tracing::debug!(
            before = dataset.len(),
            after = filtered.len(),
            "applied row filter"
        );
        filtered
    }
}
