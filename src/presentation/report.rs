//! Plain-text and JSON rendering of the dashboard for `--summary`

use std::fmt;

use color_eyre::eyre::Result;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        complaint::Dataset,
        summary::{borough_counts, BoroughCount, MetricsSummary},
        text::format_count,
    },
    presentation::layouts::{HeaderMetrics, NO_ROWS_INFO},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub metrics: MetricsSummary,
    pub boroughs: Vec<BoroughCount>,
}

impl SummaryReport {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            metrics: MetricsSummary::from_dataset(dataset),
            boroughs: borough_counts(dataset),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = HeaderMetrics::from(self.metrics.clone());
        for metric in &header.metrics {
            writeln!(f, "{}: {}", metric.label, metric.value)?;
        }
        writeln!(f)?;

        if self.boroughs.is_empty() {
            return writeln!(f, "{NO_ROWS_INFO}");
        }

        let width = self
            .boroughs
            .iter()
            .map(|row| row.borough.width())
            .chain(std::iter::once("borough".len()))
            .max()
            .unwrap_or_default();
        writeln!(f, "{}  complaints", pad("borough", width))?;
        for row in &self.boroughs {
            writeln!(
                f,
                "{}  {:>10}",
                pad(&row.borough, width),
                format_count(row.complaints)
            )?;
        }
        Ok(())
    }
}

fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::complaint::ComplaintRecord;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            ComplaintRecord::new(1.0, "Noise", "QUEENS"),
            ComplaintRecord::new(2.0, "Heat", "STATEN ISLAND"),
            ComplaintRecord::new(3.0, "Noise", "QUEENS"),
        ])
    }

    #[test]
    fn test_text_report() {
        let data = sample();
        let report = SummaryReport::from_dataset(&data);
        assert_eq!(
            report.to_text(),
            "Total complaints: 3\n\
             Median response (days): 2.0\n\
             Most common complaint: Noise\n\
             \n\
             borough        complaints\n\
             QUEENS                  2\n\
             STATEN ISLAND           1\n"
        );
    }

    #[test]
    fn test_text_report_empty() {
        let data = Dataset::default();
        let report = SummaryReport::from_dataset(&data);
        assert_eq!(
            report.to_text(),
            "Total complaints: 0\n\
             Median response (days): 0.0\n\
             Most common complaint: —\n\
             \n\
             No rows match filters.\n"
        );
    }

    #[test]
    fn test_text_uses_report_metrics() {
        let report = SummaryReport {
            metrics: MetricsSummary {
                total: 12_000,
                median_response: 4.5,
                most_common_type: "Heat".to_string(),
            },
            boroughs: vec![BoroughCount {
                borough: "BRONX".to_string(),
                complaints: 12_000,
            }],
        };
        assert_eq!(
            report.to_text(),
            "Total complaints: 12,000\n\
             Median response (days): 4.5\n\
             Most common complaint: Heat\n\
             \n\
             borough  complaints\n\
             BRONX        12,000\n"
        );
    }

    #[test]
    fn test_json_report() {
        let report = SummaryReport::from_dataset(&sample());
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("json")).expect("valid json");
        assert_eq!(value["metrics"]["total"], 3);
        assert_eq!(value["metrics"]["median_response"], 2.0);
        assert_eq!(value["metrics"]["most_common_type"], "Noise");
        assert_eq!(value["boroughs"][0]["borough"], "QUEENS");
        assert_eq!(value["boroughs"][0]["complaints"], 2);
    }
}
