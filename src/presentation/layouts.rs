//! Header metrics and the tabbed detail view
//!
//! Both builders are pure functions of the (already filtered) dataset and
//! return a small render tree. Widgets in [`crate::presentation::widgets`]
//! draw that tree; nothing here touches the terminal.

use std::sync::Arc;

use strum::{Display, EnumCount, EnumIter, FromRepr, IntoEnumIterator};

use crate::{
    domain::{
        complaint::Dataset,
        summary::{borough_counts, BoroughCount, MetricsSummary},
        text::format_days,
    },
    presentation::charts::{
        plot_borough_bar, plot_response_hist, BoroughMedianBar, ResponseHistogram,
        DEFAULT_HISTOGRAM_BINS,
    },
};

pub const NO_DISTRIBUTION_CAPTION: &str = "No rows match filters. No distribution available.";
pub const NO_ROWS_INFO: &str = "No rows match filters.";

/// A labelled value shown in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMetrics {
    pub summary: MetricsSummary,
    pub metrics: [Metric; 3],
}

/// Builds the three header metrics: total, median response and most common type.
pub fn header_metrics(dataset: &Dataset) -> HeaderMetrics {
    HeaderMetrics::from(MetricsSummary::from_dataset(dataset))
}

impl From<MetricsSummary> for HeaderMetrics {
    fn from(summary: MetricsSummary) -> Self {
        let metrics = [
            Metric {
                label: "Total complaints",
                value: summary.total_display(),
            },
            Metric {
                label: "Median response (days)",
                value: summary.median_display(),
            },
            Metric {
                label: "Most common complaint",
                value: summary.most_common_type.clone(),
            },
        ];
        Self { summary, metrics }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr,
)]
pub enum Tab {
    #[default]
    Distribution,
    #[strum(to_string = "By Borough")]
    ByBorough,
    Table,
}

impl Tab {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_repr((self.index() + 1) % Self::COUNT).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        Self::from_repr((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or_default()
    }

    pub fn titles() -> Vec<String> {
        Self::iter().map(|tab| tab.to_string()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    ResponseHistogram(ResponseHistogram),
    BoroughMedianBar(BoroughMedianBar),
}

/// What sits below (or instead of) a tab's chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Caption(String),
    Info(String),
    Counts(Vec<BoroughCount>),
    Rows(Arc<Dataset>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub tab: Tab,
    pub subheader: &'static str,
    pub chart: Option<Chart>,
    pub detail: Detail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyTabs {
    tabs: [TabView; Tab::COUNT],
}

impl BodyTabs {
    pub fn get(&self, tab: Tab) -> &TabView {
        &self.tabs[tab.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabView> {
        self.tabs.iter()
    }
}

/// Builds the three tabs with the default histogram resolution.
pub fn body_layout_tabs(dataset: &Arc<Dataset>) -> BodyTabs {
    body_layout_tabs_with_bins(dataset, DEFAULT_HISTOGRAM_BINS)
}

pub fn body_layout_tabs_with_bins(dataset: &Arc<Dataset>, histogram_bins: usize) -> BodyTabs {
    let distribution = TabView {
        tab: Tab::Distribution,
        subheader: "Response Time Distribution",
        chart: Some(Chart::ResponseHistogram(plot_response_hist(
            dataset,
            histogram_bins,
        ))),
        detail: distribution_caption(dataset),
    };

    let by_borough = TabView {
        tab: Tab::ByBorough,
        subheader: "Median Response Time by Borough",
        chart: Some(Chart::BoroughMedianBar(plot_borough_bar(dataset))),
        detail: if dataset.is_empty() {
            Detail::Info(NO_ROWS_INFO.to_string())
        } else {
            Detail::Counts(borough_counts(dataset))
        },
    };

    let table = TabView {
        tab: Tab::Table,
        subheader: "Filtered Rows",
        chart: None,
        detail: Detail::Rows(Arc::clone(dataset)),
    };

    BodyTabs {
        tabs: [distribution, by_borough, table],
    }
}

fn distribution_caption(dataset: &Dataset) -> Detail {
    let summary = MetricsSummary::from_dataset(dataset);
    if summary.total == 0 {
        Detail::Caption(NO_DISTRIBUTION_CAPTION.to_string())
    } else {
        Detail::Caption(format!(
            "Interpretation: Half of the complaints are resolved in {} days or less (median response time).",
            format_days(summary.median_response)
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::complaint::ComplaintRecord;

    fn sample() -> Arc<Dataset> {
        Arc::new(Dataset::from_records(vec![
            ComplaintRecord::new(1.0, "Noise", "QUEENS"),
            ComplaintRecord::new(2.0, "Heat", "BRONX"),
            ComplaintRecord::new(4.0, "Noise", "QUEENS"),
            ComplaintRecord::new(9.0, "Heat", "QUEENS"),
        ]))
    }

    #[test]
    fn test_header_metrics_empty() {
        let header = header_metrics(&Dataset::default());
        assert_eq!(
            header.metrics,
            [
                Metric {
                    label: "Total complaints",
                    value: "0".to_string()
                },
                Metric {
                    label: "Median response (days)",
                    value: "0.0".to_string()
                },
                Metric {
                    label: "Most common complaint",
                    value: "—".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_header_metrics_values() {
        let header = header_metrics(&sample());
        let values: Vec<&str> = header.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["4", "3.0", "Noise"]);
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Distribution.next(), Tab::ByBorough);
        assert_eq!(Tab::Table.next(), Tab::Distribution);
        assert_eq!(Tab::Distribution.previous(), Tab::Table);
        assert_eq!(Tab::titles(), vec!["Distribution", "By Borough", "Table"]);
    }

    #[test]
    fn test_body_tabs_empty_dataset() {
        let tabs = body_layout_tabs(&Arc::new(Dataset::default()));
        assert_eq!(
            tabs.get(Tab::Distribution).detail,
            Detail::Caption(NO_DISTRIBUTION_CAPTION.to_string())
        );
        assert_eq!(
            tabs.get(Tab::ByBorough).detail,
            Detail::Info(NO_ROWS_INFO.to_string())
        );
        match &tabs.get(Tab::Table).detail {
            Detail::Rows(rows) => assert_eq!(rows.len(), 0),
            other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn test_body_tabs_with_rows() {
        let data = sample();
        let tabs = body_layout_tabs(&data);

        assert_eq!(
            tabs.get(Tab::Distribution).detail,
            Detail::Caption(
                "Interpretation: Half of the complaints are resolved in 3.0 days or less (median response time)."
                    .to_string()
            )
        );
        assert_eq!(
            tabs.get(Tab::ByBorough).detail,
            Detail::Counts(vec![
                BoroughCount {
                    borough: "QUEENS".to_string(),
                    complaints: 3
                },
                BoroughCount {
                    borough: "BRONX".to_string(),
                    complaints: 1
                },
            ])
        );
        match &tabs.get(Tab::Table).detail {
            Detail::Rows(rows) => assert_eq!(rows.len(), data.len()),
            other => panic!("unexpected detail: {other:?}"),
        }
        assert!(tabs.get(Tab::Table).chart.is_none());
        assert_eq!(
            tabs.iter().map(|t| t.subheader).collect::<Vec<_>>(),
            vec![
                "Response Time Distribution",
                "Median Response Time by Borough",
                "Filtered Rows"
            ]
        );
    }
}
