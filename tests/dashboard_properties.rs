use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use complaintui::domain::complaint::{ComplaintRecord, Dataset};
use complaintui::domain::summary::PLACEHOLDER;
use complaintui::presentation::layouts::{
    body_layout_tabs, header_metrics, Detail, Tab, NO_DISTRIBUTION_CAPTION, NO_ROWS_INFO,
};

fn dataset(rows: &[(f64, &str, &str)]) -> Arc<Dataset> {
    Arc::new(Dataset::from_records(rows.iter().map(
        |(days, complaint_type, borough)| ComplaintRecord::new(*days, *complaint_type, *borough),
    )))
}

#[test]
fn test_empty_dataset_uses_placeholders_everywhere() {
    let data = dataset(&[]);
    let header = header_metrics(&data);
    assert_eq!(header.summary.total, 0);
    assert_eq!(header.summary.median_response, 0.0);
    assert_eq!(header.summary.most_common_type, PLACEHOLDER);

    let tabs = body_layout_tabs(&data);
    assert_eq!(
        tabs.get(Tab::Distribution).detail,
        Detail::Caption(NO_DISTRIBUTION_CAPTION.to_string())
    );
    assert_eq!(
        tabs.get(Tab::ByBorough).detail,
        Detail::Info(NO_ROWS_INFO.to_string())
    );
}

#[rstest]
#[case::odd(&[1.0, 2.0, 3.0], 2.0)]
#[case::even(&[1.0, 2.0], 1.5)]
#[case::unsorted(&[9.0, 1.0, 4.0, 2.0], 3.0)]
fn test_median_response(#[case] days: &[f64], #[case] expected: f64) {
    let rows: Vec<_> = days.iter().map(|d| (*d, "Noise", "QUEENS")).collect();
    let header = header_metrics(&dataset(&rows));
    assert_eq!(header.summary.total, days.len());
    assert_eq!(header.summary.median_response, expected);
}

#[test]
fn test_mode_prefers_first_seen_on_ties() {
    let header = header_metrics(&dataset(&[
        (1.0, "A", "QUEENS"),
        (1.0, "A", "QUEENS"),
        (1.0, "B", "QUEENS"),
        (1.0, "B", "QUEENS"),
    ]));
    assert_eq!(header.summary.most_common_type, "A");
}

#[test]
fn test_borough_counts_sum_to_total_in_descending_order() {
    let data = dataset(&[
        (1.0, "Noise", "BRONX"),
        (2.0, "Noise", "QUEENS"),
        (3.0, "Heat", "QUEENS"),
        (4.0, "Heat", "BROOKLYN"),
        (5.0, "Heat", "QUEENS"),
        (6.0, "Heat", "BROOKLYN"),
    ]);
    let total = header_metrics(&data).summary.total;
    let tabs = body_layout_tabs(&data);
    let Detail::Counts(counts) = &tabs.get(Tab::ByBorough).detail else {
        panic!("expected a count table");
    };

    assert_eq!(counts.iter().map(|c| c.complaints).sum::<usize>(), total);
    assert!(counts
        .windows(2)
        .all(|pair| pair[0].complaints >= pair[1].complaints));
    assert_eq!(
        counts.iter().map(|c| c.borough.as_str()).collect::<Vec<_>>(),
        vec!["QUEENS", "BROOKLYN", "BRONX"]
    );
}

#[rstest]
#[case::empty(0)]
#[case::one(1)]
#[case::many(250)]
fn test_table_tab_has_every_row(#[case] rows: usize) {
    let data = Arc::new(Dataset::from_records(
        (0..rows).map(|i| ComplaintRecord::new(i as f64, "Noise", "QUEENS")),
    ));
    let tabs = body_layout_tabs(&data);
    let Detail::Rows(table) = &tabs.get(Tab::Table).detail else {
        panic!("expected the row table");
    };
    assert_eq!(table.len(), rows);
}
