use ratatui::{
    prelude::*,
    widgets::{Block, Row, Table},
};

use crate::domain::{complaint::Dataset, text::format_count};

/// Rows taken by the block borders and the header line.
const TABLE_CHROME: u16 = 3;

/// The filtered rows, starting at `offset`.
pub struct DataTableWidget<'a> {
    dataset: &'a Dataset,
    offset: usize,
    header_style: Style,
}

impl<'a> DataTableWidget<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            offset: 0,
            header_style: Style::default().bold(),
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    /// Indices of the rows that fit in `area`.
    pub fn visible_range(&self, area: Rect) -> std::ops::Range<usize> {
        let capacity = area.height.saturating_sub(TABLE_CHROME) as usize;
        let start = self.offset.min(self.dataset.len());
        start..(start + capacity).min(self.dataset.len())
    }

    fn title(&self, area: Rect) -> String {
        let range = self.visible_range(area);
        if range.is_empty() {
            format!(" {} rows ", format_count(self.dataset.len()))
        } else {
            format!(
                " {} rows ({}-{}) ",
                format_count(self.dataset.len()),
                format_count(range.start + 1),
                format_count(range.end)
            )
        }
    }
}

impl Widget for DataTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(self.dataset.columns().iter().map(String::as_str))
            .style(self.header_style);
        let rows = self.dataset.records()[self.visible_range(area)]
            .iter()
            .map(|record| Row::new(record.cells().iter().map(String::as_str)));
        let widths = vec![Constraint::Fill(1); self.dataset.columns().len().max(1)];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(Block::bordered().title(self.title(area)));
        Widget::render(table, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::complaint::ComplaintRecord;

    fn dataset(rows: usize) -> Dataset {
        Dataset::from_records(
            (0..rows).map(|i| ComplaintRecord::new(i as f64, format!("Type{i}"), "QUEENS")),
        )
    }

    fn lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_visible_range() {
        let data = dataset(30);
        let area = Rect::new(0, 0, 60, 13);
        assert_eq!(DataTableWidget::new(&data).visible_range(area), 0..10);
        assert_eq!(
            DataTableWidget::new(&data).offset(25).visible_range(area),
            25..30
        );
        assert_eq!(
            DataTableWidget::new(&data).offset(99).visible_range(area),
            30..30
        );
    }

    #[test]
    fn test_renders_window_of_rows() {
        let data = dataset(30);
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        DataTableWidget::new(&data).offset(5).render(area, &mut buf);

        let lines = lines(&buf);
        assert!(lines[0].contains("30 rows (6-8)"));
        assert!(lines[1].contains("complaint_type"));
        assert!(lines[2].contains("Type5"));
        assert!(lines[4].contains("Type7"));
    }

    #[test]
    fn test_empty_dataset_renders_header_only() {
        let data = Dataset::from_records(vec![]);
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        DataTableWidget::new(&data).render(area, &mut buf);

        let lines = lines(&buf);
        assert!(lines[0].contains("0 rows"));
        assert!(lines[1].contains("response_time_days"));
        assert!(lines[2].trim_matches(|c| c == '│' || c == ' ').is_empty());
    }
}
