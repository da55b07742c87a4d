use ratatui::{
    prelude::*,
    widgets::{Block, Row, Table},
};

use crate::domain::{summary::BoroughCount, text::format_count};

/// Complaints per borough, in the order given.
pub struct CountTableWidget<'a> {
    counts: &'a [BoroughCount],
    header_style: Style,
}

impl<'a> CountTableWidget<'a> {
    pub fn new(counts: &'a [BoroughCount]) -> Self {
        Self {
            counts,
            header_style: Style::default().bold(),
        }
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }
}

impl Widget for CountTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["borough", "complaints"]).style(self.header_style);
        let rows = self.counts.iter().map(|count| {
            Row::new([
                Text::from(count.borough.as_str()),
                Text::from(format_count(count.complaints)).right_aligned(),
            ])
        });

        let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(10)])
            .header(header)
            .block(Block::bordered().title(" Complaints by borough "));
        Widget::render(table, area, buf);
    }
}
