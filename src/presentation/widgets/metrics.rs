use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::{domain::text::truncate_to_width, presentation::layouts::HeaderMetrics};

/// The three header metrics, side by side.
pub struct MetricsWidget<'a> {
    header: &'a HeaderMetrics,
    label_style: Style,
    value_style: Style,
}

impl<'a> MetricsWidget<'a> {
    pub fn new(header: &'a HeaderMetrics) -> Self {
        Self {
            header,
            label_style: Style::default(),
            value_style: Style::default().bold(),
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }
}

impl Widget for MetricsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for (metric, cell) in self.header.metrics.iter().zip(cells.iter()) {
            let block =
                Block::bordered().title(Span::styled(format!(" {} ", metric.label), self.label_style));
            let width = block.inner(*cell).width as usize;
            Paragraph::new(Span::styled(
                truncate_to_width(&metric.value, width),
                self.value_style,
            ))
            .centered()
            .block(block)
            .render(*cell, buf);
        }
    }
}
