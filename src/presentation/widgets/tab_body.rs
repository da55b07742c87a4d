use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::presentation::{
    config::Styles,
    layouts::{Chart, Detail, TabView},
    widgets::{count_table::CountTableWidget, data_table::DataTableWidget},
};

const CAPTION_HEIGHT: u16 = 2;

/// Subheader, chart and detail of the active tab.
pub struct TabBodyWidget<'a> {
    view: &'a TabView,
    styles: &'a Styles,
    table_offset: usize,
}

impl<'a> TabBodyWidget<'a> {
    pub fn new(view: &'a TabView, styles: &'a Styles) -> Self {
        Self {
            view,
            styles,
            table_offset: 0,
        }
    }

    pub fn table_offset(mut self, offset: usize) -> Self {
        self.table_offset = offset;
        self
    }

    fn render_chart(&self, chart: &Chart, area: Rect, buf: &mut Buffer) {
        match chart {
            Chart::ResponseHistogram(hist) => {
                let styled = hist.clone().style(self.styles.style("histogram"));
                (&styled).render(area, buf);
            }
            Chart::BoroughMedianBar(bar) => {
                let styled = bar.clone().style(self.styles.style("borough_bar"));
                (&styled).render(area, buf);
            }
        }
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        match &self.view.detail {
            Detail::Caption(text) => Paragraph::new(text.as_str())
                .style(self.styles.style("caption"))
                .wrap(Wrap { trim: true })
                .render(area, buf),
            Detail::Info(text) => Paragraph::new(text.as_str())
                .style(self.styles.style("info"))
                .wrap(Wrap { trim: true })
                .render(area, buf),
            Detail::Counts(counts) => CountTableWidget::new(counts)
                .header_style(self.styles.style("table_header"))
                .render(area, buf),
            Detail::Rows(dataset) => DataTableWidget::new(dataset)
                .offset(self.table_offset)
                .header_style(self.styles.style("table_header"))
                .render(area, buf),
        }
    }
}

impl Widget for TabBodyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [subheader_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        Line::styled(self.view.subheader, self.styles.style("subheader")).render(subheader_area, buf);

        let Some(chart) = &self.view.chart else {
            self.render_detail(content_area, buf);
            return;
        };

        let (chart_area, detail_area) = match self.view.detail {
            // the count table sits beside the chart
            Detail::Counts(_) => {
                let [chart_area, detail_area] = Layout::horizontal([
                    Constraint::Percentage(65),
                    Constraint::Percentage(35),
                ])
                .areas(content_area);
                (chart_area, detail_area)
            }
            _ => {
                let [chart_area, detail_area] = Layout::vertical([
                    Constraint::Min(0),
                    Constraint::Length(CAPTION_HEIGHT),
                ])
                .areas(content_area);
                (chart_area, detail_area)
            }
        };
        self.render_chart(chart, chart_area, buf);
        self.render_detail(detail_area, buf);
    }
}
