//! Chart collaborators
//!
//! Each chart is built from a dataset and knows how to draw itself; the
//! layouts only decide where a chart goes.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Widget},
};

use crate::domain::{
    complaint::Dataset,
    stats::{self, Bin},
    text::format_days,
};

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Medians are drawn as integer bar heights in tenths of a day.
const MEDIAN_SCALE: f64 = 10.0;

/// Histogram of `response_time_days`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHistogram {
    bins: Vec<Bin>,
    style: Style,
}

/// Median response time per borough, slowest first.
#[derive(Debug, Clone, PartialEq)]
pub struct BoroughMedianBar {
    medians: Vec<(String, f64)>,
    style: Style,
}

pub fn plot_response_hist(dataset: &Dataset, bins: usize) -> ResponseHistogram {
    ResponseHistogram {
        bins: stats::histogram(dataset.response_times(), bins),
        style: Style::default().fg(Color::Cyan),
    }
}

pub fn plot_borough_bar(dataset: &Dataset) -> BoroughMedianBar {
    let mut medians = stats::median_by_group(
        dataset
            .iter()
            .map(|record| (record.borough(), record.response_time_days())),
    );
    medians.sort_by(|a, b| b.1.total_cmp(&a.1));
    BoroughMedianBar {
        medians,
        style: Style::default().fg(Color::Magenta),
    }
}

impl ResponseHistogram {
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl BoroughMedianBar {
    pub fn medians(&self) -> &[(String, f64)] {
        &self.medians
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Widest bar that lets `count` bars with a one-cell gap fit in `area`'s inner width.
fn bar_width(area: Rect, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2) as usize;
    let available = inner.saturating_sub(count.saturating_sub(1));
    (available / count).clamp(1, u16::MAX as usize) as u16
}

impl Widget for &ResponseHistogram {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Response time (days) ");
        if self.bins.is_empty() {
            block.render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .bins
            .iter()
            .map(|bin| {
                Bar::default()
                    .value(bin.count as u64)
                    .label(Line::from(format!("{:.0}", bin.start)))
            })
            .collect();

        BarChart::default()
            .block(block)
            .bar_width(bar_width(area, bars.len()))
            .bar_gap(1)
            .bar_style(self.style)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

impl Widget for &BoroughMedianBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Median response (days) ");
        if self.medians.is_empty() {
            block.render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .medians
            .iter()
            .map(|(borough, median)| {
                Bar::default()
                    .value((median * MEDIAN_SCALE).round() as u64)
                    .text_value(format_days(*median))
                    .label(Line::from(borough.clone()))
            })
            .collect();

        BarChart::default()
            .block(block)
            .bar_width(bar_width(area, bars.len()))
            .bar_gap(1)
            .bar_style(self.style)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
