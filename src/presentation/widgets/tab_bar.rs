use ratatui::{prelude::*, widgets::Tabs};

use crate::presentation::layouts::Tab;

#[derive(Clone)]
pub struct TabBarWidget {
    active: Tab,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(Tab::titles())
            .select(self.active.index())
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_and_highlight() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBarWidget::new(Tab::ByBorough)
            .highlight_style(Style::default().fg(Color::Cyan))
            .render(area, &mut buf);

        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(text.contains("Distribution"));
        assert!(text.contains("By Borough"));
        assert!(text.contains("Table"));

        let byte = text.find("By Borough").expect("tab title");
        let start = text[..byte].chars().count() as u16;
        assert_eq!(buf[(start, 0)].fg, Color::Cyan);
        assert_ne!(buf[(1, 0)].fg, Color::Cyan);
    }
}
