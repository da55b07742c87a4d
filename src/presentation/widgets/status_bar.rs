use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::SystemState;

pub const KEY_HINTS: &str = "q quit | Tab/1-3 switch tab | j/k scroll | e export";

pub struct StatusBarWidget<'a> {
    system: &'a SystemState,
    style: Style,
    error_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(system: &'a SystemState) -> Self {
        Self {
            system,
            style: Style::default(),
            error_style: Style::default().fg(Color::Red),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = match &self.system.status_message {
            Some(message) if self.system.status_is_error => {
                Paragraph::new(message.as_str()).style(self.error_style)
            }
            Some(message) => Paragraph::new(message.as_str()).style(self.style),
            None => Paragraph::new(KEY_HINTS).style(self.style),
        };
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(system: &SystemState) -> Buffer {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(system).render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hints_when_idle() {
        let buf = render(&SystemState::default());
        assert!(text(&buf).starts_with(KEY_HINTS));
    }

    #[test]
    fn test_error_message_uses_error_style() {
        let system = SystemState {
            status_message: Some("[ERR: Export] denied".to_string()),
            status_is_error: true,
            ..SystemState::default()
        };
        let buf = render(&system);
        assert!(text(&buf).starts_with("[ERR: Export] denied"));
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
