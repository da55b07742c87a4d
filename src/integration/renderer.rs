use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::{prelude::*, Frame};
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui,
    presentation::widgets::{
        metrics::MetricsWidget, status_bar::StatusBarWidget, tab_bar::TabBarWidget,
        tab_body::TabBodyWidget,
    },
};

pub const TITLE: &str = " Complaints Dashboard ";

/// Draws the whole dashboard for `state` into `frame`.
pub fn draw(frame: &mut Frame<'_>, state: &AppState) {
    let styles = &state.config.config.styles;
    let [title_area, metrics_area, tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Line::styled(TITLE, styles.style("title")), title_area);
    frame.render_widget(
        MetricsWidget::new(&state.dashboard.header)
            .label_style(styles.style("metric_label"))
            .value_style(styles.style("metric_value")),
        metrics_area,
    );
    frame.render_widget(
        TabBarWidget::new(state.ui.active_tab)
            .style(styles.style("tab"))
            .highlight_style(styles.style("tab_highlight")),
        tabs_area,
    );
    frame.render_widget(
        TabBodyWidget::new(state.dashboard.tabs.get(state.ui.active_tab), styles)
            .table_offset(state.ui.table_offset),
        body_area,
    );
    frame.render_widget(
        StatusBarWidget::new(&state.system)
            .style(styles.style("status"))
            .error_style(styles.style("status_error")),
        status_area,
    );
}

#[derive(Debug, Default)]
pub struct Renderer {
    frames: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw_state = |f: &mut Frame<'_>| draw(f, state);
        guard.draw(&mut draw_state)?;
        self.frames += 1;
        Ok(())
    }
}
