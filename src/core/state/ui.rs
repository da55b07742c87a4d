use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    presentation::layouts::Tab,
};

/// Rows used by everything on screen except the table body: title, metric
/// cards, tab bar, subheader, table borders and header, status bar.
pub const TABLE_CHROME_ROWS: u16 = 10;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// UI-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    /// Index of the first table row on screen
    pub table_offset: usize,
    /// Number of table rows that fit on screen
    pub page_size: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            table_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UiState {
    pub fn is_table_active(&self) -> bool {
        self.active_tab == Tab::Table
    }

    /// Recomputes the page size from the terminal height.
    pub fn set_viewport_height(&mut self, height: u16) {
        self.page_size = usize::from(height.saturating_sub(TABLE_CHROME_ROWS)).max(1);
    }

    fn scroll_to(&mut self, offset: usize, row_count: usize) {
        self.table_offset = offset.min(row_count.saturating_sub(1));
    }

    /// UI-specific update function
    /// `row_count` is the number of rows in the table tab.
    pub fn update(&mut self, msg: UiMsg, row_count: usize) -> Vec<Cmd> {
        match msg {
            UiMsg::NextTab => self.active_tab = self.active_tab.next(),
            UiMsg::PrevTab => self.active_tab = self.active_tab.previous(),
            UiMsg::SelectTab(tab) => self.active_tab = tab,
            scroll if !self.is_table_active() => {
                tracing::trace!(?scroll, "ignoring scroll outside the table tab");
            }
            UiMsg::ScrollUp => self.scroll_to(self.table_offset.saturating_sub(1), row_count),
            UiMsg::ScrollDown => self.scroll_to(self.table_offset + 1, row_count),
            UiMsg::PageUp => {
                self.scroll_to(self.table_offset.saturating_sub(self.page_size), row_count)
            }
            UiMsg::PageDown => self.scroll_to(self.table_offset + self.page_size, row_count),
            UiMsg::ScrollToTop => self.table_offset = 0,
            UiMsg::ScrollToBottom => {
                self.scroll_to(row_count.saturating_sub(self.page_size), row_count)
            }
        }
        vec![]
    }
}
