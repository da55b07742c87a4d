use crate::presentation::layouts::Tab;

/// Navigation messages handled by UiState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    NextTab,
    PrevTab,
    SelectTab(Tab),

    // Table scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
