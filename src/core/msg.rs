pub mod system;
pub mod ui;

use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation (delegated to UiState)
    Ui(UiMsg),

    // Write the filtered rows to the configured export path
    ExportRows,
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system_msg) => system_msg.is_frequent(),
            _ => false,
        }
    }
}
