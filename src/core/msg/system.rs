/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    // System control
    Quit,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage { label: String, message: String },
    ShowError { label: String, message: String },
    ClearStatusMessage,
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}
