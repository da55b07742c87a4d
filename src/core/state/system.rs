use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub terminal_size: Option<(u16, u16)>,
}

impl SystemState {
    fn set_status(&mut self, label: &str, message: &str, is_error: bool) {
        let normalized_message = message.replace('\n', " ");
        self.status_message = Some(format!("[{label}] {normalized_message}"));
        self.status_is_error = is_error;
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
            }
            SystemMsg::Resize(width, height) => {
                self.terminal_size = Some((width, height));
            }
            SystemMsg::UpdateStatusMessage { label, message } => {
                self.set_status(&label, &message, false);
            }
            SystemMsg::ShowError { label, message } => {
                self.set_status(&format!("ERR: {label}"), &message, true);
            }
            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                self.status_is_error = false;
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quit() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_is_labelled() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage {
            label: "Export".to_string(),
            message: "Wrote 3 rows".to_string(),
        });
        assert_eq!(
            system.status_message,
            Some("[Export] Wrote 3 rows".to_string())
        );
        assert!(!system.status_is_error);
    }

    #[test]
    fn test_error_message_normalizes_newlines() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowError {
            label: "Export".to_string(),
            message: "permission denied\nat /root".to_string(),
        });
        assert_eq!(
            system.status_message,
            Some("[ERR: Export] permission denied at /root".to_string())
        );
        assert!(system.status_is_error);

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system, SystemState::default());
    }

    #[test]
    fn test_resize_records_size() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Resize(120, 40));
        assert_eq!(system.terminal_size, Some((120, 40)));
    }
}
