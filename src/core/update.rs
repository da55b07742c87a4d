use std::sync::Arc;

use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // The table page size follows the terminal height
        Msg::System(SystemMsg::Resize(width, height)) => {
            state.ui.set_viewport_height(height);
            let commands = state.system.update(SystemMsg::Resize(width, height));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Navigation (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let row_count = state.row_count();
            let commands = state.ui.update(ui_msg, row_count);
            (state, commands)
        }

        Msg::ExportRows => {
            let path = state.config.config.export_path();
            state.system.status_message = Some(format!("[Export] Writing {}", path.display()));
            state.system.status_is_error = false;
            let cmd = Cmd::ExportRows {
                dataset: Arc::clone(&state.dataset),
                path,
            };
            (state, vec![cmd])
        }
    }
}
