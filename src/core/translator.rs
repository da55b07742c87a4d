use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{
        config::keybindings::{normalize_key, Action},
        layouts::Tab,
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Command results
        RawMsg::SystemMessage { label, message } => {
            vec![Msg::System(SystemMsg::UpdateStatusMessage { label, message })]
        }
        RawMsg::Error { label, message } => {
            vec![Msg::System(SystemMsg::ShowError { label, message })]
        }

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Ctrl-C always quits, whatever the bindings say
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Get keybindings from config state (flat mapping)
    match state
        .config
        .config
        .keybindings
        .get(&vec![normalize_key(key)])
    {
        Some(action) => translate_action_to_msg(*action),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::NextTab => Msg::Ui(UiMsg::NextTab),
        Action::PrevTab => Msg::Ui(UiMsg::PrevTab),
        Action::SelectDistribution => Msg::Ui(UiMsg::SelectTab(Tab::Distribution)),
        Action::SelectByBorough => Msg::Ui(UiMsg::SelectTab(Tab::ByBorough)),
        Action::SelectTable => Msg::Ui(UiMsg::SelectTab(Tab::Table)),
        Action::ScrollUp => Msg::Ui(UiMsg::ScrollUp),
        Action::ScrollDown => Msg::Ui(UiMsg::ScrollDown),
        Action::PageUp => Msg::Ui(UiMsg::PageUp),
        Action::PageDown => Msg::Ui(UiMsg::PageDown),
        Action::ScrollToTop => Msg::Ui(UiMsg::ScrollToTop),
        Action::ScrollToBottom => Msg::Ui(UiMsg::ScrollToBottom),
        Action::Export => Msg::ExportRows,
    };
    vec![msg]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{domain::complaint::Dataset, infrastructure::config::Config};

    fn create_test_state() -> AppState {
        let config = Config::defaults().expect("embedded config is valid");
        AppState::new_with_config(Arc::new(Dataset::default()), config)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_system_events() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_command_results() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Error {
                    label: "Export".to_string(),
                    message: "denied".to_string(),
                },
                &state
            ),
            vec![Msg::System(SystemMsg::ShowError {
                label: "Export".to_string(),
                message: "denied".to_string(),
            })]
        );
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), KeyModifiers::NONE, Msg::System(SystemMsg::Quit))]
    #[case::ctrl_c(KeyCode::Char('c'), KeyModifiers::CONTROL, Msg::System(SystemMsg::Quit))]
    #[case::tab(KeyCode::Tab, KeyModifiers::NONE, Msg::Ui(UiMsg::NextTab))]
    #[case::back_tab(KeyCode::BackTab, KeyModifiers::SHIFT, Msg::Ui(UiMsg::PrevTab))]
    #[case::select_table(
        KeyCode::Char('3'),
        KeyModifiers::NONE,
        Msg::Ui(UiMsg::SelectTab(Tab::Table))
    )]
    #[case::scroll_down(KeyCode::Char('j'), KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollDown))]
    #[case::bottom_with_shift(
        KeyCode::Char('G'),
        KeyModifiers::SHIFT,
        Msg::Ui(UiMsg::ScrollToBottom)
    )]
    #[case::page_down(KeyCode::Char('d'), KeyModifiers::CONTROL, Msg::Ui(UiMsg::PageDown))]
    #[case::export(KeyCode::Char('e'), KeyModifiers::NONE, Msg::ExportRows)]
    fn test_key_bindings(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: Msg,
    ) {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(key(code, modifiers), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(key(KeyCode::Char('x'), KeyModifiers::NONE), &state)
            .is_empty());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = create_test_state();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate_raw_to_domain(RawMsg::Key(release), &state).is_empty());
    }
}
