use super::*;
use crate::kernel::services::ports::Settings;
use crate::kernel::Store;
use std::path::PathBuf;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

fn home_store() -> Store {
    let mut settings = Settings::default();
    settings.push_recent_file(PathBuf::from("/w/old.cob"));
    settings.push_recent_file(PathBuf::from("/w/new.cob"));
    Store::new(AppState::new(settings))
}

fn workspace_store() -> Store {
    let mut store = home_store();
    store.dispatch(Action::FileLoaded {
        path: PathBuf::from("/w/foo.cob"),
        content: "       PROCEDURE DIVISION.\n".to_string(),
    });
    store
}

#[test]
fn home_digits_open_recent_files() {
    let store = home_store();
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Char('2'))),
        Some(Action::OpenPath(PathBuf::from("/w/old.cob")))
    );
    assert_eq!(action_for_key(store.state(), key(KeyCode::Char('9'))), None);
    assert_eq!(
        action_for_key(store.state(), alt(KeyCode::Char('c'))),
        Some(Action::ClearRecentFiles)
    );
}

#[test]
fn global_shortcuts() {
    let store = workspace_store();
    let state = store.state();
    assert_eq!(action_for_key(state, ctrl('q')), Some(Action::Quit));
    assert_eq!(action_for_key(state, ctrl('s')), Some(Action::Save));
    assert_eq!(
        action_for_key(state, ctrl('o')),
        Some(Action::OpenPrompt(PromptKind::Open))
    );
    assert_eq!(
        action_for_key(state, alt(KeyCode::Char('n'))),
        Some(Action::OpenPrompt(PromptKind::NewFile(FileTemplate::Module)))
    );
    assert_eq!(action_for_key(state, key(KeyCode::F(8))), Some(Action::Compile));
    assert_eq!(action_for_key(state, key(KeyCode::F(5))), Some(Action::Run));
    assert_eq!(
        action_for_key(state, key(KeyCode::F(6))),
        Some(Action::SetProgramKind(ProgramKind::Module))
    );
    assert_eq!(
        action_for_key(state, key(KeyCode::F(9))),
        Some(Action::SetPanelVisible {
            panel: Panel::FileToolbar,
            visible: !state.window.layout().file_toolbar_visible,
        })
    );
}

#[test]
fn editor_keys_become_edits() {
    let store = workspace_store();
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Char('a'))),
        Some(Action::Edit(EditAction::Insert('a')))
    );
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Enter)),
        Some(Action::Edit(EditAction::Newline))
    );
}

#[test]
fn prompt_captures_text_keys() {
    let mut store = workspace_store();
    store.dispatch(Action::OpenPrompt(PromptKind::Open));
    let state = store.state();
    assert_eq!(
        action_for_key(state, key(KeyCode::Char('q'))),
        Some(Action::PromptAppend('q'))
    );
    assert_eq!(
        action_for_key(state, key(KeyCode::Tab)),
        Some(Action::PromptCycleFilter)
    );
    assert_eq!(action_for_key(state, key(KeyCode::Esc)), Some(Action::PromptCancel));
    assert_eq!(action_for_key(state, ctrl('q')), None);
}

#[test]
fn quit_confirmation_takes_yes_or_no() {
    let mut store = workspace_store();
    store.dispatch(Action::Quit);
    let state = store.state();
    assert_eq!(
        action_for_key(state, key(KeyCode::Char('y'))),
        Some(Action::ConfirmQuit(true))
    );
    assert_eq!(
        action_for_key(state, key(KeyCode::Esc)),
        Some(Action::ConfirmQuit(false))
    );
    assert_eq!(action_for_key(state, key(KeyCode::F(8))), None);
}

#[test]
fn focus_cycle_skips_hidden_panels() {
    let mut store = workspace_store();
    store.dispatch(Action::SetPanelVisible {
        panel: Panel::Logs,
        visible: false,
    });
    store.dispatch(Action::SetPanelVisible {
        panel: Panel::Navigation,
        visible: true,
    });
    assert_eq!(next_focus(store.state()), FocusTarget::Navigation);

    store.dispatch(Action::SetFocus(FocusTarget::Navigation));
    assert_eq!(next_focus(store.state()), FocusTarget::Editor);
}

#[test]
fn bottom_panel_sort_keys_toggle_order() {
    let mut store = workspace_store();
    store.dispatch(Action::SetFocus(FocusTarget::BottomPanel));
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Char('1'))),
        Some(Action::SortDiagnostics {
            column: DiagnosticColumn::Location,
            order: SortOrder::Descending,
        })
    );
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Char('2'))),
        Some(Action::SortDiagnostics {
            column: DiagnosticColumn::Severity,
            order: SortOrder::Ascending,
        })
    );
    assert_eq!(
        action_for_key(store.state(), key(KeyCode::Right)),
        Some(Action::BottomPanelSetActiveTab(BottomPanelTab::Console))
    );
}
