use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Workbench;
use crate::kernel::{
    Action, AppState, BottomPanelTab, DiagnosticColumn, EditAction, FileTemplate, FocusTarget,
    Panel, ProgramKind, PromptKind, SortOrder, WindowMode,
};

impl Workbench {
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match action_for_key(self.state(), key) {
            Some(action) => self.dispatch_kernel(action),
            None => false,
        }
    }
}

/// Maps a key press to a kernel action. Modal overlays (quit confirmation, warnings,
/// prompts) take every key while they are shown.
pub(super) fn action_for_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if state.ui.confirm_quit {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmQuit(true))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Action::ConfirmQuit(false))
            }
            _ => None,
        };
    }
    if state.ui.warning.is_some() {
        return matches!(key.code, KeyCode::Enter | KeyCode::Esc).then_some(Action::DismissWarning);
    }
    if state.ui.prompt.is_some() {
        return prompt_key(key);
    }
    if let Some(action) = global_key(state, key) {
        return Some(action);
    }

    match state.mode() {
        WindowMode::Home => home_key(state, key),
        WindowMode::Workspace => match state.ui.focus {
            FocusTarget::Editor => editor_key(key),
            FocusTarget::Navigation => navigation_key(key),
            FocusTarget::BottomPanel => bottom_panel_key(state, key),
        },
    }
}

fn prompt_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::PromptSubmit),
        KeyCode::Esc => Some(Action::PromptCancel),
        KeyCode::Backspace => Some(Action::PromptBackspace),
        KeyCode::Tab => Some(Action::PromptCycleFilter),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::PromptAppend(ch))
        }
        _ => None,
    }
}

fn global_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let layout = state.window.layout();

    let action = match key.code {
        KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char('o') if ctrl => Action::OpenPrompt(PromptKind::Open),
        KeyCode::Char('n') if ctrl => Action::OpenPrompt(PromptKind::NewFile(FileTemplate::Program)),
        KeyCode::Char('n') if alt => Action::OpenPrompt(PromptKind::NewFile(FileTemplate::Module)),
        KeyCode::Char('e') if alt => Action::OpenPrompt(PromptKind::NewFile(FileTemplate::Empty)),
        KeyCode::Char('s') if ctrl => Action::Save,
        KeyCode::Char('s') if alt => Action::OpenPrompt(PromptKind::SaveAs),
        KeyCode::Char('w') if ctrl => Action::CloseActiveTab,
        KeyCode::Left if alt => Action::CycleTab(-1),
        KeyCode::Right if alt => Action::CycleTab(1),
        KeyCode::F(8) => Action::Compile,
        KeyCode::F(5) => Action::Run,
        KeyCode::F(6) => {
            let current = state.editors.active()?.program_kind();
            Action::SetProgramKind(match current {
                ProgramKind::Executable => ProgramKind::Module,
                ProgramKind::Module => ProgramKind::Executable,
            })
        }
        KeyCode::F(11) => Action::ToggleFullscreen,
        KeyCode::F(2) => Action::SetPanelVisible {
            panel: Panel::Navigation,
            visible: !layout.navigation_visible,
        },
        KeyCode::F(3) => Action::SetPanelVisible {
            panel: Panel::Logs,
            visible: !layout.logs_visible,
        },
        KeyCode::F(9) => Action::SetPanelVisible {
            panel: Panel::FileToolbar,
            visible: !layout.file_toolbar_visible,
        },
        KeyCode::F(10) => Action::SetPanelVisible {
            panel: Panel::CodeToolbar,
            visible: !layout.code_toolbar_visible,
        },
        KeyCode::F(4) => Action::SetFocus(next_focus(state)),
        _ => return None,
    };
    Some(action)
}

fn next_focus(state: &AppState) -> FocusTarget {
    let layout = state.window.layout();
    let order = [
        FocusTarget::Editor,
        FocusTarget::Navigation,
        FocusTarget::BottomPanel,
    ];
    let visible = |target: FocusTarget| match target {
        FocusTarget::Editor => true,
        FocusTarget::Navigation => layout.navigation_visible,
        FocusTarget::BottomPanel => layout.logs_visible,
    };
    let start = order
        .iter()
        .position(|target| *target == state.ui.focus)
        .unwrap_or(0);
    (1..=order.len())
        .map(|offset| order[(start + offset) % order.len()])
        .find(|target| visible(*target))
        .unwrap_or(FocusTarget::Editor)
}

fn home_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::ClearRecentFiles)
        }
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10)? as usize - 1;
            let path = state.settings.recent_files.get(index)?;
            Some(Action::OpenPath(path.clone()))
        }
        _ => None,
    }
}

fn editor_key(key: KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let edit = match key.code {
        KeyCode::Char(ch) => EditAction::Insert(ch),
        KeyCode::Tab => EditAction::Insert('\t'),
        KeyCode::Enter => EditAction::Newline,
        KeyCode::Backspace => EditAction::Backspace,
        KeyCode::Up => EditAction::MoveCursor { lines: -1, columns: 0 },
        KeyCode::Down => EditAction::MoveCursor { lines: 1, columns: 0 },
        KeyCode::Left => EditAction::MoveCursor { lines: 0, columns: -1 },
        KeyCode::Right => EditAction::MoveCursor { lines: 0, columns: 1 },
        KeyCode::PageUp => EditAction::MoveCursor { lines: -20, columns: 0 },
        KeyCode::PageDown => EditAction::MoveCursor { lines: 20, columns: 0 },
        _ => return None,
    };
    Some(Action::Edit(edit))
}

fn navigation_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::NavigationMoveSelection(-1)),
        KeyCode::Down => Some(Action::NavigationMoveSelection(1)),
        KeyCode::Enter => Some(Action::ActivateNavigationNode),
        KeyCode::Esc => Some(Action::SetFocus(FocusTarget::Editor)),
        _ => None,
    }
}

fn bottom_panel_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let tab = state.ui.bottom_panel_tab;
    match key.code {
        KeyCode::Left => return Some(Action::BottomPanelSetActiveTab(tab.cycle(-1))),
        KeyCode::Right => return Some(Action::BottomPanelSetActiveTab(tab.cycle(1))),
        KeyCode::Esc => return Some(Action::SetFocus(FocusTarget::Editor)),
        _ => {}
    }
    if tab != BottomPanelTab::Compiler {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::DiagnosticsMoveSelection(-1)),
        KeyCode::Down => Some(Action::DiagnosticsMoveSelection(1)),
        KeyCode::Enter => Some(Action::ActivateSelectedDiagnostic),
        KeyCode::Char(ch @ '1'..='3') => {
            let column = DiagnosticColumn::from_index(ch.to_digit(10)? as usize - 1)?;
            let (current, order) = state.diagnostics.sort_key();
            let order = if current == column && order == SortOrder::Ascending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            Some(Action::SortDiagnostics { column, order })
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench_input.rs"]
mod tests;
