use std::path::PathBuf;

use super::diagnostics::NavigationTarget;
use super::document::ProgramKind;
use super::files::{apply_default_extension, FileFilter};
use super::navigation::analyse_outline;
use super::state::{PendingNavigation, WarningDialog};
use super::{Action, AppState, EditAction, Effect, FocusTarget};

mod compile;
mod prompt;
mod window;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn with_effects(state_changed: bool, effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed,
        }
    }
}

/// Foreground owner of all kernel state. Every mutation goes through [`Store::dispatch`];
/// background work reports back as actions.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenPath(path) => self.open_path(path),
            Action::FileLoaded { path, content } => self.file_loaded(path, content),
            Action::FileLoadFailed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "open failed");
                if self
                    .state
                    .ui
                    .pending_navigation
                    .as_ref()
                    .is_some_and(|pending| pending.path == path)
                {
                    self.state.ui.pending_navigation = None;
                }
                self.state.ui.warning = Some(WarningDialog {
                    title: "File does not exist".to_string(),
                    message: format!(
                        "Cannot open file {}, the file does not exist.",
                        path.display()
                    ),
                });
                DispatchResult::changed(true)
            }
            Action::NewFile { path, template } => {
                let path = apply_default_extension(path, FileFilter::Cobol);
                if path.as_os_str().is_empty() {
                    return DispatchResult::changed(false);
                }
                let program_id = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.state.ui.pending_program_kind = Some((path.clone(), template.program_kind()));
                DispatchResult::with_effects(
                    false,
                    vec![Effect::CreateFile {
                        content: template.render(&program_id),
                        path,
                    }],
                )
            }
            Action::FileCreated { path } => {
                DispatchResult::with_effects(false, vec![Effect::LoadFile(path)])
            }
            Action::FileCreateFailed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "create failed");
                self.state.ui.pending_program_kind = None;
                self.state.ui.warning = Some(WarningDialog {
                    title: "Cannot create file".to_string(),
                    message: format!("Cannot create file {}: {}", path.display(), error),
                });
                DispatchResult::changed(true)
            }
            Action::Save => {
                let Some(doc) = self.state.editors.active() else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::with_effects(
                    false,
                    vec![Effect::WriteFile {
                        path: doc.path().to_path_buf(),
                        content: doc.text(),
                        revision: doc.revision(),
                    }],
                )
            }
            Action::SaveAs { path, filter } => self.save_as(path, filter),
            Action::FileSaved {
                path,
                success,
                revision,
            } => {
                if !success {
                    self.state.ui.warning = Some(WarningDialog {
                        title: "Cannot save file".to_string(),
                        message: format!("Failed to write {}.", path.display()),
                    });
                    return DispatchResult::changed(true);
                }
                let changed = self.state.editors.mark_saved(&path, revision);
                self.refresh_active();
                DispatchResult::changed(changed)
            }
            Action::SetActiveTab(index) => {
                let changed = self.state.editors.set_active(index);
                if changed {
                    self.refresh_active();
                }
                DispatchResult::changed(changed)
            }
            Action::CycleTab(delta) => {
                let changed = self.state.editors.cycle(delta);
                if changed {
                    self.refresh_active();
                }
                DispatchResult::changed(changed)
            }
            Action::CloseTab(index) => self.close_tab(index),
            Action::CloseActiveTab => match self.state.editors.active_index() {
                Some(index) => self.close_tab(index),
                None => DispatchResult::changed(false),
            },
            Action::Edit(edit) => self.edit(edit),
            Action::SetProgramKind(kind) => self.set_program_kind(kind),

            Action::Compile
            | Action::CompileRejected
            | Action::CompilerMessage(_)
            | Action::CompilationFinished(_)
            | Action::Run
            | Action::ConsoleOutput { .. }
            | Action::ProgramFinished { .. } => self.reduce_compile_action(action),

            Action::DiagnosticsMoveSelection(delta) => {
                DispatchResult::changed(self.state.diagnostics.move_selection(delta))
            }
            Action::DiagnosticsSetViewHeight(height) => {
                DispatchResult::changed(self.state.diagnostics.set_view_height(height))
            }
            Action::ActivateDiagnostic(index) => match self.state.diagnostics.activate(index) {
                Some(target) => self.navigate_to(target),
                None => DispatchResult::changed(false),
            },
            Action::ActivateSelectedDiagnostic => {
                match self.state.diagnostics.activate_selected() {
                    Some(target) => self.navigate_to(target),
                    None => DispatchResult::changed(false),
                }
            }
            Action::SortDiagnostics { column, order } => {
                self.state.diagnostics.sort_by_column(column, order);
                DispatchResult::changed(true)
            }
            Action::NavigationMoveSelection(delta) => {
                DispatchResult::changed(self.state.navigation.move_selection(delta))
            }
            Action::ActivateNavigationNode => {
                let Some(line) = self.state.navigation.activate_selected() else {
                    return DispatchResult::changed(false);
                };
                let Some(doc) = self.state.editors.active_mut() else {
                    return DispatchResult::changed(false);
                };
                let mut changed = doc.goto_line(line);
                changed |= self.set_focus(FocusTarget::Editor);
                DispatchResult::changed(changed)
            }
            Action::BottomPanelSetActiveTab(tab) => {
                let prev = self.state.ui.bottom_panel_tab;
                self.state.ui.bottom_panel_tab = tab;
                DispatchResult::changed(prev != tab)
            }
            Action::SetFocus(target) => DispatchResult::changed(self.set_focus(target)),

            Action::WindowResized(_)
            | Action::WindowMoved { .. }
            | Action::SetMaximized(_)
            | Action::ToggleFullscreen
            | Action::SetPanelVisible { .. }
            | Action::ClearRecentFiles
            | Action::Quit
            | Action::ConfirmQuit(_)
            | Action::CloseRequested => self.reduce_window_action(action),

            Action::OpenPrompt(_)
            | Action::PromptAppend(_)
            | Action::PromptBackspace
            | Action::PromptCycleFilter
            | Action::PromptSubmit
            | Action::PromptCancel
            | Action::DismissWarning => self.reduce_prompt_action(action),
        }
    }

    fn open_path(&mut self, path: PathBuf) -> DispatchResult {
        if path.as_os_str().is_empty() {
            return DispatchResult::changed(false);
        }
        if let Some(index) = self.state.editors.find(&path) {
            let changed = self.state.editors.set_active(index);
            self.refresh_active();
            return DispatchResult::changed(changed);
        }
        DispatchResult::with_effects(false, vec![Effect::LoadFile(path)])
    }

    fn file_loaded(&mut self, path: PathBuf, content: String) -> DispatchResult {
        self.state.settings.last_file_path = Some(path.clone());
        self.state.settings.push_recent_file(path.clone());

        let index = self.state.editors.open(path.clone(), &content).index();
        if let Some((pending_path, kind)) = self.state.ui.pending_program_kind.take() {
            if pending_path == path {
                if let Some(doc) = self.state.editors.get_mut(index) {
                    doc.set_program_kind(kind);
                }
            }
        }
        if let Some(pending) = self.state.ui.pending_navigation.take() {
            if pending.path == path {
                if let (Some(line), Some(doc)) = (pending.line, self.state.editors.get_mut(index)) {
                    doc.goto_line(line);
                }
            } else {
                self.state.ui.pending_navigation = Some(pending);
            }
        }

        self.state.window.enter_workspace();
        self.state.ui.focus = FocusTarget::Editor;
        self.refresh_active();
        DispatchResult::changed(true)
    }

    fn save_as(&mut self, path: PathBuf, filter: FileFilter) -> DispatchResult {
        let path = apply_default_extension(path, filter);
        if path.as_os_str().is_empty() {
            return DispatchResult::changed(false);
        }
        let Some(doc) = self.state.editors.active_mut() else {
            return DispatchResult::changed(false);
        };
        doc.set_path(path.clone());
        let content = doc.text();
        let revision = doc.revision();
        self.state.settings.last_file_path = Some(path.clone());
        self.state.settings.push_recent_file(path.clone());
        self.refresh_active();
        DispatchResult::with_effects(
            true,
            vec![Effect::WriteFile {
                path,
                content,
                revision,
            }],
        )
    }

    fn close_tab(&mut self, index: usize) -> DispatchResult {
        let Some(closed) = self.state.editors.close(index) else {
            return DispatchResult::changed(false);
        };
        tracing::debug!(path = %closed.document.path().display(), "tab closed");

        let mut effects = Vec::new();
        if closed.last_tab_closed {
            if let Some(snapshot) = self.state.settings_snapshot() {
                effects.push(Effect::SaveSettings(snapshot));
            }
            if self.state.window.enter_home() {
                self.state.console.clear();
            }
        }
        self.refresh_active();
        DispatchResult::with_effects(true, effects)
    }

    fn edit(&mut self, edit: EditAction) -> DispatchResult {
        let Some(doc) = self.state.editors.active_mut() else {
            return DispatchResult::changed(false);
        };
        let changed = match edit {
            EditAction::Insert(ch) => {
                doc.insert_char(ch);
                true
            }
            EditAction::Newline => {
                doc.insert_char('\n');
                true
            }
            EditAction::Backspace => doc.backspace(),
            EditAction::MoveCursor { lines, columns } => {
                return DispatchResult::changed(doc.move_cursor(lines, columns));
            }
        };
        if changed {
            self.refresh_active();
        }
        DispatchResult::changed(changed)
    }

    fn set_program_kind(&mut self, kind: ProgramKind) -> DispatchResult {
        if !self.state.triggers.program_kind {
            return DispatchResult::changed(false);
        }
        let Some(doc) = self.state.editors.active_mut() else {
            return DispatchResult::changed(false);
        };
        let changed = doc.set_program_kind(kind);
        self.refresh_active();
        DispatchResult::changed(changed)
    }

    /// Switches to (or opens) the diagnostic's file and moves the cursor to its line.
    fn navigate_to(&mut self, target: NavigationTarget) -> DispatchResult {
        let Some(index) = self.state.editors.find(&target.path) else {
            self.state.ui.pending_navigation = Some(PendingNavigation {
                path: target.path.clone(),
                line: target.line,
            });
            return DispatchResult::with_effects(false, vec![Effect::LoadFile(target.path)]);
        };

        let mut changed = self.state.editors.set_active(index);
        if let (Some(line), Some(doc)) = (target.line, self.state.editors.get_mut(index)) {
            changed |= doc.goto_line(line);
        }
        changed |= self.set_focus(FocusTarget::Editor);
        self.refresh_active();
        DispatchResult::changed(changed)
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        let prev = self.state.ui.focus;
        self.state.ui.focus = target;
        prev != target
    }

    /// Re-derives triggers and the navigation tree from the active document.
    fn refresh_active(&mut self) {
        let busy_compiling = self.state.compile_in_flight;
        let program_running = self.state.program_running;

        let (triggers, outline) = match self.state.editors.active() {
            Some(doc) if doc.is_cobol() => (
                super::Triggers {
                    compile: !busy_compiling,
                    run: doc.program_kind().can_run() && !busy_compiling && !program_running,
                    save: doc.is_dirty(),
                    program_kind: true,
                },
                analyse_outline(&doc.text(), &doc.title()),
            ),
            Some(doc) => (
                super::Triggers {
                    save: doc.is_dirty(),
                    ..super::Triggers::default()
                },
                None,
            ),
            None => (super::Triggers::default(), None),
        };

        self.state.triggers = triggers;
        match outline {
            Some(root) => {
                self.state.navigation.update(root);
            }
            None => {
                self.state.navigation.clear();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
