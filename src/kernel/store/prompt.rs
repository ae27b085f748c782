use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::kernel::action::PromptKind;
use crate::kernel::files::FileFilter;
use crate::kernel::state::PromptState;
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_prompt_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenPrompt(kind) => {
                if kind == PromptKind::SaveAs && self.state.editors.active().is_none() {
                    return DispatchResult::changed(false);
                }
                let input = self.initial_prompt_input(kind);
                self.state.ui.prompt = Some(PromptState {
                    kind,
                    input,
                    filter: FileFilter::default(),
                });
                DispatchResult::changed(true)
            }
            Action::PromptAppend(ch) => match self.state.ui.prompt.as_mut() {
                Some(prompt) => {
                    prompt.input.push(ch);
                    DispatchResult::changed(true)
                }
                None => DispatchResult::changed(false),
            },
            Action::PromptBackspace => match self.state.ui.prompt.as_mut() {
                Some(prompt) => DispatchResult::changed(prompt.input.pop().is_some()),
                None => DispatchResult::changed(false),
            },
            Action::PromptCycleFilter => match self.state.ui.prompt.as_mut() {
                Some(prompt) => {
                    prompt.filter = match prompt.filter {
                        FileFilter::Cobol => FileFilter::OtherText,
                        FileFilter::OtherText => FileFilter::Cobol,
                    };
                    DispatchResult::changed(true)
                }
                None => DispatchResult::changed(false),
            },
            Action::PromptSubmit => {
                let Some(prompt) = self.state.ui.prompt.take() else {
                    return DispatchResult::changed(false);
                };
                let raw = prompt.input.trim();
                if raw.is_empty() {
                    return DispatchResult::changed(true);
                }
                let path = PathBuf::from(raw);
                let mut result = match prompt.kind {
                    PromptKind::Open => self.open_path(path),
                    PromptKind::SaveAs => self.save_as(path, prompt.filter),
                    PromptKind::NewFile(template) => {
                        self.dispatch(Action::NewFile { path, template })
                    }
                };
                result.state_changed = true;
                result
            }
            Action::PromptCancel => {
                DispatchResult::changed(self.state.ui.prompt.take().is_some())
            }
            Action::DismissWarning => {
                DispatchResult::changed(self.state.ui.warning.take().is_some())
            }
            _ => DispatchResult::changed(false),
        }
    }

    fn initial_prompt_input(&self, kind: PromptKind) -> String {
        if kind == PromptKind::SaveAs {
            if let Some(doc) = self.state.editors.active() {
                return doc.path().display().to_string();
            }
        }
        match self.state.settings.dialog_dir() {
            Some(dir) => {
                let mut input = dir.display().to_string();
                if !input.ends_with(MAIN_SEPARATOR) {
                    input.push(MAIN_SEPARATOR);
                }
                input
            }
            None => String::new(),
        }
    }
}
