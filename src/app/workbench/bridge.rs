use super::Workbench;
use crate::kernel::services::adapters::{save_settings, save_settings_to, RuntimeError};
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl Workbench {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) -> bool {
        match effect {
            KernelEffect::LoadFile(path) => {
                self.runtime.load_file(path);
                false
            }
            KernelEffect::WriteFile {
                path,
                content,
                revision,
            } => {
                self.runtime.write_file(path, content, revision);
                false
            }
            KernelEffect::CreateFile { path, content } => {
                self.runtime.create_file(path, content);
                false
            }
            KernelEffect::StartCompile(request) => match self.runtime.start_compile(request) {
                Ok(()) => false,
                Err(RuntimeError::CompileSlotBusy) => {
                    self.dispatch_kernel(KernelAction::CompileRejected)
                }
                Err(e) => {
                    tracing::error!(error = %e, "start compile failed");
                    self.dispatch_kernel(KernelAction::CompileRejected)
                }
            },
            KernelEffect::RunProgram { program, cwd } => {
                self.runtime.run_program(program, cwd);
                false
            }
            KernelEffect::SaveSettings(settings) => {
                let result = match self.settings_path.as_deref() {
                    Some(path) => save_settings_to(path, &settings).map(|()| path.to_path_buf()),
                    None => save_settings(&settings),
                };
                match result {
                    Ok(path) => tracing::debug!(path = %path.display(), "settings saved"),
                    Err(e) => tracing::error!(error = %e, "save settings failed"),
                }
                false
            }
            KernelEffect::Quit => {
                self.should_quit = true;
                true
            }
        }
    }
}
