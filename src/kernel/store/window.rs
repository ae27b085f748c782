use crate::kernel::{Action, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_window_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::WindowResized(size) => DispatchResult::changed(self.state.window.resize(size)),
            Action::WindowMoved { x, y } => DispatchResult::changed(self.state.window.move_to(x, y)),
            Action::SetMaximized(maximized) => {
                DispatchResult::changed(self.state.window.set_maximized(maximized))
            }
            Action::ToggleFullscreen => {
                let fullscreen = !self.state.window.layout().fullscreen;
                DispatchResult::changed(self.state.window.set_fullscreen(fullscreen))
            }
            Action::SetPanelVisible { panel, visible } => {
                DispatchResult::changed(self.state.window.set_panel_visible(panel, visible))
            }
            Action::ClearRecentFiles => {
                DispatchResult::changed(self.state.settings.clear_recent_files())
            }
            Action::Quit => {
                if self.state.ui.confirm_quit {
                    return DispatchResult::changed(false);
                }
                self.state.ui.confirm_quit = true;
                DispatchResult::changed(true)
            }
            Action::ConfirmQuit(confirmed) => {
                if !self.state.ui.confirm_quit {
                    return DispatchResult::changed(false);
                }
                self.state.ui.confirm_quit = false;
                if !confirmed {
                    return DispatchResult::changed(true);
                }
                DispatchResult::with_effects(true, self.quit_effects())
            }
            Action::CloseRequested => DispatchResult::with_effects(false, self.quit_effects()),
            _ => DispatchResult::changed(false),
        }
    }

    fn quit_effects(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(snapshot) = self.state.settings_snapshot() {
            effects.push(Effect::SaveSettings(snapshot));
        }
        effects.push(Effect::Quit);
        effects
    }
}
