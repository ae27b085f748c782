//! Home / Workspace presentation state machine.

use super::services::ports::{Geometry, Settings, Size};

pub const HOME_SIZE: Size = Size::new(700, 400);
pub const WORKSPACE_MIN_SIZE: Size = Size::new(900, 700);

pub fn welcome_message() -> String {
    format!("OpenCobolIDE v.{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Home,
    Workspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    FileToolbar,
    CodeToolbar,
    Navigation,
    Logs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayout {
    pub size: Size,
    pub min_size: Size,
    pub geometry: Option<Geometry>,
    pub maximized: bool,
    pub fullscreen: bool,
    pub menu_bar_visible: bool,
    pub file_toolbar_visible: bool,
    pub code_toolbar_visible: bool,
    pub navigation_visible: bool,
    pub logs_visible: bool,
    pub status_message: Option<String>,
}

impl WindowLayout {
    pub fn panel_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::FileToolbar => self.file_toolbar_visible,
            Panel::CodeToolbar => self.code_toolbar_visible,
            Panel::Navigation => self.navigation_visible,
            Panel::Logs => self.logs_visible,
        }
    }

    fn panel_slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::FileToolbar => &mut self.file_toolbar_visible,
            Panel::CodeToolbar => &mut self.code_toolbar_visible,
            Panel::Navigation => &mut self.navigation_visible,
            Panel::Logs => &mut self.logs_visible,
        }
    }
}

#[derive(Debug)]
pub struct WindowModeController {
    mode: WindowMode,
    layout: WindowLayout,
    was_maximised: bool,
    prev_size: Size,
    saved_navigation_visible: bool,
    saved_logs_visible: bool,
    window_state: Option<String>,
}

impl WindowModeController {
    /// Restores the persisted layout and starts in `Home`.
    pub fn new(settings: &Settings) -> Self {
        let mut controller = Self {
            mode: WindowMode::Home,
            layout: WindowLayout {
                size: settings.size,
                min_size: HOME_SIZE,
                geometry: settings.geometry,
                maximized: false,
                fullscreen: settings.fullscreen,
                menu_bar_visible: false,
                file_toolbar_visible: false,
                code_toolbar_visible: false,
                navigation_visible: false,
                logs_visible: false,
                status_message: None,
            },
            was_maximised: settings.maximised,
            prev_size: settings.size,
            saved_navigation_visible: settings.navigation_panel_visible,
            saved_logs_visible: settings.log_panel_visible,
            window_state: settings.state.clone(),
        };
        controller.apply_home_layout();
        controller
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn layout(&self) -> &WindowLayout {
        &self.layout
    }

    /// Returns `false` when already in `Workspace`.
    pub fn enter_workspace(&mut self) -> bool {
        if self.mode == WindowMode::Workspace {
            return false;
        }
        self.mode = WindowMode::Workspace;

        let layout = &mut self.layout;
        layout.menu_bar_visible = true;
        layout.file_toolbar_visible = true;
        layout.code_toolbar_visible = true;
        layout.min_size = WORKSPACE_MIN_SIZE;
        if self.was_maximised {
            layout.maximized = true;
        } else {
            layout.maximized = false;
            layout.size = self.prev_size.clamped_to(WORKSPACE_MIN_SIZE);
        }
        layout.status_message = None;
        layout.navigation_visible = self.saved_navigation_visible;
        layout.logs_visible = self.saved_logs_visible;

        tracing::debug!(size = ?layout.size, maximized = layout.maximized, "entered workspace mode");
        true
    }

    /// Returns `false` when already in `Home`. The caller owns clearing the console.
    pub fn enter_home(&mut self) -> bool {
        if self.mode == WindowMode::Home {
            return false;
        }
        self.prev_size = self.layout.size;
        self.was_maximised = self.layout.maximized;
        self.saved_navigation_visible = self.layout.navigation_visible;
        self.saved_logs_visible = self.layout.logs_visible;

        self.mode = WindowMode::Home;
        self.apply_home_layout();
        tracing::debug!(prev_size = ?self.prev_size, "entered home mode");
        true
    }

    pub fn resize(&mut self, size: Size) -> bool {
        let size = size.clamped_to(self.layout.min_size);
        if self.layout.size == size {
            return false;
        }
        self.layout.size = size;
        if let Some(geometry) = self.layout.geometry.as_mut() {
            geometry.width = size.width;
            geometry.height = size.height;
        }
        true
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        let size = self.layout.size;
        let next = Geometry {
            x,
            y,
            width: size.width,
            height: size.height,
        };
        if self.layout.geometry == Some(next) {
            return false;
        }
        self.layout.geometry = Some(next);
        true
    }

    pub fn set_maximized(&mut self, maximized: bool) -> bool {
        if self.mode == WindowMode::Home || self.layout.maximized == maximized {
            return false;
        }
        self.layout.maximized = maximized;
        true
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        if self.layout.fullscreen == fullscreen {
            return false;
        }
        self.layout.fullscreen = fullscreen;
        true
    }

    /// View-menu toggles; the menu check state reads back from the layout.
    pub fn set_panel_visible(&mut self, panel: Panel, visible: bool) -> bool {
        if self.mode == WindowMode::Home {
            return false;
        }
        let slot = self.layout.panel_slot(panel);
        if *slot == visible {
            return false;
        }
        *slot = visible;
        true
    }

    pub fn set_window_state(&mut self, state: Option<String>) {
        self.window_state = state;
    }

    /// Copies the workspace layout into `settings`. Skipped in `Home`: the persisted
    /// layout always describes the workspace.
    pub fn write_settings(&self, settings: &mut Settings) -> bool {
        if self.mode != WindowMode::Workspace {
            return false;
        }
        let layout = &self.layout;
        settings.geometry = layout.geometry;
        settings.state = self.window_state.clone();
        settings.maximised = layout.maximized;
        settings.size = layout.size;
        settings.navigation_panel_visible = layout.navigation_visible;
        settings.log_panel_visible = layout.logs_visible;
        settings.fullscreen = layout.fullscreen;
        true
    }

    fn apply_home_layout(&mut self) {
        let layout = &mut self.layout;
        layout.min_size = HOME_SIZE;
        layout.size = HOME_SIZE;
        layout.maximized = false;
        layout.menu_bar_visible = false;
        layout.file_toolbar_visible = false;
        layout.code_toolbar_visible = false;
        layout.navigation_visible = false;
        layout.logs_visible = false;
        layout.status_message = Some(welcome_message());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/mode.rs"]
mod tests;
