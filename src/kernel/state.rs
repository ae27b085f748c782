use std::path::PathBuf;

use super::action::PromptKind;
use super::compile::CompileOutcome;
use super::console::ConsoleState;
use super::diagnostics::DiagnosticsSink;
use super::document::ProgramKind;
use super::editor_host::EditorHost;
use super::files::FileFilter;
use super::mode::{WindowMode, WindowModeController};
use super::navigation::NavigationState;
use super::services::ports::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Editor,
    Navigation,
    BottomPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BottomPanelTab {
    #[default]
    Compiler,
    Console,
    Logs,
}

impl BottomPanelTab {
    pub const ALL: [BottomPanelTab; 3] = [
        BottomPanelTab::Compiler,
        BottomPanelTab::Console,
        BottomPanelTab::Logs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Compiler => "Compiler",
            Self::Console => "Console",
            Self::Logs => "Logs",
        }
    }

    pub fn cycle(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0) as isize;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

/// Enabled state of the user-facing actions (menu entries / toolbar buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    pub compile: bool,
    pub run: bool,
    pub save: bool,
    pub program_kind: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
    pub filter: FileFilter,
}

impl PromptState {
    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Open => "Open a file",
            PromptKind::SaveAs => "Save file as...",
            PromptKind::NewFile(_) => "New file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningDialog {
    pub title: String,
    pub message: String,
}

/// Cursor move waiting for a file that is still loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub path: PathBuf,
    pub line: Option<u32>,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    pub bottom_panel_tab: BottomPanelTab,
    pub prompt: Option<PromptState>,
    pub confirm_quit: bool,
    pub warning: Option<WarningDialog>,
    pub pending_navigation: Option<PendingNavigation>,
    /// Program kind for a file created from a template, applied once it loads.
    pub pending_program_kind: Option<(PathBuf, ProgramKind)>,
}

#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub editors: EditorHost,
    pub diagnostics: DiagnosticsSink,
    pub navigation: NavigationState,
    pub console: ConsoleState,
    pub window: WindowModeController,
    pub triggers: Triggers,
    pub compile_in_flight: bool,
    pub program_running: bool,
    pub last_compile: Option<CompileOutcome>,
    pub ui: UiState,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let window = WindowModeController::new(&settings);
        Self {
            settings,
            editors: EditorHost::default(),
            diagnostics: DiagnosticsSink::default(),
            navigation: NavigationState::default(),
            console: ConsoleState::default(),
            window,
            triggers: Triggers::default(),
            compile_in_flight: false,
            program_running: false,
            last_compile: None,
            ui: UiState::default(),
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.window.mode()
    }

    /// Layout snapshot for persistence; `None` in `Home` mode.
    pub fn settings_snapshot(&self) -> Option<Settings> {
        let mut settings = self.settings.clone();
        self.window
            .write_settings(&mut settings)
            .then_some(settings)
    }
}
