//! Headless application core (state/action/effect).

pub mod action;
pub mod compile;
pub mod console;
pub mod diagnostics;
pub mod document;
pub mod editor_host;
pub mod effect;
pub mod files;
pub mod mode;
pub mod navigation;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, EditAction, PromptKind};
pub use compile::{CompileEvent, CompileOutcome, CompileRequest, PendingWrite, UnitResult};
pub use console::{ConsoleLine, ConsoleState, ConsoleStream};
pub use diagnostics::{
    Diagnostic, DiagnosticColumn, DiagnosticIcon, DiagnosticsSink, NavigationTarget, Severity,
    SortOrder,
};
pub use document::{CursorPos, Document, EditorKind, ProgramKind};
pub use editor_host::{EditorHost, OpenOutcome};
pub use effect::Effect;
pub use files::{FileFilter, FileTemplate};
pub use mode::{Panel, WindowLayout, WindowMode, WindowModeController};
pub use navigation::{DocumentNode, NavigationState, NodeKind};
pub use state::{
    AppState, BottomPanelTab, FocusTarget, PromptState, Triggers, UiState, WarningDialog,
};
pub use store::{DispatchResult, Store};
