use std::path::PathBuf;

use super::compile::CompileOutcome;
use super::console::ConsoleStream;
use super::diagnostics::{Diagnostic, DiagnosticColumn, SortOrder};
use super::document::ProgramKind;
use super::files::{FileFilter, FileTemplate};
use super::mode::Panel;
use super::services::ports::Size;
use super::state::{BottomPanelTab, FocusTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Newline,
    Backspace,
    MoveCursor { lines: isize, columns: isize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Files and tabs.
    OpenPath(PathBuf),
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadFailed {
        path: PathBuf,
        error: String,
    },
    NewFile {
        path: PathBuf,
        template: FileTemplate,
    },
    FileCreated {
        path: PathBuf,
    },
    FileCreateFailed {
        path: PathBuf,
        error: String,
    },
    Save,
    SaveAs {
        path: PathBuf,
        filter: FileFilter,
    },
    FileSaved {
        path: PathBuf,
        success: bool,
        /// Document revision the written content was taken from.
        revision: u64,
    },
    SetActiveTab(usize),
    CycleTab(isize),
    CloseTab(usize),
    CloseActiveTab,
    Edit(EditAction),
    SetProgramKind(ProgramKind),

    // Compile / run.
    Compile,
    CompileRejected,
    CompilerMessage(Diagnostic),
    CompilationFinished(CompileOutcome),
    Run,
    ConsoleOutput {
        stream: ConsoleStream,
        text: String,
    },
    ProgramFinished {
        status: Option<i32>,
    },

    // Panels.
    DiagnosticsMoveSelection(isize),
    DiagnosticsSetViewHeight(usize),
    ActivateDiagnostic(usize),
    ActivateSelectedDiagnostic,
    SortDiagnostics {
        column: DiagnosticColumn,
        order: SortOrder,
    },
    NavigationMoveSelection(isize),
    ActivateNavigationNode,
    BottomPanelSetActiveTab(BottomPanelTab),
    SetFocus(FocusTarget),

    // Window.
    WindowResized(Size),
    WindowMoved {
        x: i32,
        y: i32,
    },
    SetMaximized(bool),
    ToggleFullscreen,
    SetPanelVisible {
        panel: Panel,
        visible: bool,
    },
    ClearRecentFiles,

    // Prompts and dialogs.
    OpenPrompt(PromptKind),
    PromptAppend(char),
    PromptBackspace,
    PromptCycleFilter,
    PromptSubmit,
    PromptCancel,
    DismissWarning,
    Quit,
    ConfirmQuit(bool),
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
    NewFile(FileTemplate),
}
