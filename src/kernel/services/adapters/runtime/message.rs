use std::path::PathBuf;

use crate::kernel::compile::CompileEvent;
use crate::kernel::console::ConsoleStream;
use crate::kernel::Action;

/// Results of background work, drained by the foreground thread.
#[derive(Debug)]
pub enum AppMessage {
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileError {
        path: PathBuf,
        error: String,
    },
    FileSaved {
        path: PathBuf,
        success: bool,
        revision: u64,
    },
    FileCreated {
        path: PathBuf,
    },
    FileCreateError {
        path: PathBuf,
        error: String,
    },
    Compile(CompileEvent),
    /// The compile job died before reporting `Finished`.
    CompileAborted,
    ConsoleOutput {
        stream: ConsoleStream,
        text: String,
    },
    ProgramFinished {
        status: Option<i32>,
    },
}

impl AppMessage {
    pub fn into_action(self) -> Action {
        match self {
            Self::FileLoaded { path, content } => Action::FileLoaded { path, content },
            Self::FileError { path, error } => Action::FileLoadFailed { path, error },
            Self::FileSaved {
                path,
                success,
                revision,
            } => Action::FileSaved {
                path,
                success,
                revision,
            },
            Self::FileCreated { path } => Action::FileCreated { path },
            Self::FileCreateError { path, error } => Action::FileCreateFailed { path, error },
            Self::Compile(CompileEvent::DocumentSaved {
                path,
                success,
                revision,
            }) => Action::FileSaved {
                path,
                success,
                revision,
            },
            Self::Compile(CompileEvent::MessageReady(diagnostic)) => {
                Action::CompilerMessage(diagnostic)
            }
            Self::Compile(CompileEvent::Finished(outcome)) => Action::CompilationFinished(outcome),
            Self::CompileAborted => Action::CompileRejected,
            Self::ConsoleOutput { stream, text } => Action::ConsoleOutput { stream, text },
            Self::ProgramFinished { status } => Action::ProgramFinished { status },
        }
    }
}
