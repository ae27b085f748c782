use std::path::PathBuf;

use super::compile::CompileRequest;
use super::services::ports::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFile(PathBuf),
    WriteFile {
        path: PathBuf,
        content: String,
        revision: u64,
    },
    /// Creates a new file from a template, then opens it.
    CreateFile {
        path: PathBuf,
        content: String,
    },
    StartCompile(CompileRequest),
    RunProgram {
        program: PathBuf,
        cwd: PathBuf,
    },
    SaveSettings(Settings),
    Quit,
}
