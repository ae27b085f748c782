use std::path::{Path, PathBuf};

use crate::kernel::diagnostics::Diagnostic;
use crate::kernel::document::ProgramKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    /// Exit status of the toolchain; 0 means success.
    pub status: i32,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub path: PathBuf,
    pub kind: ProgramKind,
}

impl Dependency {
    pub fn new(path: impl Into<PathBuf>, kind: ProgramKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Blocking compiler invocation. Failures are reported through the output, never as `Err`.
pub trait SourceCompiler: Send + Sync {
    fn compile(&self, path: &Path, kind: ProgramKind) -> CompileOutput;
}

/// Files that must be compiled before `path`, in the order they must be compiled.
pub trait DependencyResolver: Send + Sync {
    fn resolve(&self, path: &Path) -> Vec<Dependency>;
}
