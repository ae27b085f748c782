//! Body of a compile job.
//!
//! The job runs on the background compile slot and never touches kernel state: progress
//! leaves through the `emit` callback and the outcome is returned. The runtime reports
//! `Finished` only after the slot has been released.

use std::path::PathBuf;

use super::diagnostics::Diagnostic;
use super::document::ProgramKind;
use super::services::ports::{Dependency, DependencyResolver, SourceCompiler};

/// Buffer contents that must hit the disk before the compiler reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub content: String,
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub path: PathBuf,
    pub kind: ProgramKind,
    pub pending_writes: Vec<PendingWrite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitResult {
    pub path: PathBuf,
    pub kind: ProgramKind,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    pub target: UnitResult,
    pub dependencies: Vec<UnitResult>,
}

impl CompileOutcome {
    pub fn dependencies_ok(&self) -> bool {
        self.dependencies.iter().all(|dep| dep.success)
    }

    /// Aggregate status of the job: every dependency and the target itself.
    pub fn success(&self) -> bool {
        self.dependencies_ok() && self.target.success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileEvent {
    DocumentSaved {
        path: PathBuf,
        success: bool,
        revision: u64,
    },
    MessageReady(Diagnostic),
    Finished(CompileOutcome),
}

pub fn run_compile_job(
    request: CompileRequest,
    compiler: &dyn SourceCompiler,
    resolver: &dyn DependencyResolver,
    mut emit: impl FnMut(CompileEvent),
) -> CompileOutcome {
    for write in &request.pending_writes {
        let success = match std::fs::write(&write.path, &write.content) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(path = %write.path.display(), error = %e, "flush before compile failed");
                false
            }
        };
        emit(CompileEvent::DocumentSaved {
            path: write.path.clone(),
            success,
            revision: write.revision,
        });
    }

    let dependencies = resolver.resolve(&request.path);
    tracing::info!(
        path = %request.path.display(),
        kind = request.kind.label(),
        dependencies = dependencies.len(),
        "compile job started"
    );

    let mut results = Vec::with_capacity(dependencies.len());
    for Dependency { path, kind } in dependencies {
        let success = compile_unit(compiler, path.clone(), kind, &mut emit);
        results.push(UnitResult {
            path,
            kind,
            success,
        });
    }

    let target_success = compile_unit(compiler, request.path.clone(), request.kind, &mut emit);
    let outcome = CompileOutcome {
        target: UnitResult {
            path: request.path,
            kind: request.kind,
            success: target_success,
        },
        dependencies: results,
    };

    tracing::info!(
        path = %outcome.target.path.display(),
        success = outcome.success(),
        "compile job finished"
    );
    outcome
}

fn compile_unit(
    compiler: &dyn SourceCompiler,
    path: PathBuf,
    kind: ProgramKind,
    emit: &mut impl FnMut(CompileEvent),
) -> bool {
    let output = compiler.compile(&path, kind);
    let success = output.success();
    if !success {
        tracing::debug!(path = %path.display(), status = output.status, "compiler reported failure");
    }
    for diagnostic in output.diagnostics {
        emit(CompileEvent::MessageReady(diagnostic));
    }
    emit(CompileEvent::MessageReady(Diagnostic::compile_summary(path, success)));
    success
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/compile.rs"]
mod tests;
