use super::*;
use crate::kernel::diagnostics::{Severity, COMPILATION_FAILED, COMPILATION_SUCCEEDED};
use crate::kernel::services::ports::CompileOutput;
use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

/// Fails every path listed in `failing`; records the compile order.
#[derive(Default)]
struct ScriptedCompiler {
    failing: Vec<PathBuf>,
    calls: Mutex<Vec<(PathBuf, ProgramKind)>>,
}

impl SourceCompiler for ScriptedCompiler {
    fn compile(&self, path: &Path, kind: ProgramKind) -> CompileOutput {
        self.calls.lock().unwrap().push((path.to_path_buf(), kind));
        if self.failing.iter().any(|p| p == path) {
            CompileOutput {
                status: 1,
                diagnostics: vec![Diagnostic::new(
                    path.to_path_buf(),
                    Some(7),
                    Severity::Error,
                    "syntax error",
                )],
            }
        } else {
            CompileOutput {
                status: 0,
                diagnostics: Vec::new(),
            }
        }
    }
}

struct FixedDeps(Vec<Dependency>);

impl DependencyResolver for FixedDeps {
    fn resolve(&self, _path: &Path) -> Vec<Dependency> {
        self.0.clone()
    }
}

fn request(path: &str, kind: ProgramKind) -> CompileRequest {
    CompileRequest {
        path: PathBuf::from(path),
        kind,
        pending_writes: Vec::new(),
    }
}

fn collect(
    request: CompileRequest,
    compiler: &ScriptedCompiler,
    resolver: &FixedDeps,
) -> (CompileOutcome, Vec<CompileEvent>) {
    let mut events = Vec::new();
    let outcome = run_compile_job(request, compiler, resolver, |event| events.push(event));
    (outcome, events)
}

#[test]
fn single_file_success_emits_only_the_summary() {
    let compiler = ScriptedCompiler::default();
    let (outcome, events) = collect(
        request("/w/foo.cob", ProgramKind::Executable),
        &compiler,
        &FixedDeps(Vec::new()),
    );

    assert!(outcome.success());
    assert_eq!(events.len(), 1);
    match &events[0] {
        CompileEvent::MessageReady(d) => {
            assert_eq!(d.message, COMPILATION_SUCCEEDED);
            assert_eq!(d.severity, Severity::Info);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(!events
        .iter()
        .any(|event| matches!(event, CompileEvent::Finished(_))));
}

#[test]
fn dependencies_compile_first_in_resolver_order() {
    let compiler = ScriptedCompiler::default();
    let resolver = FixedDeps(vec![
        Dependency::new("/w/leaf.cob", ProgramKind::Module),
        Dependency::new("/w/mid.cob", ProgramKind::Module),
    ]);
    let (outcome, _) = collect(
        request("/w/main.cob", ProgramKind::Executable),
        &compiler,
        &resolver,
    );

    let calls = compiler.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            (PathBuf::from("/w/leaf.cob"), ProgramKind::Module),
            (PathBuf::from("/w/mid.cob"), ProgramKind::Module),
            (PathBuf::from("/w/main.cob"), ProgramKind::Executable),
        ]
    );
    assert_eq!(outcome.dependencies.len(), 2);
    assert!(outcome.success());
}

#[test]
fn failed_dependency_does_not_stop_the_job() {
    let compiler = ScriptedCompiler {
        failing: vec![PathBuf::from("/w/leaf.cob")],
        ..ScriptedCompiler::default()
    };
    let resolver = FixedDeps(vec![Dependency::new("/w/leaf.cob", ProgramKind::Module)]);
    let (outcome, events) = collect(
        request("/w/main.cob", ProgramKind::Executable),
        &compiler,
        &resolver,
    );

    assert_eq!(compiler.calls.lock().unwrap().len(), 2);
    assert!(!outcome.dependencies_ok());
    assert!(outcome.target.success);
    assert!(!outcome.success());

    let messages: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            CompileEvent::MessageReady(d) => Some(d.message.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        messages,
        ["syntax error", COMPILATION_FAILED, COMPILATION_SUCCEEDED]
    );
}

#[test]
fn failed_target_fails_the_job() {
    let compiler = ScriptedCompiler {
        failing: vec![PathBuf::from("/w/main.cob")],
        ..ScriptedCompiler::default()
    };
    let (outcome, events) = collect(
        request("/w/main.cob", ProgramKind::Executable),
        &compiler,
        &FixedDeps(Vec::new()),
    );

    assert!(outcome.dependencies_ok());
    assert!(!outcome.success());
    assert!(matches!(
        events.last(),
        Some(CompileEvent::MessageReady(d)) if d.message == COMPILATION_FAILED
    ));
}

#[test]
fn pending_writes_are_flushed_before_compiling() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("prog.cob");
    std::fs::write(&source, "old").unwrap();

    let mut req = request(source.to_str().unwrap(), ProgramKind::Executable);
    req.pending_writes.push(PendingWrite {
        path: source.clone(),
        content: "new".to_string(),
        revision: 3,
    });

    let compiler = ScriptedCompiler::default();
    let (_, events) = collect(req, &compiler, &FixedDeps(Vec::new()));

    assert_eq!(std::fs::read_to_string(&source).unwrap(), "new");
    assert_eq!(
        events[0],
        CompileEvent::DocumentSaved {
            path: source,
            success: true,
            revision: 3,
        }
    );
}

#[test]
fn unwritable_pending_write_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir").join("prog.cob");
    let mut req = request("/w/main.cob", ProgramKind::Executable);
    req.pending_writes.push(PendingWrite {
        path: missing.clone(),
        content: String::new(),
        revision: 0,
    });

    let compiler = ScriptedCompiler::default();
    let (_, events) = collect(req, &compiler, &FixedDeps(Vec::new()));
    assert_eq!(
        events[0],
        CompileEvent::DocumentSaved {
            path: missing,
            success: false,
            revision: 0,
        }
    );
}
