//! Dependency resolution from static `CALL` statements.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::kernel::document::ProgramKind;
use crate::kernel::files::COBOL_EXTENSIONS;
use crate::kernel::navigation::is_comment;
use crate::kernel::services::ports::{Dependency, DependencyResolver};

static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bCALL\s+['"]([A-Za-z0-9_-]+)['"]"#).expect("Invalid CALL regex")
});

/// Resolves `CALL "NAME"` targets to sibling `NAME.cob`/`NAME.cbl` sources, transitively.
///
/// Dependencies come back deepest first, each at most once; the target itself is never
/// part of the list. Callees whose source cannot be found are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallScanResolver;

impl CallScanResolver {
    pub fn new() -> Self {
        Self
    }

    fn visit(&self, path: &Path, visited: &mut FxHashSet<PathBuf>, out: &mut Vec<Dependency>) {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot scan dependencies");
                return;
            }
        };
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        for callee in called_programs(&text) {
            let Some(callee_path) = locate_source(dir, &callee) else {
                tracing::debug!(program = %callee, "callee source not found");
                continue;
            };
            if !visited.insert(callee_path.clone()) {
                continue;
            }
            self.visit(&callee_path, visited, out);
            out.push(Dependency::new(callee_path, ProgramKind::Module));
        }
    }
}

impl DependencyResolver for CallScanResolver {
    fn resolve(&self, path: &Path) -> Vec<Dependency> {
        let mut visited = FxHashSet::default();
        visited.insert(path.to_path_buf());
        let mut out = Vec::new();
        self.visit(path, &mut visited, &mut out);
        out
    }
}

/// Program names referenced by literal `CALL` statements, in source order, de-duplicated.
pub fn called_programs(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut names = Vec::new();
    for line in text.lines().filter(|line| !is_comment(line)) {
        for caps in CALL_RE.captures_iter(line) {
            let name = caps[1].to_string();
            if seen.insert(name.to_ascii_uppercase()) {
                names.push(name);
            }
        }
    }
    names
}

fn locate_source(dir: &Path, program: &str) -> Option<PathBuf> {
    let variants = [
        program.to_string(),
        program.to_ascii_lowercase(),
        program.to_ascii_uppercase(),
    ];
    variants.iter().find_map(|name| {
        COBOL_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/dependencies.rs"]
mod tests;
