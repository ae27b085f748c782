//! GnuCOBOL (`cobc`) compiler adapter.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use crate::kernel::diagnostics::{Diagnostic, Severity};
use crate::kernel::document::ProgramKind;
use crate::kernel::files::{output_path, working_dir};
use crate::kernel::services::ports::{CompileOutput, CompilerSettings, SourceCompiler};

static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<file>.+?):\s*(?P<line>\d+):\s*(?P<severity>[A-Za-z ]+?)\s*:\s*(?P<message>.*)$")
        .expect("Invalid compiler message regex")
});

#[derive(Debug, Clone)]
pub struct GnuCobolCompiler {
    command: String,
    extra_args: Vec<String>,
}

impl GnuCobolCompiler {
    pub fn new(settings: &CompilerSettings) -> Self {
        Self {
            command: settings.command.clone(),
            extra_args: settings.extra_args.clone(),
        }
    }

    fn build_command(&self, path: &Path, kind: ProgramKind) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.extra_args)
            .arg(match kind {
                ProgramKind::Executable => "-x",
                ProgramKind::Module => "-m",
            })
            .arg("-o")
            .arg(output_path(path, kind))
            .arg(path)
            .current_dir(working_dir(path));
        cmd
    }
}

impl SourceCompiler for GnuCobolCompiler {
    fn compile(&self, path: &Path, kind: ProgramKind) -> CompileOutput {
        let output = match self.build_command(path, kind).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(command = %self.command, error = %e, "spawn compiler failed");
                return CompileOutput {
                    status: -1,
                    diagnostics: vec![Diagnostic::new(
                        path.to_path_buf(),
                        None,
                        Severity::Error,
                        format!("Failed to launch compiler `{}`: {}", self.command, e),
                    )],
                };
            }
        };

        let status = output.status.code().unwrap_or(-1);
        let mut text = String::from_utf8_lossy(&output.stderr).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stdout));

        let mut diagnostics = parse_compiler_output(&text, path);
        if status != 0 && diagnostics.is_empty() && !text.trim().is_empty() {
            diagnostics.push(Diagnostic::new(
                path.to_path_buf(),
                None,
                Severity::Error,
                text.trim().to_string(),
            ));
        }
        tracing::debug!(path = %path.display(), status, messages = diagnostics.len(), "cobc finished");
        CompileOutput {
            status,
            diagnostics,
        }
    }
}

/// Parses `file:line: severity: message` lines. Relative file names are resolved against
/// the directory of `source`, where the compiler ran.
pub fn parse_compiler_output(text: &str, source: &Path) -> Vec<Diagnostic> {
    let base = working_dir(source);
    text.lines()
        .filter_map(|line| {
            let caps = MESSAGE_RE.captures(line.trim_end())?;
            let file = PathBuf::from(&caps["file"]);
            let path = if file.is_absolute() { file } else { base.join(file) };
            let line_no = caps["line"].parse::<u32>().ok()?;
            Some(Diagnostic::new(
                path,
                Some(line_no),
                severity_from_label(&caps["severity"]),
                caps["message"].trim().to_string(),
            ))
        })
        .collect()
}

fn severity_from_label(label: &str) -> Severity {
    let label = label.to_ascii_lowercase();
    if label.contains("warning") {
        Severity::Warning
    } else if label.contains("note") || label.contains("info") {
        Severity::Info
    } else {
        Severity::Error
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/cobc.rs"]
mod tests;
