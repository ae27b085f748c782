//! Path rules shared by the open/save dialogs, the editor host and the compiler adapter.

use std::path::{Path, PathBuf};

use super::document::ProgramKind;

pub const COBOL_EXTENSIONS: &[&str] = &["cbl", "CBL", "cob", "COB"];
pub const DEFAULT_COBOL_EXTENSION: &str = "cob";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFilter {
    #[default]
    Cobol,
    OtherText,
}

impl FileFilter {
    pub const ALL: [FileFilter; 2] = [FileFilter::Cobol, FileFilter::OtherText];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cobol => "Cobol files (*.cbl *.CBL *.cob *.COB)",
            Self::OtherText => "Other text files (*)",
        }
    }

    pub fn matches(self, path: &Path) -> bool {
        match self {
            Self::Cobol => is_cobol_path(path),
            Self::OtherText => true,
        }
    }
}

pub fn is_cobol_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cbl") || ext.eq_ignore_ascii_case("cob"))
}

/// Appends `.cob` to an extension-less path when the Cobol filter was active.
pub fn apply_default_extension(path: PathBuf, filter: FileFilter) -> PathBuf {
    if path.as_os_str().is_empty() || path.extension().is_some() {
        return path;
    }
    match filter {
        FileFilter::Cobol => path.with_extension(DEFAULT_COBOL_EXTENSION),
        FileFilter::OtherText => path,
    }
}

/// Location of the artifact the compiler produces for `source`.
pub fn output_path(source: &Path, kind: ProgramKind) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    let suffix = match kind {
        ProgramKind::Executable if cfg!(windows) => ".exe",
        ProgramKind::Executable => "",
        ProgramKind::Module if cfg!(windows) => ".dll",
        ProgramKind::Module => ".so",
    };
    name.push(suffix);
    source.with_file_name(name)
}

/// Working directory for a launched artifact: its containing directory.
pub fn working_dir(artifact: &Path) -> PathBuf {
    match artifact.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTemplate {
    Program,
    Module,
    Empty,
}

impl FileTemplate {
    pub fn label(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Module => "Module",
            Self::Empty => "Empty",
        }
    }

    pub fn program_kind(self) -> ProgramKind {
        match self {
            Self::Module => ProgramKind::Module,
            Self::Program | Self::Empty => ProgramKind::Executable,
        }
    }

    /// Source text for a new file; `program_id` is derived from the file stem.
    pub fn render(self, program_id: &str) -> String {
        let id = program_id.to_ascii_uppercase();
        match self {
            Self::Program => format!(
                "      * Author:\n      * Date:\n      * Purpose:\n       IDENTIFICATION DIVISION.\n       PROGRAM-ID. {id}.\n       DATA DIVISION.\n       FILE SECTION.\n       WORKING-STORAGE SECTION.\n       PROCEDURE DIVISION.\n       MAIN-PROCEDURE.\n            DISPLAY \"Hello world\"\n            STOP RUN.\n       END PROGRAM {id}.\n"
            ),
            Self::Module => format!(
                "      * Author:\n      * Date:\n      * Purpose:\n       IDENTIFICATION DIVISION.\n       PROGRAM-ID. {id}.\n       DATA DIVISION.\n       WORKING-STORAGE SECTION.\n       LINKAGE SECTION.\n       PROCEDURE DIVISION.\n       MAIN-PROCEDURE.\n            DISPLAY \"Hello world\"\n            EXIT PROGRAM.\n       END PROGRAM {id}.\n"
            ),
            Self::Empty => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
