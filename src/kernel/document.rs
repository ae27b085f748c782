use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::files::is_cobol_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgramKind {
    #[default]
    Executable,
    Module,
}

impl ProgramKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Executable => "Executable",
            Self::Module => "Module",
        }
    }

    pub fn can_run(self) -> bool {
        matches!(self, Self::Executable)
    }
}

/// Which editor flavour a document was opened with.
///
/// Only `Cobol` documents get outline analysis and the compile/run actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Cobol,
    Generic,
}

impl EditorKind {
    pub fn for_path(path: &Path) -> Self {
        if is_cobol_path(path) {
            Self::Cobol
        } else {
            Self::Generic
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPos {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    kind: EditorKind,
    program_kind: ProgramKind,
    rope: Rope,
    cursor: CursorPos,
    dirty: bool,
    /// Bumped on every buffer edit; a save confirmation only cleans the revision it wrote.
    revision: u64,
}

impl Document {
    pub fn new(path: PathBuf, content: &str) -> Self {
        let kind = EditorKind::for_path(&path);
        Self {
            path,
            kind,
            program_kind: ProgramKind::default(),
            rope: Rope::from_str(content),
            cursor: CursorPos::default(),
            dirty: false,
            revision: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn editor_kind(&self) -> EditorKind {
        self.kind
    }

    pub fn is_cobol(&self) -> bool {
        self.kind == EditorKind::Cobol
    }

    pub fn program_kind(&self) -> ProgramKind {
        self.program_kind
    }

    pub fn set_program_kind(&mut self, kind: ProgramKind) -> bool {
        if self.program_kind == kind {
            return false;
        }
        self.program_kind = kind;
        true
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the dirty flag if the buffer still holds `revision`. Edits made after the
    /// write was taken keep the document dirty.
    pub fn mark_saved(&mut self, revision: u64) -> bool {
        if revision != self.revision {
            return false;
        }
        std::mem::replace(&mut self.dirty, false)
    }

    /// Retargets the document after a "save as"; the editor kind follows the new extension.
    pub fn set_path(&mut self, path: PathBuf) {
        self.kind = EditorKind::for_path(&path);
        self.path = path;
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    /// Moves the cursor to a 1-based line, clamped to the buffer.
    pub fn goto_line(&mut self, line: u32) -> bool {
        let target = (line.max(1) as usize - 1).min(self.line_count() - 1);
        let prev = self.cursor;
        self.cursor = CursorPos {
            line: target,
            column: 0,
        };
        self.cursor != prev
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 0;
        } else {
            self.cursor.column += 1;
        }
        self.touch();
    }

    pub fn backspace(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx == 0 {
            return false;
        }
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else {
            self.cursor.line -= 1;
            self.cursor.column = self.line_len(self.cursor.line);
        }
        self.rope.remove(idx - 1..idx);
        self.touch();
        true
    }

    pub fn move_cursor(&mut self, dl: isize, dc: isize) -> bool {
        let prev = self.cursor;
        let max_line = self.line_count() - 1;
        let line = (self.cursor.line as isize + dl).clamp(0, max_line as isize) as usize;
        let col = if dl != 0 {
            self.cursor.column
        } else {
            (self.cursor.column as isize + dc).max(0) as usize
        };
        self.cursor = CursorPos {
            line,
            column: col.min(self.line_len(line)),
        };
        self.cursor != prev
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn cursor_char_idx(&self) -> usize {
        if self.rope.len_chars() == 0 {
            return 0;
        }
        let line = self.cursor.line.min(self.rope.len_lines() - 1);
        let col = self.cursor.column.min(self.line_len(line));
        self.rope.line_to_char(line) + col
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/document.rs"]
mod tests;
