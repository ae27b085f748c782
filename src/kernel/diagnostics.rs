use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticIcon {
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based; `None` when the message is not tied to a line.
    pub line: Option<u32>,
    pub severity: Severity,
    pub message: String,
    pub icon: Option<DiagnosticIcon>,
}

pub const COMPILATION_SUCCEEDED: &str = "Compilation succeeded";
pub const COMPILATION_FAILED: &str = "Compilation failed";

impl Diagnostic {
    pub fn new(path: PathBuf, line: Option<u32>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            path,
            line,
            severity,
            message: message.into(),
            icon: None,
        }
    }

    /// Summary row emitted once per compiled file.
    pub fn compile_summary(path: PathBuf, success: bool) -> Self {
        if success {
            Self {
                icon: Some(DiagnosticIcon::Accept),
                ..Self::new(path, None, Severity::Info, COMPILATION_SUCCEEDED)
            }
        } else {
            Self::new(path, None, Severity::Error, COMPILATION_FAILED)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticColumn {
    Location = 0,
    Severity = 1,
    Message = 2,
}

impl DiagnosticColumn {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Location),
            1 => Some(Self::Severity),
            2 => Some(Self::Message),
            _ => None,
        }
    }

    fn compare(self, a: &Diagnostic, b: &Diagnostic) -> Ordering {
        match self {
            Self::Location => a
                .path
                .as_os_str()
                .cmp(b.path.as_os_str())
                .then(a.line.cmp(&b.line)),
            Self::Severity => a.severity.cmp(&b.severity),
            Self::Message => a.message.cmp(&b.message),
        }
    }
}

/// Where activating a diagnostic should take the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: PathBuf,
    pub line: Option<u32>,
}

/// The compiler-message table.
///
/// While sorting is disabled rows keep emission order; enabling it re-sorts by the
/// last requested column and keeps later appends in sorted position.
#[derive(Debug)]
pub struct DiagnosticsSink {
    items: Vec<Diagnostic>,
    sorting_enabled: bool,
    sort: (DiagnosticColumn, SortOrder),
    selected_index: usize,
    view_height: usize,
    scroll_offset: usize,
}

impl Default for DiagnosticsSink {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sorting_enabled: true,
            sort: (DiagnosticColumn::Location, SortOrder::Ascending),
            selected_index: 0,
            view_height: 0,
            scroll_offset: 0,
        }
    }
}

impl DiagnosticsSink {
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sorting_enabled(&self) -> bool {
        self.sorting_enabled
    }

    pub fn sort_key(&self) -> (DiagnosticColumn, SortOrder) {
        self.sort
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn append(&mut self, diagnostic: Diagnostic) {
        if !self.sorting_enabled {
            self.items.push(diagnostic);
            return;
        }
        let (column, order) = self.sort;
        let at = self.items.partition_point(|existing| {
            let ord = column.compare(existing, &diagnostic);
            match order {
                SortOrder::Ascending => ord != Ordering::Greater,
                SortOrder::Descending => ord != Ordering::Less,
            }
        });
        self.items.insert(at, diagnostic);
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        changed
    }

    pub fn set_sorting_enabled(&mut self, enabled: bool) {
        if self.sorting_enabled == enabled {
            return;
        }
        self.sorting_enabled = enabled;
        if enabled {
            self.apply_sort();
        }
    }

    /// Stable sort: rows with equal keys keep their emission order.
    pub fn sort_by_column(&mut self, column: DiagnosticColumn, order: SortOrder) {
        self.sort = (column, order);
        self.apply_sort();
    }

    pub fn activate(&self, index: usize) -> Option<NavigationTarget> {
        self.items.get(index).map(|item| NavigationTarget {
            path: item.path.clone(),
            line: item.line,
        })
    }

    pub fn activate_selected(&self) -> Option<NavigationTarget> {
        self.activate(self.selected_index)
    }

    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.severity == Severity::Error)
            .count()
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.clamp_scroll();
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() || delta == 0 {
            return false;
        }

        let prev = self.selected_index;
        let len = self.items.len();

        if delta < 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = len - 1;
            }
        } else if self.selected_index + 1 < len {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }

        self.keep_row_visible(self.selected_index);
        self.selected_index != prev
    }

    fn apply_sort(&mut self) {
        let (column, order) = self.sort;
        self.items.sort_by(|a, b| match order {
            SortOrder::Ascending => column.compare(a, b),
            SortOrder::Descending => column.compare(b, a),
        });
        self.selected_index = self.selected_index.min(self.items.len().saturating_sub(1));
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.items.len().saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row: usize) {
        let view_height = self.view_height.max(1);
        if row < self.scroll_offset {
            self.scroll_offset = row;
            return;
        }
        if row >= self.scroll_offset + view_height {
            self.scroll_offset = row.saturating_add(1).saturating_sub(view_height);
        }
        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/diagnostics.rs"]
mod tests;
