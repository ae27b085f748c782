//! Document outline for the navigation panel.

use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Division,
    Section,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub name: String,
    pub kind: NodeKind,
    /// 1-based.
    pub line: u32,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    fn new(name: impl Into<String>, kind: NodeKind, line: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub name: String,
    pub kind: NodeKind,
    pub line: u32,
}

const EXPANDED_DEPTH: usize = 1;
const PARAGRAPH_STOPWORDS: &[&str] = &["EXIT", "GOBACK", "CONTINUE", "END-IF", "END-PERFORM"];

static DIVISION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9-]*)\s+DIVISION\b").expect("Invalid division regex")
});

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9][A-Z0-9-]*)\s+SECTION\s*\.").expect("Invalid section regex")
});

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9][A-Z0-9-]*)\s*\.\s*$").expect("Invalid paragraph regex")
});

static PROGRAM_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PROGRAM-ID\s*\.\s*([A-Z0-9][A-Z0-9-]*)").expect("Invalid program-id regex")
});

/// Fixed-format indicator column (7) or a free-format `*>` comment.
pub(crate) fn is_comment(line: &str) -> bool {
    if line.trim_start().starts_with("*>") {
        return true;
    }
    let mut chars = line.chars();
    let sequence_area_ok = chars
        .by_ref()
        .take(6)
        .all(|c| c.is_ascii_digit() || c == ' ');
    sequence_area_ok && matches!(chars.next(), Some('*') | Some('/'))
}

/// Builds the division / section / paragraph outline of a COBOL source text.
///
/// Returns `None` when the text holds no division header.
pub fn analyse_outline(text: &str, fallback_name: &str) -> Option<DocumentNode> {
    let mut root = DocumentNode::new(fallback_name, NodeKind::Program, 1);
    let mut saw_division = false;
    let mut in_procedure = false;

    for (idx, raw) in text.lines().enumerate() {
        if is_comment(raw) {
            continue;
        }
        let line_no = idx as u32 + 1;
        let upper = raw.trim().to_ascii_uppercase();
        if upper.is_empty() {
            continue;
        }

        if let Some(caps) = PROGRAM_ID_RE.captures(&upper) {
            root.name = caps[1].to_string();
            continue;
        }
        if let Some(caps) = DIVISION_RE.captures(&upper) {
            let name = format!("{} DIVISION", &caps[1]);
            in_procedure = &caps[1] == "PROCEDURE";
            saw_division = true;
            root.children.push(DocumentNode::new(name, NodeKind::Division, line_no));
            continue;
        }
        let Some(division) = root.children.last_mut() else {
            continue;
        };
        if let Some(caps) = SECTION_RE.captures(&upper) {
            division.children.push(DocumentNode::new(
                format!("{} SECTION", &caps[1]),
                NodeKind::Section,
                line_no,
            ));
            continue;
        }
        if !in_procedure {
            continue;
        }
        if let Some(caps) = PARAGRAPH_RE.captures(&upper) {
            let name = caps[1].to_string();
            if PARAGRAPH_STOPWORDS.contains(&name.as_str()) {
                continue;
            }
            let paragraph = DocumentNode::new(name, NodeKind::Paragraph, line_no);
            match division.children.last_mut() {
                Some(section) if section.kind == NodeKind::Section => section.children.push(paragraph),
                _ => division.children.push(paragraph),
            }
        }
    }

    saw_division.then_some(root)
}

/// Navigation panel: the last outline shown plus a selection cursor.
#[derive(Debug, Default)]
pub struct NavigationState {
    root: Option<DocumentNode>,
    rows: Vec<OutlineRow>,
    selected_index: usize,
}

impl NavigationState {
    pub fn root(&self) -> Option<&DocumentNode> {
        self.root.as_ref()
    }

    /// Visible rows. The root and its direct children are expanded; anything nested
    /// under a section stays collapsed.
    pub fn rows(&self) -> &[OutlineRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Replaces the tree only when the new root differs from the current one.
    pub fn update(&mut self, root: DocumentNode) -> bool {
        if self.root.as_ref() == Some(&root) {
            return false;
        }
        self.rows.clear();
        flatten(&root, 0, &mut self.rows);
        self.root = Some(root);
        self.selected_index = self.selected_index.min(self.rows.len().saturating_sub(1));
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.root.is_none() {
            return false;
        }
        self.root = None;
        self.rows.clear();
        self.selected_index = 0;
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }
        let prev = self.selected_index;
        let max = self.rows.len() as isize - 1;
        self.selected_index = (self.selected_index as isize + delta).clamp(0, max) as usize;
        self.selected_index != prev
    }

    /// Line of the selected node.
    pub fn activate_selected(&self) -> Option<u32> {
        self.rows.get(self.selected_index).map(|row| row.line)
    }
}

fn flatten(node: &DocumentNode, depth: usize, out: &mut Vec<OutlineRow>) {
    out.push(OutlineRow {
        depth,
        name: node.name.clone(),
        kind: node.kind,
        line: node.line,
    });
    if depth > EXPANDED_DEPTH {
        return;
    }
    for child in &node.children {
        flatten(child, depth + 1, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/navigation.rs"]
mod tests;
