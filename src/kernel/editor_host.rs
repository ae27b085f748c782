use std::path::{Path, PathBuf};

use super::compile::PendingWrite;
use super::document::Document;

/// Tabbed collection of open documents. At most one tab per path.
#[derive(Debug, Default)]
pub struct EditorHost {
    tabs: Vec<Document>,
    active: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(usize),
    AlreadyOpen(usize),
}

impl OpenOutcome {
    pub fn index(self) -> usize {
        match self {
            Self::Opened(index) | Self::AlreadyOpen(index) => index,
        }
    }
}

#[derive(Debug)]
pub struct ClosedTab {
    pub document: Document,
    pub last_tab_closed: bool,
}

impl EditorHost {
    pub fn tabs(&self) -> &[Document] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Document> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    pub fn active_mut(&mut self) -> Option<&mut Document> {
        self.active.and_then(|index| self.tabs.get_mut(index))
    }

    pub fn find(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|doc| doc.path() == path)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Document> {
        self.tabs.get_mut(index)
    }

    /// Opens `path` in a new tab, or focuses the tab that already shows it.
    pub fn open(&mut self, path: PathBuf, content: &str) -> OpenOutcome {
        if let Some(index) = self.find(&path) {
            self.active = Some(index);
            return OpenOutcome::AlreadyOpen(index);
        }
        self.tabs.push(Document::new(path, content));
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        OpenOutcome::Opened(index)
    }

    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn cycle(&mut self, delta: isize) -> bool {
        let len = self.tabs.len();
        let Some(current) = self.active else {
            return false;
        };
        if len < 2 {
            return false;
        }
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        self.set_active(next)
    }

    pub fn close(&mut self, index: usize) -> Option<ClosedTab> {
        if index >= self.tabs.len() {
            return None;
        }
        let document = self.tabs.remove(index);
        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) => Some(active.min(self.tabs.len() - 1)),
            None => None,
        };
        Some(ClosedTab {
            document,
            last_tab_closed: self.tabs.is_empty(),
        })
    }

    /// Snapshots of every dirty buffer, in tab order.
    pub fn pending_writes(&self) -> Vec<PendingWrite> {
        self.tabs
            .iter()
            .filter(|doc| doc.is_dirty())
            .map(|doc| PendingWrite {
                path: doc.path().to_path_buf(),
                content: doc.text(),
                revision: doc.revision(),
            })
            .collect()
    }

    pub fn mark_saved(&mut self, path: &Path, revision: u64) -> bool {
        match self.find(path) {
            Some(index) => self.tabs[index].mark_saved(revision),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor_host.rs"]
mod tests;
