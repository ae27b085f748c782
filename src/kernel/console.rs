use std::collections::VecDeque;

const DEFAULT_SCROLLBACK_LINES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub stream: ConsoleStream,
    pub text: String,
}

/// Output of the last launched program.
#[derive(Debug)]
pub struct ConsoleState {
    lines: VecDeque<ConsoleLine>,
    scrollback: usize,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::with_scrollback(DEFAULT_SCROLLBACK_LINES)
    }
}

impl ConsoleState {
    pub fn with_scrollback(scrollback: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            scrollback: scrollback.max(1),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, stream: ConsoleStream, text: impl Into<String>) {
        if self.lines.len() == self.scrollback {
            self.lines.pop_front();
        }
        self.lines.push_back(ConsoleLine {
            stream,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.lines.is_empty();
        self.lines.clear();
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/console.rs"]
mod tests;
