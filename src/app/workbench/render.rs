use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::Workbench;
use crate::kernel::mode::welcome_message;
use crate::kernel::navigation::is_comment;
use crate::kernel::{
    Action, BottomPanelTab, ConsoleStream, DiagnosticColumn, DiagnosticIcon, FocusTarget,
    NodeKind, SortOrder, WindowMode,
};

const NAVIGATION_WIDTH: u16 = 30;
const BOTTOM_PANEL_HEIGHT: u16 = 12;
const GUTTER_WIDTH: u16 = 6;

impl Workbench {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.state().mode() {
            WindowMode::Home => self.render_home(frame, area),
            WindowMode::Workspace => self.render_workspace(frame, area),
        }

        self.render_prompt(frame, area);
        self.render_warning(frame, area);
        self.render_confirm_quit(frame, area);
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let welcome = state
            .window
            .layout()
            .status_message
            .clone()
            .unwrap_or_else(welcome_message);

        let mut lines = vec![
            Line::from(Span::styled(
                welcome,
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled("Recent files", Style::default().fg(theme.accent_fg))),
        ];
        if state.settings.recent_files.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(theme.muted_fg),
            )));
        }
        for (index, path) in state.settings.recent_files.iter().take(9).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  [{}] ", index + 1),
                    Style::default().fg(theme.accent_fg),
                ),
                Span::raw(path.display().to_string()),
            ]));
        }
        lines.push(Line::raw(""));
        for hint in [
            "Ctrl+N new program   Alt+N new module   Alt+E new empty file",
            "Ctrl+O open file     Alt+C clear recent files",
            "Ctrl+Q quit",
        ] {
            lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.muted_fg))));
        }

        let height = (lines.len() as u16).saturating_add(2).min(area.height);
        let width = 72.min(area.width);
        let home_area = centered(area, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.focus_border));
        frame.render_widget(Paragraph::new(lines).block(block), home_area);
    }

    fn render_workspace(&mut self, frame: &mut Frame, area: Rect) {
        let layout = self.state().window.layout().clone();
        let show_toolbar = !layout.fullscreen
            && (layout.menu_bar_visible || layout.file_toolbar_visible || layout.code_toolbar_visible);

        let mut constraints = Vec::with_capacity(5);
        if show_toolbar {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(3));
        if layout.logs_visible {
            constraints.push(Constraint::Length(BOTTOM_PANEL_HEIGHT));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        let mut rows = chunks.iter().copied();

        if show_toolbar {
            if let Some(toolbar) = rows.next() {
                self.render_toolbar(frame, toolbar);
            }
        }
        if let Some(tabs) = rows.next() {
            self.render_tabs(frame, tabs);
        }
        if let Some(main) = rows.next() {
            if layout.navigation_visible {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(NAVIGATION_WIDTH), Constraint::Min(10)])
                    .split(main);
                self.render_navigation(frame, cols[0]);
                self.render_editor(frame, cols[1]);
            } else {
                self.render_editor(frame, main);
            }
        }
        if layout.logs_visible {
            if let Some(panel) = rows.next() {
                self.render_bottom_panel(frame, panel);
            }
        }
        if let Some(status) = rows.next() {
            self.render_status(frame, status);
        }
    }

    fn render_toolbar(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let layout = state.window.layout();
        let triggers = state.triggers;

        let item = |label: String, enabled: bool| {
            let style = if enabled {
                Style::default().fg(theme.header_fg)
            } else {
                Style::default().fg(theme.muted_fg)
            };
            Span::styled(format!("[{label}] "), style)
        };

        let mut spans = Vec::new();
        if layout.file_toolbar_visible {
            spans.push(item("^N New".to_string(), true));
            spans.push(item("^O Open".to_string(), true));
            spans.push(item("^S Save".to_string(), triggers.save));
            spans.push(item("M-S Save as".to_string(), state.editors.active().is_some()));
        }
        if layout.code_toolbar_visible {
            spans.push(Span::raw("| "));
            spans.push(item("F8 Compile".to_string(), triggers.compile));
            spans.push(item("F5 Run".to_string(), triggers.run));
            let kind = state
                .editors
                .active()
                .map(|doc| doc.program_kind().label())
                .unwrap_or("-");
            spans.push(item(format!("F6 {kind}"), triggers.program_kind));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let active = state.editors.active_index();

        let mut spans = Vec::with_capacity(state.editors.len());
        for (index, doc) in state.editors.tabs().iter().enumerate() {
            let dirty = if doc.is_dirty() { "*" } else { "" };
            let label = format!(" {}{} ", doc.title(), dirty);
            let style = if Some(index) == active {
                Style::default()
                    .bg(theme.selected_bg)
                    .fg(theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_fg)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("|"));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let block = self.panel_block("Navigation", state.ui.focus == FocusTarget::Navigation);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = state.navigation.rows();
        let height = inner.height as usize;
        if height == 0 || rows.is_empty() {
            return;
        }
        let selected = state.navigation.selected_index();
        let top = selected.saturating_sub(height.saturating_sub(1));

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(top)
            .take(height)
            .map(|(index, row)| {
                let marker = match row.kind {
                    NodeKind::Program => "◆",
                    NodeKind::Division => "■",
                    NodeKind::Section => "▸",
                    NodeKind::Paragraph => "·",
                };
                let text = format!("{}{} {}", "  ".repeat(row.depth), marker, row.name);
                let style = if index == selected {
                    Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let focused = state.ui.focus == FocusTarget::Editor;
        let Some(doc) = state.editors.active() else {
            frame.render_widget(self.panel_block("Editor", focused), area);
            return;
        };

        let title = doc.path().display().to_string();
        let block = self.panel_block(&title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let height = inner.height as usize;
        if height == 0 || inner.width <= GUTTER_WIDTH {
            return;
        }

        let cursor = doc.cursor();
        let top = (cursor.line + 1).saturating_sub(height);
        let text_width = (inner.width - GUTTER_WIDTH) as usize;
        let left = (cursor.column + 1).saturating_sub(text_width);
        let cobol = doc.is_cobol();

        let lines: Vec<Line> = doc
            .rope()
            .lines()
            .enumerate()
            .skip(top)
            .take(height)
            .map(|(index, line)| {
                let raw: String = line
                    .chars()
                    .filter(|ch| *ch != '\n' && *ch != '\r')
                    .map(|ch| if ch == '\t' { ' ' } else { ch })
                    .collect();
                let visible: String = raw.chars().skip(left).take(text_width).collect();
                let style = if cobol && is_comment(&raw) {
                    Style::default().fg(theme.comment_fg)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", index + 1, width = GUTTER_WIDTH as usize - 1),
                        Style::default().fg(theme.muted_fg),
                    ),
                    Span::styled(visible, style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if focused && state.ui.prompt.is_none() {
            let x = inner.x + GUTTER_WIDTH + (cursor.column - left) as u16;
            let y = inner.y + (cursor.line - top) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    fn render_bottom_panel(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.state().ui.focus == FocusTarget::BottomPanel;
        let active_tab = self.state().ui.bottom_panel_tab;
        let title: String = BottomPanelTab::ALL
            .iter()
            .map(|tab| {
                if *tab == active_tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let block = self.panel_block(&title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match active_tab {
            BottomPanelTab::Compiler => {
                let view_height = inner.height.saturating_sub(1) as usize;
                if view_height > 0 {
                    self.dispatch_kernel(Action::DiagnosticsSetViewHeight(view_height));
                }
                self.render_diagnostics(frame, inner);
            }
            BottomPanelTab::Console => self.render_console(frame, inner),
            BottomPanelTab::Logs => {
                let height = inner.height as usize;
                let skip = self.logs.len().saturating_sub(height);
                let lines: Vec<Line> = self
                    .logs
                    .iter()
                    .skip(skip)
                    .map(|line| Line::raw(line.as_str()))
                    .collect();
                frame.render_widget(Paragraph::new(lines), inner);
            }
        }
    }

    fn render_diagnostics(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let sink = &state.diagnostics;
        let (sort_column, sort_order) = sink.sort_key();

        let header_label = |column: DiagnosticColumn, label: &str| {
            if !sink.is_sorting_enabled() || column != sort_column {
                return label.to_string();
            }
            match sort_order {
                SortOrder::Ascending => format!("{label} ▲"),
                SortOrder::Descending => format!("{label} ▼"),
            }
        };
        let header = Row::new(vec![
            Cell::from(header_label(DiagnosticColumn::Location, "1 Location")),
            Cell::from(header_label(DiagnosticColumn::Severity, "2 Severity")),
            Cell::from(header_label(DiagnosticColumn::Message, "3 Message")),
        ])
        .style(Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD));

        let selected = sink.selected_index();
        let view_height = area.height.saturating_sub(1) as usize;
        let rows: Vec<Row> = sink
            .items()
            .iter()
            .enumerate()
            .skip(sink.scroll_offset())
            .take(view_height)
            .map(|(index, diagnostic)| {
                let file = diagnostic
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| diagnostic.path.display().to_string());
                let location = match diagnostic.line {
                    Some(line) => format!("{file}:{line}"),
                    None => file,
                };
                let severity_style = if diagnostic.icon == Some(DiagnosticIcon::Accept) {
                    Style::default().fg(theme.success_fg)
                } else {
                    Style::default().fg(theme.severity_fg(diagnostic.severity))
                };
                let row = Row::new(vec![
                    Cell::from(location),
                    Cell::from(Span::styled(diagnostic.severity.label(), severity_style)),
                    Cell::from(diagnostic.message.clone()),
                ]);
                if index == selected {
                    row.style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(28),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header);
        frame.render_widget(table, area);
    }

    fn render_console(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;
        let height = area.height as usize;
        let skip = state.console.len().saturating_sub(height);
        let lines: Vec<Line> = state
            .console
            .lines()
            .skip(skip)
            .map(|line| match line.stream {
                ConsoleStream::Stdout => Line::raw(line.text.as_str()),
                ConsoleStream::Stderr => Line::from(Span::styled(
                    line.text.as_str(),
                    Style::default().fg(theme.error_fg),
                )),
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let theme = &self.theme;

        let text = if let Some(message) = state.window.layout().status_message.as_deref() {
            message.to_string()
        } else if let Some(doc) = state.editors.active() {
            let cursor = doc.cursor();
            let mut parts = vec![
                format!("{}{}", doc.title(), if doc.is_dirty() { " [+]" } else { "" }),
                format!("Ln {}, Col {}", cursor.line + 1, cursor.column + 1),
            ];
            if doc.is_cobol() {
                parts.push(doc.program_kind().label().to_string());
            }
            if state.compile_in_flight {
                parts.push("Compiling...".to_string());
            } else if let Some(outcome) = state.last_compile.as_ref() {
                parts.push(if outcome.success() {
                    "Build OK".to_string()
                } else {
                    format!("Build failed ({} errors)", state.diagnostics.error_count())
                });
            }
            if state.program_running {
                parts.push("Running".to_string());
            }
            parts.join(" | ")
        } else {
            "No file".to_string()
        };

        frame.render_widget(
            Paragraph::new(text).style(Style::default().bg(theme.status_bg).fg(theme.status_fg)),
            area,
        );
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let Some(prompt) = self.state().ui.prompt.as_ref() else {
            return;
        };
        let theme = &self.theme;
        let width = 70.min(area.width.saturating_sub(4));
        let height = 6.min(area.height.saturating_sub(2));
        if width < 20 || height < 4 {
            return;
        }
        let dialog_area = centered(area, width, height);
        frame.render_widget(Clear, dialog_area);

        let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.focus_border))
            .title(prompt.title())
            .style(base_style);
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let lines = vec![
            Line::from(vec![Span::raw("> "), Span::raw(prompt.input.as_str())]),
            Line::from(vec![
                Span::styled("[Tab] ", Style::default().fg(theme.accent_fg)),
                Span::styled(prompt.filter.label(), Style::default().fg(theme.muted_fg)),
            ]),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(theme.accent_fg)),
                Span::raw(" OK  "),
                Span::styled("[Esc]", Style::default().fg(theme.muted_fg)),
                Span::raw(" Cancel"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).style(base_style), inner);

        let input_width = prompt.input.chars().count() as u16;
        let x = (inner.x + 2 + input_width).min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }

    fn render_warning(&self, frame: &mut Frame, area: Rect) {
        let Some(warning) = self.state().ui.warning.as_ref() else {
            return;
        };
        let theme = &self.theme;
        let width = 60.min(area.width.saturating_sub(4));
        let height = 7.min(area.height.saturating_sub(2));
        if width < 20 || height < 4 {
            return;
        }
        let dialog_area = centered(area, width, height);
        frame.render_widget(Clear, dialog_area);

        let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning_fg))
            .title(warning.title.as_str())
            .style(base_style);
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let lines = vec![
            Line::raw(warning.message.as_str()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(theme.accent_fg)),
                Span::raw(" Close"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(base_style)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn render_confirm_quit(&self, frame: &mut Frame, area: Rect) {
        if !self.state().ui.confirm_quit {
            return;
        }
        let theme = &self.theme;
        let width = 50.min(area.width.saturating_sub(4));
        let height = 5.min(area.height.saturating_sub(2));
        if width < 20 || height < 3 {
            return;
        }
        let dialog_area = centered(area, width, height);
        frame.render_widget(Clear, dialog_area);

        let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        frame.render_widget(Block::default().style(base_style), dialog_area);
        let inner = Rect::new(
            dialog_area.x.saturating_add(1),
            dialog_area.y.saturating_add(1),
            dialog_area.width.saturating_sub(2),
            dialog_area.height.saturating_sub(2),
        );

        let lines = vec![
            Line::from(Span::styled(
                "Quit",
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw("Are you sure you want to quit OpenCobolIDE?"),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(theme.accent_fg)),
                Span::raw(" Quit  "),
                Span::styled("[n]", Style::default().fg(theme.muted_fg)),
                Span::raw(" Cancel"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(base_style)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn panel_block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
