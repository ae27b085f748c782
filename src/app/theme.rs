//! UI theme: the colors the renderer uses, kept in one place.

use ratatui::style::Color;

use crate::kernel::Severity;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
    pub info_fg: Color,
    pub success_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub comment_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            accent_fg: Color::Yellow,
            header_fg: Color::White,
            muted_fg: Color::DarkGray,
            error_fg: Color::Red,
            warning_fg: Color::Yellow,
            info_fg: Color::Blue,
            success_fg: Color::Green,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            status_bg: Color::Blue,
            status_fg: Color::White,
            dialog_bg: Color::Black,
            dialog_fg: Color::White,
            comment_fg: Color::Green,
        }
    }
}

impl UiTheme {
    pub fn severity_fg(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info_fg,
            Severity::Warning => self.warning_fg,
            Severity::Error => self.error_fg,
        }
    }
}
