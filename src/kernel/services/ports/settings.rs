use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MAX_RECENT_FILES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn clamped_to(self, floor: Size) -> Self {
        Self {
            width: self.width.max(floor.width),
            height: self.height.max(floor.height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    #[serde(default = "default_compiler_command")]
    pub command: String,
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_compiler_command() -> String {
    "cobc".to_string()
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            command: default_compiler_command(),
            extra_args: Vec::new(),
        }
    }
}

/// Persisted session state. Loaded once at startup and handed to the kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Opaque dock/toolbar layout owned by the frontend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub maximised: bool,
    #[serde(default = "default_size")]
    pub size: Size,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub navigation_panel_visible: bool,
    #[serde(default)]
    pub log_panel_visible: bool,
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    #[serde(default)]
    pub compiler: CompilerSettings,
}

fn default_size() -> Size {
    Size::new(1200, 800)
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geometry: None,
            state: None,
            maximised: false,
            size: default_size(),
            fullscreen: false,
            last_file_path: None,
            navigation_panel_visible: true,
            log_panel_visible: false,
            recent_files: Vec::new(),
            compiler: CompilerSettings::default(),
        }
    }
}

impl Settings {
    /// Moves `path` to the front of the recent list.
    pub fn push_recent_file(&mut self, path: PathBuf) -> bool {
        if self.recent_files.first() == Some(&path) {
            return false;
        }
        self.recent_files.retain(|existing| existing != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
        true
    }

    pub fn clear_recent_files(&mut self) -> bool {
        let changed = !self.recent_files.is_empty();
        self.recent_files.clear();
        changed
    }

    /// Start directory for open/save prompts.
    pub fn dialog_dir(&self) -> Option<PathBuf> {
        self.last_file_path
            .as_ref()
            .and_then(|path| path.parent())
            .map(|dir| dir.to_path_buf())
    }
}
