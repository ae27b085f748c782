//! Per-platform application directories.
//!
//! - macOS: ~/Library/Application Support/ocide
//! - Linux: $XDG_CONFIG_HOME/ocide or ~/.config/ocide
//! - Windows: %APPDATA%\ocide
//!
//! `OCIDE_CONFIG_DIR` overrides the base directory on every platform.

use std::path::PathBuf;

const APP_NAME: &str = "ocide";
const LOG_DIR: &str = "logs";
pub const CONFIG_DIR_ENV: &str = "OCIDE_CONFIG_DIR";

pub fn get_app_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    platform_app_dir()
}

#[cfg(target_os = "macos")]
fn platform_app_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn platform_app_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(APP_NAME));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
}

#[cfg(target_os = "windows")]
fn platform_app_dir() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_app_dir() -> Option<PathBuf> {
    None
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
