//! ocide - a COBOL IDE core with a terminal frontend.
//!
//! Module layout:
//! - kernel: headless state/action/effect core, ports and adapters
//! - app: the workbench that executes effects and renders the UI
//! - tui: terminal setup and teardown (crossterm)

pub mod app;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
