//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod cobc;
pub mod dependencies;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use cobc::{parse_compiler_output, GnuCobolCompiler};
pub use dependencies::CallScanResolver;
pub use paths::{ensure_log_dir, get_app_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime, RuntimeError};
pub use settings::{
    get_settings_path, load_settings, load_settings_from, save_settings, save_settings_to,
    SettingsError,
};
