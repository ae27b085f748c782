//! Workbench: owns the kernel store and the async runtime, executes effects and feeds
//! background results back into the store.

#[cfg(feature = "tui")]
use crate::app::theme::UiTheme;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, RuntimeError};
use crate::kernel::services::ports::{DependencyResolver, Settings, SourceCompiler};
use crate::kernel::{Action, AppState, Store};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod bridge;
#[cfg(feature = "tui")]
mod input;
#[cfg(feature = "tui")]
mod render;
mod tick;

const LOG_BUFFER_CAP: usize = 2000;
const MAX_MESSAGE_DRAIN_PER_TICK: usize = 1024;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
    settings_path: Option<PathBuf>,
    should_quit: bool,
    #[cfg(feature = "tui")]
    theme: UiTheme,
}

impl Workbench {
    pub fn new(
        settings: Settings,
        compiler: Arc<dyn SourceCompiler>,
        resolver: Arc<dyn DependencyResolver>,
    ) -> Result<Self, RuntimeError> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx, compiler, resolver)?;
        Ok(Self {
            store: Store::new(AppState::new(settings)),
            runtime,
            rx,
            log_rx: None,
            logs: VecDeque::new(),
            settings_path: None,
            should_quit: false,
            #[cfg(feature = "tui")]
            theme: UiTheme::default(),
        })
    }

    /// Persists settings to `path` instead of the per-user settings file.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn with_log_rx(mut self, log_rx: Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn logs(&self) -> &VecDeque<String> {
        &self.logs
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatch_kernel(action)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
