use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// How long the main loop gets to save settings after a termination signal before the
/// process restores the terminal and exits on its own.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::SetCursorStyle::SteadyBlock)?;
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Every step runs even if an earlier one fails; the first error wins.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        );
        raw.and(screen)
    }
}

/// Leaves the terminal at most once, whichever of drop, panic or signal gets there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    left: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.left.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: TerminalRestorer {
                left: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Restores the terminal before the current panic hook runs, so the panic message
    /// lands on the normal screen.
    pub fn restore_on_panic(&self) {
        let restorer = self.restorer();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
            TerminationSignal::Hangup => 129,
        }
    }
}

/// Forwards SIGINT/SIGTERM/SIGHUP to `tx` so the main loop can close the window cleanly.
#[cfg(unix)]
pub fn forward_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
    Ok(std::thread::spawn(move || {
        if let Some(raw) = signals.forever().next() {
            let signal = match raw {
                SIGINT => TerminationSignal::Interrupt,
                SIGHUP => TerminationSignal::Hangup,
                _ => TerminationSignal::Terminate,
            };
            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);

            std::thread::sleep(SHUTDOWN_GRACE);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(not(unix))]
pub fn forward_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    Ok(std::thread::spawn(|| {}))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
