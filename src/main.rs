use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ocide::app::Workbench;
use ocide::kernel::services::adapters::{load_settings, CallScanResolver, GnuCobolCompiler};
use ocide::kernel::services::ports::Settings;
use ocide::kernel::Action;
use ocide::tui::terminal_guard::{forward_termination_signals, TerminalGuard, TerminationSignal};

mod logging;

const INPUT_POLL: Duration = Duration::from_millis(16);

fn print_usage() {
    println!("Usage: ocide [FILE]...");
    println!();
    println!("Opens each FILE in a tab. Without arguments the home screen is shown.");
    println!();
    println!("Options:");
    println!("  -h, --help       Print this help");
    println!("  -V, --version    Print version");
}

fn main() -> io::Result<()> {
    let mut files = Vec::new();
    for arg in std::env::args_os().skip(1) {
        match arg.to_str() {
            Some("-h") | Some("--help") => {
                print_usage();
                return Ok(());
            }
            Some("-V") | Some("--version") => {
                println!("ocide {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    let mut logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "log directory");
    }
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "load settings failed, using defaults");
            Settings::default()
        }
    };

    let compiler = Arc::new(GnuCobolCompiler::new(&settings.compiler));
    let resolver = Arc::new(CallScanResolver::new());
    let mut workbench =
        Workbench::new(settings, compiler, resolver).map_err(io::Error::other)?;
    if let Some(log_rx) = logging.as_mut().and_then(|guard| guard.take_log_rx()) {
        workbench = workbench.with_log_rx(log_rx);
    }
    for path in files {
        workbench.dispatch(Action::OpenPath(path));
    }

    let guard = TerminalGuard::new()?;
    guard.restore_on_panic();
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signals = forward_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut workbench, &signal_rx);

    drop(terminal);
    drop(guard);
    if let Err(e) = &result {
        tracing::error!(error = %e, "main loop failed");
    }
    tracing::info!("exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    signal_rx: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            needs_redraw = false;
        }
        if workbench.should_quit() {
            return Ok(());
        }

        if signal_rx.try_recv().is_ok() {
            workbench.dispatch(Action::CloseRequested);
            continue;
        }

        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) => needs_redraw |= workbench.handle_key(key),
                Event::Resize(..) => needs_redraw = true,
                _ => {}
            }
        }
        needs_redraw |= workbench.tick();
    }
}
