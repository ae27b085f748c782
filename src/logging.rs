use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    log_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &std::path::Path {
        &self.log_dir
    }

    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.log_rx.take()
    }
}

/// Splits every formatted event between the rolling log file and the Logs tab channel.
#[derive(Clone)]
struct LogTee {
    file: NonBlocking,
    panel: Sender<String>,
}

impl<'a> MakeWriter<'a> for LogTee {
    type Writer = LogTeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogTeeWriter {
            file: self.file.make_writer(),
            panel: self.panel.clone(),
            event: Vec::new(),
        }
    }
}

/// Lives for one event; the panel copy is sent line by line when it drops.
struct LogTeeWriter {
    file: NonBlocking,
    panel: Sender<String>,
    event: Vec<u8>,
}

impl Write for LogTeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.event.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for LogTeeWriter {
    fn drop(&mut self) {
        for line in String::from_utf8_lossy(&self.event).lines() {
            if self.panel.send(line.to_string()).is_err() {
                break;
            }
        }
    }
}

const LOG_FILE_PREFIX: &str = "ocide.log";
const DEFAULT_FILTER: &str = "ocide=info";

fn resolve_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = ocide::kernel::services::adapters::ensure_log_dir() {
        return Some(dir);
    }
    let fallback = std::env::temp_dir().join("ocide").join("logs");
    std::fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}

/// Tees log output into a daily rolling file and the in-app Logs tab. Returns `None` when
/// no log directory is usable or a subscriber is already installed.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let (log_tx, log_rx) = mpsc::channel::<String>();
    let writer = LogTee {
        file: non_blocking,
        panel: log_tx,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_thread_names(true),
    );
    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        log_rx: Some(log_rx),
    })
}
