use super::message::AppMessage;
use crate::kernel::compile::{run_compile_job, CompileEvent, CompileRequest};
use crate::kernel::console::ConsoleStream;
use crate::kernel::services::ports::{DependencyResolver, SourceCompiler};
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::sync::Semaphore;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("failed to build async runtime: {0}")]
    Build(#[from] io::Error),
    #[error("a compile job is already running")]
    CompileSlotBusy,
}

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    compile_slot: Arc<Semaphore>,
    compiler: Arc<dyn SourceCompiler>,
    resolver: Arc<dyn DependencyResolver>,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        compiler: Arc<dyn SourceCompiler>,
        resolver: Arc<dyn DependencyResolver>,
    ) -> Result<Self, RuntimeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            compile_slot: Arc::new(Semaphore::new(1)),
            compiler,
            resolver,
        })
    }

    pub fn load_file(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    let path = tokio::fs::canonicalize(&path).await.unwrap_or(path);
                    let _ = tx.send(AppMessage::FileLoaded { path, content });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::FileError {
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn write_file(&self, path: PathBuf, content: String, revision: u64) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let success = match tokio::fs::write(&path, content).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "write_file failed");
                    false
                }
            };
            let _ = tx.send(AppMessage::FileSaved {
                path,
                success,
                revision,
            });
        });
    }

    pub fn create_file(&self, path: PathBuf, content: String) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let mut file = tokio::fs::OpenOptions::new()
                    .create_new(true)
                    .write(true)
                    .open(&path)
                    .await?;
                file.write_all(content.as_bytes()).await?;
                file.flush().await?;
                Ok::<(), io::Error>(())
            }
            .await;
            let msg = match result {
                Ok(()) => AppMessage::FileCreated { path },
                Err(e) => AppMessage::FileCreateError {
                    path,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Runs a compile job on the single compile slot. A request made while the slot is
    /// taken is rejected, not queued. `Finished` is sent only after the permit is released.
    pub fn start_compile(&self, request: CompileRequest) -> Result<(), RuntimeError> {
        let permit = Arc::clone(&self.compile_slot)
            .try_acquire_owned()
            .map_err(|_| RuntimeError::CompileSlotBusy)?;

        let tx = self.tx.clone();
        let compiler = Arc::clone(&self.compiler);
        let resolver = Arc::clone(&self.resolver);
        self.runtime.spawn(async move {
            let job_tx = tx.clone();
            let result = tokio::task::spawn_blocking(move || {
                run_compile_job(request, compiler.as_ref(), resolver.as_ref(), |event| {
                    let _ = job_tx.send(AppMessage::Compile(event));
                })
            })
            .await;
            drop(permit);

            match result {
                Ok(outcome) => {
                    let _ = tx.send(AppMessage::Compile(CompileEvent::Finished(outcome)));
                }
                Err(e) => {
                    tracing::error!(error = %e, "compile job aborted");
                    let _ = tx.send(AppMessage::CompileAborted);
                }
            }
        });
        Ok(())
    }

    /// Launches a compiled program; output is relayed line by line.
    pub fn run_program(&self, program: PathBuf, cwd: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let mut child = match tokio::process::Command::new(&program)
                .current_dir(&cwd)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
            {
                Ok(child) => child,
                Err(e) => {
                    tracing::error!(program = %program.display(), error = %e, "spawn program failed");
                    let _ = tx.send(AppMessage::ConsoleOutput {
                        stream: ConsoleStream::Stderr,
                        text: format!("Failed to start {}: {}", program.display(), e),
                    });
                    let _ = tx.send(AppMessage::ProgramFinished { status: None });
                    return;
                }
            };
            tracing::info!(program = %program.display(), cwd = %cwd.display(), "program started");

            let stdout = child
                .stdout
                .take()
                .map(|out| tokio::spawn(relay_lines(out, ConsoleStream::Stdout, tx.clone())));
            let stderr = child
                .stderr
                .take()
                .map(|err| tokio::spawn(relay_lines(err, ConsoleStream::Stderr, tx.clone())));

            let status = match child.wait().await {
                Ok(status) => status.code(),
                Err(e) => {
                    tracing::error!(error = %e, "wait for program failed");
                    None
                }
            };
            for relay in [stdout, stderr].into_iter().flatten() {
                let _ = relay.await;
            }

            tracing::info!(program = %program.display(), status = ?status, "program finished");
            let _ = tx.send(AppMessage::ProgramFinished { status });
        });
    }
}

async fn relay_lines<R>(reader: R, stream: ConsoleStream, tx: Sender<AppMessage>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(text)) => {
                let _ = tx.send(AppMessage::ConsoleOutput { stream, text });
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "program output relay stopped");
                break;
            }
        }
    }
}
