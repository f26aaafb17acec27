use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE: &str = "gridtk.log";
const DEFAULT_FILTER: &str = "gridtk=info";

pub struct LoggingGuard {
    _worker: WorkerGuard,
    dir: PathBuf,
    status: StatusLine,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.dir
    }

    pub fn status_line(&self) -> StatusLine {
        self.status.clone()
    }
}

/// Latest info-or-above log line, rendered compactly for the status bar.
#[derive(Clone, Default)]
pub struct StatusLine {
    latest: Arc<Mutex<Option<String>>>,
}

impl StatusLine {
    /// Returns the newest line once; `None` until another one arrives.
    pub fn take(&self) -> Option<String> {
        self.latest.lock().ok()?.take()
    }

    fn store(&self, line: String) {
        if let Ok(mut slot) = self.latest.lock() {
            *slot = Some(line);
        }
    }
}

/// Collects one formatted event and publishes its last line on drop.
pub struct StatusWriter {
    buf: Vec<u8>,
    status: StatusLine,
}

impl Write for StatusWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StatusWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        if let Some(line) = text.lines().rev().find(|l| !l.trim().is_empty()) {
            self.status.store(line.trim_end().to_string());
        }
    }
}

impl<'a> MakeWriter<'a> for StatusLine {
    type Writer = StatusWriter;

    fn make_writer(&'a self) -> Self::Writer {
        StatusWriter {
            buf: Vec::with_capacity(128),
            status: self.clone(),
        }
    }
}

fn log_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os("GRIDTK_LOG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::temp_dir().join("gridtk").join("logs"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Installs two layers under one `EnvFilter`: a daily rolling file log with
/// source locations, and a compact info-level feed for the status bar.
/// Nothing goes to the terminal the table is drawn on.
pub fn init() -> Option<LoggingGuard> {
    let dir = log_dir().ok()?;

    let (file_writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, LOG_FILE));
    let status = StatusLine::default();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let status_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(status.clone())
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(status_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %dir.display(), "logging to {LOG_FILE}");

    Some(LoggingGuard {
        _worker: worker,
        dir,
        status,
    })
}
