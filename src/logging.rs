use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use hypermd::kernel::services::adapters::{ensure_log_dir, fallback_log_dir};

const DEFAULT_FILTER: &str = "hypermd=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Writes to the log file, and to stderr as well when `verbose`.
#[derive(Clone)]
struct TeeMakeWriter {
    file: NonBlocking,
    verbose: bool,
}

struct TeeWriter {
    file: NonBlocking,
    stderr: Option<io::Stderr>,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.make_writer(),
            stderr: self.verbose.then(io::stderr),
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        if let Some(stderr) = self.stderr.as_mut() {
            let _ = stderr.write_all(&buf[..n]);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if let Some(stderr) = self.stderr.as_mut() {
            stderr.flush()?;
        }
        Ok(())
    }
}

pub fn init(verbose: bool) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = fallback_log_dir();
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "hypermd.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let writer = TeeMakeWriter {
        file: non_blocking,
        verbose,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
