//! Tracing subscriber setup.
//!
//! Logs go to the console and, when a log directory is configured, to
//! `<dir>/cityinfo.log` rotated daily with the last seven files kept. `RUST_LOG` overrides
//! the default filter.

use std::{io::Write, path::Path, sync::Arc};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate, TimeFrequency,
};
use parking_lot::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::server::error::AppError;

const DEFAULT_FILTER: &str = "info,cityinfo=debug,sqlx=warn";
const LOG_FILE_NAME: &str = "cityinfo.log";
const KEPT_LOG_FILES: usize = 7;

#[derive(Clone)]
struct RotatingWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl RotatingWriter {
    fn create(log_dir: &Path) -> Result<Self, AppError> {
        std::fs::create_dir_all(log_dir)?;

        let rotate = FileRotate::new(
            log_dir.join(LOG_FILE_NAME),
            AppendTimestamp::default(FileLimit::MaxFiles(KEPT_LOG_FILES)),
            ContentLimit::Time(TimeFrequency::Daily),
            Compression::None,
            #[cfg(unix)]
            None,
        );

        Ok(Self(Arc::new(Mutex::new(rotate))))
    }
}

impl<'a> fmt::MakeWriter<'a> for RotatingWriter {
    type Writer = RotatingWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriterHandle(Arc::clone(&self.0))
    }
}

struct RotatingWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RotatingWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().flush()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::IoErr)` - Log directory could not be created
/// - `Err(AppError::LoggingErr)` - A global subscriber was already installed
pub fn init(log_dir: Option<&Path>) -> Result<(), AppError> {
    let console_layer = fmt::layer().with_target(true).with_filter(env_filter());

    let file_layer = log_dir
        .map(RotatingWriter::create)
        .transpose()?
        .map(|writer| {
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(env_filter())
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
