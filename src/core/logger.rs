use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::{Error, Result};

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));
static CONSOLE: AtomicBool = AtomicBool::new(true);

static CRM_LOGGER: CrmLogger = CrmLogger;
struct CrmLogger;
impl log::Log for CrmLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if CONSOLE.load(Ordering::Relaxed) {
            println!("{}", line);
        }

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
    }
}

pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    if let Some(path) = file {
        let fp = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::Io(format!("Opening log file {} error: {e}", path))
            })?;

        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(fp);
        }
    }

    CONSOLE.store(true, Ordering::Relaxed);
    _ = log::set_logger(&CRM_LOGGER);
    log::set_max_level(level);
    Ok(())
}

/// Keeps file output but stops echoing records to stdout.
pub fn revert_console_output() {
    CONSOLE.store(false, Ordering::Relaxed);
}

/// The global logger can only be installed once, so teardown silences it
/// through the max level and releases the log file.
pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(mut file) = guard.take() {
            _ = file.flush();
        }
    }
}
