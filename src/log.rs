// src/log.rs
//
// Logging front: the logf!/logd!/loge! macros forward to `tracing`.
// `init` installs the subscriber once per process; calling it again is a no-op.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE};

static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Append to `.store/debug.log` (GUI; no console on Windows).
    File,
    /// Write to stderr (CLI).
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Falls back to stderr when the log file
/// cannot be opened.
pub fn init(sink: Sink) {
    INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_target(false);

        let file = match sink {
            Sink::File => open_log_file(Path::new(LOG_FILE)),
            Sink::Stderr => None,
        };

        let res = match file {
            Some(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
        // Another subscriber (e.g. a test harness) already owns the global slot.
        let _ = res;
    });
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
