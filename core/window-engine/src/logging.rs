//! FILENAME: core/window-engine/src/logging.rs
// PURPOSE: Category-tagged, sequence-numbered logging for the engine.
// CONTEXT: Lines are emitted as `seq|category|message` through the `log`
// facade under the `window_engine` target. The host installs the backend.

use std::sync::atomic::{AtomicU64, Ordering};

pub use log::Level;

/// Target every engine log line is emitted under.
pub const TARGET: &str = "window_engine";

/// Global sequence counter, shared by every session in the process.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Whether a line at `level` would be written by the installed logger.
pub fn enabled(level: Level) -> bool {
    log::log_enabled!(target: TARGET, level)
}

/// Write a log line in unified format
pub fn write_log(level: Level, category: &str, message: &str) {
    let seq = next_seq();
    log::log!(target: TARGET, level, "{}|{}|{}", seq, category, message);
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_trace {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::Level::Trace) {
            $crate::logging::write_log($crate::logging::Level::Trace, $cat, &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::Level::Debug) {
            $crate::logging::write_log($crate::logging::Level::Debug, $cat, &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::Level::Info) {
            $crate::logging::write_log($crate::logging::Level::Info, $cat, &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::Level::Warn) {
            $crate::logging::write_log($crate::logging::Level::Warn, $cat, &format!($($arg)*))
        }
    };
}
