//! Best-effort append-only log sink.
//!
//! The stash keeps a human-readable debug log next to the database. The
//! contract is deliberately weak: append one timestamped line per event,
//! and a failure to log is never fatal to the operation that triggered it.
//! Commands use the standard `log` macros; this module plugs a file-backed
//! sink into that facade.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

struct FileLog {
    path: PathBuf,
}

impl Log for FileLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Open per write: the process logs a handful of lines per run, and
        // this keeps the sink stateless. Every failure is swallowed.
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(
                file,
                "{} [{}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the file sink behind the `log` facade. Safe to call once per
/// process; a second call is ignored, as is any installation failure.
pub fn init(path: PathBuf) {
    if log::set_boxed_logger(Box::new(FileLog { path })).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
