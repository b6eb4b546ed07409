// src/log.rs
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::consts::LOG_FILE;

/// Filter directives are read from this variable; `info` when unset.
pub const LOG_ENV: &str = "WARSHIP_LOG";

static START: OnceLock<Instant> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Timestamps as time since startup, `hh:mm:ss.mmm`.
struct Elapsed;

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", fmt_elapsed(start().elapsed().as_millis()))
    }
}

/// Route `tracing` output to `<store_dir>/debug.log`.
///
/// Safe to call more than once; only the first call installs anything.
/// Fails only if the log file cannot be opened.
pub fn init(store_dir: &Path) -> io::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }
    fs::create_dir_all(store_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store_dir.join(LOG_FILE))?;

    start();
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // Another subscriber may already be set (tests, embedding apps); leave it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Elapsed)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    let _ = INIT.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_format() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn init_creates_log_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();
        init(dir.path()).unwrap();
        assert!(INIT.get().is_some());
    }
}
