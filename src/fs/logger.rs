//! File-based logger implementation for the V5 Brain.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to both the console (terminal/debug output) and a file on the
//! V5 Brain's SD card.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use brgos::fs::logger;
//! use log::{info, LevelFilter};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!     info!("Loading BRGOS...");
//! }
//! ```
//!
//! # Log Output
//!
//! Logs are written to [`LOG_FILE`] in the root of the SD card. The file is
//! truncated at start-up, so it only holds the current run. Example output:
//!
//! ```text
//! INFO [2m 5s 120ms] brgos::opcontrol::mode - Attack mode enabled
//! INFO [2m 7s 40ms] brgos::opcontrol::preset - Preset Tower: shoulder 50 deg, elbow 30 deg
//! WARN [2m 9s 360ms] brgos::peripherals::controller - Controller State Error: Disconnected
//! ```
//!
//! The control loop logs a lot in a short time, so the file is buffered. It
//! is written out when the buffer fills, or when [`log::logger`]'s `flush`
//! is called.

use std::{
    fmt,
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Log file on the SD card.
pub const LOG_FILE: &str = "brgos.log";

/// A dual-output logger writing to the console and [`LOG_FILE`].
pub struct BrgLogger {
    /// `None` if the file could not be opened (e.g. no SD card present),
    /// in which case only the console is written.
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl BrgLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for BrgLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), uptime(), record.target(), record.args());

        print!("{}", line);

        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<BrgLogger> = OnceLock::new();

/// Installs the logger.
///
/// Call this once, before any logging macro is used.
///
/// # Arguments
///
/// * `level` - The minimum log level to record. The control loop logs mode
///   changes and presets at `Info` and actuator toggles at `Debug`.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(BrgLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one log line, newline included.
pub fn format_line(
    level: Level,
    uptime: Duration,
    target: &str,
    message: &fmt::Arguments<'_>,
) -> String {
    // Whole milliseconds; humantime would otherwise print down to nanoseconds.
    let uptime = Duration::from_millis(uptime.as_millis() as u64);
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, message)
}

/// Time since the user program started.
///
/// Off the Brain (host tests) there is no program uptime, so zero is used.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::ZERO
    }
}
