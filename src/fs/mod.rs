//! Filesystem utilities for the V5 Brain.
//!
//! # Logging
//!
//! The `logger` submodule writes every log record to the console and to
//! `brgos.log` on the SD card, so a match can be reviewed after the fact.
//!
//! # Example
//!
//! ```ignore
//! use brgos::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Loading BRGOS...");
//! ```

/// File-based logging for the V5 Brain.
///
/// Provides a logger implementation that writes to both the console
/// and a file on the SD card.
pub mod logger;
