//! Logging utilities
//!
//! This module provides logger setup and standardized logging functions for
//! population operations.

use std::time::Duration;

/// Initialise `env_logger`, defaulting to the `info` level
///
/// `RUST_LOG` overrides the default filter. Calling this more than once is
/// harmless: later calls leave the installed logger in place.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of items the operation will process
pub fn log_operation_start(operation: &str, items: usize) {
    log::debug!("{operation} over {items} people");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of items produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::debug!("Finished {operation}: {items} people in {duration:?}");
    } else {
        log::debug!("Finished {operation}: {items} people");
    }
}
