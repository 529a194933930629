//! Logging utilities for console output
//!
//! This module provides logger initialisation and operation logging helpers.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_operation_complete, log_operation_start};
