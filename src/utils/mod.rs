//! Utility functions for population generation

pub mod logging;
pub mod random;

pub use random::RandomSource;
