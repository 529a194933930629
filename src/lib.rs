//! A Rust library comparing imperative loops with iterator pipelines over a
//! randomly generated population.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PopulationConfig;
pub use error::{PopulationError, Result};
pub use models::{Gender, Person};

// Population and queries
pub use algorithm::population::{AgeRange, Population, PopulationBuilder, PopulationStats};
pub use algorithm::population::{
    average_age_declarative, average_age_imperative, filter_by_age_declarative,
    filter_by_age_imperative,
};

// Utility functions
pub use utils::RandomSource;
pub use utils::logging::init_logging;
