//! Population generation and queries
//!
//! This module provides generation of a random population and the paired
//! imperative and declarative queries over it.

pub mod builder;
pub mod filters;
pub mod statistics;

// Re-export commonly used items
pub use crate::config::PopulationConfig;
pub use builder::{Population, PopulationBuilder};
pub use filters::{AgeRange, FilterCriteria, filter_by_age_declarative, filter_by_age_imperative};
pub use statistics::{
    PopulationStatistics, PopulationStats, average_age_declarative, average_age_imperative,
};
