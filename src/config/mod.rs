//! Configuration for population generation.

use std::fmt;

use crate::error::{PopulationError, Result};

/// Number of people generated by default
pub const DEFAULT_POPULATION_SIZE: usize = 100;
/// Default minimum age, inclusive
pub const DEFAULT_MIN_AGE: u32 = 5;
/// Default maximum age, inclusive
pub const DEFAULT_MAX_AGE: u32 = 75;
/// Default minimum name length, inclusive
pub const DEFAULT_MIN_NAME_LENGTH: u32 = 5;
/// Default maximum name length, inclusive
pub const DEFAULT_MAX_NAME_LENGTH: u32 = 10;

/// Configuration for population generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationConfig {
    /// Number of people to generate
    pub size: usize,
    /// Minimum generated age, inclusive
    pub min_age: u32,
    /// Maximum generated age, inclusive
    pub max_age: u32,
    /// Minimum generated name length, inclusive
    pub min_name_length: u32,
    /// Maximum generated name length, inclusive
    pub max_name_length: u32,
    /// Optional random seed for reproducible generation
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_POPULATION_SIZE,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Set the number of people to generate
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the inclusive age bounds
    #[must_use]
    pub const fn with_age_bounds(mut self, min_age: u32, max_age: u32) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    /// Set the inclusive name length bounds
    #[must_use]
    pub const fn with_name_length(mut self, min: u32, max: u32) -> Self {
        self.min_name_length = min;
        self.max_name_length = max;
        self
    }

    /// Check that the configured bounds can be sampled from
    ///
    /// # Errors
    /// Returns an error if a bound pair is inverted or names could be empty
    pub fn validate(&self) -> Result<()> {
        if self.min_age > self.max_age {
            return Err(PopulationError::config_error(format!(
                "min_age ({}) is greater than max_age ({})",
                self.min_age, self.max_age
            )));
        }
        if self.min_name_length == 0 {
            return Err(PopulationError::config_error(
                "min_name_length must be at least 1",
            ));
        }
        if self.min_name_length > self.max_name_length {
            return Err(PopulationError::config_error(format!(
                "min_name_length ({}) is greater than max_name_length ({})",
                self.min_name_length, self.max_name_length
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PopulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population Configuration:")?;
        writeln!(f, "  Size: {}", self.size)?;
        writeln!(f, "  Age Range: {}..={}", self.min_age, self.max_age)?;
        writeln!(
            f,
            "  Name Length: {}..={}",
            self.min_name_length, self.max_name_length
        )?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {seed}")?;
        }
        Ok(())
    }
}
