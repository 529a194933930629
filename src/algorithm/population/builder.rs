//! Population builder implementation
//!
//! This module provides the `Population` container and the builder used to
//! generate one from a `PopulationConfig`.

use std::fmt;
use std::time::Instant;

use crate::error::Result;
use crate::models::Person;
use crate::utils::logging::{log_operation_complete, log_operation_start};
use crate::utils::random::RandomSource;

use crate::config::PopulationConfig;
use super::filters::{AgeRange, filter_by_age_declarative, filter_by_age_imperative};
use super::statistics::{
    PopulationStatistics, PopulationStats, average_age_declarative, average_age_imperative,
};

/// An ordered, read-only collection of people
///
/// The people are fixed at construction; queries borrow them and never
/// reorder or mutate the underlying sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    people: Vec<Person>,
}

impl Population {
    /// Wrap an existing sequence of people, keeping its order
    #[must_use]
    pub const fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Generate a population from the given configuration
    ///
    /// The configuration's seed, if any, makes the result reproducible.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation
    pub fn generate(config: &PopulationConfig) -> Result<Self> {
        let mut source = RandomSource::from_seed(config.seed);
        Self::generate_with(config, &mut source)
    }

    /// Generate the default population of 100 people from system entropy
    ///
    /// # Errors
    /// Returns an error if the default configuration fails validation
    pub fn generate_default() -> Result<Self> {
        Self::generate(&PopulationConfig::default())
    }

    /// Generate a population drawing from a caller-supplied random source
    ///
    /// Each person gets a random name, then a random age, then a random gender.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation
    pub fn generate_with(config: &PopulationConfig, source: &mut RandomSource) -> Result<Self> {
        config.validate()?;

        let start = Instant::now();
        log_operation_start("Generating population", config.size);

        let people = (0..config.size)
            .map(|_| {
                let name = source.random_name(config.min_name_length, config.max_name_length)?;
                let age = source.random_int(config.min_age, config.max_age)?;
                let gender = source.random_gender();
                Ok(Person::new(name, gender, age))
            })
            .collect::<Result<Vec<_>>>()?;

        log_operation_complete("population generation", people.len(), Some(start.elapsed()));
        Ok(Self { people })
    }

    /// The people in population order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// People aged `lower_age <= age < upper_age`, collected with an explicit loop
    #[must_use]
    pub fn within_ages_imperative(&self, lower_age: u32, upper_age: u32) -> Vec<Person> {
        filter_by_age_imperative(&self.people, AgeRange::new(lower_age, upper_age))
    }

    /// People aged `lower_age <= age < upper_age`, collected with an iterator pipeline
    #[must_use]
    pub fn within_ages_declarative(&self, lower_age: u32, upper_age: u32) -> Vec<Person> {
        filter_by_age_declarative(&self.people, AgeRange::new(lower_age, upper_age))
    }

    /// Mean age computed with a running sum; NaN when empty
    #[must_use]
    pub fn average_age_imperative(&self) -> f64 {
        average_age_imperative(&self.people)
    }

    /// Mean age computed with a fold; NaN when empty
    #[must_use]
    pub fn average_age_declarative(&self) -> f64 {
        average_age_declarative(&self.people)
    }

    /// Summary statistics for this population
    #[must_use]
    pub fn statistics(&self) -> PopulationStats {
        PopulationStatistics::calculate_basic_stats(&self.people)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}

impl From<Vec<Person>> for Population {
    fn from(people: Vec<Person>) -> Self {
        Self::from_people(people)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population ({} people):", self.people.len())?;
        for person in &self.people {
            writeln!(f, "  {person}")?;
        }
        Ok(())
    }
}

/// Builder for generating a `Population`
#[derive(Debug, Clone, Default)]
pub struct PopulationBuilder {
    config: PopulationConfig,
}

impl PopulationBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: PopulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the random seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the number of people to generate
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// The configuration the builder will generate from
    #[must_use]
    pub const fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Generate the population
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation
    pub fn build(self) -> Result<Population> {
        log::info!("Building population");
        log::debug!("{}", self.config);
        Population::generate(&self.config)
    }
}
