//! Population statistics and analysis functions
//!
//! This module provides the average-age computation in an imperative and a
//! declarative form, plus a basic summary of a population.

use std::fmt;

use itertools::Itertools;

use crate::models::{Gender, Person};

/// Mean age using a running sum divided by the count
///
/// An empty slice yields NaN, the same value `average_age_declarative` gives.
#[must_use]
pub fn average_age_imperative(people: &[Person]) -> f64 {
    let mut total = 0.0_f64;
    for person in people {
        total += f64::from(person.age());
    }
    total / people.len() as f64
}

/// Mean age using a map-then-fold pipeline
///
/// Ages are mapped to `f64`, then a single fold reduces them to a
/// `(sum, count)` pair. An empty slice folds to `(0.0, 0)` and yields NaN.
#[must_use]
pub fn average_age_declarative(people: &[Person]) -> f64 {
    let (sum, count) = people
        .iter()
        .map(|person| f64::from(person.age()))
        .fold((0.0_f64, 0_usize), |(sum, count), age| (sum + age, count + 1));
    sum / count as f64
}

/// Basic population statistics
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStats {
    /// Number of people
    pub person_count: usize,
    /// Mean age, NaN for an empty population
    pub average_age: f64,
    /// Youngest age, if anyone is present
    pub min_age: Option<u32>,
    /// Oldest age, if anyone is present
    pub max_age: Option<u32>,
    pub male_count: usize,
    pub female_count: usize,
}

/// Functions for population statistics and summaries
pub struct PopulationStatistics;

impl PopulationStatistics {
    /// Calculate basic statistics for a slice of people
    #[must_use]
    pub fn calculate_basic_stats(people: &[Person]) -> PopulationStats {
        let (min_age, max_age) = match people.iter().map(Person::age).minmax().into_option() {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };

        let gender_counts = people.iter().counts_by(Person::gender);

        PopulationStats {
            person_count: people.len(),
            average_age: average_age_declarative(people),
            min_age,
            max_age,
            male_count: gender_counts.get(&Gender::Male).copied().unwrap_or(0),
            female_count: gender_counts.get(&Gender::Female).copied().unwrap_or(0),
        }
    }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population Summary:")?;
        writeln!(f, "  Total People: {}", self.person_count)?;
        writeln!(f, "  Average Age: {:.2}", self.average_age)?;
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            writeln!(f, "  Age Range: {min}-{max}")?;
        }
        writeln!(f, "  Male: {}", self.male_count)?;
        writeln!(f, "  Female: {}", self.female_count)?;
        Ok(())
    }
}
