//! Population filtering criteria
//!
//! This module provides the age-range filter in two equivalent forms: an
//! explicit loop with a mutable accumulator, and an iterator pipeline.
//! Both keep the population order and return the same people for any input.

use itertools::Itertools;

use crate::models::Person;
use crate::utils::logging::log_operation_complete;

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// Half-open age interval `[lower, upper)`
///
/// An interval with `lower >= upper` matches nobody; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    /// Minimum age (inclusive)
    pub lower: u32,
    /// Maximum age (exclusive)
    pub upper: u32,
}

impl AgeRange {
    #[must_use]
    pub const fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    /// Whether the interval can match anyone
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    #[must_use]
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.lower && age < self.upper
    }
}

impl FilterCriteria<Person> for AgeRange {
    fn meets_criteria(&self, person: &Person) -> bool {
        self.contains(person.age())
    }
}

/// Collect everyone inside `range` using an explicit loop
#[must_use]
pub fn filter_by_age_imperative(people: &[Person], range: AgeRange) -> Vec<Person> {
    let mut age_group = Vec::new();
    for person in people {
        if range.meets_criteria(person) {
            age_group.push(person.clone());
        }
    }
    log_operation_complete("imperative age filter", age_group.len(), None);
    age_group
}

/// Collect everyone inside `range` using an iterator pipeline
///
/// `iter` borrows the people lazily, `filter` keeps those the predicate
/// accepts without reordering them, `cloned` turns the borrowed people into
/// owned values and `collect_vec` is the terminal step that drives the
/// pipeline and materialises the result.
#[must_use]
pub fn filter_by_age_declarative(people: &[Person], range: AgeRange) -> Vec<Person> {
    let age_group = people
        .iter()
        .filter(|person| range.meets_criteria(person))
        .cloned()
        .collect_vec();
    log_operation_complete("declarative age filter", age_group.len(), None);
    age_group
}
