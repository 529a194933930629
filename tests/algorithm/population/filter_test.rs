//! Scenario tests for the paired population queries

use population_streams::{Gender, Person, Population};

fn population_with_ages(ages: &[u32]) -> Population {
    ages.iter()
        .map(|&age| Person::new(format!("Age{age}"), Gender::Male, age))
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn test_filter_scenario() {
    let population = population_with_ages(&[5, 15, 25]);

    let imperative = population.within_ages_imperative(10, 20);
    let declarative = population.within_ages_declarative(10, 20);

    assert_eq!(imperative, vec![Person::new("Age15", Gender::Male, 15)]);
    assert_eq!(imperative, declarative);
}

#[test]
fn test_average_scenario() {
    let population = population_with_ages(&[10, 20, 30]);
    assert_eq!(population.average_age_imperative(), 20.0);
    assert_eq!(population.average_age_declarative(), 20.0);
}

#[test]
fn test_empty_population_scenario() {
    let population = Population::default();

    for (lower, upper) in [(0, 100), (10, 20), (20, 10), (5, 5)] {
        assert!(population.within_ages_imperative(lower, upper).is_empty());
        assert!(population.within_ages_declarative(lower, upper).is_empty());
    }

    assert!(population.average_age_imperative().is_nan());
    assert!(population.average_age_declarative().is_nan());
}

#[test]
fn test_boundaries_are_inclusive_exclusive() {
    let population = population_with_ages(&[9, 10, 19, 20]);
    let ages: Vec<u32> = population
        .within_ages_declarative(10, 20)
        .iter()
        .map(Person::age)
        .collect();
    assert_eq!(ages, vec![10, 19]);
}
