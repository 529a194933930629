//! Tests for population generation functionality

use population_streams::algorithm::population::{Population, PopulationBuilder, PopulationConfig};

#[test]
fn test_population_config() {
    // Test default configuration
    let config = PopulationConfig::default();
    assert_eq!(config.size, 100);
    assert_eq!((config.min_age, config.max_age), (5, 75));
    assert_eq!((config.min_name_length, config.max_name_length), (5, 10));

    // Test custom configuration
    let custom_config = PopulationConfig::default()
        .with_size(20)
        .with_seed(7)
        .with_age_bounds(18, 30);
    assert_eq!(custom_config.size, 20);
    assert_eq!(custom_config.seed, Some(7));
    assert_eq!(custom_config.min_age, 18);
    assert_eq!(custom_config.max_age, 30);
}

#[test]
fn test_generated_people_satisfy_invariants() {
    let population = Population::generate(&PopulationConfig::default().with_seed(31)).unwrap();
    assert_eq!(population.len(), 100);

    for person in &population {
        assert!((5..=75).contains(&person.age()), "bad age: {person}");

        let name = person.name();
        assert!((5..=10).contains(&name.chars().count()), "bad name length: {person}");
        let mut chars = name.chars();
        assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
        assert!(chars.all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_unseeded_generation_has_default_size() {
    let population = Population::generate_default().unwrap();
    assert_eq!(population.len(), 100);
    assert_eq!(population.people().len(), population.iter().count());
}

#[test]
fn test_population_builder() {
    let builder = PopulationBuilder::new().with_seed(99).with_size(40);
    assert_eq!(builder.config().size, 40);

    let first = builder.clone().build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first.len(), 40);
    assert_eq!(first, second);
}

#[test]
fn test_statistics_summary() {
    let population = PopulationBuilder::new().with_seed(4).build().unwrap();
    let stats = population.statistics();

    assert_eq!(stats.person_count, 100);
    assert_eq!(stats.male_count + stats.female_count, 100);
    assert!(stats.min_age.is_some_and(|age| age >= 5));
    assert!(stats.max_age.is_some_and(|age| age <= 75));
    assert!((stats.average_age - population.average_age_imperative()).abs() < 1e-9);
}
