//! Tests for the seedable random source

use population_streams::{PopulationError, RandomSource};

#[test]
fn test_random_int_covers_inclusive_bounds() {
    let mut source = RandomSource::from_seed(Some(1));
    let draws: Vec<i32> = (0..500).map(|_| source.random_int(1, 3).unwrap()).collect();
    assert!(draws.contains(&1));
    assert!(draws.contains(&3));
    assert!(draws.iter().all(|d| (1..=3).contains(d)));
}

#[test]
fn test_invalid_bounds_are_errors() {
    let mut source = RandomSource::from_seed(Some(1));
    assert!(matches!(
        source.random_int(5_u32, 4_u32),
        Err(PopulationError::InvalidRange { lower: 5, upper: 4 })
    ));
    assert!(matches!(
        source.random_string('b', 'a', 3),
        Err(PopulationError::InvalidCharRange { lower: 'b', upper: 'a' })
    ));
    assert!(source.random_name(6, 2).is_err());
}

#[test]
fn test_both_genders_drawn() {
    let mut source = RandomSource::from_seed(Some(8));
    let genders: Vec<_> = (0..200).map(|_| source.random_gender()).collect();
    assert!(genders.contains(&population_streams::Gender::Male));
    assert!(genders.contains(&population_streams::Gender::Female));
}
