//! Tests for the person model

use population_streams::{Gender, Person};

#[test]
fn test_person_fields() {
    let person = Person::new("Freja", Gender::Female, 42);
    assert_eq!(person.name(), "Freja");
    assert_eq!(person.gender(), Gender::Female);
    assert_eq!(person.age(), 42);
    assert_eq!(person.to_string(), "Freja (FEMALE, 42)");
}

#[test]
fn test_gender_values() {
    assert_eq!(Gender::ALL, [Gender::Male, Gender::Female]);
    assert_eq!(Gender::from(1), Gender::Male);
    assert_eq!(Gender::from(2), Gender::Female);
}
