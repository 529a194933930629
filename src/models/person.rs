//! Person model
//!
//! A `Person` is a value record: its fields are set once at construction
//! and only exposed through getters afterwards.

use std::fmt;

use crate::models::types::Gender;

/// A single member of a population
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    gender: Gender,
    age: u32,
}

impl Person {
    /// Create a new person
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
        }
    }

    /// The person's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.gender, self.age)
    }
}
