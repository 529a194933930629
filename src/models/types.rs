//! Common domain type definitions
//!
//! This module contains the enum types shared by the person model and the
//! population generator.

use std::fmt;

/// Gender of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// All gender values, in declaration order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            _ => Self::Female,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "MALE"),
            Self::Female => write!(f, "FEMALE"),
        }
    }
}
