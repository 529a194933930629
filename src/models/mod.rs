//! Domain models for the population
//!
//! This module contains the entity model queried by the population
//! algorithms and the enum types it is built from.

pub mod person;
pub mod types;

// Re-export commonly used types
pub use person::Person;
pub use types::Gender;
