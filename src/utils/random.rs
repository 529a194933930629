//! Seedable random source for population generation
//!
//! All randomness flows through a [`RandomSource`] owned by the caller, so a
//! fixed seed reproduces the same population.

use rand::distr::uniform::SampleUniform;
use rand::prelude::*;

use crate::error::{PopulationError, Result};
use crate::models::Gender;

/// Uniform random source backed by a seedable `StdRng`
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

impl RandomSource {
    /// Create a random source with an optional seed
    ///
    /// Without a seed the generator is initialised from system entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Draw an integer uniformly from `lower..=upper`
    ///
    /// # Errors
    /// Returns `InvalidRange` if `lower > upper`
    pub fn random_int<T>(&mut self, lower: T, upper: T) -> Result<T>
    where
        T: SampleUniform + PartialOrd + Copy + Into<i64>,
    {
        if lower > upper {
            return Err(PopulationError::InvalidRange {
                lower: lower.into(),
                upper: upper.into(),
            });
        }
        Ok(self.rng.random_range(lower..=upper))
    }

    /// Generate `length` characters, each drawn uniformly from `lower..=upper`
    ///
    /// # Errors
    /// Returns `InvalidCharRange` if `lower > upper`, even when `length` is zero
    pub fn random_string(&mut self, lower: char, upper: char, length: usize) -> Result<String> {
        if lower > upper {
            return Err(PopulationError::InvalidCharRange { lower, upper });
        }
        Ok((0..length)
            .map(|_| self.rng.random_range(lower..=upper))
            .collect())
    }

    /// Pick a gender with equal probability
    pub fn random_gender(&mut self) -> Gender {
        Gender::from(self.rng.random_range(1..=2))
    }

    /// Generate a lowercase name with a capitalised first letter
    ///
    /// The length is drawn uniformly from `min_length..=max_length`.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `min_length > max_length`
    pub fn random_name(&mut self, min_length: u32, max_length: u32) -> Result<String> {
        let length = self.random_int(min_length, max_length)?;
        let name = self.random_string('a', 'z', length as usize)?;
        Ok(capitalize(&name))
    }
}

/// Uppercase the first character of `s`
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
