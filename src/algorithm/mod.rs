//! Algorithms over generated populations

pub mod population;
