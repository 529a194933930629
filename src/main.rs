use log::info;
use population_streams::{Population, init_logging};

/// Lower bound, inclusive, of the age range compared by the two filters
const EXAMPLE_LOWER_AGE: u32 = 10;
/// Upper bound, exclusive
const EXAMPLE_UPPER_AGE: u32 = 20;

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging();

    let population = Population::generate_default()?;
    info!("Generated {} people", population.len());

    println!("{population}");

    let imperative = population.within_ages_imperative(EXAMPLE_LOWER_AGE, EXAMPLE_UPPER_AGE);
    let declarative = population.within_ages_declarative(EXAMPLE_LOWER_AGE, EXAMPLE_UPPER_AGE);
    info!(
        "{} people aged {EXAMPLE_LOWER_AGE} to {EXAMPLE_UPPER_AGE} (exclusive)",
        imperative.len()
    );
    println!("{}", imperative == declarative);

    let average_imperative = population.average_age_imperative();
    let average_declarative = population.average_age_declarative();
    info!(
        "Average age: {average_imperative:.2} (loop) / {average_declarative:.2} (pipeline), agree: {}",
        (average_imperative - average_declarative).abs() < 1e-9
    );
    info!("{}", population.statistics());

    Ok(())
}
