use anyhow::Result;
use log::info;

use crate::{
    catalog::airports::airports_for,
    config::SimpleFlightConfig,
    engine::{Artifact, Generator, GeneratorContext},
    flights::{simple, FlightFactory, FlightIds},
    rng::StreamRng,
};

/// Writes `airports.json` and `flights.json` for the flat, unique-key corpus.
pub struct SimpleFlightsGenerator {
    config: SimpleFlightConfig,
}

impl SimpleFlightsGenerator {
    pub fn new(config: SimpleFlightConfig) -> Self {
        Self { config }
    }
}

impl Generator for SimpleFlightsGenerator {
    fn name(&self) -> &str {
        "simple_flights"
    }

    fn run(&mut self, ctx: &GeneratorContext, rng: &mut StreamRng<'_>) -> Result<Vec<Artifact>> {
        let airports = airports_for(&self.config.airports)?;
        let builder = simple::SimpleCorpusBuilder::new(
            &airports,
            self.config.window,
            FlightFactory::new(self.config.pricing),
        );
        let flights = builder.generate(self.config.target_count, &mut FlightIds::default(), rng)?;
        info!(
            "{}: generated {} flights across {} airports",
            ctx.scenario_name,
            flights.len(),
            airports.len()
        );

        Ok(vec![
            Artifact::new("airports.json", airports.len(), &airports)?,
            Artifact::new("flights.json", flights.len(), &flights)?,
        ])
    }
}
