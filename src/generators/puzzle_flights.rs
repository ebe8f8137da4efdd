use anyhow::Result;
use log::info;

use crate::{
    catalog::{airlines, AIRPORTS},
    engine::{Artifact, Generator, GeneratorContext},
    flights::puzzle::{self, PuzzleConfig, PuzzleDescription},
    rng::StreamRng,
};

/// Writes the puzzle corpus: airports, airlines, flights and the public brief.
pub struct PuzzleFlightsGenerator {
    config: PuzzleConfig,
}

impl PuzzleFlightsGenerator {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }
}

impl Generator for PuzzleFlightsGenerator {
    fn name(&self) -> &str {
        "puzzle_flights"
    }

    fn run(&mut self, ctx: &GeneratorContext, rng: &mut StreamRng<'_>) -> Result<Vec<Artifact>> {
        let corpus = puzzle::PuzzleCorpusBuilder::new(&self.config).generate(rng)?;
        info!(
            "{}: {} flights ({} solution, {} interest, {} filler)",
            ctx.scenario_name,
            corpus.flights.len(),
            corpus.solution_count,
            corpus.interest_count,
            corpus.filler_count
        );

        let airlines = airlines();
        let description = PuzzleDescription::from_config(&self.config);
        Ok(vec![
            Artifact::new("airports.json", AIRPORTS.len(), AIRPORTS)?,
            Artifact::new("airlines.json", airlines.len(), &airlines)?,
            Artifact::new("flights.json", corpus.flights.len(), &corpus.flights)?,
            Artifact::new("puzzle_description.json", 1, &description)?,
        ])
    }
}
