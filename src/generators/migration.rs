use anyhow::Result;
use log::info;

use crate::{
    catalog::Era,
    engine::{Artifact, Generator, GeneratorContext},
    migration::{file_name, MigrationModel},
    rng::StreamRng,
};

/// Writes one `migration_<era>.json` per configured era.
pub struct MigrationGenerator {
    eras: Vec<Era>,
}

impl MigrationGenerator {
    pub fn new(eras: Vec<Era>) -> Self {
        Self { eras }
    }
}

impl Generator for MigrationGenerator {
    fn name(&self) -> &str {
        "migration"
    }

    fn run(&mut self, ctx: &GeneratorContext, rng: &mut StreamRng<'_>) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::with_capacity(self.eras.len());
        for &era in &self.eras {
            let dataset = MigrationModel::new(era).generate(rng)?;
            info!(
                "{}: {} migration records for the {}",
                ctx.scenario_name,
                dataset.migrations.len(),
                era
            );
            artifacts.push(Artifact::new(
                file_name(era),
                dataset.migrations.len(),
                &dataset,
            )?);
        }
        Ok(artifacts)
    }
}
