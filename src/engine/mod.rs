use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{
    output::AssetWriter,
    rng::{RngManager, StreamRng},
};

pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
    pub output_dir: PathBuf,
}

/// One file a generator wants written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub records: usize,
    pub body: serde_json::Value,
}

impl Artifact {
    pub fn new<T: Serialize + ?Sized>(
        file_name: impl Into<String>,
        records: usize,
        value: &T,
    ) -> Result<Self> {
        let file_name = file_name.into();
        let body = serde_json::to_value(value)
            .with_context(|| format!("Failed to encode {file_name}"))?;
        Ok(Self {
            file_name,
            records,
            body,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub generator: String,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub scenario_name: String,
    pub seed: u64,
    pub artifacts: Vec<WrittenArtifact>,
}

pub struct EngineBuilder {
    settings: EngineSettings,
    generators: Vec<Box<dyn Generator>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            generators: Vec::new(),
        }
    }

    pub fn with_generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: RngManager::new(self.settings.seed),
            generators: self.generators,
            writer: AssetWriter::new(&self.settings.output_dir),
            settings: self.settings,
        }
    }
}

pub struct Engine {
    rng: RngManager,
    generators: Vec<Box<dyn Generator>>,
    writer: AssetWriter,
    settings: EngineSettings,
}

impl Engine {
    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_with_hook(|_| {})
    }

    /// Runs every generator in registration order, writing its artifacts as
    /// soon as it finishes. `hook` sees each file after it lands on disk.
    pub fn run_with_hook<F>(&mut self, mut hook: F) -> Result<RunSummary>
    where
        F: FnMut(&WrittenArtifact),
    {
        let mut written = Vec::new();
        for generator in &mut self.generators {
            let mut stream = self.rng.stream(generator.name());
            let ctx = GeneratorContext {
                scenario_name: &self.settings.scenario_name,
            };
            let artifacts = generator
                .run(&ctx, &mut stream)
                .with_context(|| format!("Generator '{}' failed", generator.name()))?;
            for artifact in artifacts {
                let path = self.writer.write(&artifact.file_name, &artifact.body)?;
                let entry = WrittenArtifact {
                    generator: generator.name().to_string(),
                    path,
                    records: artifact.records,
                };
                info!(
                    "[{}] {} records -> {}",
                    entry.generator,
                    entry.records,
                    entry.path.display()
                );
                hook(&entry);
                written.push(entry);
            }
        }
        Ok(RunSummary {
            scenario_name: self.settings.scenario_name.clone(),
            seed: self.settings.seed,
            artifacts: written,
        })
    }
}

pub struct GeneratorContext<'a> {
    pub scenario_name: &'a str,
}

pub trait Generator {
    fn name(&self) -> &str;
    fn run(
        &mut self,
        ctx: &GeneratorContext,
        rng: &mut StreamRng<'_>,
    ) -> Result<Vec<Artifact>>;
}
