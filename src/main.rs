use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};

use geofixtures::{
    catalog::Era,
    config::{ConfigLoader, FixtureConfig},
    engine::{EngineBuilder, EngineSettings},
    generators::{MigrationGenerator, PuzzleFlightsGenerator, SimpleFlightsGenerator},
    output::{AssetWriter, OutputError},
    solver,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Synthetic flight, puzzle and migration fixtures")]
struct Cli {
    /// Path to a fixture config YAML file (built-in euro_trip when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for generated files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Flat flight corpus over the classic airports
    Flights,
    /// Two-traveler puzzle corpus with planted solutions
    Puzzle,
    /// Interstate migration flows
    Migration {
        /// Eras to generate (configured eras when omitted)
        #[arg(long = "era")]
        eras: Vec<Era>,
    },
    /// Puzzle corpus plus every configured migration era
    All,
    /// Enumerate the solutions hidden in a generated puzzle corpus
    Solve,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            if err.downcast_ref::<OutputError>().is_some() {
                match std::env::current_dir() {
                    Ok(dir) => error!("current working directory: {}", dir.display()),
                    Err(cwd_err) => error!("current working directory unavailable: {cwd_err}"),
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<FixtureConfig> {
    match path {
        Some(path) => ConfigLoader::new(".").load(path),
        None => Ok(FixtureConfig::euro_trip()),
    }
}

fn run(cli: Cli, config: FixtureConfig) -> Result<()> {
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let seed = cli.seed.or(config.random_seed);

    let builder = match cli.command {
        Command::Solve => return solve(output_dir),
        Command::Flights => engine_builder(&config, seed, output_dir)
            .with_generator(SimpleFlightsGenerator::new(config.simple)),
        Command::Puzzle => engine_builder(&config, seed, output_dir)
            .with_generator(PuzzleFlightsGenerator::new(config.puzzle)),
        Command::Migration { eras } => {
            let eras = if eras.is_empty() {
                config.migration.eras.clone()
            } else {
                eras
            };
            engine_builder(&config, seed, output_dir).with_generator(MigrationGenerator::new(eras))
        }
        Command::All => engine_builder(&config, seed, output_dir)
            .with_generator(PuzzleFlightsGenerator::new(config.puzzle))
            .with_generator(MigrationGenerator::new(config.migration.eras)),
    };

    let summary = builder.build().run()?;
    info!(
        "scenario '{}' (seed {}) wrote {} files",
        summary.scenario_name,
        summary.seed,
        summary.artifacts.len()
    );
    Ok(())
}

fn engine_builder(config: &FixtureConfig, seed: Option<u64>, output_dir: PathBuf) -> EngineBuilder {
    let seed = seed.unwrap_or_else(rand::random);
    info!("scenario '{}' with seed {}", config.name, seed);
    EngineBuilder::new(EngineSettings {
        scenario_name: config.name.clone(),
        seed,
        output_dir,
    })
}

fn solve(dir: PathBuf) -> Result<()> {
    let (flights, puzzle) = solver::load_puzzle(&dir)?;
    info!("loaded {} flights for '{}'", flights.len(), puzzle.title);
    let report = solver::build_report(&flights, &puzzle);
    print!("{}", solver::render_report(&report));
    AssetWriter::new(&dir).write("solution_analysis.json", &report)?;
    Ok(())
}
