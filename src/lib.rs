pub mod catalog;
pub mod config;
pub mod engine;
pub mod flights;
pub mod generators;
pub mod geo;
pub mod migration;
pub mod output;
pub mod rng;
pub mod solver;

pub use config::{ConfigLoader, FixtureConfig};
pub use engine::{Engine, EngineBuilder, EngineSettings, RunSummary};
