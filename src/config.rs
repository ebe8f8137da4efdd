//! Run configuration: which datasets to build and with which parameters.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{airline, airport, Era, CLASSIC_AIRPORTS};
use crate::flights::economics::PricingModel;
use crate::flights::puzzle::PuzzleConfig;
use crate::flights::DateWindow;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation(message.into())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    pub name: String,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub simple: SimpleFlightConfig,
    #[serde(default)]
    pub puzzle: PuzzleConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleFlightConfig {
    #[serde(default = "default_simple_target")]
    pub target_count: usize,
    #[serde(default = "default_simple_window")]
    pub window: DateWindow,
    #[serde(default = "default_simple_airports")]
    pub airports: Vec<String>,
    #[serde(default = "PricingModel::standard")]
    pub pricing: PricingModel,
}

fn default_simple_target() -> usize {
    200
}

fn default_simple_window() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2025, 5, 31).expect("valid date"),
    )
}

fn default_simple_airports() -> Vec<String> {
    CLASSIC_AIRPORTS.iter().map(|code| code.to_string()).collect()
}

impl Default for SimpleFlightConfig {
    fn default() -> Self {
        Self {
            target_count: default_simple_target(),
            window: default_simple_window(),
            airports: default_simple_airports(),
            pricing: PricingModel::standard(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    #[serde(default = "default_eras")]
    pub eras: Vec<Era>,
}

fn default_eras() -> Vec<Era> {
    Era::ALL.to_vec()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            eras: default_eras(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::euro_trip()
    }
}

impl FixtureConfig {
    /// Built-in scenario used when no config file is given.
    pub fn euro_trip() -> Self {
        Self {
            name: "euro_trip".to_string(),
            random_seed: None,
            output_dir: default_output_dir(),
            simple: SimpleFlightConfig::default(),
            puzzle: PuzzleConfig::default(),
            migration: MigrationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: FixtureConfig =
            serde_yaml::from_str(text).context("Failed to parse fixture config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(invalid("config must define a name"));
        }
        self.validate_simple()?;
        self.validate_puzzle()?;
        if self.migration.eras.is_empty() {
            return Err(invalid("migration must list at least one era"));
        }
        Ok(())
    }

    fn validate_simple(&self) -> Result<(), ConfigError> {
        let simple = &self.simple;
        if simple.window.len_days() == 0 {
            return Err(invalid("simple.window ends before it starts"));
        }
        let mut codes = HashSet::new();
        for code in &simple.airports {
            airport(code).map_err(|err| invalid(format!("simple.airports: {err}")))?;
            if !codes.insert(code.as_str()) {
                return Err(invalid(format!("simple.airports lists {code} twice")));
            }
        }
        let n = simple.airports.len();
        let capacity = n * n.saturating_sub(1) * simple.window.len_days() as usize;
        if simple.target_count > capacity {
            return Err(invalid(format!(
                "simple.target_count {} exceeds the {} unique route/date slots",
                simple.target_count, capacity
            )));
        }
        Ok(())
    }

    fn validate_puzzle(&self) -> Result<(), ConfigError> {
        let puzzle = &self.puzzle;
        if puzzle.window.len_days() == 0 {
            return Err(invalid("puzzle.window ends before it starts"));
        }
        airline(&puzzle.common_airline)
            .map_err(|err| invalid(format!("puzzle.common_airline: {err}")))?;

        let homes = [
            &puzzle.travelers.user_1.origin_airport,
            &puzzle.travelers.user_2.origin_airport,
        ];
        if homes[0] == homes[1] {
            return Err(invalid("travelers must live near different airports"));
        }

        for (label, traveler) in [
            ("user_1", &puzzle.travelers.user_1),
            ("user_2", &puzzle.travelers.user_2),
        ] {
            airport(&traveler.origin_airport)
                .map_err(|err| invalid(format!("{label}.origin_airport: {err}")))?;
            for code in &traveler.preferred_airlines {
                airline(code).map_err(|err| invalid(format!("{label}.preferred_airlines: {err}")))?;
            }
            if !traveler.prefers(&puzzle.common_airline) {
                return Err(invalid(format!(
                    "{label} does not prefer the common airline {}",
                    puzzle.common_airline
                )));
            }
            if puzzle.solution_band.floor > traveler.max_budget {
                return Err(invalid(format!(
                    "solution band floor {} is above {label}'s budget {}",
                    puzzle.solution_band.floor, traveler.max_budget
                )));
            }
        }

        if puzzle.solution_band.floor > puzzle.solution_band.ceiling {
            return Err(invalid("puzzle.solution_band floor exceeds its ceiling"));
        }

        for code in &puzzle.interest_destinations {
            airport(code).map_err(|err| invalid(format!("puzzle.interest_destinations: {err}")))?;
        }

        if puzzle.solutions.is_empty() {
            return Err(invalid("puzzle must plant at least one solution"));
        }
        let mut planted = HashSet::new();
        for slot in &puzzle.solutions {
            airport(&slot.destination)
                .map_err(|err| invalid(format!("puzzle.solutions: {err}")))?;
            if !planted.insert((slot.destination.as_str(), slot.date)) {
                return Err(invalid(format!(
                    "solution {} on {} is listed twice",
                    slot.destination, slot.date
                )));
            }
            if homes.contains(&&slot.destination) {
                return Err(invalid(format!(
                    "solution destination {} is a traveler's home airport",
                    slot.destination
                )));
            }
            if !puzzle.window.contains(slot.date) {
                return Err(invalid(format!(
                    "solution date {} falls outside the puzzle window",
                    slot.date
                )));
            }
            for traveler in puzzle.travelers.both() {
                if !traveler.is_available(slot.date) {
                    return Err(invalid(format!(
                        "solution date {} is not available for traveler from {}",
                        slot.date, traveler.origin_airport
                    )));
                }
            }
        }

        let range = puzzle.interest_flights_per_route;
        if range.min == 0 || range.min > range.max {
            return Err(invalid(
                "puzzle.interest_flights_per_route needs 1 <= min <= max",
            ));
        }
        if puzzle.filler_cap_per_route == 0 {
            return Err(invalid("puzzle.filler_cap_per_route must be at least 1"));
        }
        Ok(())
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<FixtureConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        FixtureConfig::from_yaml_str(&data)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_scenario_is_valid() {
        let config = FixtureConfig::euro_trip();
        assert_eq!(config.name, "euro_trip");
        assert_eq!(config.simple.target_count, 200);
        assert_eq!(config.puzzle.target_count, 5000);
        assert_eq!(config.output_dir, PathBuf::from("assets"));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let config = FixtureConfig::from_yaml_str("name: bare\nrandom_seed: 9\n").unwrap();
        assert_eq!(config.random_seed, Some(9));
        assert_eq!(config.migration.eras, vec![Era::Sixties, Era::TwentyTwenties]);
        assert_eq!(config.puzzle.common_airline, "UA");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn yaml_round_trip() {
        let config = FixtureConfig::euro_trip();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        config.to_yaml(&path).unwrap();

        let loaded = ConfigLoader::new(temp_dir.path()).load("config.yaml").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn rejects_unreachable_simple_target() {
        let mut config = FixtureConfig::euro_trip();
        config.simple.airports = vec!["YYZ".into(), "LHR".into()];
        config.simple.target_count = 63;
        assert!(config.validate().is_err());
        config.simple.target_count = 62;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_solution_on_unavailable_date() {
        let mut config = FixtureConfig::euro_trip();
        config.puzzle.solutions[0].date = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not available"), "{err}");
    }

    #[test]
    fn rejects_repeated_solution_slot() {
        let mut config = FixtureConfig::euro_trip();
        let repeat = config.puzzle.solutions[0].clone();
        config.puzzle.solutions.push(repeat);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"), "{err}");
    }

    #[test]
    fn rejects_airline_not_shared_by_both() {
        let mut config = FixtureConfig::euro_trip();
        config.puzzle.common_airline = "AC".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user_2"), "{err}");
    }

    #[test]
    fn rejects_unknown_codes_and_empty_eras() {
        let mut config = FixtureConfig::euro_trip();
        config.puzzle.interest_destinations.push("XXX".into());
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::euro_trip();
        config.migration.eras.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_band_above_budget() {
        let mut config = FixtureConfig::euro_trip();
        config.puzzle.solution_band.floor = 1050.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user_2"), "{err}");
    }
}
