//! Synthetic interstate migration flows from a population gravity model.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, Era, StateCatalog};

pub const MIN_FLOW: u64 = 100;
const NEIGHBOR_BONUS: (f64, f64) = (1.5, 2.0);
const NOISE: (f64, f64) = (0.8, 1.2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub origin: String,
    pub destination: String,
    pub value: u64,
}

/// Wrapper matching the `{"migrations": [...]}` file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationDataset {
    pub migrations: Vec<MigrationRecord>,
}

pub struct MigrationModel {
    catalog: StateCatalog,
}

impl MigrationModel {
    pub fn new(era: Era) -> Self {
        Self {
            catalog: StateCatalog::for_era(era),
        }
    }

    pub fn era(&self) -> Era {
        self.catalog.era()
    }

    pub fn catalog(&self) -> &StateCatalog {
        &self.catalog
    }

    /// Gravity estimate `sqrt(pop_o * pop_d) / 1000`, truncated.
    pub fn base_value(&self, origin: &str, destination: &str) -> Result<u64, CatalogError> {
        let origin_pop = self.catalog.population(origin)? as f64;
        let destination_pop = self.catalog.population(destination)? as f64;
        Ok(((origin_pop * destination_pop).sqrt() / 1000.0) as u64)
    }

    /// Flow from `origin` to `destination`. Same-state pairs are zero.
    pub fn value<R: Rng + ?Sized>(
        &self,
        origin: &str,
        destination: &str,
        rng: &mut R,
    ) -> Result<u64, CatalogError> {
        if origin == destination {
            self.catalog.population(origin)?;
            return Ok(0);
        }

        let mut value = self.base_value(origin, destination)? as f64;
        if self.catalog.are_neighbors(origin, destination) {
            value *= rng.gen_range(NEIGHBOR_BONUS.0..=NEIGHBOR_BONUS.1);
        }
        if let Some(bonus) = self.catalog.destination_bonus(destination) {
            value *= bonus;
        }
        value *= rng.gen_range(NOISE.0..=NOISE.1);

        Ok((value as u64).max(MIN_FLOW))
    }

    /// Every ordered pair of distinct states, largest flows first.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MigrationDataset, CatalogError> {
        let states = self.catalog.states();
        let mut migrations = Vec::with_capacity(states.len() * states.len().saturating_sub(1));
        for origin in states {
            for destination in states {
                if origin.name == destination.name {
                    continue;
                }
                migrations.push(MigrationRecord {
                    origin: origin.name.to_string(),
                    destination: destination.name.to_string(),
                    value: self.value(origin.name, destination.name, rng)?,
                });
            }
        }
        migrations.sort_by(|a, b| b.value.cmp(&a.value));
        debug!(
            "migration model ({}) produced {} records",
            self.era(),
            migrations.len()
        );
        Ok(MigrationDataset { migrations })
    }
}

pub fn file_name(era: Era) -> String {
    format!("migration_{}.json", era.as_str())
}
