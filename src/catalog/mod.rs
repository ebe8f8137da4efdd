//! Static reference tables: airports, airlines and U.S. states.

pub mod airlines;
pub mod airports;
pub mod states;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use airlines::{airline, airlines, Airline};
pub use airports::{airport, Airport, AIRPORTS, CLASSIC_AIRPORTS};
pub use states::{Era, StateCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Europe,
    Asia,
    Africa,
    Oceania,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown airport code '{0}'")]
    UnknownAirport(String),
    #[error("unknown airline code '{0}'")]
    UnknownAirline(String),
    #[error("unknown state '{state}' for era {era}")]
    UnknownState { state: String, era: Era },
}
