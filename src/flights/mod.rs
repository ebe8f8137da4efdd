//! Flight records and the generators that produce them.

pub mod economics;
pub mod puzzle;
pub mod simple;

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{airlines, Airline, Airport, CatalogError};
use economics::{flight_duration, round_tenth, PricingModel, PricingPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: u64,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub duration: f64,
    pub date: NaiveDate,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
}

impl Flight {
    pub fn route(&self) -> (&str, &str) {
        (&self.origin, &self.destination)
    }
}

/// Running id counter shared by every batch of one corpus.
#[derive(Debug, Clone)]
pub struct FlightIds {
    next: u64,
}

impl FlightIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for FlightIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Inclusive range of departure dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the window; zero when `end` precedes `start`.
    pub fn len_days(&self) -> u64 {
        let days = (self.end - self.start).num_days();
        if days < 0 {
            0
        } else {
            days as u64 + 1
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..self.len_days() as i64)
            .map(|offset| self.start + Duration::days(offset))
            .collect()
    }

    pub fn random_date<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let span = (self.end - self.start).num_days().max(0);
        self.start + Duration::days(rng.gen_range(0..=span))
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("route {origin}-{destination} has identical endpoints")]
    DegenerateRoute { origin: String, destination: String },
    #[error("target of {target} flights exceeds the {capacity} available slots")]
    CapacityExhausted { target: usize, capacity: usize },
    #[error("guaranteed flights ({planted}) already exceed the target of {target}")]
    TargetTooSmall { planted: usize, target: usize },
}

/// Builds fully-derived flight records for a route.
pub struct FlightFactory {
    pricing: PricingModel,
}

impl FlightFactory {
    pub fn new(pricing: PricingModel) -> Self {
        Self { pricing }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn build<R: Rng + ?Sized>(
        &self,
        ids: &mut FlightIds,
        origin: &Airport,
        destination: &Airport,
        date: NaiveDate,
        airline: Option<Airline>,
        policy: PricingPolicy,
        rng: &mut R,
    ) -> Result<Flight, GenerationError> {
        if origin.iata == destination.iata {
            return Err(GenerationError::DegenerateRoute {
                origin: origin.iata.to_string(),
                destination: destination.iata.to_string(),
            });
        }
        let distance = origin.distance_km(destination);
        let duration = flight_duration(distance, rng);
        let price = self.pricing.price(distance, duration, policy, rng);
        Ok(Flight {
            id: ids.next_id(),
            origin: origin.iata.to_string(),
            destination: destination.iata.to_string(),
            price,
            duration,
            date,
            distance_km: round_tenth(distance),
            airline,
        })
    }
}

/// Picks a carrier based on either end of the route.
pub fn pick_airline<R: Rng + ?Sized>(
    origin: &Airport,
    destination: &Airport,
    rng: &mut R,
) -> Option<Airline> {
    airlines::serving(origin.continent, destination.continent)
        .choose(rng)
        .cloned()
}
