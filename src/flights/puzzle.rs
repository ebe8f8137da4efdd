//! Puzzle corpus: a handful of planted flights that satisfy two travelers at
//! once, buried in route-focused and random noise.
//!
//! Assembly runs in three passes that share one id counter:
//!
//! 1. solution flights, one per traveler per planted (destination, date),
//!    priced into the solution band and flown by the common airline;
//! 2. interest flights from each traveler's home to every interest
//!    destination, never on a date planted for that destination;
//! 3. filler flights on every other route, capped per route, until the
//!    target count is reached.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::economics::{PriceBand, PricingModel, PricingPolicy};
use super::{pick_airline, DateWindow, Flight, FlightFactory, FlightIds, GenerationError};
use crate::catalog::{airline, airport, Airport, AIRPORTS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub origin_airport: String,
    pub available_dates: Vec<NaiveDate>,
    pub preferred_airlines: Vec<String>,
    pub max_budget: f64,
}

impl Traveler {
    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available_dates.contains(&date)
    }

    pub fn prefers(&self, airline_code: &str) -> bool {
        self.preferred_airlines.iter().any(|code| code == airline_code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Travelers {
    pub user_1: Traveler,
    pub user_2: Traveler,
}

impl Travelers {
    pub fn both(&self) -> [&Traveler; 2] {
        [&self.user_1, &self.user_2]
    }

    /// Dates both travelers can fly, ascending.
    pub fn overlap_dates(&self) -> Vec<NaiveDate> {
        let second: HashSet<NaiveDate> = self.user_2.available_dates.iter().copied().collect();
        self.user_1
            .available_dates
            .iter()
            .copied()
            .filter(|date| second.contains(date))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSlot {
    pub destination: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_puzzle_target")]
    pub target_count: usize,
    pub window: DateWindow,
    pub travelers: Travelers,
    pub common_airline: String,
    pub solutions: Vec<SolutionSlot>,
    pub interest_destinations: Vec<String>,
    #[serde(default = "default_interest_range")]
    pub interest_flights_per_route: CountRange,
    #[serde(default = "default_filler_cap")]
    pub filler_cap_per_route: usize,
    #[serde(default = "default_solution_band")]
    pub solution_band: PriceBand,
    #[serde(default = "PricingModel::puzzle")]
    pub pricing: PricingModel,
}

fn default_title() -> String {
    "Meet me in Europe".to_string()
}

fn default_puzzle_target() -> usize {
    5000
}

fn default_interest_range() -> CountRange {
    CountRange { min: 25, max: 40 }
}

fn default_filler_cap() -> usize {
    5
}

fn default_solution_band() -> PriceBand {
    PriceBand::new(600.0, 1100.0)
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).expect("valid June 2025 date")
}

impl Default for PuzzleConfig {
    /// Two friends in Toronto and Vancouver looking for a shared European
    /// weekend in June 2025.
    fn default() -> Self {
        Self {
            title: default_title(),
            target_count: default_puzzle_target(),
            window: DateWindow::new(june(1), june(30)),
            travelers: Travelers {
                user_1: Traveler {
                    origin_airport: "YYZ".into(),
                    available_dates: [12, 13, 14, 20, 21, 27].map(june).to_vec(),
                    preferred_airlines: vec!["AC".into(), "UA".into(), "LH".into()],
                    max_budget: 1100.0,
                },
                user_2: Traveler {
                    origin_airport: "YVR".into(),
                    available_dates: [14, 15, 19, 20, 27, 28].map(june).to_vec(),
                    preferred_airlines: vec!["WS".into(), "UA".into(), "AF".into()],
                    max_budget: 1000.0,
                },
            },
            common_airline: "UA".into(),
            solutions: vec![
                SolutionSlot {
                    destination: "LIS".into(),
                    date: june(14),
                },
                SolutionSlot {
                    destination: "PRG".into(),
                    date: june(20),
                },
                SolutionSlot {
                    destination: "BUD".into(),
                    date: june(27),
                },
            ],
            interest_destinations: [
                "LHR", "CDG", "AMS", "FRA", "MAD", "ZRH", "LIS", "VIE", "PRG", "WAW", "BUD",
            ]
            .map(String::from)
            .to_vec(),
            interest_flights_per_route: default_interest_range(),
            filler_cap_per_route: default_filler_cap(),
            solution_band: default_solution_band(),
            pricing: PricingModel::puzzle(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConstraints {
    pub overlap_dates: Vec<NaiveDate>,
    pub date_window: DateWindow,
}

/// Public brief handed to whoever solves the puzzle. Never lists the
/// planted solutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDescription {
    pub title: String,
    pub friends: Travelers,
    pub constraints: PuzzleConstraints,
}

impl PuzzleDescription {
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self {
            title: config.title.clone(),
            friends: config.travelers.clone(),
            constraints: PuzzleConstraints {
                overlap_dates: config.travelers.overlap_dates(),
                date_window: config.window,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PuzzleCorpus {
    pub flights: Vec<Flight>,
    pub solution_count: usize,
    pub interest_count: usize,
    pub filler_count: usize,
}

pub struct PuzzleCorpusBuilder<'a> {
    config: &'a PuzzleConfig,
    factory: FlightFactory,
}

impl<'a> PuzzleCorpusBuilder<'a> {
    pub fn new(config: &'a PuzzleConfig) -> Self {
        Self {
            config,
            factory: FlightFactory::new(config.pricing),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PuzzleCorpus, GenerationError> {
        let mut ids = FlightIds::default();
        let solutions = self.solution_flights(&mut ids, rng)?;
        let interest = self.interest_flights(&mut ids, rng)?;

        let planted = solutions.len() + interest.len();
        let target = self.config.target_count;
        if planted > target {
            return Err(GenerationError::TargetTooSmall { planted, target });
        }

        let covered: HashSet<(&str, &str)> = solutions
            .iter()
            .chain(interest.iter())
            .map(Flight::route)
            .collect();
        let filler = self.filler_flights(target - planted, &covered, &mut ids, rng)?;

        debug!(
            "puzzle corpus: {} solution, {} interest, {} filler flights",
            solutions.len(),
            interest.len(),
            filler.len()
        );

        let (solution_count, interest_count, filler_count) =
            (solutions.len(), interest.len(), filler.len());
        let mut flights = solutions;
        flights.extend(interest);
        flights.extend(filler);
        Ok(PuzzleCorpus {
            flights,
            solution_count,
            interest_count,
            filler_count,
        })
    }

    fn solution_flights<R: Rng + ?Sized>(
        &self,
        ids: &mut FlightIds,
        rng: &mut R,
    ) -> Result<Vec<Flight>, GenerationError> {
        let carrier = airline(&self.config.common_airline)?;
        let mut flights = Vec::with_capacity(self.config.solutions.len() * 2);
        for slot in &self.config.solutions {
            let destination = airport(&slot.destination)?;
            for traveler in self.config.travelers.both() {
                let origin = airport(&traveler.origin_airport)?;
                let band = self.config.solution_band.capped_at(traveler.max_budget);
                flights.push(self.factory.build(
                    ids,
                    origin,
                    destination,
                    slot.date,
                    Some(carrier.clone()),
                    PricingPolicy::Solution(band),
                    rng,
                )?);
            }
        }
        Ok(flights)
    }

    fn interest_flights<R: Rng + ?Sized>(
        &self,
        ids: &mut FlightIds,
        rng: &mut R,
    ) -> Result<Vec<Flight>, GenerationError> {
        let window_dates = self.config.window.dates();
        let range = self.config.interest_flights_per_route;
        let mut flights = Vec::new();

        for traveler in self.config.travelers.both() {
            let origin = airport(&traveler.origin_airport)?;
            for code in &self.config.interest_destinations {
                let destination = airport(code)?;
                if destination.iata == origin.iata {
                    continue;
                }
                let planted: HashSet<NaiveDate> = self
                    .config
                    .solutions
                    .iter()
                    .filter(|slot| slot.destination == *code)
                    .map(|slot| slot.date)
                    .collect();
                let open_dates: Vec<NaiveDate> = window_dates
                    .iter()
                    .copied()
                    .filter(|date| !planted.contains(date))
                    .collect();
                if open_dates.is_empty() {
                    warn!(
                        "no free dates for interest route {}-{}; skipping",
                        origin.iata, destination.iata
                    );
                    continue;
                }

                let count = rng.gen_range(range.min..=range.max);
                for _ in 0..count {
                    let Some(&date) = open_dates.choose(rng) else {
                        break;
                    };
                    let carrier = pick_airline(origin, destination, rng);
                    flights.push(self.factory.build(
                        ids,
                        origin,
                        destination,
                        date,
                        carrier,
                        PricingPolicy::Ordinary,
                        rng,
                    )?);
                }
            }
        }
        Ok(flights)
    }

    fn filler_flights<R: Rng + ?Sized>(
        &self,
        needed: usize,
        covered: &HashSet<(&str, &str)>,
        ids: &mut FlightIds,
        rng: &mut R,
    ) -> Result<Vec<Flight>, GenerationError> {
        let cap = self.config.filler_cap_per_route;
        let mut open: Vec<(&'static Airport, &'static Airport, usize)> = AIRPORTS
            .iter()
            .flat_map(|origin| AIRPORTS.iter().map(move |destination| (origin, destination)))
            .filter(|(origin, destination)| origin.iata != destination.iata)
            .filter(|(origin, destination)| !covered.contains(&(origin.iata, destination.iata)))
            .map(|(origin, destination)| (origin, destination, 0))
            .collect();

        let capacity = open.len() * cap;
        if needed > capacity {
            return Err(GenerationError::CapacityExhausted {
                target: needed,
                capacity,
            });
        }

        let mut flights = Vec::with_capacity(needed);
        while flights.len() < needed {
            let index = rng.gen_range(0..open.len());
            let (origin, destination, _) = open[index];
            let date = self.config.window.random_date(rng);
            let carrier = pick_airline(origin, destination, rng);
            flights.push(self.factory.build(
                ids,
                origin,
                destination,
                date,
                carrier,
                PricingPolicy::Ordinary,
                rng,
            )?);
            open[index].2 += 1;
            if open[index].2 >= cap {
                open.swap_remove(index);
            }
        }
        Ok(flights)
    }
}
