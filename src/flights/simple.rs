//! Flat generator: a fixed number of flights over random airport pairs, with
//! no repeated (origin, destination, date) key.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::economics::PricingPolicy;
use super::{DateWindow, Flight, FlightFactory, FlightIds, GenerationError};
use crate::catalog::Airport;

pub struct SimpleCorpusBuilder<'a> {
    airports: &'a [&'static Airport],
    window: DateWindow,
    factory: FlightFactory,
}

impl<'a> SimpleCorpusBuilder<'a> {
    pub fn new(
        airports: &'a [&'static Airport],
        window: DateWindow,
        factory: FlightFactory,
    ) -> Self {
        Self {
            airports,
            window,
            factory,
        }
    }

    /// Number of distinct (origin, destination, date) keys available.
    pub fn capacity(&self) -> usize {
        let n = self.airports.len();
        n * n.saturating_sub(1) * self.window.len_days() as usize
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        target: usize,
        ids: &mut FlightIds,
        rng: &mut R,
    ) -> Result<Vec<Flight>, GenerationError> {
        let capacity = self.capacity();
        if target > capacity {
            return Err(GenerationError::CapacityExhausted { target, capacity });
        }

        let mut flights = Vec::with_capacity(target);
        let mut seen: HashSet<(&str, &str, NaiveDate)> = HashSet::with_capacity(target);
        let mut rejected = 0_usize;
        while flights.len() < target {
            let pair: Vec<&&Airport> = self.airports.choose_multiple(rng, 2).collect();
            let (origin, destination) = (*pair[0], *pair[1]);
            let date = self.window.random_date(rng);
            if !seen.insert((origin.iata, destination.iata, date)) {
                rejected += 1;
                continue;
            }
            flights.push(self.factory.build(
                ids,
                origin,
                destination,
                date,
                None,
                PricingPolicy::Ordinary,
                rng,
            )?);
        }
        debug!(
            "simple generator produced {} flights ({} duplicate keys resampled)",
            flights.len(),
            rejected
        );
        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::airports::airports_for;
    use crate::catalog::CLASSIC_AIRPORTS;
    use crate::flights::economics::PricingModel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn may() -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        )
    }

    fn classic() -> Vec<&'static Airport> {
        let codes: Vec<String> = CLASSIC_AIRPORTS.iter().map(|c| c.to_string()).collect();
        airports_for(&codes).unwrap()
    }

    #[test]
    fn produces_exact_target_with_unique_keys() {
        let airports = classic();
        let builder = SimpleCorpusBuilder::new(
            &airports,
            may(),
            FlightFactory::new(PricingModel::standard()),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let flights = builder
            .generate(200, &mut FlightIds::default(), &mut rng)
            .unwrap();

        assert_eq!(flights.len(), 200);
        let keys: HashSet<(&str, &str, NaiveDate)> = flights
            .iter()
            .map(|f| (f.origin.as_str(), f.destination.as_str(), f.date))
            .collect();
        assert_eq!(keys.len(), 200);
        for flight in &flights {
            assert_ne!(flight.origin, flight.destination);
            assert!(flight.duration >= 1.0);
            assert!((100.0..=1200.0).contains(&flight.price));
            assert!(may().contains(flight.date));
        }
    }

    #[test]
    fn can_fill_every_slot() {
        let airports: Vec<&'static Airport> = classic().into_iter().take(3).collect();
        let window = DateWindow::new(may().start, may().start);
        let builder = SimpleCorpusBuilder::new(
            &airports,
            window,
            FlightFactory::new(PricingModel::standard()),
        );
        assert_eq!(builder.capacity(), 6);
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let flights = builder
            .generate(6, &mut FlightIds::default(), &mut rng)
            .unwrap();
        assert_eq!(flights.len(), 6);
    }

    #[test]
    fn rejects_unreachable_target() {
        let airports = classic();
        let builder = SimpleCorpusBuilder::new(
            &airports,
            may(),
            FlightFactory::new(PricingModel::standard()),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let result = builder.generate(1_000_000, &mut FlightIds::default(), &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::CapacityExhausted { capacity: 6510, .. })
        ));
    }
}
