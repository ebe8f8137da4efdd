//! Distance-derived duration and fare models.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SHORT_HAUL_SPEED_KMH: f64 = 600.0;
const LONG_HAUL_SPEED_KMH: f64 = 800.0;
const LONG_HAUL_CUTOFF_KM: f64 = 2000.0;
const DURATION_JITTER: f64 = 0.15;
pub const MIN_DURATION_HOURS: f64 = 1.0;

/// Block time in hours: cruise speed by stage length, ±15% jitter, floored
/// at one hour and rounded to a tenth.
pub fn flight_duration<R: Rng + ?Sized>(distance_km: f64, rng: &mut R) -> f64 {
    let speed = if distance_km > LONG_HAUL_CUTOFF_KM {
        LONG_HAUL_SPEED_KMH
    } else {
        SHORT_HAUL_SPEED_KMH
    };
    let jitter = rng.gen_range(1.0 - DURATION_JITTER..=1.0 + DURATION_JITTER);
    round_tenth((distance_km / speed * jitter).max(MIN_DURATION_HOURS))
}

/// Closed price interval. Clamping never panics: if the bounds cross, the
/// ceiling wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub floor: f64,
    pub ceiling: f64,
}

impl PriceBand {
    pub fn new(floor: f64, ceiling: f64) -> Self {
        Self { floor, ceiling }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.floor).min(self.ceiling)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.floor && value <= self.ceiling
    }

    /// Narrows the ceiling, e.g. to a traveler's budget. The cap is taken
    /// down to whole cents so a rounded fare can never pass it.
    pub fn capped_at(&self, ceiling: f64) -> Self {
        let ceiling = (ceiling * 100.0).floor() / 100.0;
        Self::new(self.floor, self.ceiling.min(ceiling))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFloor {
    Fixed(f64),
    DistanceScaled { minimum: f64, per_km: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariationRange {
    pub min: f64,
    pub max: f64,
}

/// Selects whether the general fare is used as-is or forced into a band
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingPolicy {
    Ordinary,
    Solution(PriceBand),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingModel {
    pub base_rate_per_km: f64,
    /// Distance at which the per-km rate reaches its 50% reduction.
    pub taper_distance_km: f64,
    pub duration_divisor: f64,
    pub variation: VariationRange,
    pub long_haul_threshold_km: f64,
    pub long_haul_span_km: f64,
    pub long_haul_max_discount: f64,
    pub floor: PriceFloor,
    pub ceiling: f64,
}

impl PricingModel {
    /// Parameters used by the simple generator: fares in [100, 1200].
    pub fn standard() -> Self {
        Self {
            base_rate_per_km: 0.18,
            taper_distance_km: 8000.0,
            duration_divisor: 15.0,
            variation: VariationRange {
                min: 0.85,
                max: 1.15,
            },
            long_haul_threshold_km: 4000.0,
            long_haul_span_km: 6000.0,
            long_haul_max_discount: 0.15,
            floor: PriceFloor::Fixed(100.0),
            ceiling: 1200.0,
        }
    }

    /// Parameters used by the puzzle generator: distance-scaled floor,
    /// ceiling 2000, upward-skewed variation.
    pub fn puzzle() -> Self {
        Self {
            base_rate_per_km: 0.18,
            taper_distance_km: 10000.0,
            duration_divisor: 12.0,
            variation: VariationRange {
                min: 0.85,
                max: 1.20,
            },
            long_haul_threshold_km: 5000.0,
            long_haul_span_km: 6000.0,
            long_haul_max_discount: 0.15,
            floor: PriceFloor::DistanceScaled {
                minimum: 100.0,
                per_km: 0.04,
            },
            ceiling: 2000.0,
        }
    }

    /// The clamp range an ordinary fare over `distance_km` falls into.
    pub fn bounds(&self, distance_km: f64) -> PriceBand {
        let floor = match self.floor {
            PriceFloor::Fixed(value) => value,
            PriceFloor::DistanceScaled { minimum, per_km } => minimum.max(per_km * distance_km),
        };
        PriceBand::new(round_cents(floor).min(self.ceiling), self.ceiling)
    }

    pub fn price<R: Rng + ?Sized>(
        &self,
        distance_km: f64,
        duration_hours: f64,
        policy: PricingPolicy,
        rng: &mut R,
    ) -> f64 {
        let taper = (distance_km / self.taper_distance_km).min(1.0);
        let rate = self.base_rate_per_km * (1.0 - 0.5 * taper);
        let duration_multiplier = 1.0 + duration_hours / self.duration_divisor;
        let variation = rng.gen_range(self.variation.min..=self.variation.max);
        let mut price = distance_km * rate * duration_multiplier * variation;

        if distance_km > self.long_haul_threshold_km {
            let excess =
                ((distance_km - self.long_haul_threshold_km) / self.long_haul_span_km).min(1.0);
            price *= 1.0 - self.long_haul_max_discount * excess;
        }

        let price = self.bounds(distance_km).clamp(price);
        let price = match policy {
            PricingPolicy::Ordinary => price,
            PricingPolicy::Solution(band) => band.clamp(price),
        };
        round_cents(price)
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const YYZ_LHR_KM: f64 = 5707.16;

    #[test]
    fn duration_uses_long_haul_speed_and_jitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let hours = flight_duration(YYZ_LHR_KM, &mut rng);
            assert!((6.0..=8.3).contains(&hours), "got {hours}");
        }
    }

    #[test]
    fn short_hops_are_floored_at_one_hour() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(flight_duration(180.0, &mut rng), MIN_DURATION_HOURS);
        }
    }

    #[test]
    fn duration_rounds_to_one_decimal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let hours = flight_duration(3333.0, &mut rng);
        assert_eq!(round_tenth(hours), hours);
    }

    #[test]
    fn standard_prices_stay_in_range() {
        let model = PricingModel::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for distance in [150.0, 900.0, 2500.0, YYZ_LHR_KM, 9000.0, 16000.0] {
            for _ in 0..50 {
                let hours = flight_duration(distance, &mut rng);
                let price = model.price(distance, hours, PricingPolicy::Ordinary, &mut rng);
                assert!((100.0..=1200.0).contains(&price), "{distance} km -> {price}");
            }
        }
    }

    #[test]
    fn puzzle_floor_scales_with_distance() {
        let model = PricingModel::puzzle();
        assert_eq!(model.bounds(500.0), PriceBand::new(100.0, 2000.0));
        assert_eq!(model.bounds(10000.0), PriceBand::new(400.0, 2000.0));
        assert_eq!(model.bounds(80000.0).floor, 2000.0);
    }

    #[test]
    fn solution_override_applies_after_general_formula() {
        let model = PricingModel::puzzle();
        let band = PriceBand::new(600.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for distance in [350.0, YYZ_LHR_KM, 9100.0] {
            for _ in 0..50 {
                let price = model.price(distance, 8.0, PricingPolicy::Solution(band), &mut rng);
                assert!(band.contains(price), "{distance} km -> {price}");
            }
        }
    }

    #[test]
    fn fractional_budget_is_never_rounded_past() {
        let model = PricingModel::puzzle();
        let budget = 600.996;
        let band = PriceBand::new(600.0, 1100.0).capped_at(budget);
        assert!(band.ceiling <= budget);

        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..200 {
            let price = model.price(7900.0, 10.0, PricingPolicy::Solution(band), &mut rng);
            assert!(price <= budget, "{price}");
            assert!(price >= 600.0, "{price}");
        }
    }

    #[test]
    fn same_seed_same_fare() {
        let model = PricingModel::puzzle();
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            model.price(YYZ_LHR_KM, 7.5, PricingPolicy::Ordinary, &mut a),
            model.price(YYZ_LHR_KM, 7.5, PricingPolicy::Ordinary, &mut b)
        );
    }

    #[test]
    fn band_clamp_prefers_ceiling_when_crossed() {
        let band = PriceBand::new(600.0, 500.0);
        assert_eq!(band.clamp(550.0), 500.0);
        assert_eq!(PriceBand::new(600.0, 1100.0).capped_at(900.0).ceiling, 900.0);
    }
}
