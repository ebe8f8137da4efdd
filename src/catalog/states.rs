//! U.S. state populations, adjacency, and popular-destination bonuses.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Historical period selecting a population and destination-bonus table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "1960s")]
    Sixties,
    #[serde(rename = "2020s")]
    TwentyTwenties,
}

impl Era {
    pub const ALL: [Era; 2] = [Era::Sixties, Era::TwentyTwenties];

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Sixties => "1960s",
            Era::TwentyTwenties => "2020s",
        }
    }

    fn populations(&self) -> &'static [(&'static str, u64)] {
        match self {
            Era::Sixties => POPULATIONS_1960,
            Era::TwentyTwenties => POPULATIONS_2020,
        }
    }

    fn destination_multipliers(&self) -> &'static [(&'static str, f64)] {
        match self {
            Era::Sixties => DESTINATION_MULTIPLIERS_1960S,
            Era::TwentyTwenties => DESTINATION_MULTIPLIERS_2020S,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|era| era.as_str() == value.trim())
            .ok_or_else(|| {
                let known: Vec<&str> = Era::ALL.iter().map(Era::as_str).collect();
                format!("unknown era '{value}', expected one of {}", known.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub name: &'static str,
    pub population: u64,
}

/// Lookup tables for one era.
pub struct StateCatalog {
    era: Era,
    states: Vec<State>,
    populations: HashMap<&'static str, u64>,
    neighbors: HashMap<&'static str, &'static [&'static str]>,
    bonuses: HashMap<&'static str, f64>,
}

impl StateCatalog {
    pub fn for_era(era: Era) -> Self {
        let states: Vec<State> = era
            .populations()
            .iter()
            .map(|&(name, population)| State { name, population })
            .collect();
        Self {
            era,
            populations: states.iter().map(|s| (s.name, s.population)).collect(),
            states,
            neighbors: NEIGHBORING_STATES.iter().copied().collect(),
            bonuses: era.destination_multipliers().iter().copied().collect(),
        }
    }

    pub fn era(&self) -> Era {
        self.era
    }

    /// States in table order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn population(&self, state: &str) -> Result<u64, CatalogError> {
        self.populations
            .get(state)
            .copied()
            .ok_or_else(|| CatalogError::UnknownState {
                state: state.to_string(),
                era: self.era,
            })
    }

    pub fn are_neighbors(&self, origin: &str, destination: &str) -> bool {
        self.neighbors
            .get(origin)
            .map(|list| list.iter().any(|name| *name == destination))
            .unwrap_or(false)
    }

    pub fn destination_bonus(&self, destination: &str) -> Option<f64> {
        self.bonuses.get(destination).copied()
    }
}

const POPULATIONS_1960: &[(&str, u64)] = &[
    ("NEW YORK", 16_782_304),
    ("CALIFORNIA", 15_717_204),
    ("PENNSYLVANIA", 11_319_366),
    ("ILLINOIS", 10_081_158),
    ("OHIO", 9_706_397),
    ("TEXAS", 9_579_677),
    ("MICHIGAN", 7_823_194),
    ("NEW JERSEY", 6_066_782),
    ("MASSACHUSETTS", 5_148_578),
    ("FLORIDA", 4_951_560),
    ("INDIANA", 4_662_498),
    ("NORTH CAROLINA", 4_556_155),
    ("MISSOURI", 4_319_813),
    ("VIRGINIA", 3_966_949),
    ("WISCONSIN", 3_951_777),
    ("GEORGIA", 3_943_116),
    ("TENNESSEE", 3_567_089),
    ("MINNESOTA", 3_413_864),
    ("ALABAMA", 3_266_740),
    ("LOUISIANA", 3_257_022),
    ("MARYLAND", 3_100_689),
    ("KENTUCKY", 3_038_156),
    ("WASHINGTON", 2_853_214),
    ("IOWA", 2_757_537),
    ("CONNECTICUT", 2_535_234),
    ("SOUTH CAROLINA", 2_382_594),
    ("OKLAHOMA", 2_328_284),
    ("KANSAS", 2_178_611),
    ("MISSISSIPPI", 2_178_141),
    ("WEST VIRGINIA", 1_860_421),
    ("ARKANSAS", 1_786_272),
    ("OREGON", 1_768_687),
    ("COLORADO", 1_753_947),
    ("NEBRASKA", 1_411_330),
    ("ARIZONA", 1_302_161),
    ("MAINE", 969_265),
    ("NEW MEXICO", 951_023),
    ("UTAH", 890_627),
    ("RHODE ISLAND", 859_488),
    ("DISTRICT OF COLUMBIA", 763_956),
    ("SOUTH DAKOTA", 680_514),
    ("MONTANA", 674_767),
    ("IDAHO", 667_191),
    ("HAWAII", 632_772),
    ("NORTH DAKOTA", 632_446),
    ("NEW HAMPSHIRE", 606_921),
    ("DELAWARE", 446_292),
    ("VERMONT", 389_881),
    ("WYOMING", 330_066),
    ("NEVADA", 285_278),
    ("ALASKA", 226_167),
];

const POPULATIONS_2020: &[(&str, u64)] = &[
    ("CALIFORNIA", 39_538_223),
    ("TEXAS", 29_145_505),
    ("FLORIDA", 21_538_187),
    ("NEW YORK", 20_201_249),
    ("PENNSYLVANIA", 13_002_700),
    ("ILLINOIS", 12_812_508),
    ("OHIO", 11_799_448),
    ("GEORGIA", 10_711_908),
    ("NORTH CAROLINA", 10_439_388),
    ("MICHIGAN", 10_077_331),
    ("NEW JERSEY", 9_288_994),
    ("VIRGINIA", 8_631_393),
    ("WASHINGTON", 7_705_281),
    ("ARIZONA", 7_151_502),
    ("MASSACHUSETTS", 7_029_917),
    ("TENNESSEE", 6_910_840),
    ("INDIANA", 6_785_528),
    ("MARYLAND", 6_177_224),
    ("MISSOURI", 6_154_913),
    ("WISCONSIN", 5_893_718),
    ("COLORADO", 5_773_714),
    ("MINNESOTA", 5_706_494),
    ("SOUTH CAROLINA", 5_118_425),
    ("ALABAMA", 5_024_279),
    ("LOUISIANA", 4_657_757),
    ("KENTUCKY", 4_505_836),
    ("OREGON", 4_237_256),
    ("OKLAHOMA", 3_959_353),
    ("CONNECTICUT", 3_605_944),
    ("UTAH", 3_271_616),
    ("IOWA", 3_190_369),
    ("NEVADA", 3_104_614),
    ("ARKANSAS", 3_011_524),
    ("MISSISSIPPI", 2_961_279),
    ("KANSAS", 2_937_880),
    ("NEW MEXICO", 2_117_522),
    ("NEBRASKA", 1_961_504),
    ("IDAHO", 1_839_106),
    ("WEST VIRGINIA", 1_793_716),
    ("HAWAII", 1_455_271),
    ("NEW HAMPSHIRE", 1_377_529),
    ("MAINE", 1_362_359),
    ("RHODE ISLAND", 1_097_379),
    ("MONTANA", 1_084_225),
    ("DELAWARE", 989_948),
    ("SOUTH DAKOTA", 886_667),
    ("NORTH DAKOTA", 779_094),
    ("ALASKA", 733_391),
    ("DISTRICT OF COLUMBIA", 689_545),
    ("VERMONT", 643_077),
    ("WYOMING", 576_851),
];

// Postwar sunbelt and industrial-midwest draw.
const DESTINATION_MULTIPLIERS_1960S: &[(&str, f64)] = &[
    ("CALIFORNIA", 1.6),
    ("FLORIDA", 1.5),
    ("ARIZONA", 1.3),
    ("NEVADA", 1.2),
    ("TEXAS", 1.2),
    ("MARYLAND", 1.1),
    ("MICHIGAN", 1.1),
    ("WASHINGTON", 1.1),
    ("COLORADO", 1.1),
    ("NEW JERSEY", 1.1),
];

const DESTINATION_MULTIPLIERS_2020S: &[(&str, f64)] = &[
    ("FLORIDA", 1.5),
    ("TEXAS", 1.4),
    ("CALIFORNIA", 1.3),
    ("ARIZONA", 1.2),
    ("NORTH CAROLINA", 1.2),
    ("COLORADO", 1.2),
    ("WASHINGTON", 1.1),
    ("OREGON", 1.1),
    ("NEVADA", 1.1),
    ("TENNESSEE", 1.1),
];

// ALASKA and HAWAII list their closest mainland partner.
#[rustfmt::skip]
const NEIGHBORING_STATES: &[(&str, &[&str])] = &[
    ("ALABAMA", &["FLORIDA", "GEORGIA", "TENNESSEE", "MISSISSIPPI"]),
    ("ALASKA", &["WASHINGTON"]),
    ("ARIZONA", &["CALIFORNIA", "NEVADA", "NEW MEXICO", "UTAH"]),
    ("ARKANSAS", &["LOUISIANA", "MISSISSIPPI", "MISSOURI", "OKLAHOMA", "TENNESSEE", "TEXAS"]),
    ("CALIFORNIA", &["ARIZONA", "NEVADA", "OREGON"]),
    ("COLORADO", &["KANSAS", "NEBRASKA", "NEW MEXICO", "OKLAHOMA", "UTAH", "WYOMING"]),
    ("CONNECTICUT", &["MASSACHUSETTS", "NEW YORK", "RHODE ISLAND"]),
    ("DELAWARE", &["MARYLAND", "NEW JERSEY", "PENNSYLVANIA"]),
    ("DISTRICT OF COLUMBIA", &["MARYLAND", "VIRGINIA"]),
    ("FLORIDA", &["ALABAMA", "GEORGIA"]),
    ("GEORGIA", &["ALABAMA", "FLORIDA", "NORTH CAROLINA", "SOUTH CAROLINA", "TENNESSEE"]),
    ("HAWAII", &["CALIFORNIA"]),
    ("IDAHO", &["MONTANA", "NEVADA", "OREGON", "UTAH", "WASHINGTON", "WYOMING"]),
    ("ILLINOIS", &["INDIANA", "IOWA", "KENTUCKY", "MISSOURI", "WISCONSIN"]),
    ("INDIANA", &["ILLINOIS", "KENTUCKY", "MICHIGAN", "OHIO"]),
    ("IOWA", &["ILLINOIS", "MINNESOTA", "MISSOURI", "NEBRASKA", "SOUTH DAKOTA", "WISCONSIN"]),
    ("KANSAS", &["COLORADO", "MISSOURI", "NEBRASKA", "OKLAHOMA"]),
    ("KENTUCKY", &["ILLINOIS", "INDIANA", "MISSOURI", "OHIO", "TENNESSEE", "VIRGINIA", "WEST VIRGINIA"]),
    ("LOUISIANA", &["ARKANSAS", "MISSISSIPPI", "TEXAS"]),
    ("MAINE", &["NEW HAMPSHIRE"]),
    ("MARYLAND", &["DELAWARE", "PENNSYLVANIA", "VIRGINIA", "WEST VIRGINIA"]),
    ("MASSACHUSETTS", &["CONNECTICUT", "NEW HAMPSHIRE", "NEW YORK", "RHODE ISLAND", "VERMONT"]),
    ("MICHIGAN", &["INDIANA", "OHIO", "WISCONSIN"]),
    ("MINNESOTA", &["IOWA", "NORTH DAKOTA", "SOUTH DAKOTA", "WISCONSIN"]),
    ("MISSISSIPPI", &["ALABAMA", "ARKANSAS", "LOUISIANA", "TENNESSEE"]),
    ("MISSOURI", &["ARKANSAS", "ILLINOIS", "IOWA", "KANSAS", "KENTUCKY", "NEBRASKA", "OKLAHOMA", "TENNESSEE"]),
    ("MONTANA", &["IDAHO", "NORTH DAKOTA", "SOUTH DAKOTA", "WYOMING"]),
    ("NEBRASKA", &["COLORADO", "IOWA", "KANSAS", "MISSOURI", "SOUTH DAKOTA", "WYOMING"]),
    ("NEVADA", &["ARIZONA", "CALIFORNIA", "IDAHO", "OREGON", "UTAH"]),
    ("NEW HAMPSHIRE", &["MAINE", "MASSACHUSETTS", "VERMONT"]),
    ("NEW JERSEY", &["DELAWARE", "NEW YORK", "PENNSYLVANIA"]),
    ("NEW MEXICO", &["ARIZONA", "COLORADO", "OKLAHOMA", "TEXAS", "UTAH"]),
    ("NEW YORK", &["CONNECTICUT", "MASSACHUSETTS", "NEW JERSEY", "PENNSYLVANIA", "VERMONT"]),
    ("NORTH CAROLINA", &["GEORGIA", "SOUTH CAROLINA", "TENNESSEE", "VIRGINIA"]),
    ("NORTH DAKOTA", &["MINNESOTA", "MONTANA", "SOUTH DAKOTA"]),
    ("OHIO", &["INDIANA", "KENTUCKY", "MICHIGAN", "PENNSYLVANIA", "WEST VIRGINIA"]),
    ("OKLAHOMA", &["ARKANSAS", "COLORADO", "KANSAS", "MISSOURI", "NEW MEXICO", "TEXAS"]),
    ("OREGON", &["CALIFORNIA", "IDAHO", "NEVADA", "WASHINGTON"]),
    ("PENNSYLVANIA", &["DELAWARE", "MARYLAND", "NEW JERSEY", "NEW YORK", "OHIO", "WEST VIRGINIA"]),
    ("RHODE ISLAND", &["CONNECTICUT", "MASSACHUSETTS"]),
    ("SOUTH CAROLINA", &["GEORGIA", "NORTH CAROLINA"]),
    ("SOUTH DAKOTA", &["IOWA", "MINNESOTA", "MONTANA", "NEBRASKA", "NORTH DAKOTA", "WYOMING"]),
    ("TENNESSEE", &["ALABAMA", "ARKANSAS", "GEORGIA", "KENTUCKY", "MISSISSIPPI", "MISSOURI", "NORTH CAROLINA", "VIRGINIA"]),
    ("TEXAS", &["ARKANSAS", "LOUISIANA", "NEW MEXICO", "OKLAHOMA"]),
    ("UTAH", &["ARIZONA", "COLORADO", "IDAHO", "NEVADA", "NEW MEXICO", "WYOMING"]),
    ("VERMONT", &["MASSACHUSETTS", "NEW HAMPSHIRE", "NEW YORK"]),
    ("VIRGINIA", &["KENTUCKY", "MARYLAND", "NORTH CAROLINA", "TENNESSEE", "WEST VIRGINIA"]),
    ("WASHINGTON", &["IDAHO", "OREGON"]),
    ("WEST VIRGINIA", &["KENTUCKY", "MARYLAND", "OHIO", "PENNSYLVANIA", "VIRGINIA"]),
    ("WISCONSIN", &["ILLINOIS", "IOWA", "MICHIGAN", "MINNESOTA"]),
    ("WYOMING", &["COLORADO", "IDAHO", "MONTANA", "NEBRASKA", "SOUTH DAKOTA", "UTAH"]),
];
