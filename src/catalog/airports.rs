use serde::Serialize;

use super::{CatalogError, Continent};
use crate::geo::Coordinates;

/// Airport entry as it appears in `airports.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    #[serde(rename = "IATA")]
    pub iata: &'static str,
    #[serde(rename = "Airport Name")]
    pub name: &'static str,
    #[serde(rename = "City")]
    pub city: &'static str,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(skip)]
    pub continent: Continent,
}

impl Airport {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn distance_km(&self, other: &Airport) -> f64 {
        self.coordinates().distance_km(&other.coordinates())
    }
}

const fn entry(
    iata: &'static str,
    name: &'static str,
    city: &'static str,
    latitude: f64,
    longitude: f64,
    continent: Continent,
) -> Airport {
    Airport {
        iata,
        name,
        city,
        latitude,
        longitude,
        continent,
    }
}

use Continent::*;

/// The fifteen airports the simple generator draws from.
pub const CLASSIC_AIRPORTS: [&str; 15] = [
    "YYZ", "YVR", "JFK", "LAX", "LHR", "CDG", "AMS", "FRA", "MAD", "ZRH", "LIS", "VIE", "PRG",
    "WAW", "BUD",
];

#[rustfmt::skip]
pub const AIRPORTS: &[Airport] = &[
    entry("YYZ", "Toronto Pearson International Airport", "Toronto", 43.6777, -79.6248, NorthAmerica),
    entry("YVR", "Vancouver International Airport", "Vancouver", 49.1947, -123.1792, NorthAmerica),
    entry("JFK", "John F. Kennedy International Airport", "New York", 40.6413, -73.7781, NorthAmerica),
    entry("LAX", "Los Angeles International Airport", "Los Angeles", 33.9416, -118.4085, NorthAmerica),
    entry("LHR", "Heathrow Airport", "London", 51.4700, -0.4543, Europe),
    entry("CDG", "Charles de Gaulle Airport", "Paris", 49.0097, 2.5479, Europe),
    entry("AMS", "Schiphol Airport", "Amsterdam", 52.3105, 4.7683, Europe),
    entry("FRA", "Frankfurt am Main Airport", "Frankfurt", 50.0379, 8.5622, Europe),
    entry("MAD", "Adolfo Suárez Madrid–Barajas Airport", "Madrid", 40.4722, -3.5608, Europe),
    entry("ZRH", "Zurich Airport", "Zurich", 47.4581, 8.5550, Europe),
    entry("LIS", "Humberto Delgado Airport", "Lisbon", 38.7742, -9.1342, Europe),
    entry("VIE", "Vienna International Airport", "Vienna", 48.1103, 16.5697, Europe),
    entry("PRG", "Václav Havel Airport Prague", "Prague", 50.1008, 14.2632, Europe),
    entry("WAW", "Warsaw Chopin Airport", "Warsaw", 52.1657, 20.9671, Europe),
    entry("BUD", "Budapest Ferenc Liszt International Airport", "Budapest", 47.4298, 19.2610, Europe),
    entry("YUL", "Montréal–Trudeau International Airport", "Montreal", 45.4706, -73.7408, NorthAmerica),
    entry("ORD", "O'Hare International Airport", "Chicago", 41.9742, -87.9073, NorthAmerica),
    entry("SFO", "San Francisco International Airport", "San Francisco", 37.6213, -122.3790, NorthAmerica),
    entry("MIA", "Miami International Airport", "Miami", 25.7959, -80.2870, NorthAmerica),
    entry("BOS", "Logan International Airport", "Boston", 42.3656, -71.0096, NorthAmerica),
    entry("SEA", "Seattle–Tacoma International Airport", "Seattle", 47.4502, -122.3088, NorthAmerica),
    entry("DEN", "Denver International Airport", "Denver", 39.8561, -104.6737, NorthAmerica),
    entry("ATL", "Hartsfield–Jackson Atlanta International Airport", "Atlanta", 33.6407, -84.4277, NorthAmerica),
    entry("MEX", "Mexico City International Airport", "Mexico City", 19.4361, -99.0719, NorthAmerica),
    entry("GRU", "São Paulo/Guarulhos International Airport", "São Paulo", -23.4356, -46.4731, SouthAmerica),
    entry("EZE", "Ministro Pistarini International Airport", "Buenos Aires", -34.8222, -58.5358, SouthAmerica),
    entry("DUB", "Dublin Airport", "Dublin", 53.4264, -6.2499, Europe),
    entry("CPH", "Copenhagen Airport", "Copenhagen", 55.6180, 12.6508, Europe),
    entry("ARN", "Stockholm Arlanda Airport", "Stockholm", 59.6498, 17.9238, Europe),
    entry("FCO", "Leonardo da Vinci–Fiumicino Airport", "Rome", 41.8003, 12.2389, Europe),
    entry("BCN", "Josep Tarradellas Barcelona–El Prat Airport", "Barcelona", 41.2974, 2.0833, Europe),
    entry("ATH", "Athens International Airport", "Athens", 37.9364, 23.9445, Europe),
    entry("IST", "Istanbul Airport", "Istanbul", 41.2753, 28.7519, Europe),
    entry("DXB", "Dubai International Airport", "Dubai", 25.2532, 55.3657, Asia),
    entry("NRT", "Narita International Airport", "Tokyo", 35.7720, 140.3929, Asia),
    entry("ICN", "Incheon International Airport", "Seoul", 37.4602, 126.4407, Asia),
    entry("SIN", "Singapore Changi Airport", "Singapore", 1.3644, 103.9915, Asia),
    entry("HKG", "Hong Kong International Airport", "Hong Kong", 22.3080, 113.9185, Asia),
    entry("SYD", "Sydney Kingsford Smith Airport", "Sydney", -33.9399, 151.1753, Oceania),
    entry("JNB", "O. R. Tambo International Airport", "Johannesburg", -26.1367, 28.2411, Africa),
    entry("CAI", "Cairo International Airport", "Cairo", 30.1219, 31.4056, Africa),
];

pub fn airport(code: &str) -> Result<&'static Airport, CatalogError> {
    AIRPORTS
        .iter()
        .find(|airport| airport.iata == code)
        .ok_or_else(|| CatalogError::UnknownAirport(code.to_string()))
}

/// Resolves a list of codes, failing on the first unknown one.
pub fn airports_for(codes: &[String]) -> Result<Vec<&'static Airport>, CatalogError> {
    codes.iter().map(|code| airport(code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = AIRPORTS.iter().map(|a| a.iata).collect();
        assert_eq!(codes.len(), AIRPORTS.len());
    }

    #[test]
    fn classic_airports_resolve() {
        for code in CLASSIC_AIRPORTS {
            assert!(airport(code).is_ok(), "{code} missing");
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(
            airport("XXX"),
            Err(CatalogError::UnknownAirport("XXX".into()))
        );
    }

    #[test]
    fn serializes_with_display_keys() {
        let json = serde_json::to_value(airport("LHR").unwrap()).unwrap();
        assert_eq!(json["IATA"], "LHR");
        assert_eq!(json["Airport Name"], "Heathrow Airport");
        assert_eq!(json["City"], "London");
        assert!(json.get("continent").is_none());
    }
}
