use serde::{Deserialize, Serialize};

use super::{CatalogError, Continent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    pub continent: Continent,
}

use Continent::*;

const AIRLINES: &[(&str, &str, Continent)] = &[
    ("AC", "Air Canada", NorthAmerica),
    ("WS", "WestJet", NorthAmerica),
    ("UA", "United Airlines", NorthAmerica),
    ("DL", "Delta Air Lines", NorthAmerica),
    ("AA", "American Airlines", NorthAmerica),
    ("AM", "Aeroméxico", NorthAmerica),
    ("BA", "British Airways", Europe),
    ("AF", "Air France", Europe),
    ("KL", "KLM Royal Dutch Airlines", Europe),
    ("LH", "Lufthansa", Europe),
    ("IB", "Iberia", Europe),
    ("LX", "Swiss International Air Lines", Europe),
    ("TP", "TAP Air Portugal", Europe),
    ("OS", "Austrian Airlines", Europe),
    ("LO", "LOT Polish Airlines", Europe),
    ("TK", "Turkish Airlines", Europe),
    ("EK", "Emirates", Asia),
    ("QR", "Qatar Airways", Asia),
    ("SQ", "Singapore Airlines", Asia),
    ("NH", "All Nippon Airways", Asia),
    ("CX", "Cathay Pacific", Asia),
    ("QF", "Qantas", Oceania),
    ("LA", "LATAM Airlines", SouthAmerica),
    ("SA", "South African Airways", Africa),
    ("MS", "EgyptAir", Africa),
];

pub fn airlines() -> Vec<Airline> {
    AIRLINES
        .iter()
        .map(|&(code, name, continent)| Airline {
            code: code.to_string(),
            name: name.to_string(),
            continent,
        })
        .collect()
}

pub fn airline(code: &str) -> Result<Airline, CatalogError> {
    AIRLINES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(code, name, continent)| Airline {
            code: code.to_string(),
            name: name.to_string(),
            continent,
        })
        .ok_or_else(|| CatalogError::UnknownAirline(code.to_string()))
}

/// Airlines whose home continent is served by either end of a route. Falls
/// back to the whole table when nothing matches.
pub fn serving(origin: Continent, destination: Continent) -> Vec<Airline> {
    let matching: Vec<Airline> = airlines()
        .into_iter()
        .filter(|airline| airline.continent == origin || airline.continent == destination)
        .collect();
    if matching.is_empty() {
        airlines()
    } else {
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        let united = airline("UA").unwrap();
        assert_eq!(united.name, "United Airlines");
        assert_eq!(united.continent, NorthAmerica);
        assert!(airline("ZZ").is_err());
    }

    #[test]
    fn transatlantic_routes_mix_continents() {
        let carriers = serving(NorthAmerica, Europe);
        assert!(carriers.iter().any(|a| a.code == "AC"));
        assert!(carriers.iter().any(|a| a.code == "LH"));
        assert!(carriers.iter().all(|a| a.continent != Asia));
    }

    #[test]
    fn continent_serializes_as_display_name() {
        let json = serde_json::to_value(airline("LA").unwrap()).unwrap();
        assert_eq!(json["continent"], "South America");
    }
}
