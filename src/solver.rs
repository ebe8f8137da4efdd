//! Brute-force checker for the two-traveler puzzle.
//!
//! Pairs every flight leaving user_1's home with every flight leaving
//! user_2's home to the same destination and keeps the pairs that satisfy
//! both travelers' dates, budgets and airline preferences.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flights::puzzle::{PuzzleDescription, Traveler};
use crate::flights::Flight;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegSummary {
    pub id: u64,
    pub price: f64,
    pub airline: String,
    pub duration: f64,
}

impl LegSummary {
    fn from_flight(flight: &Flight) -> Self {
        Self {
            id: flight.id,
            price: flight.price,
            airline: airline_code(flight).unwrap_or_default().to_string(),
            duration: flight.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub destination: String,
    pub date: NaiveDate,
    pub user_1_flight: LegSummary,
    pub user_2_flight: LegSummary,
}

impl Solution {
    pub fn airline_combo(&self) -> String {
        format!(
            "{}-{}",
            self.user_1_flight.airline, self.user_2_flight.airline
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionAnalysis {
    pub total_count: usize,
    pub by_destination: BTreeMap<String, Vec<Solution>>,
    pub by_date: BTreeMap<NaiveDate, Vec<Solution>>,
    pub by_airline_combo: BTreeMap<String, Vec<Solution>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleInfo {
    pub user_1_budget: f64,
    pub user_2_budget: f64,
    pub overlap_dates: Vec<NaiveDate>,
}

/// Layout of `solution_analysis.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub analysis_summary: SolutionAnalysis,
    pub all_solutions: Vec<Solution>,
    pub puzzle_info: PuzzleInfo,
}

fn airline_code(flight: &Flight) -> Option<&str> {
    flight.airline.as_ref().map(|airline| airline.code.as_str())
}

fn is_valid_pair(first: &Flight, second: &Flight, user_1: &Traveler, user_2: &Traveler) -> bool {
    if first.date != second.date {
        return false;
    }
    if !user_1.is_available(first.date) || !user_2.is_available(first.date) {
        return false;
    }
    if first.price > user_1.max_budget || second.price > user_2.max_budget {
        return false;
    }
    match (airline_code(first), airline_code(second)) {
        (Some(a), Some(b)) => user_1.prefers(a) && user_2.prefers(b),
        _ => false,
    }
}

pub fn find_solutions(flights: &[Flight], puzzle: &PuzzleDescription) -> Vec<Solution> {
    let user_1 = &puzzle.friends.user_1;
    let user_2 = &puzzle.friends.user_2;
    let destinations: BTreeSet<&str> = flights.iter().map(|f| f.destination.as_str()).collect();

    let mut solutions = Vec::new();
    for destination in destinations {
        let from_first: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.origin == user_1.origin_airport && f.destination == destination)
            .collect();
        let from_second: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.origin == user_2.origin_airport && f.destination == destination)
            .collect();

        for first in &from_first {
            for second in &from_second {
                if first.id == second.id {
                    continue;
                }
                if is_valid_pair(first, second, user_1, user_2) {
                    solutions.push(Solution {
                        destination: destination.to_string(),
                        date: first.date,
                        user_1_flight: LegSummary::from_flight(first),
                        user_2_flight: LegSummary::from_flight(second),
                    });
                }
            }
        }
    }
    solutions
}

pub fn analyze(solutions: &[Solution]) -> SolutionAnalysis {
    let mut analysis = SolutionAnalysis {
        total_count: solutions.len(),
        ..SolutionAnalysis::default()
    };
    for solution in solutions {
        analysis
            .by_destination
            .entry(solution.destination.clone())
            .or_default()
            .push(solution.clone());
        analysis
            .by_date
            .entry(solution.date)
            .or_default()
            .push(solution.clone());
        analysis
            .by_airline_combo
            .entry(solution.airline_combo())
            .or_default()
            .push(solution.clone());
    }
    analysis
}

pub fn build_report(flights: &[Flight], puzzle: &PuzzleDescription) -> SolutionReport {
    let all_solutions = find_solutions(flights, puzzle);
    SolutionReport {
        analysis_summary: analyze(&all_solutions),
        all_solutions,
        puzzle_info: PuzzleInfo {
            user_1_budget: puzzle.friends.user_1.max_budget,
            user_2_budget: puzzle.friends.user_2.max_budget,
            overlap_dates: puzzle.constraints.overlap_dates.clone(),
        },
    }
}

/// Reads `flights.json` and `puzzle_description.json` from `dir`.
pub fn load_puzzle(dir: &Path) -> Result<(Vec<Flight>, PuzzleDescription)> {
    let flights_path = dir.join("flights.json");
    let puzzle_path = dir.join("puzzle_description.json");
    let flights_text = fs::read_to_string(&flights_path).with_context(|| {
        format!(
            "Failed to read {}; run the puzzle generator first",
            flights_path.display()
        )
    })?;
    let puzzle_text = fs::read_to_string(&puzzle_path).with_context(|| {
        format!(
            "Failed to read {}; run the puzzle generator first",
            puzzle_path.display()
        )
    })?;
    let flights: Vec<Flight> = serde_json::from_str(&flights_text)
        .with_context(|| format!("Failed to parse {}", flights_path.display()))?;
    let puzzle: PuzzleDescription = serde_json::from_str(&puzzle_text)
        .with_context(|| format!("Failed to parse {}", puzzle_path.display()))?;
    Ok((flights, puzzle))
}

/// Human-readable summary of a report.
pub fn render_report(report: &SolutionReport) -> String {
    let analysis = &report.analysis_summary;
    let mut out = String::new();
    let rule = "-".repeat(30);

    let _ = writeln!(out, "PUZZLE SOLUTION ANALYSIS");
    let _ = writeln!(out, "{}", "=".repeat(60));
    if analysis.total_count == 0 {
        let _ = writeln!(out, "no valid solutions found");
        let _ = writeln!(out, "the constraints may be too tight for this corpus");
        return out;
    }
    let _ = writeln!(out, "total valid solutions: {}\n", analysis.total_count);

    let _ = writeln!(out, "SOLUTIONS BY DESTINATION\n{rule}");
    for (destination, group) in &analysis.by_destination {
        let _ = writeln!(out, "{destination}: {} solution(s)", group.len());
        if let Some(first) = group.first() {
            let _ = writeln!(
                out,
                "  example: {} - user 1: ${:.2} ({}), user 2: ${:.2} ({})",
                first.date,
                first.user_1_flight.price,
                first.user_1_flight.airline,
                first.user_2_flight.price,
                first.user_2_flight.airline
            );
        }
    }

    let _ = writeln!(out, "\nSOLUTIONS BY DATE\n{rule}");
    for (date, group) in &analysis.by_date {
        let _ = writeln!(out, "{date}: {} solution(s)", group.len());
    }

    let _ = writeln!(out, "\nSOLUTIONS BY AIRLINE COMBINATION\n{rule}");
    for (combo, group) in &analysis.by_airline_combo {
        let _ = writeln!(out, "{combo}: {} solution(s)", group.len());
    }

    let _ = writeln!(out, "\nDETAILED SOLUTION LIST\n{rule}");
    for (index, solution) in report.all_solutions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. destination: {}, date: {}",
            index + 1,
            solution.destination,
            solution.date
        );
        for (label, leg) in [
            ("user 1", &solution.user_1_flight),
            ("user 2", &solution.user_2_flight),
        ] {
            let _ = writeln!(
                out,
                "   {label}: flight #{} - ${:.2} ({}) - {}h",
                leg.id, leg.price, leg.airline, leg.duration
            );
        }
    }
    out
}
