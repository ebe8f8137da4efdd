use std::fs;
use std::path::{Path, PathBuf};

use geofixtures::{
    catalog::Era,
    config::{ConfigLoader, FixtureConfig},
    engine::{EngineBuilder, EngineSettings},
    generators::{MigrationGenerator, PuzzleFlightsGenerator, SimpleFlightsGenerator},
    output::OutputError,
    solver,
};
use tempfile::tempdir;

fn scenario() -> FixtureConfig {
    ConfigLoader::new(env!("CARGO_MANIFEST_DIR"))
        .load("scenarios/euro_trip.yaml")
        .expect("scenario should load")
}

fn build_engine(config: &FixtureConfig, output_dir: PathBuf) -> EngineBuilder {
    let settings = EngineSettings {
        scenario_name: config.name.clone(),
        seed: config.random_seed.unwrap_or(7),
        output_dir,
    };
    EngineBuilder::new(settings)
        .with_generator(PuzzleFlightsGenerator::new(config.puzzle.clone()))
        .with_generator(MigrationGenerator::new(config.migration.eras.clone()))
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn engine_writes_every_artifact_and_reports_it() {
    let config = scenario();
    let temp = tempdir().expect("tempdir");
    let mut engine = build_engine(&config, temp.path().to_path_buf()).build();

    let mut seen = Vec::new();
    let summary = engine
        .run_with_hook(|artifact| seen.push(artifact.path.clone()))
        .expect("run succeeds");

    let names: Vec<String> = summary
        .artifacts
        .iter()
        .map(|a| a.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "airports.json",
            "airlines.json",
            "flights.json",
            "puzzle_description.json",
            "migration_1960s.json",
            "migration_2020s.json",
        ]
    );
    assert_eq!(seen.len(), summary.artifacts.len());
    assert!(seen.iter().all(|path| path.exists()));
    assert_eq!(summary.seed, 20250614);
}

#[test]
fn written_files_follow_the_documented_layout() {
    let config = scenario();
    let temp = tempdir().expect("tempdir");
    build_engine(&config, temp.path().to_path_buf())
        .build()
        .run()
        .unwrap();

    let airports = read_json(&temp.path().join("airports.json"));
    let first = &airports[0];
    for key in ["IATA", "Airport Name", "City", "Latitude", "Longitude"] {
        assert!(!first[key].is_null(), "missing {key}");
    }

    let flights = read_json(&temp.path().join("flights.json"));
    assert_eq!(flights.as_array().unwrap().len(), config.puzzle.target_count);
    let flight = &flights[0];
    assert_eq!(flight["id"], 1);
    assert!(flight["date"].as_str().unwrap().starts_with("2025-06-"));
    assert!(flight["airline"]["code"].is_string());

    let description = read_json(&temp.path().join("puzzle_description.json"));
    assert_eq!(description["friends"]["user_1"]["origin_airport"], "YYZ");
    assert_eq!(
        description["constraints"]["overlap_dates"],
        serde_json::json!(["2025-06-14", "2025-06-20", "2025-06-27"])
    );
    assert!(description.get("solutions").is_none());

    let migration = read_json(&temp.path().join("migration_2020s.json"));
    assert_eq!(migration["migrations"].as_array().unwrap().len(), 51 * 50);
}

#[test]
fn same_seed_writes_identical_files() {
    let config = scenario();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    build_engine(&config, first.path().to_path_buf()).build().run().unwrap();
    build_engine(&config, second.path().to_path_buf()).build().run().unwrap();

    for name in ["flights.json", "migration_1960s.json", "migration_2020s.json"] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{name} differs"
        );
    }
}

#[test]
fn generator_streams_do_not_depend_on_registration_order() {
    let config = scenario();
    let alone = tempdir().unwrap();
    let after_other = tempdir().unwrap();

    let settings = |dir: &Path| EngineSettings {
        scenario_name: config.name.clone(),
        seed: 11,
        output_dir: dir.to_path_buf(),
    };
    EngineBuilder::new(settings(alone.path()))
        .with_generator(MigrationGenerator::new(vec![Era::Sixties]))
        .build()
        .run()
        .unwrap();
    EngineBuilder::new(settings(after_other.path()))
        .with_generator(SimpleFlightsGenerator::new(config.simple.clone()))
        .with_generator(MigrationGenerator::new(vec![Era::Sixties]))
        .build()
        .run()
        .unwrap();

    assert_eq!(
        fs::read(alone.path().join("migration_1960s.json")).unwrap(),
        fs::read(after_other.path().join("migration_1960s.json")).unwrap()
    );
}

#[test]
fn solver_reads_engine_output() {
    let config = scenario();
    let temp = tempdir().unwrap();
    EngineBuilder::new(EngineSettings {
        scenario_name: config.name.clone(),
        seed: 12,
        output_dir: temp.path().to_path_buf(),
    })
    .with_generator(PuzzleFlightsGenerator::new(config.puzzle.clone()))
    .build()
    .run()
    .unwrap();

    let (flights, puzzle) = solver::load_puzzle(temp.path()).unwrap();
    assert_eq!(flights.len(), config.puzzle.target_count);
    let report = solver::build_report(&flights, &puzzle);
    assert!(report.analysis_summary.total_count >= config.puzzle.solutions.len());
}

#[test]
fn unwritable_output_surfaces_as_output_error() {
    let config = scenario();
    let temp = tempdir().unwrap();
    let blocker = temp.path().join("assets");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let err = EngineBuilder::new(EngineSettings {
        scenario_name: config.name.clone(),
        seed: 13,
        output_dir: blocker,
    })
    .with_generator(MigrationGenerator::new(vec![Era::TwentyTwenties]))
    .build()
    .run()
    .unwrap_err();
    assert!(err.downcast_ref::<OutputError>().is_some(), "{err:#}");
}
