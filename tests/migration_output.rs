use geofixtures::{
    catalog::{Era, StateCatalog},
    migration::{MigrationModel, MIN_FLOW},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn every_era_covers_all_ordered_pairs() {
    for era in Era::ALL {
        let model = MigrationModel::new(era);
        let states = StateCatalog::for_era(era).states().len();
        let mut rng = ChaCha8Rng::seed_from_u64(200);
        let dataset = model.generate(&mut rng).unwrap();

        assert_eq!(dataset.migrations.len(), states * (states - 1));
        assert!(dataset
            .migrations
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value));
        assert!(dataset.migrations.iter().all(|r| r.value >= MIN_FLOW));
    }
}

#[test]
fn sun_belt_pulls_harder_in_the_2020s() {
    let mut rng = ChaCha8Rng::seed_from_u64(201);
    let dataset = MigrationModel::new(Era::TwentyTwenties)
        .generate(&mut rng)
        .unwrap();
    let top = &dataset.migrations[..20];
    assert!(
        top.iter()
            .any(|r| r.destination == "TEXAS" || r.destination == "FLORIDA"),
        "{top:?}"
    );
}

#[test]
fn dataset_serializes_as_migrations_array() {
    let mut rng = ChaCha8Rng::seed_from_u64(202);
    let dataset = MigrationModel::new(Era::Sixties).generate(&mut rng).unwrap();
    let value = serde_json::to_value(&dataset).unwrap();
    let first = &value["migrations"][0];
    assert!(first["origin"].is_string());
    assert!(first["destination"].is_string());
    assert!(first["value"].is_u64());
}
