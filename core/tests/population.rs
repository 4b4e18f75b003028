//! Population model tests: initialization, promotion, append-only state.

use misconduct_core::{
    config::SimConfig,
    error::SimError,
    population::Population,
    rng::{RngBank, StreamSlot},
};

fn small_config() -> SimConfig {
    SimConfig {
        num_employees: 1000,
        years: 3,
        seed: 42,
        ..SimConfig::default()
    }
}

fn build_population(config: &SimConfig) -> Population {
    let bank = RngBank::new(config.seed);
    let mut rng = bank.stream(StreamSlot::Setup);
    Population::initialize(config, &mut rng).expect("initialize")
}

#[test]
fn initialization_flags_expected_manager_and_corrupt_counts() {
    let config = small_config();
    let population = build_population(&config);

    let managers = population.employees().iter().filter(|e| e.is_manager).count();
    assert_eq!(managers, 100, "Expected floor(1000 * 0.1) managers, got {managers}");

    let corrupt = population.employees().iter().filter(|e| e.is_corrupt).count();
    assert_eq!(corrupt, 6, "Expected floor(0.06 * 100) corrupt managers, got {corrupt}");

    // Corruption is assigned only to members of the manager set.
    assert!(
        population
            .employees()
            .iter()
            .all(|e| !e.is_corrupt || e.is_manager),
        "Found a corrupt non-manager at initialization"
    );
}

#[test]
fn manager_references_stay_in_pool_range() {
    let config = small_config();
    let population = build_population(&config);
    let pool = config.manager_pool_size();

    assert!(
        population.employees().iter().all(|e| e.manager_id < pool),
        "manager_id outside [0, {pool})"
    );
}

#[test]
fn promote_marks_exactly_the_requested_count() {
    let config = small_config();
    let mut population = build_population(&config);
    let bank = RngBank::new(7);
    let mut rng = bank.stream(StreamSlot::Promotion);

    let before = population.employees().iter().filter(|e| e.is_manager).count();
    let promoted = population
        .promote(25, config.percent_corrupt_managers, &mut rng)
        .expect("promote");
    let after = population.employees().iter().filter(|e| e.is_manager).count();

    assert_eq!(promoted.len(), 25);
    assert_eq!(after, before + 25, "Promotion count drifted: {before} -> {after}");
}

#[test]
fn promote_fails_when_pool_is_exhausted() {
    let config = small_config();
    let mut population = build_population(&config);
    let bank = RngBank::new(7);
    let mut rng = bank.stream(StreamSlot::Promotion);

    // 900 non-managers remain; asking for 901 must error, not clamp.
    let result = population.promote(901, config.percent_corrupt_managers, &mut rng);
    match result {
        Err(SimError::SamplingExhausted { requested, available, .. }) => {
            assert_eq!(requested, 901);
            assert_eq!(available, 900);
        }
        other => panic!("Expected SamplingExhausted, got {other:?}"),
    }
}

#[test]
fn record_misconduct_or_accumulates_and_never_clears() {
    let config = small_config();
    let mut population = build_population(&config);

    let mut year_one = vec![false; config.num_employees];
    year_one[3] = true;
    year_one[17] = true;
    population.record_misconduct(&year_one);

    // A later all-false year must not clear prior history.
    population.record_misconduct(&vec![false; config.num_employees]);

    let flagged: Vec<usize> = population
        .employees()
        .iter()
        .filter(|e| e.misconduct_history)
        .map(|e| e.id)
        .collect();
    assert_eq!(flagged, vec![3, 17]);
}
