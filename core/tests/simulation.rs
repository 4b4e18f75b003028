//! Simulation engine tests: the year loop's laws and edge cases.

use misconduct_core::{config::SimConfig, engine::SimEngine, error::SimError};

fn run_config(config: SimConfig) -> misconduct_core::engine::SimOutput {
    SimEngine::new(config).expect("config").run().expect("run")
}

#[test]
fn cumulative_history_equals_or_of_matrix_row() {
    let output = run_config(SimConfig {
        num_employees: 2000,
        base_misconduct_rate: 0.05,
        years: 5,
        seed: 11,
        ..SimConfig::default()
    });

    for employee in output.population.employees() {
        let row_or = output.matrix.row(employee.id).iter().any(|&hit| hit);
        assert_eq!(
            employee.misconduct_history, row_or,
            "Employee {} history diverged from its matrix row",
            employee.id
        );
    }
}

#[test]
fn yearly_total_equals_matrix_column_count() {
    let output = run_config(SimConfig {
        num_employees: 2000,
        base_misconduct_rate: 0.03,
        years: 4,
        seed: 23,
        ..SimConfig::default()
    });

    for stats in &output.yearly_stats {
        let column = stats.year - 1;
        let counted = output.matrix.column_count(column);
        assert_eq!(
            stats.total_misconduct, counted,
            "Year {} stats say {} but column holds {}",
            stats.year, stats.total_misconduct, counted
        );
        let expected_rate = counted as f64 * 1000.0 / 2000.0;
        assert!((stats.rate_per_1000 - expected_rate).abs() < 1e-9);
    }
}

#[test]
fn corrupt_manager_count_never_decreases() {
    // Aggressive promotion so new corrupt managers actually appear.
    let output = run_config(SimConfig {
        num_employees: 1000,
        promotion_rate: 0.05,
        percent_corrupt_managers: 0.2,
        years: 8,
        seed: 31,
        ..SimConfig::default()
    });

    let counts: Vec<usize> = output
        .yearly_stats
        .iter()
        .map(|s| s.corrupt_managers)
        .collect();
    assert!(
        counts.windows(2).all(|w| w[0] <= w[1]),
        "Corrupt-manager count decreased somewhere in {counts:?}"
    );
    assert!(
        *counts.last().unwrap() > counts[0],
        "Promotions never produced a new corrupt manager: {counts:?}"
    );
}

#[test]
fn zero_rates_produce_fully_quiet_run() {
    let output = run_config(SimConfig {
        num_employees: 1000,
        base_misconduct_rate: 0.0,
        prior_misconduct_multiplier: 0.0,
        manager_corruption_multiplier: 0.0,
        years: 3,
        seed: 5,
        ..SimConfig::default()
    });

    for year in 0..3 {
        assert_eq!(output.matrix.column_count(year), 0);
        assert_eq!(output.yearly_stats[year].total_misconduct, 0);
    }
    for s in 0..3 {
        for f in 0..3 {
            assert_eq!(output.heatmaps.with_corrupt_manager.get(s, f), 0);
            assert_eq!(output.heatmaps.without_corrupt_manager.get(s, f), 0);
        }
    }
}

#[test]
fn forced_misconduct_fills_the_whole_matrix() {
    let output = run_config(SimConfig {
        num_employees: 1000,
        base_misconduct_rate: 1.0,
        years: 2,
        seed: 5,
        ..SimConfig::default()
    });

    for year in 0..2 {
        assert_eq!(
            output.matrix.column_count(year),
            1000,
            "Year {year} should be all-true at base rate 1.0"
        );
    }
}

#[test]
fn promotion_exhaustion_mid_run_surfaces_as_error() {
    // 100 employees, 10 initial managers, 50 promotions per year:
    // year 1 leaves 40 non-managers, year 2 must fail.
    let result = SimEngine::new(SimConfig {
        num_employees: 100,
        promotion_rate: 0.5,
        years: 3,
        seed: 9,
        ..SimConfig::default()
    })
    .expect("config is in range")
    .run();

    match result {
        Err(SimError::SamplingExhausted { requested, available, .. }) => {
            assert_eq!(requested, 50);
            assert_eq!(available, 40);
        }
        other => panic!("Expected SamplingExhausted, got {other:?}"),
    }
}

#[test]
fn invalid_config_fails_before_any_simulation() {
    assert!(SimEngine::new(SimConfig {
        years: 0,
        ..SimConfig::default()
    })
    .is_err());

    assert!(SimEngine::new(SimConfig {
        promotion_rate: -0.1,
        ..SimConfig::default()
    })
    .is_err());
}
