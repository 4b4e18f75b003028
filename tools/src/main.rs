//! sim-runner: headless runner for the misconduct simulation.
//!
//! Usage:
//!   sim-runner --seed 42 --employees 200000 --years 10
//!   sim-runner --seed 42 --base-rate 0.02 --promotion-rate 0.01 --json
//!
//! All presentation lives here; the core only hands back tables and
//! matrices.

use anyhow::Result;
use misconduct_core::{config::SimConfig, engine::SimEngine};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let defaults = SimConfig::default();

    let config = SimConfig {
        seed: parse_arg(&args, "--seed", defaults.seed),
        num_employees: parse_arg(&args, "--employees", defaults.num_employees),
        years: parse_arg(&args, "--years", defaults.years),
        base_misconduct_rate: parse_arg(&args, "--base-rate", defaults.base_misconduct_rate),
        prior_misconduct_multiplier: parse_arg(
            &args,
            "--prior-multiplier",
            defaults.prior_misconduct_multiplier,
        ),
        manager_corruption_multiplier: parse_arg(
            &args,
            "--manager-multiplier",
            defaults.manager_corruption_multiplier,
        ),
        percent_corrupt_managers: parse_arg(
            &args,
            "--corrupt-fraction",
            defaults.percent_corrupt_managers,
        ),
        promotion_rate: parse_arg(&args, "--promotion-rate", defaults.promotion_rate),
        manager_pool_fraction: parse_arg(
            &args,
            "--manager-pool",
            defaults.manager_pool_fraction,
        ),
    };
    let json_mode = args.iter().any(|a| a == "--json");

    if !json_mode {
        println!("misconduct sim-runner");
        println!("  seed:       {}", config.seed);
        println!("  employees:  {}", config.num_employees);
        println!("  years:      {}", config.years);
        println!();
    }

    let mut engine = SimEngine::new(config)?;
    let output = engine.run()?;

    if json_mode {
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("=== YEARLY STATISTICS ===");
    println!("  year | misconduct | per 1000 | corrupt managers");
    for row in &output.yearly_stats {
        println!(
            "  {:>4} | {:>10} | {:>8.2} | {:>16}",
            row.year, row.total_misconduct, row.rate_per_1000, row.corrupt_managers
        );
    }

    println!();
    println!("=== BAYESIAN COMBINED EFFECTS (illustrative) ===");
    println!("  year | P(prior & corrupt mgr) | P(prior & clean mgr)");
    for row in &output.bayes {
        println!(
            "  {:>4} | {:>22.3} | {:>20.3}",
            row.year, row.p_prior_and_corrupt_manager, row.p_prior_and_clean_manager
        );
    }

    println!();
    println!("=== COHORT HEATMAP: WITHOUT CORRUPT MANAGER ===");
    print_heatmap(&output.heatmaps.without_corrupt_manager);
    println!();
    println!("=== COHORT HEATMAP: WITH CORRUPT MANAGER ===");
    print_heatmap(&output.heatmaps.with_corrupt_manager);

    Ok(())
}

fn print_heatmap(matrix: &misconduct_core::cohort::YearMatrix) {
    let years = matrix.year_count();
    for start_year in 0..years {
        let row: Vec<String> = (0..years)
            .map(|future_year| format!("{:>7}", matrix.get(start_year, future_year)))
            .collect();
        println!("  {} |{}", start_year + 1, row.join(" "));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
