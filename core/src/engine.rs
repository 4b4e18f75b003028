//! The simulation engine — the year loop.
//!
//! YEAR ORDER (fixed, documented, never reordered):
//!   1. Per-employee probability from last year's state
//!      (base rate + prior-history bump + corrupt-manager bump,
//!      clamped to [0, 1]).
//!   2. Independent Bernoulli draw per employee → matrix column.
//!   3. OR the column into each cumulative history flag.
//!   4. Record yearly stats. The corrupt-manager count is taken
//!      BEFORE this year's promotions.
//!   5. Promote; newly promoted managers may become corrupt.
//!   6. Recompute the corrupt-manager set for next year.
//!
//! RULES:
//!   - Years execute strictly sequentially: each year reads the
//!     previous year's cumulative state.
//!   - Within a year, employee draws are independent; no draw may
//!     influence another employee's outcome.
//!   - All randomness flows through the RngBank streams.

use crate::{
    bayes::{self, BayesRow},
    cohort::{self, CohortHeatmaps},
    config::SimConfig,
    error::SimResult,
    matrix::MisconductMatrix,
    population::Population,
    rng::{RngBank, StreamSlot},
};
use serde::{Deserialize, Serialize};

/// One row of the yearly statistics table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearStats {
    /// 1-based year for display.
    pub year: usize,
    /// Count of true cells in this year's matrix column.
    pub total_misconduct: usize,
    pub rate_per_1000: f64,
    /// Employees with `is_manager && is_corrupt`, counted before this
    /// year's promotions.
    pub corrupt_managers: usize,
}

/// Everything a single run produces. Consumed opaquely by the
/// presentation layer; no component reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimOutput {
    pub matrix: MisconductMatrix,
    pub yearly_stats: Vec<YearStats>,
    pub population: Population,
    pub bayes: Vec<BayesRow>,
    pub heatmaps: CohortHeatmaps,
}

pub struct SimEngine {
    config: SimConfig,
    rng_bank: RngBank,
}

impl SimEngine {
    /// Validates the config up front — a bad input must fail here,
    /// never mid-loop.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let rng_bank = RngBank::new(config.seed);
        Ok(Self { config, rng_bank })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run the full pipeline: initialize, year loop, Bayesian summary,
    /// cohort aggregation.
    pub fn run(&mut self) -> SimResult<SimOutput> {
        let mut setup_rng = self.rng_bank.stream(StreamSlot::Setup);
        let mut population = Population::initialize(&self.config, &mut setup_rng)?;

        let (matrix, yearly_stats) = self.run_years(&mut population)?;

        let mut bayes_rng = self.rng_bank.stream(StreamSlot::Bayesian);
        let bayes = bayes::combined_effects(self.config.years, &mut bayes_rng);

        let heatmaps = cohort::aggregate(&matrix, &population);

        Ok(SimOutput {
            matrix,
            yearly_stats,
            population,
            bayes,
            heatmaps,
        })
    }

    /// The year loop proper. Degrades to empty outputs for zero years.
    fn run_years(
        &self,
        population: &mut Population,
    ) -> SimResult<(MisconductMatrix, Vec<YearStats>)> {
        let n = self.config.num_employees;
        let years = self.config.years;

        let mut draw_rng = self.rng_bank.stream(StreamSlot::Misconduct);
        let mut promotion_rng = self.rng_bank.stream(StreamSlot::Promotion);

        let mut matrix = MisconductMatrix::new(n, years);
        let mut yearly_stats = Vec::with_capacity(years);

        // The set in effect during year y is the one recomputed after
        // year y-1's promotions.
        let mut corrupt_managers = population.corrupt_manager_ids();

        for year in 0..years {
            let mut outcomes = vec![false; n];
            for employee in population.employees() {
                let mut p = self.config.base_misconduct_rate;
                if employee.misconduct_history {
                    p += self.config.prior_misconduct_multiplier;
                }
                if corrupt_managers.contains(&employee.manager_id) {
                    p += self.config.manager_corruption_multiplier;
                }
                outcomes[employee.id] = draw_rng.chance(p.clamp(0.0, 1.0));
            }

            for (employee, &hit) in outcomes.iter().enumerate() {
                matrix.set(employee, year, hit);
            }
            population.record_misconduct(&outcomes);

            let total_misconduct = outcomes.iter().filter(|&&hit| hit).count();
            yearly_stats.push(YearStats {
                year: year + 1,
                total_misconduct,
                rate_per_1000: total_misconduct as f64 * 1000.0 / n as f64,
                corrupt_managers: corrupt_managers.len(),
            });

            population.promote(
                self.config.promotions_per_year(),
                self.config.percent_corrupt_managers,
                &mut promotion_rng,
            )?;
            corrupt_managers = population.corrupt_manager_ids();

            log::debug!(
                "year={} misconduct={total_misconduct} corrupt_managers={}",
                year + 1,
                corrupt_managers.len()
            );
        }

        Ok((matrix, yearly_stats))
    }
}
