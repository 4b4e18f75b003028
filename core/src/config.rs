//! Scalar simulation parameters and fail-fast validation.
//!
//! Every run is fully described by this one record plus the master
//! seed. The interactive surface that supplies these values lives
//! outside the core; it hands over plain scalars and nothing else.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub num_employees: usize,
    /// Baseline per-employee misconduct probability per year.
    pub base_misconduct_rate: f64,
    /// Added to the probability of any employee with prior misconduct.
    pub prior_misconduct_multiplier: f64,
    /// Added to the probability of any employee whose manager is a
    /// corrupt manager at the start of the year.
    pub manager_corruption_multiplier: f64,
    /// Fraction of managers that start corrupt; also the probability
    /// that a newly promoted manager becomes corrupt.
    pub percent_corrupt_managers: f64,
    /// Fraction of the whole population promoted each year.
    pub promotion_rate: f64,
    pub years: usize,
    /// Fraction of the population eligible as manager references and
    /// flagged manager at initialization.
    #[serde(default = "default_manager_pool_fraction")]
    pub manager_pool_fraction: f64,
    #[serde(default)]
    pub seed: u64,
}

fn default_manager_pool_fraction() -> f64 {
    0.1
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_employees: 200_000,
            base_misconduct_rate: 0.01,
            prior_misconduct_multiplier: 0.07,
            manager_corruption_multiplier: 0.03,
            percent_corrupt_managers: 0.06,
            promotion_rate: 0.01,
            years: 10,
            manager_pool_fraction: default_manager_pool_fraction(),
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Reject any out-of-range input before simulation work starts.
    /// A config error must never surface mid-loop.
    pub fn validate(&self) -> SimResult<()> {
        if self.num_employees == 0 {
            return Err(SimError::Config {
                field: "num_employees",
                message: "population must be at least 1".into(),
            });
        }
        if self.years == 0 {
            return Err(SimError::Config {
                field: "years",
                message: "year count must be at least 1".into(),
            });
        }
        check_unit_interval("base_misconduct_rate", self.base_misconduct_rate)?;
        check_unit_interval("prior_misconduct_multiplier", self.prior_misconduct_multiplier)?;
        check_unit_interval("manager_corruption_multiplier", self.manager_corruption_multiplier)?;
        check_unit_interval("percent_corrupt_managers", self.percent_corrupt_managers)?;
        check_unit_interval("promotion_rate", self.promotion_rate)?;
        check_unit_interval("manager_pool_fraction", self.manager_pool_fraction)?;

        if self.manager_pool_size() == 0 {
            return Err(SimError::Config {
                field: "manager_pool_fraction",
                message: format!(
                    "manager pool is empty for a population of {}",
                    self.num_employees
                ),
            });
        }
        Ok(())
    }

    /// Number of manager slots: floor(N * manager_pool_fraction).
    pub fn manager_pool_size(&self) -> usize {
        (self.num_employees as f64 * self.manager_pool_fraction) as usize
    }

    /// Initial corrupt managers: floor(fraction * pool size).
    pub fn initial_corrupt_count(&self) -> usize {
        (self.percent_corrupt_managers * self.manager_pool_size() as f64) as usize
    }

    /// Employees promoted per year: round(rate * N).
    pub fn promotions_per_year(&self) -> usize {
        (self.promotion_rate * self.num_employees as f64).round() as usize
    }
}

fn check_unit_interval(field: &'static str, value: f64) -> SimResult<()> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(SimError::Config {
            field,
            message: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(())
}
