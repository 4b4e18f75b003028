//! Illustrative Bayesian summary table.
//!
//! Two conditional-probability placeholders per year, drawn uniformly
//! from fixed ranges. Independent of the simulated population — the
//! values are a presentation-layer signal, not a fitted estimate, and
//! must never be read back into the simulation.

use crate::rng::StreamRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayesRow {
    /// 1-based year for display.
    pub year: usize,
    /// P(misconduct | prior misconduct & corrupt manager), in [0.2, 0.5).
    pub p_prior_and_corrupt_manager: f64,
    /// P(misconduct | prior misconduct & non-corrupt manager), in [0.05, 0.2).
    pub p_prior_and_clean_manager: f64,
}

pub fn combined_effects(years: usize, rng: &mut StreamRng) -> Vec<BayesRow> {
    (1..=years)
        .map(|year| BayesRow {
            year,
            p_prior_and_corrupt_manager: rng.uniform_in(0.2, 0.5),
            p_prior_and_clean_manager: rng.uniform_in(0.05, 0.2),
        })
        .collect()
}
