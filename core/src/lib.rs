//! misconduct-core: a multi-year employee misconduct simulation.
//!
//! The pipeline is a single in-memory pass:
//!   Population → SimEngine (year loop) → CohortAggregation
//! plus an independent Bayesian summary table.
//!
//! RULES:
//!   - All randomness flows through the RngBank. Nothing in the
//!     simulation may call any platform RNG.
//!   - The year loop is strictly sequential: each year's probabilities
//!     depend on the previous year's cumulative history and corrupt-
//!     manager set.
//!   - The core never formats, logs errors, or persists anything.
//!     Callers own presentation.

pub mod bayes;
pub mod cohort;
pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod population;
pub mod rng;
pub mod types;
