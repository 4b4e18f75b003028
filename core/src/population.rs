//! The population model: one flat record per employee, mutated in
//! place across the year loop.
//!
//! All state is append-only: `misconduct_history`, `is_manager` and
//! `is_corrupt` only ever flip false→true. No reset operation exists.
//! The type is deliberately not safe for concurrent mutation.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    rng::StreamRng,
    types::EmployeeId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Purely a numeric reference into the manager pool index range.
    /// NOT validated against the target's own `is_manager` flag.
    pub manager_id: EmployeeId,
    pub misconduct_history: bool,
    pub is_manager: bool,
    pub is_corrupt: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    employees: Vec<Employee>,
}

impl Population {
    /// Build the initial population:
    ///   - every employee gets a manager reference drawn uniformly
    ///     from [0, manager_pool_size);
    ///   - a manager_pool_size subset is flagged manager, sampled
    ///     without replacement;
    ///   - an initial_corrupt_count subset of those managers is
    ///     flagged corrupt, sampled without replacement.
    pub fn initialize(config: &SimConfig, rng: &mut StreamRng) -> SimResult<Self> {
        let n = config.num_employees;
        let pool = config.manager_pool_size();
        if pool == 0 {
            return Err(SimError::Config {
                field: "manager_pool_fraction",
                message: format!("manager pool is empty for a population of {n}"),
            });
        }

        let mut employees: Vec<Employee> = (0..n)
            .map(|id| Employee {
                id,
                manager_id: rng.next_u64_below(pool as u64) as EmployeeId,
                misconduct_history: false,
                is_manager: false,
                is_corrupt: false,
            })
            .collect();

        let mut everyone: Vec<EmployeeId> = (0..n).collect();
        let managers =
            sample_without_replacement(&mut everyone, pool, "initial managers", rng)?;
        for &id in &managers {
            employees[id].is_manager = true;
        }

        let mut manager_pool = managers;
        let corrupt = sample_without_replacement(
            &mut manager_pool,
            config.initial_corrupt_count(),
            "initial corrupt managers",
            rng,
        )?;
        for &id in &corrupt {
            employees[id].is_corrupt = true;
        }

        Ok(Self { employees })
    }

    /// Build a population directly from rows. Used by aggregation
    /// callers that already hold a final state.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Promote round(rate * N) current non-managers, sampled without
    /// replacement. Each promotee independently becomes corrupt with
    /// probability `percent_corrupt_managers`. Returns the promoted
    /// ids in draw order.
    ///
    /// Exhausting the non-manager pool is an error, never a silent
    /// clamp: a smaller-than-requested promotion would change the
    /// model without telling the caller.
    pub fn promote(
        &mut self,
        count: usize,
        percent_corrupt_managers: f64,
        rng: &mut StreamRng,
    ) -> SimResult<Vec<EmployeeId>> {
        let mut pool: Vec<EmployeeId> = self
            .employees
            .iter()
            .filter(|e| !e.is_manager)
            .map(|e| e.id)
            .collect();

        let promoted = sample_without_replacement(&mut pool, count, "promotions", rng)?;
        for &id in &promoted {
            self.employees[id].is_manager = true;
            if rng.chance(percent_corrupt_managers) {
                self.employees[id].is_corrupt = true;
            }
        }
        Ok(promoted)
    }

    /// Ids satisfying `is_manager && is_corrupt`. Recomputed from the
    /// live table each call; states are append-only so the set only
    /// ever grows.
    pub fn corrupt_manager_ids(&self) -> HashSet<EmployeeId> {
        self.employees
            .iter()
            .filter(|e| e.is_manager && e.is_corrupt)
            .map(|e| e.id)
            .collect()
    }

    /// OR-accumulate one year's outcomes into the cumulative history.
    pub fn record_misconduct(&mut self, outcomes: &[bool]) {
        for (employee, &hit) in self.employees.iter_mut().zip(outcomes) {
            employee.misconduct_history |= hit;
        }
    }
}

/// Draw `count` elements from `pool` without replacement, by partial
/// Fisher-Yates via swap_remove. The pool is consumed as it is drawn.
fn sample_without_replacement(
    pool: &mut Vec<EmployeeId>,
    count: usize,
    what: &'static str,
    rng: &mut StreamRng,
) -> SimResult<Vec<EmployeeId>> {
    if count > pool.len() {
        return Err(SimError::SamplingExhausted {
            what,
            requested: count,
            available: pool.len(),
        });
    }
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.next_u64_below(pool.len() as u64) as usize;
        picked.push(pool.swap_remove(idx));
    }
    Ok(picked)
}
