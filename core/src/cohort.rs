//! Cohort heatmap aggregation.
//!
//! Post-processes the completed misconduct matrix and the FINAL
//! population state into two years × years count matrices, split by
//! whether an employee's manager ends the run in the corrupt-manager
//! set.
//!
//! Attribution is deliberately retrospective: the partition uses the
//! manager's END-OF-RUN corrupt status, not the status at the
//! cohort's start year. Callers depending on point-in-time
//! attribution must not use this routine.

use crate::{matrix::MisconductMatrix, population::Population, types::Year};
use serde::{Deserialize, Serialize};

/// A years × years matrix of non-negative counts. Cells below the
/// diagonal (future year earlier than start year) stay zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearMatrix {
    years: usize,
    cells: Vec<u32>,
}

impl YearMatrix {
    pub fn new(years: usize) -> Self {
        Self {
            years,
            cells: vec![0; years * years],
        }
    }

    pub fn year_count(&self) -> usize {
        self.years
    }

    pub fn get(&self, start_year: Year, future_year: Year) -> u32 {
        self.cells[start_year * self.years + future_year]
    }

    fn increment(&mut self, start_year: Year, future_year: Year) {
        self.cells[start_year * self.years + future_year] += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortHeatmaps {
    pub without_corrupt_manager: YearMatrix,
    pub with_corrupt_manager: YearMatrix,
}

/// For each start year s, take the cohort of employees with
/// misconduct in year s, split it by the static corrupt-manager
/// partition, and count how many of each half also have misconduct in
/// every future year f ≥ s.
pub fn aggregate(matrix: &MisconductMatrix, final_population: &Population) -> CohortHeatmaps {
    let years = matrix.year_count();

    // Single static partition of the whole population, evaluated once
    // against the final corrupt-manager set.
    let corrupt_managers = final_population.corrupt_manager_ids();
    let has_corrupt_manager: Vec<bool> = final_population
        .employees()
        .iter()
        .map(|e| corrupt_managers.contains(&e.manager_id))
        .collect();

    let mut without = YearMatrix::new(years);
    let mut with = YearMatrix::new(years);

    for start_year in 0..years {
        for employee in 0..matrix.employee_count() {
            if !matrix.get(employee, start_year) {
                continue;
            }
            let target = if has_corrupt_manager[employee] {
                &mut with
            } else {
                &mut without
            };
            for future_year in start_year..years {
                if matrix.get(employee, future_year) {
                    target.increment(start_year, future_year);
                }
            }
        }
    }

    CohortHeatmaps {
        without_corrupt_manager: without,
        with_corrupt_manager: with,
    }
}
