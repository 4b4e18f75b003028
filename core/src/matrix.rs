//! The misconduct history matrix: N employees × `years` columns of
//! single-year outcomes. Cell (e, y) records whether employee e's
//! draw succeeded in year y — NOT the cumulative history flag.

use crate::types::{EmployeeId, Year};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisconductMatrix {
    employees: usize,
    years: usize,
    /// Row-major: cell (e, y) lives at e * years + y.
    cells: Vec<bool>,
}

impl MisconductMatrix {
    pub fn new(employees: usize, years: usize) -> Self {
        Self {
            employees,
            years,
            cells: vec![false; employees * years],
        }
    }

    pub fn employee_count(&self) -> usize {
        self.employees
    }

    pub fn year_count(&self) -> usize {
        self.years
    }

    pub fn get(&self, employee: EmployeeId, year: Year) -> bool {
        self.cells[employee * self.years + year]
    }

    pub fn set(&mut self, employee: EmployeeId, year: Year, value: bool) {
        self.cells[employee * self.years + year] = value;
    }

    /// One employee's full outcome row.
    pub fn row(&self, employee: EmployeeId) -> &[bool] {
        let start = employee * self.years;
        &self.cells[start..start + self.years]
    }

    /// Number of true cells in one year's column.
    pub fn column_count(&self, year: Year) -> usize {
        (0..self.employees).filter(|&e| self.get(e, year)).count()
    }
}
