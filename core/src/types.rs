//! Shared primitive types used across the entire simulation.

/// A simulated year. 0-based everywhere inside the core;
/// display code adds 1.
pub type Year = usize;

/// Index of an employee in the population table, 0..N-1.
pub type EmployeeId = usize;
