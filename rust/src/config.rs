//! Configuration for the critical path solver.

use pyo3::prelude::*;

/// Tolerance used when comparing slack and edge tightness against zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Solver configuration.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=edges.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Absolute tolerance for "slack is zero" and "edge is tight" checks.
    /// Negative or NaN values behave as 0 (exact comparison).
    #[pyo3(get, set)]
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Tolerance clamped to a usable nonnegative value.
    pub fn effective_tolerance(&self) -> f64 {
        // f64::max returns the non-NaN operand
        self.tolerance.max(0.0)
    }
}

#[pymethods]
impl SolverConfig {
    #[new]
    #[pyo3(signature = (verbosity=0, tolerance=1e-9))]
    fn new(verbosity: u8, tolerance: f64) -> Self {
        Self {
            verbosity,
            tolerance,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SolverConfig(verbosity={}, tolerance={})",
            self.verbosity, self.tolerance
        )
    }
}
