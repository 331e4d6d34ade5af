//! Critical Path Method (CPM) scheduling core.
//!
//! Computes earliest start, latest start and slack for every task of a
//! dependency DAG, plus the critical task and edge sets. Dependencies use
//! start-to-start semantics: `u -> v` with duration `d` means `v` cannot start
//! until `d` time units after `u` starts.
//!
//! The Rust API is generic over the task identifier type; the Python module
//! uses string identifiers.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod critical_path;
pub mod graph;
pub mod interner;
pub mod logging;
mod models;

pub use config::{SolverConfig, DEFAULT_TOLERANCE};
pub use critical_path::{solve, CriticalPathSolver, SolveError, SolveResult, TaskTiming};
pub use graph::{Edge, ScheduleGraph};
pub use models::{build_graph, Dependency, ScheduleResult};

/// Compute the critical path schedule of a task graph.
///
/// # Arguments
/// * `dependencies` - Start-to-start dependencies with nonnegative durations
/// * `tasks` - Full task list; if omitted, tasks are taken from dependency endpoints
/// * `config` - Solver configuration (verbosity, tolerance)
///
/// # Returns
/// * ScheduleResult with earliest/latest starts, slack, critical tasks and edges
///
/// # Raises
/// * ValueError for an empty graph, unknown task references, invalid durations,
///   circular dependencies, or a path length that overflows
#[pyfunction]
#[pyo3(name = "critical_path", signature = (dependencies, tasks=None, config=None))]
fn py_critical_path(
    dependencies: Vec<Dependency>,
    tasks: Option<Vec<String>>,
    config: Option<SolverConfig>,
) -> PyResult<ScheduleResult> {
    let graph = build_graph(tasks, dependencies);
    let solver = CriticalPathSolver::new(config.unwrap_or_default());

    match solver.solve(&graph) {
        Ok(result) => Ok(result.into()),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<Dependency>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<SolverConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_critical_path, m)?)?;

    Ok(())
}
