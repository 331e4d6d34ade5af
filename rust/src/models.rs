//! Python-facing data types.

use pyo3::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::critical_path::SolveResult;
use crate::graph::ScheduleGraph;

// Note: We use std collections here for PyO3 interface compatibility

/// A start-to-start dependency between two tasks.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Dependency {
    #[pyo3(get, set)]
    pub predecessor: String,
    #[pyo3(get, set)]
    pub successor: String,
    #[pyo3(get, set)]
    pub duration: f64,
}

#[pymethods]
impl Dependency {
    #[new]
    pub fn new(predecessor: String, successor: String, duration: f64) -> Self {
        Self {
            predecessor,
            successor,
            duration,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Dependency({:?} -> {:?}, duration={})",
            self.predecessor, self.successor, self.duration
        )
    }
}

/// Build a graph from Python inputs.
///
/// With `tasks`, the task set is exactly that list and dependency endpoints
/// outside it are left for the solver to reject. Without it, every endpoint
/// becomes a task.
pub fn build_graph(tasks: Option<Vec<String>>, dependencies: Vec<Dependency>) -> ScheduleGraph<String> {
    let mut graph = ScheduleGraph::new();
    match tasks {
        Some(tasks) => {
            for task in tasks {
                graph.add_task(task);
            }
            for dep in dependencies {
                graph.add_dependency(dep.predecessor, dep.successor, dep.duration);
            }
        }
        None => {
            for dep in dependencies {
                graph.add_edge(dep.predecessor, dep.successor, dep.duration);
            }
        }
    }
    graph
}

/// Result of a critical path computation.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct ScheduleResult {
    #[pyo3(get)]
    pub early_start: HashMap<String, f64>,
    #[pyo3(get)]
    pub late_start: HashMap<String, f64>,
    #[pyo3(get)]
    pub slack: HashMap<String, f64>,
    #[pyo3(get)]
    pub critical_tasks: HashSet<String>,
    #[pyo3(get)]
    pub critical_edges: Vec<(String, String)>,
    #[pyo3(get)]
    pub tight_edges: Vec<(String, String)>,
    #[pyo3(get)]
    pub horizon: f64,
    #[pyo3(get)]
    pub topological_order: Vec<String>,
    #[pyo3(get)]
    pub critical_chain: Vec<String>,
}

#[pymethods]
impl ScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(tasks={}, horizon={}, critical={})",
            self.topological_order.len(),
            self.horizon,
            self.critical_tasks.len()
        )
    }
}

impl From<SolveResult<String>> for ScheduleResult {
    fn from(result: SolveResult<String>) -> Self {
        // Edge lists are sorted so Python sees a stable order.
        let sorted = |edges: rustc_hash::FxHashSet<(String, String)>| {
            let mut edges: Vec<(String, String)> = edges.into_iter().collect();
            edges.sort();
            edges
        };

        Self {
            early_start: result.early_start.into_iter().collect(),
            late_start: result.late_start.into_iter().collect(),
            slack: result.slack.into_iter().collect(),
            critical_tasks: result.critical_tasks.into_iter().collect(),
            critical_edges: sorted(result.critical_edges),
            tight_edges: sorted(result.tight_edges),
            horizon: result.horizon,
            topological_order: result.topological_order,
            critical_chain: result.critical_chain,
        }
    }
}
