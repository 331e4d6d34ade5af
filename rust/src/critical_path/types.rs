//! Result types for critical path calculation.

use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Per-task timing information.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: f64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: f64,
    /// Slack = latest_start - earliest_start.
    pub slack: f64,
}

/// Output of one solve call. Freshly allocated and owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult<T: Eq + Hash> {
    pub early_start: FxHashMap<T, f64>,
    pub late_start: FxHashMap<T, f64>,
    pub slack: FxHashMap<T, f64>,
    /// Tasks with zero slack.
    pub critical_tasks: FxHashSet<T>,
    /// Dependencies whose two endpoints are both critical.
    ///
    /// This over-approximates the critical path: an edge that bypasses a
    /// longer parallel chain between two critical tasks is included here
    /// but not in `tight_edges`.
    pub critical_edges: FxHashSet<(T, T)>,
    /// Critical edges that also satisfy
    /// `early_start[v] == early_start[u] + duration`.
    pub tight_edges: FxHashSet<(T, T)>,
    /// Project completion time: the largest earliest start among sink tasks.
    pub horizon: f64,
    /// Task order used for both passes.
    pub topological_order: Vec<T>,
    /// One source-to-sink path, source first. Each step enters a task through
    /// the dependency that realizes its earliest start; with a nonzero
    /// tolerance these are tight edges between critical tasks.
    pub critical_chain: Vec<T>,
}

impl<T: Eq + Hash> SolveResult<T> {
    /// Timing triple for one task, or `None` if the task is not in the graph.
    pub fn timing(&self, task: &T) -> Option<TaskTiming> {
        Some(TaskTiming {
            earliest_start: *self.early_start.get(task)?,
            latest_start: *self.late_start.get(task)?,
            slack: *self.slack.get(task)?,
        })
    }

    pub fn is_critical(&self, task: &T) -> bool {
        self.critical_tasks.contains(task)
    }

    /// Critical tasks listed in topological order.
    pub fn critical_tasks_in_order(&self) -> Vec<&T> {
        self.topological_order
            .iter()
            .filter(|task| self.critical_tasks.contains(*task))
            .collect()
    }

    pub fn project_duration(&self) -> f64 {
        self.horizon
    }

    pub fn task_count(&self) -> usize {
        self.topological_order.len()
    }
}
