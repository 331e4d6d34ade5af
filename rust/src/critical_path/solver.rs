//! Critical path solver entry point.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::SolverConfig;
use crate::graph::ScheduleGraph;
use crate::interner::TaskIdInt;
use crate::{log_passes, log_summary};

use super::calculation::{
    backward_pass, classify_edges, compute_slack, critical_chain, critical_mask, forward_pass,
    sink_horizon,
};
use super::error::SolveError;
use super::types::SolveResult;
use super::validation::{compile, CompiledGraph};

/// Stateless CPM solver. Holds only configuration, so one instance can be
/// shared across threads and reused for any number of graphs.
#[derive(Clone, Debug, Default)]
pub struct CriticalPathSolver {
    config: SolverConfig,
}

impl CriticalPathSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Compute earliest/latest starts, slack and the critical sets for `graph`.
    ///
    /// The graph is validated and ordered first; any error is returned before
    /// a single value is computed.
    ///
    /// # Errors
    /// * `EmptyGraph` if there are no tasks
    /// * `UnknownTaskReference` if a dependency names a task not in the graph
    /// * `NonFiniteDuration` / `NegativeDuration` for invalid durations
    /// * `Cycle` if the dependencies are not acyclic
    /// * `DurationOverflow` if a path length exceeds the `f64` range
    pub fn solve<T>(&self, graph: &ScheduleGraph<T>) -> Result<SolveResult<T>, SolveError<T>>
    where
        T: Clone + Eq + Hash + Debug,
    {
        let verbosity = self.config.verbosity;
        let tolerance = self.config.effective_tolerance();

        let compiled = compile(graph)?;
        log_summary!(
            verbosity,
            "CPM: {} tasks, {} dependencies",
            compiled.task_count(),
            compiled.adjacency.edges.len()
        );

        let early = forward_pass(&compiled, verbosity);
        // Finite durations can still sum past f64::MAX along a path.
        if let Some(&id) = compiled.order.iter().find(|&&id| !early[id as usize].is_finite()) {
            return Err(SolveError::DurationOverflow {
                task: compiled.task(id).clone(),
            });
        }
        let horizon = sink_horizon(&compiled.adjacency, &early);
        log_summary!(
            verbosity,
            "CPM: horizon={} (sinks: {:?})",
            horizon,
            compiled
                .adjacency
                .sinks()
                .map(|id| compiled.task(id))
                .collect::<Vec<_>>()
        );

        let late = backward_pass(&compiled, horizon, verbosity);
        let slack = compute_slack(&early, &late);
        let critical = critical_mask(&slack, tolerance);
        let (critical_edge_ids, tight_edge_ids) =
            classify_edges(&compiled.adjacency, &early, &critical, tolerance);
        let chain = critical_chain(
            &compiled.adjacency,
            &compiled.order,
            &early,
            &critical,
            horizon,
            tolerance,
        );

        let result = assemble(
            &compiled,
            early,
            late,
            slack,
            &critical,
            &critical_edge_ids,
            &tight_edge_ids,
            horizon,
            &chain,
        );
        log_summary!(
            verbosity,
            "CPM: {} critical tasks, {} critical edges ({} tight)",
            result.critical_tasks.len(),
            result.critical_edges.len(),
            result.tight_edges.len()
        );
        log_passes!(verbosity, "CPM: critical chain {:?}", result.critical_chain);

        Ok(result)
    }
}

/// Solve with the default configuration.
pub fn solve<T>(graph: &ScheduleGraph<T>) -> Result<SolveResult<T>, SolveError<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    CriticalPathSolver::default().solve(graph)
}

/// Convert index-based pass outputs into identifier-keyed maps.
#[allow(clippy::too_many_arguments)]
fn assemble<T>(
    compiled: &CompiledGraph<T>,
    early: Vec<f64>,
    late: Vec<f64>,
    slack: Vec<f64>,
    critical: &[bool],
    critical_edge_ids: &[usize],
    tight_edge_ids: &[usize],
    horizon: f64,
    chain: &[TaskIdInt],
) -> SolveResult<T>
where
    T: Clone + Eq + Hash + Debug,
{
    let tasks = compiled.index.identifiers();
    let to_map = |values: Vec<f64>| -> FxHashMap<T, f64> {
        tasks.iter().cloned().zip(values).collect()
    };
    let edge_set = |ids: &[usize]| -> FxHashSet<(T, T)> {
        ids.iter()
            .map(|&i| {
                let (u, v, _) = compiled.adjacency.edges[i];
                (compiled.task(u).clone(), compiled.task(v).clone())
            })
            .collect()
    };

    let critical_tasks = tasks
        .iter()
        .zip(critical)
        .filter(|(_, &is_critical)| is_critical)
        .map(|(task, _)| task.clone())
        .collect();

    SolveResult {
        early_start: to_map(early),
        late_start: to_map(late),
        slack: to_map(slack),
        critical_tasks,
        critical_edges: edge_set(critical_edge_ids),
        tight_edges: edge_set(tight_edge_ids),
        horizon,
        topological_order: compiled
            .order
            .iter()
            .map(|&id| compiled.task(id).clone())
            .collect(),
        critical_chain: chain.iter().map(|&id| compiled.task(id).clone()).collect(),
    }
}
