//! Critical path calculation using forward and backward passes.
//!
//! All passes use start-to-start semantics: a dependency `u -> v` with
//! duration `d` means `v` starts no earlier than `d` after `u` starts.

use std::fmt::Debug;
use std::hash::Hash;

use crate::interner::TaskIdInt;
use crate::{log_edges, log_passes};

use super::topology::Adjacency;
use super::validation::CompiledGraph;

/// Earliest start for every task, indexed by task ID.
///
/// Tasks are visited in topological order, so a task's value is final before
/// it is used to relax its successors.
pub fn forward_pass<T>(graph: &CompiledGraph<T>, verbosity: u8) -> Vec<f64>
where
    T: Clone + Eq + Hash + Debug,
{
    let mut early_start = vec![0.0; graph.task_count()];

    for &u in &graph.order {
        let start_u = early_start[u as usize];
        log_passes!(verbosity, "  forward: {:?} earliest_start={}", graph.task(u), start_u);

        for &(v, duration) in &graph.adjacency.successors[u as usize] {
            let candidate = start_u + duration;
            if candidate > early_start[v as usize] {
                log_edges!(
                    verbosity,
                    "    {:?} -> {:?} ({}): earliest_start {} -> {}",
                    graph.task(u),
                    graph.task(v),
                    duration,
                    early_start[v as usize],
                    candidate
                );
                early_start[v as usize] = candidate;
            }
        }
    }

    early_start
}

/// Project horizon: the largest earliest start over sink tasks.
///
/// A non-empty DAG always has a sink; an adjacency with no tasks yields 0.
pub fn sink_horizon(adjacency: &Adjacency, early_start: &[f64]) -> f64 {
    adjacency
        .sinks()
        .map(|id| early_start[id as usize])
        .fold(0.0, f64::max)
}

/// Latest start for every task, seeded with `horizon` and propagated in
/// reverse topological order.
pub fn backward_pass<T>(graph: &CompiledGraph<T>, horizon: f64, verbosity: u8) -> Vec<f64>
where
    T: Clone + Eq + Hash + Debug,
{
    let mut late_start = vec![horizon; graph.task_count()];

    for &v in graph.order.iter().rev() {
        let start_v = late_start[v as usize];
        log_passes!(verbosity, "  backward: {:?} latest_start={}", graph.task(v), start_v);

        for &(u, duration) in &graph.adjacency.predecessors[v as usize] {
            let candidate = start_v - duration;
            if candidate < late_start[u as usize] {
                log_edges!(
                    verbosity,
                    "    {:?} <- {:?} ({}): latest_start {} -> {}",
                    graph.task(u),
                    graph.task(v),
                    duration,
                    late_start[u as usize],
                    candidate
                );
                late_start[u as usize] = candidate;
            }
        }
    }

    late_start
}

/// Slack per task: `late_start - early_start`.
pub fn compute_slack(early_start: &[f64], late_start: &[f64]) -> Vec<f64> {
    early_start
        .iter()
        .zip(late_start)
        .map(|(early, late)| late - early)
        .collect()
}

/// Critical flag per task: slack within `tolerance` of zero.
pub fn critical_mask(slack: &[f64], tolerance: f64) -> Vec<bool> {
    slack.iter().map(|s| s.abs() <= tolerance).collect()
}

/// Indices into `adjacency.edges` of the critical edges and, separately, of the
/// tight ones among them.
///
/// Critical: both endpoints critical. Tight: critical and the successor's
/// earliest start is realized exactly through this edge.
pub fn classify_edges(
    adjacency: &Adjacency,
    early_start: &[f64],
    critical: &[bool],
    tolerance: f64,
) -> (Vec<usize>, Vec<usize>) {
    let mut critical_edges = Vec::new();
    let mut tight_edges = Vec::new();

    for (i, &(u, v, duration)) in adjacency.edges.iter().enumerate() {
        if !(critical[u as usize] && critical[v as usize]) {
            continue;
        }
        critical_edges.push(i);
        if is_tight(early_start, u, v, duration, tolerance) {
            tight_edges.push(i);
        }
    }

    (critical_edges, tight_edges)
}

fn is_tight(early_start: &[f64], u: TaskIdInt, v: TaskIdInt, duration: f64, tolerance: f64) -> bool {
    (early_start[u as usize] + duration - early_start[v as usize]).abs() <= tolerance
}

/// One literal critical path, start task first.
///
/// Starts from the first sink (in `order`) whose earliest start reaches the
/// horizon and walks backwards through the predecessor that set each task's
/// earliest start, until a source is reached. That edge is exactly tight, so
/// the walk never stops early even when rounding residue leaves chain tasks
/// outside a zero-tolerance critical set.
pub fn critical_chain(
    adjacency: &Adjacency,
    order: &[TaskIdInt],
    early_start: &[f64],
    critical: &[bool],
    horizon: f64,
    tolerance: f64,
) -> Vec<TaskIdInt> {
    let end = order.iter().copied().find(|&id| {
        adjacency.successors[id as usize].is_empty()
            && critical[id as usize]
            && (early_start[id as usize] - horizon).abs() <= tolerance
    });

    let Some(end) = end else {
        return Vec::new();
    };

    let mut chain = vec![end];
    let mut current = end;
    while let Some(prev) = realizing_predecessor(adjacency, early_start, critical, current) {
        chain.push(prev);
        current = prev;
    }

    chain.reverse();
    chain
}

/// Predecessor with the largest `early_start[u] + duration` into `task`.
/// Ties go to a critical predecessor, then to the first in insertion order.
fn realizing_predecessor(
    adjacency: &Adjacency,
    early_start: &[f64],
    critical: &[bool],
    task: TaskIdInt,
) -> Option<TaskIdInt> {
    let mut best: Option<(TaskIdInt, f64, bool)> = None;
    for &(u, duration) in &adjacency.predecessors[task as usize] {
        let reach = early_start[u as usize] + duration;
        let is_critical = critical[u as usize];
        let better = match best {
            None => true,
            Some((_, best_reach, best_critical)) => {
                reach > best_reach || (reach == best_reach && is_critical && !best_critical)
            }
        };
        if better {
            best = Some((u, reach, is_critical));
        }
    }
    best.map(|(u, _, _)| u)
}
