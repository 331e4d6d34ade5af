//! Dense adjacency lists and topological ordering.

use std::collections::VecDeque;

use crate::interner::TaskIdInt;

/// Integer-indexed dependency structure for one solve call.
///
/// `edges[i]` is the i-th dependency in caller insertion order; both adjacency
/// lists keep that order so passes and tie-breaks are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    /// Outgoing `(successor, duration)` pairs, indexed by task ID.
    pub successors: Vec<Vec<(TaskIdInt, f64)>>,
    /// Incoming `(predecessor, duration)` pairs, indexed by task ID.
    pub predecessors: Vec<Vec<(TaskIdInt, f64)>>,
    /// All dependencies as `(predecessor, successor, duration)`.
    pub edges: Vec<(TaskIdInt, TaskIdInt, f64)>,
}

impl Adjacency {
    /// Build adjacency for `task_count` tasks. Endpoints must be `< task_count`.
    pub fn new(task_count: usize, edges: Vec<(TaskIdInt, TaskIdInt, f64)>) -> Self {
        let mut successors = vec![Vec::new(); task_count];
        let mut predecessors = vec![Vec::new(); task_count];
        for &(from, to, duration) in &edges {
            successors[from as usize].push((to, duration));
            predecessors[to as usize].push((from, duration));
        }
        Self {
            successors,
            predecessors,
            edges,
        }
    }

    pub fn task_count(&self) -> usize {
        self.successors.len()
    }

    /// Tasks with no outgoing dependencies.
    pub fn sinks(&self) -> impl Iterator<Item = TaskIdInt> + '_ {
        self.successors
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(id, _)| id as TaskIdInt)
    }
}

/// Order tasks so every predecessor precedes its successors (Kahn's algorithm).
///
/// Zero in-degree tasks are queued in ID order, which makes the result
/// deterministic for a given graph.
///
/// # Returns
/// * `Ok(order)` containing every task exactly once
/// * `Err(unordered)` with the IDs (ascending) that sit on or behind a cycle
pub fn topological_order(adjacency: &Adjacency) -> Result<Vec<TaskIdInt>, Vec<TaskIdInt>> {
    let n = adjacency.task_count();
    let mut in_degree: Vec<usize> = adjacency.predecessors.iter().map(Vec::len).collect();

    let mut queue: VecDeque<TaskIdInt> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(id, _)| id as TaskIdInt)
        .collect();

    let mut order: Vec<TaskIdInt> = Vec::with_capacity(n);

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for &(succ, _) in &adjacency.successors[id as usize] {
            let degree = &mut in_degree[succ as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != n {
        let unordered = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree > 0)
            .map(|(id, _)| id as TaskIdInt)
            .collect();
        return Err(unordered);
    }

    Ok(order)
}
