//! Input validation: turns a caller graph into an ordered, integer-indexed form.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::ScheduleGraph;
use crate::interner::{TaskIdInt, TaskIdInterner};

use super::error::SolveError;
use super::topology::{topological_order, Adjacency};

/// A graph that passed every check, ready for the scheduling passes.
#[derive(Debug, Clone)]
pub struct CompiledGraph<T> {
    pub index: TaskIdInterner<T>,
    pub adjacency: Adjacency,
    pub order: Vec<TaskIdInt>,
}

impl<T: Clone + Eq + Hash> CompiledGraph<T> {
    pub fn task_count(&self) -> usize {
        self.index.len()
    }

    /// Resolve an interned ID back to the caller's identifier.
    ///
    /// IDs produced by `compile` always resolve.
    pub fn task(&self, id: TaskIdInt) -> &T {
        &self.index.identifiers()[id as usize]
    }
}

/// Validate `graph` and compute its topological order.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. the task set is non-empty
/// 2. per dependency (insertion order): both endpoints are known tasks, the
///    duration is finite, the duration is nonnegative
/// 3. the graph is acyclic
pub fn compile<T>(graph: &ScheduleGraph<T>) -> Result<CompiledGraph<T>, SolveError<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    if graph.is_empty() {
        return Err(SolveError::EmptyGraph);
    }

    let mut index = TaskIdInterner::with_capacity(graph.task_count());
    for task in graph.tasks() {
        index.intern(task);
    }

    let mut edges = Vec::with_capacity(graph.dependency_count());
    for edge in graph.dependencies() {
        let unknown = |task: &T| SolveError::UnknownTaskReference {
            task: task.clone(),
            predecessor: edge.predecessor.clone(),
            successor: edge.successor.clone(),
        };
        let from = index
            .get(&edge.predecessor)
            .ok_or_else(|| unknown(&edge.predecessor))?;
        let to = index
            .get(&edge.successor)
            .ok_or_else(|| unknown(&edge.successor))?;

        if !edge.duration.is_finite() {
            return Err(SolveError::NonFiniteDuration {
                predecessor: edge.predecessor.clone(),
                successor: edge.successor.clone(),
                duration: edge.duration,
            });
        }
        if edge.duration < 0.0 {
            return Err(SolveError::NegativeDuration {
                predecessor: edge.predecessor.clone(),
                successor: edge.successor.clone(),
                duration: edge.duration,
            });
        }

        edges.push((from, to, edge.duration));
    }

    let adjacency = Adjacency::new(index.len(), edges);
    let order = topological_order(&adjacency).map_err(|unordered| SolveError::Cycle {
        unordered: unordered
            .into_iter()
            .map(|id| index.identifiers()[id as usize].clone())
            .collect(),
    })?;

    Ok(CompiledGraph {
        index,
        adjacency,
        order,
    })
}
