//! Caller-owned task dependency graph.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// A start-to-start dependency: `successor` may start no earlier than
/// `duration` time units after `predecessor` starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T> {
    pub predecessor: T,
    pub successor: T,
    pub duration: f64,
}

impl<T> Edge<T> {
    pub fn new(predecessor: T, successor: T, duration: f64) -> Self {
        Self {
            predecessor,
            successor,
            duration,
        }
    }
}

/// Tasks plus the dependencies between them.
///
/// The builder does not validate anything beyond de-duplicating tasks; acyclicity,
/// durations and endpoint membership are checked when the graph is solved.
#[derive(Clone, Debug)]
pub struct ScheduleGraph<T> {
    tasks: Vec<T>,
    members: FxHashSet<T>,
    dependencies: Vec<Edge<T>>,
}

impl<T: Clone + Eq + Hash> ScheduleGraph<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            members: FxHashSet::default(),
            dependencies: Vec::new(),
        }
    }

    /// Build a graph from `(predecessor, successor, duration)` triples,
    /// adding every endpoint as a task.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T, f64)>,
    {
        let mut graph = Self::new();
        for (predecessor, successor, duration) in edges {
            graph.add_edge(predecessor, successor, duration);
        }
        graph
    }

    /// Add a task. Returns `false` if it was already present.
    pub fn add_task(&mut self, task: T) -> bool {
        if self.members.contains(&task) {
            return false;
        }
        self.members.insert(task.clone());
        self.tasks.push(task);
        true
    }

    /// Record a dependency without touching the task set.
    ///
    /// Endpoints that are never added as tasks are reported as unknown
    /// references by the solver.
    pub fn add_dependency(&mut self, predecessor: T, successor: T, duration: f64) {
        self.dependencies
            .push(Edge::new(predecessor, successor, duration));
    }

    /// Record a dependency and add any missing endpoint as a task.
    pub fn add_edge(&mut self, predecessor: T, successor: T, duration: f64) {
        self.add_task(predecessor.clone());
        self.add_task(successor.clone());
        self.add_dependency(predecessor, successor, duration);
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[T] {
        &self.tasks
    }

    /// Dependencies in insertion order.
    pub fn dependencies(&self) -> &[Edge<T>] {
        &self.dependencies
    }

    pub fn contains_task(&self, task: &T) -> bool {
        self.members.contains(task)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for ScheduleGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_deduplicates() {
        let mut graph = ScheduleGraph::new();
        assert!(graph.add_task("A"));
        assert!(graph.add_task("B"));
        assert!(!graph.add_task("A"));
        assert_eq!(graph.tasks(), &["A", "B"]);
    }

    #[test]
    fn test_add_dependency_leaves_tasks_alone() {
        let mut graph = ScheduleGraph::new();
        graph.add_task("A");
        graph.add_dependency("A", "B", 2.0);

        assert_eq!(graph.task_count(), 1);
        assert!(!graph.contains_task(&"B"));
        assert_eq!(graph.dependencies(), &[Edge::new("A", "B", 2.0)]);
    }

    #[test]
    fn test_from_edges_adds_endpoints_in_order() {
        let graph = ScheduleGraph::from_edges([("A", "B", 3.0), ("A", "C", 2.0), ("B", "C", 1.0)]);
        assert_eq!(graph.tasks(), &["A", "B", "C"]);
        assert_eq!(graph.dependency_count(), 3);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = ScheduleGraph::new();
        graph.add_edge(1, 2, 3.0);
        graph.add_edge(1, 2, 5.0);
        assert_eq!(graph.task_count(), 2);
        assert_eq!(graph.dependency_count(), 2);
    }
}
