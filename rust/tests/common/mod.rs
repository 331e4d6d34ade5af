//! Shared fixtures for integration and property tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use cpm_rust::{ScheduleGraph, SolveResult};
use proptest::prelude::*;

pub const TOL: f64 = 1e-9;

/// Fixed three-layer project: A fans out, two middle layers, single sink X.
pub fn fixed_demo_graph() -> ScheduleGraph<&'static str> {
    ScheduleGraph::from_edges([
        ("A", "B", 3.0),
        ("A", "C", 2.0),
        ("A", "D", 2.0),
        ("B", "E", 5.0),
        ("B", "F", 5.0),
        ("C", "F", 2.0),
        ("C", "E", 4.0),
        ("D", "E", 2.0),
        ("D", "F", 4.0),
        ("E", "H", 1.0),
        ("E", "T", 2.0),
        ("E", "K", 3.0),
        ("F", "H", 4.0),
        ("F", "T", 3.0),
        ("F", "K", 2.0),
        ("H", "X", 6.0),
        ("T", "X", 1.0),
        ("K", "X", 3.0),
    ])
}

/// Structure of the larger layered project; weights are supplied separately.
pub const LAYERED_DEMO_EDGES: [(&str, &str); 24] = [
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("B", "E"),
    ("B", "F"),
    ("C", "F"),
    ("C", "E"),
    ("D", "E"),
    ("D", "F"),
    ("C", "T"),
    ("E", "H"),
    ("E", "T"),
    ("E", "K"),
    ("F", "H"),
    ("F", "T"),
    ("F", "K"),
    ("H", "U"),
    ("H", "V"),
    ("T", "V"),
    ("K", "M"),
    ("K", "V"),
    ("U", "X"),
    ("V", "X"),
    ("M", "X"),
];

/// Layered project with explicit task list (M only appears through an edge).
pub fn layered_demo_graph(weights: &[u32]) -> ScheduleGraph<&'static str> {
    let mut graph = ScheduleGraph::new();
    for task in ["A", "B", "C", "D", "E", "F", "H", "T", "K", "X", "U", "V"] {
        graph.add_task(task);
    }
    for (&(from, to), &weight) in LAYERED_DEMO_EDGES.iter().zip(weights) {
        graph.add_edge(from, to, f64::from(weight));
    }
    graph
}

/// Random weights in 1..=12 for the layered project.
pub fn layered_weights_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1u32..=12, LAYERED_DEMO_EDGES.len())
}

/// Random DAG over integer task IDs.
///
/// Acyclic by construction: task `i` only depends on tasks `0..i`.
pub fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = ScheduleGraph<u32>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            proptest::collection::vec((any::<usize>(), 0u32..=12), 0..4),
            num_tasks,
        )
        .prop_map(move |raw_deps| {
            let mut graph = ScheduleGraph::new();
            for i in 0..num_tasks as u32 {
                graph.add_task(i);
            }
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                if i == 0 {
                    continue;
                }
                for (dep_idx, weight) in potential_deps {
                    graph.add_dependency((dep_idx % i) as u32, i as u32, f64::from(weight));
                }
            }
            graph
        })
    })
}

/// Check every schedule invariant that must hold for a valid DAG.
pub fn assert_schedule_invariants<T>(graph: &ScheduleGraph<T>, result: &SolveResult<T>)
where
    T: Clone + Eq + Hash + Debug,
{
    assert_eq!(result.early_start.len(), graph.task_count());
    assert_eq!(result.topological_order.len(), graph.task_count());

    for task in graph.tasks() {
        let timing = result.timing(task).expect("every task has a timing");
        assert!(
            timing.latest_start >= timing.earliest_start - TOL,
            "negative slack for {:?}: {:?}",
            task,
            timing
        );
        assert!(timing.earliest_start >= 0.0);
        assert!(timing.latest_start <= result.horizon + TOL);
    }

    for edge in graph.dependencies() {
        let early_u = result.early_start[&edge.predecessor];
        let early_v = result.early_start[&edge.successor];
        assert!(early_v >= early_u + edge.duration - TOL);
    }

    assert!(!result.critical_tasks.is_empty());
    let max_early = result
        .early_start
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((result.horizon - max_early).abs() <= TOL);

    for (u, v) in &result.critical_edges {
        assert!(result.is_critical(u) && result.is_critical(v));
    }
    assert!(result.tight_edges.is_subset(&result.critical_edges));

    assert_chain_is_literal_path(graph, result);
}

fn assert_chain_is_literal_path<T>(graph: &ScheduleGraph<T>, result: &SolveResult<T>)
where
    T: Clone + Eq + Hash + Debug,
{
    let chain = &result.critical_chain;
    assert!(!chain.is_empty());

    let has_incoming: HashSet<&T> = graph.dependencies().iter().map(|e| &e.successor).collect();
    let has_outgoing: HashSet<&T> = graph.dependencies().iter().map(|e| &e.predecessor).collect();

    let first = &chain[0];
    let last = &chain[chain.len() - 1];
    assert!(!has_incoming.contains(first), "chain starts mid-graph at {:?}", first);
    assert!(!has_outgoing.contains(last), "chain ends mid-graph at {:?}", last);
    assert!((result.early_start[last] - result.horizon).abs() <= TOL);

    for task in chain {
        assert!(result.is_critical(task));
    }
    for pair in chain.windows(2) {
        assert!(result
            .tight_edges
            .contains(&(pair[0].clone(), pair[1].clone())));
    }
}
