//! Errors reported by the critical path solver.

use std::fmt::Debug;
use thiserror::Error;

/// Reasons a graph cannot be scheduled. Every variant except
/// `DurationOverflow` is detected before the forward pass starts, and that one
/// right after it; an error never comes with partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError<T: Debug> {
    #[error("Task graph is empty")]
    EmptyGraph,

    #[error(
        "Dependency {predecessor:?} -> {successor:?} references unknown task {task:?}"
    )]
    UnknownTaskReference {
        task: T,
        predecessor: T,
        successor: T,
    },

    #[error("Dependency {predecessor:?} -> {successor:?} has negative duration {duration}")]
    NegativeDuration {
        predecessor: T,
        successor: T,
        duration: f64,
    },

    #[error("Dependency {predecessor:?} -> {successor:?} has non-finite duration {duration}")]
    NonFiniteDuration {
        predecessor: T,
        successor: T,
        duration: f64,
    },

    #[error("Circular dependency detected in task graph; unordered tasks: {unordered:?}")]
    Cycle { unordered: Vec<T> },

    #[error("Earliest start of task {task:?} overflows the representable time range")]
    DurationOverflow { task: T },
}
