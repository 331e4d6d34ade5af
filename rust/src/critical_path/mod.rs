//! Critical Path Method scheduling.
//!
//! Validates a task dependency DAG, orders it topologically, then runs the
//! forward pass (earliest start), the backward pass (latest start from the
//! sink-maximum horizon), and derives slack plus the critical task and edge
//! sets.

mod calculation;
mod error;
mod solver;
mod topology;
mod types;
mod validation;

pub use error::SolveError;
pub use solver::{solve, CriticalPathSolver};
pub use topology::{topological_order, Adjacency};
pub use types::{SolveResult, TaskTiming};
