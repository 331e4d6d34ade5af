//! Logging macros for the solver with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Output goes to stderr; the solver itself never writes anything else.
//! - 0: SILENT
//! - 1: SUMMARY (horizon, sink tasks, critical set size)
//! - 2: PASSES (finalized per-task values in each pass)
//! - 3: EDGES (every edge relaxation)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_PASSES: u8 = 2;
pub const VERBOSITY_EDGES: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Log at PASSES level (verbosity >= 2).
///
/// Used for: earliest/latest start of each task once it is final.
#[macro_export]
macro_rules! log_passes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_PASSES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at EDGES level (verbosity >= 3).
///
/// Used for: individual relaxations in the forward and backward passes.
#[macro_export]
macro_rules! log_edges {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_EDGES {
            eprintln!($($arg)*);
        }
    };
}
