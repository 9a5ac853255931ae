//! Candidate solutions: evaluated assignments of tasks and workers to
//! stations.
//!
//! A [`Solution`] is a value object. Every operator in the search produces
//! a freshly evaluated solution instead of mutating an existing one, so a
//! solution's derived fields (`feasible`, `cycle_time`, station loads) are
//! always consistent with its assignment.

mod model;
mod report;

pub use model::Solution;
pub use report::{format_cycle_time, format_solution, summary_line};
