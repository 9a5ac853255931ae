//! General Variable Neighborhood Search (GVNS).
//!
//! A single-solution metaheuristic alternating randomized perturbation
//! (shaking) with deterministic Variable Neighborhood Descent. Shaking
//! draws a random neighbor in the k-th neighborhood of the current
//! solution; VND descends to a local optimum of the two first-improvement
//! neighborhoods; the acceptance test keeps the candidate only if it
//! strictly improves on the current solution, and resets k to the first
//! neighborhood whenever a new incumbent best is found.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research*
//!   130(3), 449-467.

mod config;
mod local_search;
mod runner;
mod shaking;
mod vnd;

pub use config::GvnsConfig;
pub use local_search::{task_reassignment, worker_swap};
pub use runner::{GvnsResult, GvnsRunner};
pub use shaking::shake;
pub use vnd::vnd;
