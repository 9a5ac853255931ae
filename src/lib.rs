//! Solver for the Assembly Line Worker Assignment and Balancing Problem
//! (ALWABP).
//!
//! Given ordered tasks under precedence constraints and heterogeneous
//! workers with task-specific processing times (possibly infinite, i.e.
//! the worker cannot perform the task), the solver assigns tasks to
//! stations and one worker to each station (the station count equals the
//! worker count), minimizing the cycle time: the maximum total processing
//! time over all stations.
//!
//! The search is a General Variable Neighborhood Search: a greedy
//! constructive heuristic seeds the run, then shaking perturbations of
//! growing index alternate with a Variable Neighborhood Descent over two
//! first-improvement neighborhoods (task reassignment and worker swap).
//!
//! # Architecture
//!
//! - [`instance`] — immutable problem data and the text-format reader.
//! - [`solution`] — evaluated assignment values and report formatting.
//! - [`constructive`] — topological first-fit construction.
//! - [`gvns`] — shaking, local search, VND and the GVNS driver.
//!
//! The search core is single-threaded and performs no I/O; binaries own
//! file handling and timing, and batch experiments parallelize whole runs.
//!
//! # References
//!
//! Miralles, C., García-Sabater, J. P., Andrés, C. & Cardós, M. (2007).
//! "Advantages of assembly lines in sheltered work centres for disabled.
//! A case study", *International Journal of Production Economics* 110(1),
//! 187-197.

pub mod constructive;
pub mod gvns;
pub mod instance;
pub mod solution;
