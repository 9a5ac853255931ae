//! Variable Neighborhood Descent.

use crate::instance::Instance;
use crate::solution::Solution;

use super::local_search;

/// Descends to a local optimum of both first-improvement neighborhoods.
///
/// Neighborhood l = 1 is the task-reassignment search, l = 2 the
/// worker-swap search. Any improvement resets the descent to l = 1, so
/// task-reassignment optimality is reconfirmed before worker-swap
/// optimality is trusted; the descent ends when neither neighborhood
/// improves the current solution.
pub fn vnd(instance: &Instance, solution: &Solution) -> Solution {
    let mut current = solution.clone();
    let mut l = 1;
    while l <= 2 {
        let candidate = match l {
            1 => local_search::task_reassignment(instance, &current),
            _ => local_search::worker_swap(instance, &current),
        };
        if candidate.is_improvement_over(&current) {
            current = candidate;
            l = 1;
        } else {
            l += 1;
        }
    }
    current
}
