//! First-improvement local search operators.
//!
//! Both searches are deterministic: neighborhoods are scanned in index
//! order, the first strictly improving neighbor replaces the current
//! solution and the scan restarts from the beginning. A pass with no
//! improving neighbor terminates the search.

use crate::instance::Instance;
use crate::solution::Solution;

/// Task-reassignment search: every task in index order, every other
/// station in index order. Candidates violating precedence are discarded
/// by the cheap structural check before a full evaluation.
pub fn task_reassignment(instance: &Instance, solution: &Solution) -> Solution {
    let n = instance.num_tasks();
    let m = instance.num_stations();
    let mut current = solution.clone();

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for task in 0..n {
            let from = current.task_station()[task];
            for station in 0..m {
                if Some(station) == from {
                    continue;
                }
                let mut task_station = current.task_station().to_vec();
                task_station[task] = Some(station);
                if !instance.precedence_feasible(&task_station) {
                    continue;
                }
                let neighbor = Solution::evaluate(
                    instance,
                    task_station,
                    current.worker_station().to_vec(),
                );
                if neighbor.is_improvement_over(&current) {
                    current = neighbor;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
    current
}

/// Worker-swap search: every unordered station pair (s1 < s2) in
/// lexicographic order.
pub fn worker_swap(instance: &Instance, solution: &Solution) -> Solution {
    let m = instance.num_stations();
    let mut current = solution.clone();

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for s1 in 0..m {
            for s2 in (s1 + 1)..m {
                let mut worker_station = current.worker_station().to_vec();
                worker_station.swap(s1, s2);
                let neighbor = Solution::evaluate(
                    instance,
                    current.task_station().to_vec(),
                    worker_station,
                );
                if neighbor.is_improvement_over(&current) {
                    current = neighbor;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
    current
}
