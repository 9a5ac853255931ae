//! Greedy constructive heuristic.
//!
//! Workers are assigned to stations by a uniformly random permutation;
//! tasks are then placed in topological order into the first station whose
//! worker can perform them and whose index is not below any already-placed
//! predecessor. First-fit keeps construction simple; the descent phase
//! repairs load balance afterwards.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::instance::Instance;
use crate::solution::Solution;

/// Builds one starting solution under a random worker permutation.
///
/// Fails only on a cyclic precedence graph. A placement dead end is not an
/// error: the partially-assigned solution comes back marked infeasible and
/// the caller decides whether to retry with a fresh permutation.
pub fn build_initial<R: Rng>(instance: &Instance, rng: &mut R) -> Result<Solution> {
    let mut worker_station: Vec<usize> = (0..instance.num_stations()).collect();
    worker_station.shuffle(rng);
    build_with_workers(instance, worker_station)
}

/// Builds a starting solution under an explicit worker permutation.
///
/// `worker_station[station]` must be a permutation of `0..num_workers`.
pub fn build_with_workers(instance: &Instance, worker_station: Vec<usize>) -> Result<Solution> {
    let order = instance.topological_order()?;

    let m = instance.num_stations();
    let mut task_station: Vec<Option<usize>> = vec![None; instance.num_tasks()];

    for &task in &order {
        let placed = (0..m).find(|&station| {
            instance.is_capable(worker_station[station], task)
                && instance
                    .predecessors(task)
                    .iter()
                    .all(|&pred| match task_station[pred] {
                        Some(s) => s <= station,
                        None => true,
                    })
        });
        match placed {
            Some(station) => task_station[task] = Some(station),
            // Dead end for this permutation; the evaluation marks the
            // partial assignment infeasible.
            None => return Ok(Solution::evaluate(instance, task_station, worker_station)),
        }
    }

    Ok(Solution::evaluate(instance, task_station, worker_station))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_task_instance() {
        let instance = Instance::new(1, vec![vec![5.0]], vec![]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let solution = build_initial(&instance, &mut rng).unwrap();
        assert!(solution.is_feasible());
        assert_eq!(solution.cycle_time(), 5.0);
        assert_eq!(solution.task_station(), &[Some(0)]);
    }

    /// Worker 0 can do both tasks; worker 1 cannot do task 0. First-fit
    /// construction stays feasible under either worker permutation: with
    /// worker 0 at the later station both tasks simply follow it there.
    #[test]
    fn test_capability_instance_feasible_under_both_permutations() {
        let instance = Instance::new(
            2,
            vec![vec![2.0, 3.0], vec![f64::INFINITY, 1.0]],
            vec![(0, 1)],
        )
        .unwrap();

        let forward = build_with_workers(&instance, vec![0, 1]).unwrap();
        assert!(forward.is_feasible());
        assert_eq!(forward.task_station(), &[Some(0), Some(0)]);

        let reversed = build_with_workers(&instance, vec![1, 0]).unwrap();
        assert!(reversed.is_feasible());
        assert_eq!(reversed.task_station(), &[Some(1), Some(1)]);
    }

    #[test]
    fn test_placement_dead_end_returns_infeasible_solution() {
        // Task 0 is only possible at worker 1, task 1 only at worker 0;
        // with worker 0 first, task 0 lands at the last station and task 1
        // has nowhere to go.
        let instance = Instance::new(
            2,
            vec![vec![f64::INFINITY, 1.0], vec![2.0, f64::INFINITY]],
            vec![(0, 1)],
        )
        .unwrap();

        let stuck = build_with_workers(&instance, vec![0, 1]).unwrap();
        assert!(!stuck.is_feasible());
        assert_eq!(stuck.task_station(), &[Some(1), None]);

        let fine = build_with_workers(&instance, vec![1, 0]).unwrap();
        assert!(fine.is_feasible());
        assert_eq!(fine.task_station(), &[Some(0), Some(1)]);
    }

    #[test]
    fn test_cycle_is_fatal() {
        let instance =
            Instance::new(2, vec![vec![1.0, 1.0]], vec![(0, 1), (1, 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(build_initial(&instance, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_construction() {
        let instance = Instance::new(
            4,
            vec![
                vec![1.0, 2.0, 3.0, 4.0],
                vec![4.0, 3.0, 2.0, 1.0],
                vec![2.0, 2.0, 2.0, 2.0],
            ],
            vec![(0, 2), (1, 3)],
        )
        .unwrap();

        let a = build_initial(&instance, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = build_initial(&instance, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.task_station(), b.task_station());
        assert_eq!(a.worker_station(), b.worker_station());
        assert_eq!(a.cycle_time(), b.cycle_time());
    }
}
