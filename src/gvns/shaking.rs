//! Shaking (perturbation) operators.
//!
//! Shaking never pre-checks feasibility: the move is applied blindly and
//! the evaluation decides. An infeasible shaken solution is a normal
//! intermediate state for VND to repair or the acceptance test to reject.

use rand::Rng;

use crate::instance::Instance;
use crate::solution::Solution;

/// Draws a random neighbor of `solution` in the k-th shaking neighborhood.
///
/// - k = 1: exchange the stations of two distinct random tasks,
/// - k = 2: move one random task to a random different station,
/// - k = 3: exchange the workers of two distinct random stations,
/// - any other k: clamped to the task-reassignment move.
///
/// Structurally impossible moves (fewer than two tasks or stations) return
/// an unmodified clone.
pub fn shake<R: Rng>(
    instance: &Instance,
    solution: &Solution,
    k: usize,
    rng: &mut R,
) -> Solution {
    match k {
        1 => swap_tasks(instance, solution, rng),
        3 => swap_workers(instance, solution, rng),
        _ => reassign_task(instance, solution, rng),
    }
}

fn swap_tasks<R: Rng>(instance: &Instance, solution: &Solution, rng: &mut R) -> Solution {
    let n = instance.num_tasks();
    if n < 2 {
        return solution.clone();
    }
    let picked = rand::seq::index::sample(rng, n, 2);
    let mut task_station = solution.task_station().to_vec();
    task_station.swap(picked.index(0), picked.index(1));
    Solution::evaluate(instance, task_station, solution.worker_station().to_vec())
}

fn reassign_task<R: Rng>(instance: &Instance, solution: &Solution, rng: &mut R) -> Solution {
    let n = instance.num_tasks();
    let m = instance.num_stations();
    if n == 0 {
        return solution.clone();
    }
    let task = rng.random_range(0..n);
    let current = solution.task_station()[task];
    let candidates: Vec<usize> = (0..m).filter(|&s| Some(s) != current).collect();
    if candidates.is_empty() {
        return solution.clone();
    }
    let station = candidates[rng.random_range(0..candidates.len())];

    let mut task_station = solution.task_station().to_vec();
    task_station[task] = Some(station);
    Solution::evaluate(instance, task_station, solution.worker_station().to_vec())
}

fn swap_workers<R: Rng>(instance: &Instance, solution: &Solution, rng: &mut R) -> Solution {
    let m = instance.num_stations();
    if m < 2 {
        return solution.clone();
    }
    let picked = rand::seq::index::sample(rng, m, 2);
    let mut worker_station = solution.worker_station().to_vec();
    worker_station.swap(picked.index(0), picked.index(1));
    Solution::evaluate(instance, solution.task_station().to_vec(), worker_station)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance() -> Instance {
        Instance::new(
            4,
            vec![
                vec![1.0, 2.0, 3.0, 4.0],
                vec![4.0, 3.0, 2.0, 1.0],
                vec![2.0, 2.0, 2.0, 2.0],
            ],
            vec![(0, 2)],
        )
        .unwrap()
    }

    fn start(instance: &Instance) -> Solution {
        Solution::evaluate(
            instance,
            vec![Some(0), Some(1), Some(2), Some(2)],
            vec![0, 1, 2],
        )
    }

    fn is_permutation(ws: &[usize]) -> bool {
        let mut sorted = ws.to_vec();
        sorted.sort_unstable();
        sorted == (0..ws.len()).collect::<Vec<_>>()
    }

    #[test]
    fn test_task_swap_preserves_station_multiset() {
        let instance = instance();
        let solution = start(&instance);
        let mut rng = StdRng::seed_from_u64(1);
        let shaken = shake(&instance, &solution, 1, &mut rng);

        let mut before: Vec<_> = solution.task_station().to_vec();
        let mut after: Vec<_> = shaken.task_station().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after, "a task swap only exchanges stations");
        assert_eq!(shaken.worker_station(), solution.worker_station());
    }

    #[test]
    fn test_task_reassignment_moves_one_task() {
        let instance = instance();
        let solution = start(&instance);
        let mut rng = StdRng::seed_from_u64(2);
        let shaken = shake(&instance, &solution, 2, &mut rng);

        let moved = solution
            .task_station()
            .iter()
            .zip(shaken.task_station())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(moved, 1, "exactly one task changes station");
    }

    #[test]
    fn test_worker_swap_keeps_permutation() {
        let instance = instance();
        let solution = start(&instance);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shaken = shake(&instance, &solution, 3, &mut rng);
            assert!(is_permutation(shaken.worker_station()));
            assert_eq!(shaken.task_station(), solution.task_station());
        }
    }

    #[test]
    fn test_degenerate_moves_are_noops() {
        let instance = Instance::new(1, vec![vec![5.0]], vec![]).unwrap();
        let solution = Solution::evaluate(&instance, vec![Some(0)], vec![0]);
        let mut rng = StdRng::seed_from_u64(3);

        for k in [1, 2, 3] {
            let shaken = shake(&instance, &solution, k, &mut rng);
            assert_eq!(shaken.task_station(), solution.task_station());
            assert_eq!(shaken.worker_station(), solution.worker_station());
        }
    }

    #[test]
    fn test_out_of_range_k_degenerates_to_reassignment() {
        let instance = instance();
        let solution = start(&instance);

        // Identically seeded generators: k = 7 must draw the same move
        // as k = 2.
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let via_fallback = shake(&instance, &solution, 7, &mut rng_a);
        let via_reassign = shake(&instance, &solution, 2, &mut rng_b);
        assert_eq!(via_fallback.task_station(), via_reassign.task_station());
        assert_eq!(via_fallback.cycle_time(), via_reassign.cycle_time());
    }

    #[test]
    fn test_shaken_solution_is_evaluated() {
        let instance = instance();
        let solution = start(&instance);
        let mut rng = StdRng::seed_from_u64(4);
        let shaken = shake(&instance, &solution, 1, &mut rng);

        let again = Solution::evaluate(
            &instance,
            shaken.task_station().to_vec(),
            shaken.worker_station().to_vec(),
        );
        assert_eq!(shaken.is_feasible(), again.is_feasible());
        assert_eq!(shaken.cycle_time(), again.cycle_time());
    }

    proptest! {
        #[test]
        fn prop_worker_station_stays_a_permutation(k in 0usize..6, seed in any::<u64>()) {
            let instance = instance();
            let solution = start(&instance);
            let mut rng = StdRng::seed_from_u64(seed);
            let shaken = shake(&instance, &solution, k, &mut rng);
            prop_assert!(is_permutation(shaken.worker_station()));
        }
    }
}
