//! Solution representation and evaluation.

use crate::instance::Instance;

/// An evaluated candidate solution.
///
/// `task_station[task]` is the station the task is assigned to (`None`
/// only while a constructive pass is still placing tasks; an evaluated
/// solution with unassigned tasks is infeasible). `worker_station[station]`
/// is the worker operating that station and is always a permutation of all
/// workers.
///
/// Solutions are immutable once built: [`Solution::evaluate`] computes
/// feasibility, per-station loads and the cycle time up front, and no
/// method mutates the assignment afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Solution {
    task_station: Vec<Option<usize>>,
    worker_station: Vec<usize>,
    feasible: bool,
    cycle_time: f64,
    station_times: Vec<f64>,
}

impl Solution {
    /// Evaluates an assignment pair against an instance.
    ///
    /// Two linear passes: the precedence check, then per-station time
    /// summation under each station's worker. Any unassigned task, any
    /// precedence violation and any task routed to an incapable worker
    /// short-circuits to an infeasible solution with infinite cycle time
    /// and infinite station loads.
    pub fn evaluate(
        instance: &Instance,
        task_station: Vec<Option<usize>>,
        worker_station: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(task_station.len(), instance.num_tasks());
        debug_assert_eq!(worker_station.len(), instance.num_stations());
        debug_assert!(is_permutation(&worker_station));

        let m = instance.num_stations();
        let infeasible = |task_station: Vec<Option<usize>>, worker_station: Vec<usize>| Self {
            task_station,
            worker_station,
            feasible: false,
            cycle_time: f64::INFINITY,
            station_times: vec![f64::INFINITY; m],
        };

        for &(i, j) in instance.precedences() {
            match (task_station[i], task_station[j]) {
                (Some(si), Some(sj)) if si <= sj => {}
                _ => return infeasible(task_station, worker_station),
            }
        }

        let mut station_times = vec![0.0; m];
        for task in 0..task_station.len() {
            let Some(station) = task_station[task] else {
                return infeasible(task_station, worker_station);
            };
            let time = instance.processing_time(worker_station[station], task);
            if time.is_infinite() {
                return infeasible(task_station, worker_station);
            }
            station_times[station] += time;
        }

        let cycle_time = station_times.iter().cloned().fold(0.0, f64::max);
        Self {
            task_station,
            worker_station,
            feasible: true,
            cycle_time,
            station_times,
        }
    }

    /// Station assigned to each task.
    pub fn task_station(&self) -> &[Option<usize>] {
        &self.task_station
    }

    /// Worker operating each station; a permutation of all workers.
    pub fn worker_station(&self) -> &[usize] {
        &self.worker_station
    }

    /// Whether the solution satisfies precedence and capability constraints
    /// with every task assigned.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// The bottleneck station load; `f64::INFINITY` when infeasible.
    pub fn cycle_time(&self) -> f64 {
        self.cycle_time
    }

    /// Total processing time at each station.
    pub fn station_times(&self) -> &[f64] {
        &self.station_times
    }

    /// Strict "better than" ordering: feasible solutions precede infeasible
    /// ones; among solutions of equal feasibility, a strictly lower cycle
    /// time wins. Equal solutions are not improvements of one another, so
    /// the incumbent survives ties.
    pub fn is_improvement_over(&self, other: &Solution) -> bool {
        if self.feasible != other.feasible {
            return self.feasible;
        }
        self.cycle_time < other.cycle_time
    }
}

fn is_permutation(worker_station: &[usize]) -> bool {
    let mut seen = vec![false; worker_station.len()];
    worker_station.iter().all(|&w| {
        w < seen.len() && !std::mem::replace(&mut seen[w], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use proptest::prelude::*;

    /// 3 tasks, 2 workers; worker 1 cannot perform task 0; 0 precedes 1.
    fn instance() -> Instance {
        Instance::new(
            3,
            vec![vec![2.0, 3.0, 4.0], vec![f64::INFINITY, 1.0, 2.0]],
            vec![(0, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_feasible_evaluation_sums_station_loads() {
        let s = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), Some(1)],
            vec![0, 1],
        );
        assert!(s.is_feasible());
        assert_eq!(s.station_times(), &[5.0, 2.0]);
        assert_eq!(s.cycle_time(), 5.0);
    }

    #[test]
    fn test_precedence_violation_is_infeasible() {
        let s = Solution::evaluate(
            &instance(),
            vec![Some(1), Some(0), Some(0)],
            vec![0, 1],
        );
        assert!(!s.is_feasible());
        assert_eq!(s.cycle_time(), f64::INFINITY);
        assert!(s.station_times().iter().all(|t| t.is_infinite()));
    }

    #[test]
    fn test_incapacity_is_infeasible() {
        // Task 0 lands on station 0 whose worker (1) cannot perform it.
        let s = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), Some(1)],
            vec![1, 0],
        );
        assert!(!s.is_feasible());
    }

    #[test]
    fn test_unassigned_task_is_infeasible() {
        let s = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), None],
            vec![0, 1],
        );
        assert!(!s.is_feasible());
        assert_eq!(s.cycle_time(), f64::INFINITY);
    }

    #[test]
    fn test_feasible_beats_infeasible() {
        let feasible = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), Some(1)],
            vec![0, 1],
        );
        let infeasible = Solution::evaluate(
            &instance(),
            vec![Some(1), Some(0), Some(0)],
            vec![0, 1],
        );
        assert!(feasible.is_improvement_over(&infeasible));
        assert!(!infeasible.is_improvement_over(&feasible));
    }

    #[test]
    fn test_ties_are_not_improvements() {
        let a = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), Some(1)],
            vec![0, 1],
        );
        let b = a.clone();
        assert!(!a.is_improvement_over(&b));
        assert!(!b.is_improvement_over(&a));
    }

    #[test]
    fn test_lower_cycle_time_wins() {
        // Tasks 0 and 1 together load station 0 to 5.0; moving task 1 to
        // station 1 balances the line at 3.0.
        let packed = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(0), Some(1)],
            vec![0, 1],
        );
        let spread = Solution::evaluate(
            &instance(),
            vec![Some(0), Some(1), Some(1)],
            vec![0, 1],
        );
        assert!(spread.is_feasible());
        assert_eq!(spread.cycle_time(), 3.0);
        assert!(spread.is_improvement_over(&packed));
    }

    fn assignment_strategy() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<usize>)> {
        (
            proptest::collection::vec(proptest::option::of(0usize..2), 3),
            Just(vec![0usize, 1]).prop_shuffle(),
        )
    }

    proptest! {
        #[test]
        fn prop_evaluation_is_deterministic(
            (task_station, worker_station) in assignment_strategy()
        ) {
            let instance = instance();
            let a = Solution::evaluate(&instance, task_station.clone(), worker_station.clone());
            let b = Solution::evaluate(&instance, task_station, worker_station);
            prop_assert_eq!(a.is_feasible(), b.is_feasible());
            prop_assert_eq!(a.cycle_time(), b.cycle_time());
            prop_assert_eq!(a.station_times(), b.station_times());
        }

        #[test]
        fn prop_feasible_solutions_respect_precedence(
            (task_station, worker_station) in assignment_strategy()
        ) {
            let instance = instance();
            let s = Solution::evaluate(&instance, task_station, worker_station);
            if s.is_feasible() {
                for &(i, j) in instance.precedences() {
                    prop_assert!(s.task_station()[i].unwrap() <= s.task_station()[j].unwrap());
                }
            }
        }

        #[test]
        fn prop_ordering_is_transitive(
            x in assignment_strategy(),
            y in assignment_strategy(),
            z in assignment_strategy(),
        ) {
            let instance = instance();
            let a = Solution::evaluate(&instance, x.0, x.1);
            let b = Solution::evaluate(&instance, y.0, y.1);
            let c = Solution::evaluate(&instance, z.0, z.1);
            if a.is_improvement_over(&b) && b.is_improvement_over(&c) {
                prop_assert!(a.is_improvement_over(&c));
            }
        }
    }
}
