//! GVNS execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution with the constructive heuristic; it
//!    becomes both `current` and `best`
//! 2. For each outer iteration, sweep k = 1..k_max:
//!    a. **Shaking**: draw a random neighbor of `current` in N_k
//!    b. **VND**: descend the shaken solution to a local optimum
//!    c. **Move or not**: accept the candidate only if it strictly
//!       improves on `current`; on a new global best, reset k = 1,
//!       otherwise advance to the next neighborhood
//! 3. Return the initial and the best solution found
//!
//! The driver owns the only random generator of a run, seeded once from
//! the configuration and handed to every randomized operator, so runs
//! with equal seed, instance and parameters reproduce exactly.

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constructive;
use crate::instance::Instance;
use crate::solution::Solution;

use super::config::GvnsConfig;
use super::{shake, vnd};

const DEFAULT_SEED: u64 = 42;

/// Result of a GVNS run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GvnsResult {
    /// The constructive heuristic's solution the search started from.
    pub initial: Solution,
    /// Best solution found.
    pub best: Solution,
    /// Total shake + descent rounds executed.
    pub shakes: usize,
    /// Outer iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Best cycle time at the end of each outer iteration.
    pub cycle_time_history: Vec<f64>,
}

/// GVNS runner.
pub struct GvnsRunner;

impl GvnsRunner {
    /// Executes a full GVNS run on the given instance.
    ///
    /// Fails on an invalid configuration or a cyclic precedence graph;
    /// an infeasible search outcome is not an error and is reported
    /// through the returned solutions.
    ///
    /// # Examples
    ///
    /// ```
    /// use alwabp::gvns::{GvnsConfig, GvnsRunner};
    /// use alwabp::instance::Instance;
    ///
    /// let instance = Instance::new(1, vec![vec![5.0]], vec![]).unwrap();
    /// let config = GvnsConfig::default().with_seed(42);
    /// let result = GvnsRunner::run(&instance, &config).unwrap();
    /// assert_eq!(result.best.cycle_time(), 5.0);
    /// ```
    pub fn run(instance: &Instance, config: &GvnsConfig) -> Result<GvnsResult> {
        config.validate().map_err(|e| anyhow!(e))?;

        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(DEFAULT_SEED),
        };

        let mut initial = constructive::build_initial(instance, &mut rng)?;
        for _ in 0..config.construction_retries {
            if initial.is_feasible() {
                break;
            }
            initial = constructive::build_initial(instance, &mut rng)?;
        }

        Ok(Self::run_from(instance, initial, config, &mut rng))
    }

    /// Runs the shake/descend/accept loop from an explicit starting
    /// solution.
    ///
    /// The starting solution may be infeasible; the search then simply
    /// keeps looking for a candidate that beats it.
    pub fn run_from<R: Rng>(
        instance: &Instance,
        initial: Solution,
        config: &GvnsConfig,
        rng: &mut R,
    ) -> GvnsResult {
        let mut current = initial.clone();
        let mut best = initial.clone();
        let mut best_iteration = 0;
        let mut shakes = 0;
        let mut cycle_time_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let mut k = 1;
            while k <= config.k_max {
                let shaken = shake(instance, &current, k, rng);
                let candidate = vnd(instance, &shaken);
                shakes += 1;

                if candidate.is_improvement_over(&current) {
                    current = candidate;
                    if current.is_improvement_over(&best) {
                        best = current.clone();
                        best_iteration = iteration;
                        k = 1;
                    } else {
                        k += 1;
                    }
                } else {
                    k += 1;
                }
            }
            cycle_time_history.push(best.cycle_time());
        }

        GvnsResult {
            initial,
            best,
            shakes,
            best_iteration,
            cycle_time_history,
        }
    }
}
