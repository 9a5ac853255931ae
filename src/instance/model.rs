//! Immutable ALWABP problem instance.

use anyhow::{bail, Result};

/// An ALWABP problem instance.
///
/// Holds `n` tasks, `m` workers (the station count equals the worker
/// count), the per-(worker, task) processing-time matrix and the precedence
/// relation over tasks. Worker and task indices are dense and 0-based;
/// the 1-based ids of the text format exist only in the parser and the
/// report formatter.
///
/// A worker incapable of a task carries `f64::INFINITY` as its processing
/// time for that task.
///
/// # Examples
///
/// ```
/// use alwabp::instance::Instance;
///
/// // Two tasks, two workers; worker 1 cannot perform task 0.
/// let instance = Instance::new(
///     2,
///     vec![vec![2.0, 3.0], vec![f64::INFINITY, 1.0]],
///     vec![(0, 1)],
/// )
/// .unwrap();
/// assert_eq!(instance.num_stations(), 2);
/// assert!(!instance.is_capable(1, 0));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Instance {
    num_tasks: usize,
    /// `processing_times[worker][task]`.
    processing_times: Vec<Vec<f64>>,
    /// Ordered pairs `(i, j)`: task `i` must not sit in a later station
    /// than task `j`. 0-based.
    precedences: Vec<(usize, usize)>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
}

impl Instance {
    /// Builds an instance from its raw parts.
    ///
    /// `processing_times` is indexed `[worker][task]`; the number of rows
    /// determines the worker (and station) count. Precedence pairs are
    /// 0-based.
    ///
    /// Fails on structural problems: a non-rectangular time matrix, a
    /// negative processing time, or a precedence endpoint outside
    /// `0..num_tasks`. Acyclicity is not checked here; a cycle surfaces
    /// from [`topological_order`](Self::topological_order).
    pub fn new(
        num_tasks: usize,
        processing_times: Vec<Vec<f64>>,
        precedences: Vec<(usize, usize)>,
    ) -> Result<Self> {
        for (worker, row) in processing_times.iter().enumerate() {
            if row.len() != num_tasks {
                bail!(
                    "worker {} has {} processing times, expected {}",
                    worker + 1,
                    row.len(),
                    num_tasks
                );
            }
            if let Some(t) = row.iter().find(|t| **t < 0.0) {
                bail!("worker {} has a negative processing time {}", worker + 1, t);
            }
        }

        let mut predecessors = vec![Vec::new(); num_tasks];
        let mut successors = vec![Vec::new(); num_tasks];
        for &(i, j) in &precedences {
            if i >= num_tasks || j >= num_tasks {
                bail!(
                    "precedence ({}, {}) references a task outside 1..={}",
                    i + 1,
                    j + 1,
                    num_tasks
                );
            }
            successors[i].push(j);
            predecessors[j].push(i);
        }

        Ok(Self {
            num_tasks,
            processing_times,
            precedences,
            predecessors,
            successors,
        })
    }

    /// Number of tasks `n`.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Number of stations `m`; always equal to the number of workers.
    pub fn num_stations(&self) -> usize {
        self.processing_times.len()
    }

    /// Number of workers; always equal to the number of stations.
    pub fn num_workers(&self) -> usize {
        self.processing_times.len()
    }

    /// Processing time of `task` when performed by `worker`.
    /// `f64::INFINITY` encodes incapacity.
    pub fn processing_time(&self, worker: usize, task: usize) -> f64 {
        self.processing_times[worker][task]
    }

    /// Whether `worker` can perform `task` at all.
    pub fn is_capable(&self, worker: usize, task: usize) -> bool {
        self.processing_times[worker][task].is_finite()
    }

    /// The precedence pairs, 0-based.
    pub fn precedences(&self) -> &[(usize, usize)] {
        &self.precedences
    }

    /// Direct predecessors of `task`.
    pub fn predecessors(&self, task: usize) -> &[usize] {
        &self.predecessors[task]
    }

    /// Direct successors of `task`.
    pub fn successors(&self, task: usize) -> &[usize] {
        &self.successors[task]
    }

    /// Checks whether a (possibly partial) task assignment respects every
    /// precedence pair. An unassigned endpoint counts as a violation.
    ///
    /// This is the cheap structural pre-check used by the local search to
    /// discard candidates before a full evaluation.
    pub fn precedence_feasible(&self, task_station: &[Option<usize>]) -> bool {
        self.precedences.iter().all(|&(i, j)| {
            matches!(
                (task_station[i], task_station[j]),
                (Some(si), Some(sj)) if si <= sj
            )
        })
    }

    /// Topological order of the tasks via Kahn's algorithm.
    ///
    /// Fails if the precedence graph contains a cycle, which is a fatal
    /// instance error distinct from ordinary infeasibility.
    pub fn topological_order(&self) -> Result<Vec<usize>> {
        let n = self.num_tasks;
        let mut in_degree: Vec<usize> = (0..n).map(|t| self.predecessors[t].len()).collect();
        let mut queue: Vec<usize> = (0..n).filter(|&t| in_degree[t] == 0).collect();
        let mut order = Vec::with_capacity(n);

        let mut head = 0;
        while head < queue.len() {
            let task = queue[head];
            head += 1;
            order.push(task);
            for &succ in &self.successors[task] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    queue.push(succ);
                }
            }
        }

        if order.len() != n {
            bail!("precedence graph contains a cycle");
        }
        Ok(order)
    }
}
