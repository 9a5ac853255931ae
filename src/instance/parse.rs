//! Line-oriented instance reader.
//!
//! Format:
//!
//! ```text
//! n                          number of tasks
//! t[1][1] ... t[1][m]        n rows, one per task, one column per worker
//! ...
//! i j                        precedence pairs, 1-based task ids
//! ...
//! -1 -1                      terminator (optional; EOF also ends the list)
//! ```
//!
//! Incapacity is conventionally written as a very large time; any value at
//! or above [`INCAPACITY_SENTINEL`] (and the literal token `Inf`/`inf`)
//! is read as `f64::INFINITY`. Lines starting with `#` are skipped.

use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};

use super::Instance;

/// Processing times at or above this value denote worker incapacity.
pub const INCAPACITY_SENTINEL: f64 = 1.0e6;

fn parse_time(token: &str) -> Result<f64> {
    if token.eq_ignore_ascii_case("inf") {
        return Ok(f64::INFINITY);
    }
    let t: f64 = token
        .parse()
        .map_err(|_| anyhow!("invalid processing time {:?}", token))?;
    Ok(if t >= INCAPACITY_SENTINEL { f64::INFINITY } else { t })
}

/// Reads an instance from any buffered source.
///
/// Row lengths must agree (the worker count is inferred from the first
/// row); the precedence list ends at `-1 -1`, a blank line, or EOF.
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance> {
    let mut lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("failed to read instance")?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.starts_with('#'));

    let num_tasks: usize = lines
        .next()
        .ok_or_else(|| anyhow!("unexpected end of input reading the task count"))?
        .parse()
        .context("invalid task count")?;

    // One row per task; the matrix is transposed to [worker][task] storage.
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(num_tasks);
    let mut num_workers = 0;
    for task in 0..num_tasks {
        let line = lines.next().ok_or_else(|| {
            anyhow!("unexpected end of input reading times for task {}", task + 1)
        })?;
        let row = line
            .split_whitespace()
            .map(parse_time)
            .collect::<Result<Vec<f64>>>()
            .with_context(|| format!("task {} time row", task + 1))?;
        if task == 0 {
            num_workers = row.len();
            if num_workers == 0 {
                bail!("task 1 time row is empty");
            }
        } else if row.len() != num_workers {
            bail!(
                "task {} has {} times, expected {}",
                task + 1,
                row.len(),
                num_workers
            );
        }
        rows.push(row);
    }

    let processing_times: Vec<Vec<f64>> = (0..num_workers)
        .map(|w| (0..num_tasks).map(|t| rows[t][w]).collect())
        .collect();

    let mut precedences = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        let pair: Vec<i64> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i64>()
                    .map_err(|_| anyhow!("invalid precedence line {:?}", line))
            })
            .collect::<Result<Vec<i64>>>()?;
        let &[i, j] = pair.as_slice() else {
            bail!("invalid precedence line {:?}", line);
        };
        if (i, j) == (-1, -1) {
            break;
        }
        if i < 1 || j < 1 {
            bail!("precedence ({}, {}) is not a pair of 1-based task ids", i, j);
        }
        precedences.push((i as usize - 1, j as usize - 1));
    }

    Instance::new(num_tasks, processing_times, precedences)
}
