//! Report and summary formatting.
//!
//! Output uses the 1-based task/worker/station ids of the instance text
//! format; the infinity marker `inf` stands in for the cycle time of an
//! infeasible solution.

use crate::instance::Instance;
use crate::solution::Solution;

/// Cycle time at fixed 6-decimal precision, or the `inf` marker.
pub fn format_cycle_time(cycle_time: f64) -> String {
    if cycle_time.is_finite() {
        format!("{:.6}", cycle_time)
    } else {
        "inf".to_string()
    }
}

/// Full solution report: the cycle-time line, then one line per station
/// with its worker and sorted task list.
pub fn format_solution(instance: &Instance, solution: &Solution) -> String {
    if !solution.is_feasible() {
        return "inf\ninfeasible".to_string();
    }

    let mut out = format_cycle_time(solution.cycle_time());
    out.push('\n');
    for station in 0..instance.num_stations() {
        let tasks = solution
            .task_station()
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Some(station))
            .map(|(task, _)| (task + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let worker = solution.worker_station()[station] + 1;
        out.push_str(&format!(
            "Station {}: Worker {} -> Tasks: {}\n",
            station + 1,
            worker,
            tasks
        ));
    }
    out.trim_end().to_string()
}

/// The `SI;SF;Time` run summary consumed by the result aggregation:
/// initial cycle time, best cycle time and elapsed wall-clock seconds.
pub fn summary_line(initial: &Solution, best: &Solution, elapsed_secs: f64) -> String {
    format!(
        "{};{};{:.4}",
        format_cycle_time(initial.cycle_time()),
        format_cycle_time(best.cycle_time()),
        elapsed_secs
    )
}
