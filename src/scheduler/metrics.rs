//! Run performance metrics.
//!
//! Reduces a completed process set plus the context-switch count of the
//! run into aggregate indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Wait | mean(wait_time) |
//! | Avg Turnaround | mean(turnaround_time) |
//! | Total Time | max(completion) - min(arrival) |
//! | CPU Utilization | 100 * sum(burst) / total_time |
//! | Context Switches | supplied by the algorithm |

use crate::models::{ExecutionResult, ExecutionTimeline, Metrics, Process, ProcessStats};

/// Computes metrics from completed processes.
///
/// Returns zeroed metrics for an empty set.
///
/// # Arguments
/// * `processes` - Processes after the run has written their result fields.
/// * `context_switches` - Ownership changes counted by the algorithm.
pub fn calculate_metrics(processes: &[Process], context_switches: usize) -> Metrics {
    if processes.is_empty() {
        return Metrics::default();
    }

    let count = processes.len() as f64;
    // Per-process values fit in i64 after validation; their sums may not.
    let total_wait: i128 = processes.iter().map(|p| i128::from(p.wait_time)).sum();
    let total_turnaround: i128 = processes
        .iter()
        .map(|p| i128::from(p.turnaround_time))
        .sum();
    let busy: i128 = processes.iter().map(|p| i128::from(p.burst_time)).sum();

    let last_completion = processes.iter().map(|p| p.completion_time).max().unwrap_or(0);
    let first_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0);
    let total_time = last_completion - first_arrival;

    let cpu_utilization = if total_time > 0 {
        100.0 * busy as f64 / total_time as f64
    } else {
        0.0
    };

    Metrics {
        avg_wait_time: total_wait as f64 / count,
        avg_turnaround_time: total_turnaround as f64 / count,
        total_time,
        cpu_utilization,
        context_switches,
    }
}

/// Packages a finished run.
///
/// `processes` must be in caller input order; statistics follow it.
pub(crate) fn build_result(
    processes: &[Process],
    execution: ExecutionTimeline,
    context_switches: usize,
) -> ExecutionResult {
    ExecutionResult {
        execution,
        metrics: calculate_metrics(processes, context_switches),
        process_stats: processes.iter().map(ProcessStats::from).collect(),
    }
}
