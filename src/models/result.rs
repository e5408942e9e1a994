//! Scheduling run output.
//!
//! An [`ExecutionResult`] is the self-contained product of one algorithm
//! run: the execution timeline, aggregate metrics, and a flattened
//! per-process view for display.

use serde::{Deserialize, Serialize};

use super::{ExecutionTimeline, Pid, Process};

/// Aggregate performance indicators for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean of per-process wait time.
    pub avg_wait_time: f64,
    /// Mean of per-process turnaround time.
    pub avg_turnaround_time: f64,
    /// Elapsed span: latest completion minus earliest arrival.
    pub total_time: i64,
    /// Busy percentage of the elapsed span (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Number of CPU ownership changes between distinct processes.
    pub context_switches: usize,
}

/// Final attributes of one process, flattened for tabular display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub pid: Pid,
    /// Time the process became eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process needed.
    pub burst_time: i64,
    /// Time spent ready but not running.
    pub wait_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Time the last unit of work finished.
    pub completion_time: i64,
}

impl From<&Process> for ProcessStats {
    fn from(p: &Process) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            wait_time: p.wait_time,
            turnaround_time: p.turnaround_time,
            completion_time: p.completion_time,
        }
    }
}

/// Output of a single scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// CPU slices per process.
    pub execution: ExecutionTimeline,
    /// Aggregate metrics.
    pub metrics: Metrics,
    /// Per-process statistics in caller input order.
    pub process_stats: Vec<ProcessStats>,
}

impl ExecutionResult {
    /// Empty timeline, zeroed metrics, no statistics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Statistics for one process.
    pub fn stats_for(&self, pid: Pid) -> Option<&ProcessStats> {
        self.process_stats.iter().find(|s| s.pid == pid)
    }

    /// Process IDs ordered by completion time (ties by pid).
    pub fn completion_order(&self) -> Vec<Pid> {
        let mut stats: Vec<&ProcessStats> = self.process_stats.iter().collect();
        stats.sort_by_key(|s| (s.completion_time, s.pid));
        stats.iter().map(|s| s.pid).collect()
    }
}
