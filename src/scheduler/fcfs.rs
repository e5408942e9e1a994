//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable, so ties keep input order).
//! 2. Run each to completion in that order.
//! 3. If the CPU is free before the next arrival, jump to that arrival.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.

use log::{debug, trace};

use super::metrics::build_result;
use super::{working_copy, ScheduleOutcome, SchedulingAlgorithm, SwitchCounter};
use crate::models::{ExecutionTimeline, Process};

/// Non-preemptive arrival-order scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Fcfs, SchedulingAlgorithm};
///
/// let procs = vec![
///     Process::new(1, 0, 8).unwrap(),
///     Process::new(2, 1, 4).unwrap(),
/// ];
/// let result = Fcfs.schedule(&procs).unwrap();
/// assert_eq!(result.stats_for(2).unwrap().wait_time, 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut working = working_copy(processes)?;
        let mut order: Vec<usize> = (0..working.len()).collect();
        order.sort_by_key(|&i| working[i].arrival_time);

        let mut timeline = ExecutionTimeline::new();
        let mut switches = SwitchCounter::default();
        let mut current_time = 0;

        for idx in order {
            let process = &mut working[idx];
            if current_time < process.arrival_time {
                trace!("idle {current_time} -> {}", process.arrival_time);
                current_time = process.arrival_time;
            }

            let start = current_time;
            let end = start + process.burst_time;
            trace!("P{} runs [{start}, {end})", process.pid);

            timeline.record(process.pid, start, end);
            switches.observe(process.pid);
            process.finish(end);
            current_time = end;
        }

        debug!(
            "FCFS scheduled {} processes, finished at {current_time}, {} switches",
            working.len(),
            switches.count()
        );
        Ok(build_result(&working, timeline, switches.count()))
    }
}
