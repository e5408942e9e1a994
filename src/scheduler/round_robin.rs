//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival_time <= current_time` to the back
//!    of a FIFO ready queue, in arrival order.
//! 2. If the queue is empty, jump to the next pending arrival.
//! 3. Run the head for `min(quantum, remaining_time)`.
//! 4. Admit processes that arrived during the slice **before** re-queuing
//!    the process just run, so a preempted process goes behind same-tick
//!    arrivals.
//! 5. A process whose remaining time reaches zero is finalized; its wait
//!    time is derived from turnaround, not accumulated per slice.
//!
//! # Complexity
//! O(n log n + total_burst / quantum).

use log::{debug, trace};
use std::collections::VecDeque;

use super::metrics::build_result;
use super::{working_copy, ScheduleOutcome, SchedulingAlgorithm, SwitchCounter};
use crate::models::{ExecutionTimeline, Process};
use crate::validation::{validate_quantum, ValidationError};

/// Preemptive time-sliced scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::{Interval, Process};
/// use cpu_sched::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let procs = vec![
///     Process::new(1, 0, 5).unwrap(),
///     Process::new(2, 0, 5).unwrap(),
/// ];
/// let rr = RoundRobin::new(2).unwrap();
/// let result = rr.schedule(&procs).unwrap();
/// assert_eq!(
///     result.execution.intervals_for(1),
///     &[Interval::new(0, 2), Interval::new(4, 6), Interval::new(8, 9)]
/// );
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler with the given time slice.
    ///
    /// # Errors
    /// Rejects a quantum of zero or below.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Maximum slice length.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut working = working_copy(processes)?;
        let n = working.len();

        let mut arrivals: Vec<usize> = (0..n).collect();
        arrivals.sort_by_key(|&i| working[i].arrival_time);
        let mut cursor = 0;

        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut timeline = ExecutionTimeline::new();
        let mut switches = SwitchCounter::default();
        let mut current_time = 0;
        let mut completed = 0;

        while completed < n {
            admit(&working, &arrivals, &mut cursor, current_time, &mut ready);

            let idx = match ready.pop_front() {
                Some(idx) => idx,
                None => match arrivals.get(cursor) {
                    Some(&next) => {
                        let t = working[next].arrival_time;
                        trace!("RR: idle {current_time} -> {t}");
                        current_time = t;
                        continue;
                    }
                    None => break,
                },
            };

            let process = &mut working[idx];
            let exec_time = self.quantum.min(process.remaining_time);
            let start = current_time;
            let end = start + exec_time;
            trace!("RR: P{} runs [{start}, {end})", process.pid);

            timeline.record(process.pid, start, end);
            switches.observe(process.pid);
            process.remaining_time -= exec_time;
            current_time = end;

            let finished = process.remaining_time == 0;
            if finished {
                process.finish(current_time);
                completed += 1;
            }

            admit(&working, &arrivals, &mut cursor, current_time, &mut ready);
            if !finished {
                ready.push_back(idx);
            }
        }

        debug!(
            "RR(q={}) scheduled {n} processes, finished at {current_time}, {} switches",
            self.quantum,
            switches.count()
        );
        Ok(build_result(&working, timeline, switches.count()))
    }
}

/// Moves every arrival at or before `now` from the arrival list to the
/// ready queue.
fn admit(
    processes: &[Process],
    arrivals: &[usize],
    cursor: &mut usize,
    now: i64,
    ready: &mut VecDeque<usize>,
) {
    while let Some(&idx) = arrivals.get(*cursor) {
        if processes[idx].arrival_time > now {
            break;
        }
        ready.push_back(idx);
        *cursor += 1;
    }
}
