//! Shared dispatch loop for rule-driven non-preemptive schedulers.
//!
//! # Algorithm
//!
//! 1. Collect unfinished processes with `arrival_time <= current_time`.
//! 2. If none, jump `current_time` to the earliest pending arrival.
//! 3. Otherwise pick one with the rule engine and run it to completion.
//!
//! # Complexity
//! O(n^2 * r) where r = rules in the engine.

use log::{debug, trace};

use super::metrics::build_result;
use super::{working_copy, ScheduleOutcome, SwitchCounter};
use crate::dispatching::RuleEngine;
use crate::models::{ExecutionTimeline, Process};

/// Runs `processes` non-preemptively, choosing with `engine`.
pub(crate) fn dispatch(name: &str, engine: &RuleEngine, processes: &[Process]) -> ScheduleOutcome {
    let mut working = working_copy(processes)?;
    let n = working.len();
    let mut done = vec![false; n];
    let mut completed = 0;

    let mut timeline = ExecutionTimeline::new();
    let mut switches = SwitchCounter::default();
    let mut current_time = 0;

    while completed < n {
        let ready = (0..n).filter(|&i| !done[i] && working[i].arrival_time <= current_time);
        let idx = match engine.select_among(&working, ready) {
            Some(idx) => idx,
            None => {
                let next_arrival = (0..n)
                    .filter(|&i| !done[i])
                    .map(|i| working[i].arrival_time)
                    .min();
                match next_arrival {
                    Some(t) => {
                        trace!("{name}: idle {current_time} -> {t}");
                        current_time = t;
                        continue;
                    }
                    None => break,
                }
            }
        };

        let process = &mut working[idx];
        let start = current_time;
        let end = start + process.burst_time;
        trace!("{name}: P{} runs [{start}, {end})", process.pid);

        timeline.record(process.pid, start, end);
        switches.observe(process.pid);
        process.finish(end);
        done[idx] = true;
        completed += 1;
        current_time = end;
    }

    debug!(
        "{name} scheduled {n} processes, finished at {current_time}, {} switches",
        switches.count()
    );
    Ok(build_result(&working, timeline, switches.count()))
}
