//! Shortest-Job-First scheduling (non-preemptive).
//!
//! Whenever the CPU falls free, runs the ready process with the smallest
//! burst time to completion. A running process is never interrupted by a
//! shorter arrival.
//!
//! Ties: earliest arrival, then input order.

use super::non_preemptive::dispatch;
use super::{ScheduleOutcome, SchedulingAlgorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::models::Process;

/// Non-preemptive shortest-burst scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates the scheduler with its standard rule chain.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::ArrivalOrder),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        dispatch(self.name(), &self.engine, processes)
    }
}
