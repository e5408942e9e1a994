//! Priority scheduling (non-preemptive).
//!
//! Same dispatch loop as SJF, keyed on `priority` (lower value wins).

use super::non_preemptive::dispatch;
use super::{ScheduleOutcome, SchedulingAlgorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::models::Process;

/// Non-preemptive priority scheduler.
#[derive(Debug, Clone)]
pub struct Priority {
    engine: RuleEngine,
}

impl Priority {
    /// Creates the scheduler with its standard rule chain.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::LowestPriorityValue)
                .with_tie_breaker(rules::ArrivalOrder),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        dispatch(self.name(), &self.engine, processes)
    }
}
