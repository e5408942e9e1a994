//! Built-in selection rules.
//!
//! - **ShortestBurst**: total CPU demand (SJF)
//! - **LowestPriorityValue**: numeric priority, lower wins
//! - **ArrivalOrder**: arrival time (FCFS, and the standard tie-breaker)
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{RuleKey, SelectionRule};
use crate::models::Process;

/// Shortest burst time first.
///
/// Minimizes average waiting time among non-preemptive policies when all
/// jobs are available together.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SHORTEST_BURST"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Burst Time"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl SelectionRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
