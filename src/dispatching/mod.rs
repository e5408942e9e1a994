//! Selection rules and rule engine for non-preemptive dispatching.
//!
//! Whenever the CPU falls free, a non-preemptive scheduler picks one of the
//! ready processes. The choice is expressed as a chain of selection rules:
//! a primary rule followed by tie-breakers, with input order as the final
//! fallback.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine};
//!
//! // Shortest-job-first: burst time, then arrival, then input order.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalOrder);
//! assert_eq!(engine.rule_names(), vec!["SHORTEST_BURST", "ARRIVAL"]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = selected first.
pub type RuleKey = i64;

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = higher precedence.** Rules return smaller values for
/// processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SHORTEST_BURST").
    fn name(&self) -> &'static str;

    /// Ranks a process. Lower = runs sooner.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
