//! Rule engine for multi-key process selection.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. Remaining ties fall back to input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleKey, SelectionRule};
use crate::models::Process;

/// A composable rule chain for choosing the next process.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
/// use cpu_sched::models::Process;
///
/// let ready = vec![
///     Process::new(1, 0, 8).unwrap(),
///     Process::new(2, 1, 4).unwrap(),
///     Process::new(3, 1, 4).unwrap(),
/// ];
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::ArrivalOrder);
///
/// // P2 and P3 tie on burst and arrival; P2 comes first in input order.
/// assert_eq!(engine.select_best(&ready), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules, selection is pure input order.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Keys a process receives from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleKey> {
        self.rules.iter().map(|r| r.key(process)).collect()
    }

    /// Compares two processes under the rule chain.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.key(a).cmp(&rule.key(b)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Returns the index of the process to run next.
    ///
    /// Ties after every rule resolve to the lowest index.
    pub fn select_best(&self, candidates: &[Process]) -> Option<usize> {
        self.select_among(candidates, 0..candidates.len())
    }

    /// Like [`select_best`](Self::select_best), restricted to the given
    /// indices into `processes`.
    pub fn select_among(
        &self,
        processes: &[Process],
        indices: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        indices.into_iter().min_by(|&a, &b| {
            self.compare(&processes[a], &processes[b])
                .then_with(|| a.cmp(&b))
        })
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
