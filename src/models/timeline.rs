//! Execution timeline.
//!
//! Records, per process, the half-open intervals during which it held the
//! CPU. Non-preemptive algorithms produce one interval per process; Round
//! Robin may produce many.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Pid;

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// First tick of the slice.
    pub start: i64,
    /// First tick after the slice.
    pub end: i64,
}

impl Interval {
    /// Creates an interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two intervals share any tick.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Mapping from process ID to its CPU intervals, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionTimeline {
    entries: BTreeMap<Pid, Vec<Interval>>,
}

impl ExecutionTimeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice for `pid`.
    pub fn record(&mut self, pid: Pid, start: i64, end: i64) {
        self.entries
            .entry(pid)
            .or_default()
            .push(Interval::new(start, end));
    }

    /// Intervals for one process (empty if it never ran).
    pub fn intervals_for(&self, pid: Pid) -> &[Interval] {
        self.entries.get(&pid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total CPU time given to `pid`.
    pub fn busy_time(&self, pid: Pid) -> i64 {
        self.intervals_for(pid).iter().map(Interval::duration).sum()
    }

    /// Process IDs present in the timeline, ascending.
    pub fn pids(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.keys().copied()
    }

    /// All slices across all processes, sorted by start time.
    pub fn chronological(&self) -> Vec<(Pid, Interval)> {
        let mut all: Vec<(Pid, Interval)> = self
            .entries
            .iter()
            .flat_map(|(&pid, ivs)| ivs.iter().map(move |&iv| (pid, iv)))
            .collect();
        all.sort_by_key(|&(_, iv)| iv.start);
        all
    }

    /// Idle periods between consecutive slices.
    ///
    /// Time before the first slice is not reported.
    pub fn idle_gaps(&self) -> Vec<Interval> {
        self.chronological()
            .windows(2)
            .filter(|w| w[0].1.end < w[1].1.start)
            .map(|w| Interval::new(w[0].1.end, w[1].1.start))
            .collect()
    }

    /// Number of processes with at least one slice.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
