//! Process model.
//!
//! A process is one schedulable unit of CPU work. It carries static inputs
//! (arrival, burst, priority) supplied by the caller and result fields that
//! a scheduling algorithm fills in on its own working copy.
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// Process identifier (unique, positive).
pub type Pid = u32;

/// Priority assigned when the caller does not supply one.
pub const DEFAULT_PRIORITY: i32 = 0;

/// A process to be scheduled.
///
/// Construct with [`Process::new`], which rejects invalid inputs.
/// `remaining_time` starts equal to `burst_time`; the result fields start
/// at zero and are written once, when the process completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProcess")]
pub struct Process {
    /// Caller-supplied identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i32,
    /// CPU time still owed to the process.
    pub remaining_time: i64,
    /// Time spent eligible but not running.
    pub wait_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Tick at which the last slice ended.
    pub completion_time: i64,
}

impl Process {
    /// Creates a process with the default priority.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if `pid` is 0, `arrival_time` is
    /// negative, or `burst_time` is not positive.
    ///
    /// # Example
    /// ```
    /// use cpu_sched::models::Process;
    ///
    /// let p = Process::new(1, 0, 8).unwrap().with_priority(2);
    /// assert_eq!(p.remaining_time, 8);
    /// assert!(Process::new(2, 0, 0).is_err());
    /// ```
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Result<Self, ValidationError> {
        if pid == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Process ID must be positive",
            ));
        }
        if arrival_time < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {pid} has negative arrival time {arrival_time}"),
            ));
        }
        if burst_time <= 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {pid} has non-positive burst time {burst_time}"),
            ));
        }

        Ok(Self {
            pid,
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
            remaining_time: burst_time,
            wait_time: 0,
            turnaround_time: 0,
            completion_time: 0,
        })
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has received all of its CPU time.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records completion at `completion_time`.
    ///
    /// Derives turnaround and wait from the completion instant so that
    /// `turnaround = completion - arrival` and `wait = turnaround - burst`
    /// hold for every algorithm.
    pub(crate) fn finish(&mut self, completion_time: i64) {
        self.remaining_time = 0;
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.wait_time = self.turnaround_time - self.burst_time;
    }

    /// Returns a fresh copy with result fields cleared.
    pub(crate) fn reset(&self) -> Self {
        Self {
            remaining_time: self.burst_time,
            wait_time: 0,
            turnaround_time: 0,
            completion_time: 0,
            ..self.clone()
        }
    }
}

/// Unvalidated wire form of a [`Process`].
#[derive(Deserialize)]
struct RawProcess {
    pid: Pid,
    arrival_time: i64,
    burst_time: i64,
    #[serde(default)]
    priority: i32,
}

impl TryFrom<RawProcess> for Process {
    type Error = ValidationError;

    fn try_from(raw: RawProcess) -> Result<Self, Self::Error> {
        Ok(Process::new(raw.pid, raw.arrival_time, raw.burst_time)?.with_priority(raw.priority))
    }
}
