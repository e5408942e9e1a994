//! CPU scheduling algorithms and the coordinator façade.
//!
//! Four classical disciplines share one seam, [`SchedulingAlgorithm`]:
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `Fcfs` | no | earliest arrival |
//! | `Sjf` | no | shortest burst, then arrival, then input order |
//! | `RoundRobin` | quantum slices | FIFO ready queue |
//! | `Priority` | no | lowest priority value, then arrival, then input order |
//!
//! Every call validates its input, clones it into a working set, and
//! returns a self-contained [`ExecutionResult`]. Algorithm values hold only
//! configuration, so one instance can serve any number of calls, including
//! from several threads.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5

mod coordinator;
mod fcfs;
mod metrics;
mod non_preemptive;
mod priority;
mod request;
mod round_robin;
mod sjf;

pub use coordinator::{AlgorithmRun, CpuScheduler, MetricsComparison};
pub use fcfs::Fcfs;
pub use metrics::calculate_metrics;
pub use priority::Priority;
pub use request::{Algorithm, SimulationRequest, DEFAULT_QUANTUM};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::models::{ExecutionResult, Pid, Process};
use crate::validation::{validate_processes, ValidationError};

/// Outcome of one scheduling call.
pub type ScheduleOutcome = Result<ExecutionResult, Vec<ValidationError>>;

/// A CPU scheduling discipline.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Display name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Schedules a copy of `processes` and reports the run.
    ///
    /// The caller's slice is never modified. An empty slice yields
    /// [`ExecutionResult::empty`].
    ///
    /// # Errors
    /// Returns every validation problem found in `processes`.
    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome;
}

/// Validates `processes` and returns an independent working copy with
/// result fields cleared.
pub(crate) fn working_copy(processes: &[Process]) -> Result<Vec<Process>, Vec<ValidationError>> {
    validate_processes(processes)?;
    Ok(processes.iter().map(Process::reset).collect())
}

/// Counts CPU ownership changes between distinct processes.
///
/// The first dispatch is not a switch. Idle gaps do not reset the last pid.
#[derive(Debug, Default)]
pub(crate) struct SwitchCounter {
    last: Option<Pid>,
    count: usize,
}

impl SwitchCounter {
    pub(crate) fn observe(&mut self, pid: Pid) {
        if self.last.is_some_and(|prev| prev != pid) {
            self.count += 1;
        }
        self.last = Some(pid);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
