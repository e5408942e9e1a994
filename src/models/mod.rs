//! CPU scheduling domain models.
//!
//! Provides the process record handed to the schedulers and the
//! output types they return.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Static inputs plus per-run result fields |
//! | `ExecutionTimeline` | pid → ordered CPU intervals |
//! | `Metrics` | Aggregate run performance |
//! | `ProcessStats` | Flattened per-process view |
//! | `ExecutionResult` | `{ execution, metrics, process_stats }` |

mod process;
mod result;
mod timeline;

pub use process::{Pid, Process, DEFAULT_PRIORITY};
pub use result::{ExecutionResult, Metrics, ProcessStats};
pub use timeline::{ExecutionTimeline, Interval};
