//! CPU scheduling simulation.
//!
//! Simulates classical single-CPU scheduling disciplines over a closed,
//! fully known process set and reports an execution timeline together
//! with per-process and aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionTimeline`, `Interval`,
//!   `Metrics`, `ProcessStats`, `ExecutionResult`
//! - **`validation`**: Input checks (pid, arrival, burst, duplicates, quantum,
//!   time range)
//! - **`dispatching`**: Selection rules and the rule engine used by the
//!   non-preemptive schedulers
//! - **`scheduler`**: FCFS, SJF, Round Robin, Priority, metrics, and the
//!   `CpuScheduler` coordinator
//! - **`workload`**: Preset and randomly generated process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::scheduler::CpuScheduler;
//! use cpu_sched::workload;
//!
//! let result = CpuScheduler::new()
//!     .schedule_rr(&workload::sample(), 4)
//!     .unwrap();
//! assert_eq!(result.metrics.total_time, 15);
//! ```
//!
//! # Logging
//!
//! Runs are reported through the `log` facade (`debug` per run, `trace` per
//! slice). No logger is installed by this crate.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
