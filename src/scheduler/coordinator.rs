//! Scheduler coordinator.
//!
//! A thin façade with one entry point per algorithm, plus batch runs and
//! side-by-side metric comparison. Holds no run state; every algorithm
//! copies its input on entry, so one process list can be fed to several
//! algorithms without interference.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    Algorithm, Fcfs, Priority, RoundRobin, ScheduleOutcome, SchedulingAlgorithm,
    SimulationRequest, Sjf,
};
use crate::models::{ExecutionResult, Process};
use crate::validation::{validate_processes, ValidationError};

/// Result of one algorithm within a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,
    /// Timeline, metrics and statistics.
    pub result: ExecutionResult,
}

/// Headline metrics of one algorithm, for comparison across algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    /// Algorithm display name.
    pub algorithm: String,
    /// Mean wait time.
    pub avg_wait_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Busy percentage of the elapsed span.
    pub cpu_utilization: f64,
    /// CPU ownership changes.
    pub context_switches: usize,
}

impl From<&AlgorithmRun> for MetricsComparison {
    fn from(run: &AlgorithmRun) -> Self {
        let m = &run.result.metrics;
        Self {
            algorithm: run.algorithm.name().to_string(),
            avg_wait_time: m.avg_wait_time,
            avg_turnaround_time: m.avg_turnaround_time,
            cpu_utilization: m.cpu_utilization,
            context_switches: m.context_switches,
        }
    }
}

/// Entry point for running scheduling simulations.
///
/// # Example
///
/// ```
/// use cpu_sched::scheduler::CpuScheduler;
/// use cpu_sched::workload;
///
/// let scheduler = CpuScheduler::new();
/// let procs = workload::sample();
///
/// let fcfs = scheduler.schedule_fcfs(&procs).unwrap();
/// let sjf = scheduler.schedule_sjf(&procs).unwrap();
/// assert!(sjf.metrics.avg_wait_time < fcfs.metrics.avg_wait_time);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpuScheduler {
    fcfs: Fcfs,
    sjf: Sjf,
    priority: Priority,
}

impl CpuScheduler {
    /// Creates a coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs First-Come-First-Served.
    pub fn schedule_fcfs(&self, processes: &[Process]) -> ScheduleOutcome {
        self.fcfs.schedule(processes)
    }

    /// Runs Shortest-Job-First.
    pub fn schedule_sjf(&self, processes: &[Process]) -> ScheduleOutcome {
        self.sjf.schedule(processes)
    }

    /// Runs Round Robin with the given quantum.
    ///
    /// # Errors
    /// Rejects a quantum of zero or below before touching the processes.
    pub fn schedule_rr(&self, processes: &[Process], quantum: i64) -> ScheduleOutcome {
        let rr = RoundRobin::new(quantum).map_err(|e| vec![e])?;
        rr.schedule(processes)
    }

    /// Runs Priority scheduling.
    pub fn schedule_priority(&self, processes: &[Process]) -> ScheduleOutcome {
        self.priority.schedule(processes)
    }

    /// Runs the selected algorithm.
    pub fn schedule(&self, algorithm: Algorithm, processes: &[Process]) -> ScheduleOutcome {
        match algorithm {
            Algorithm::Fcfs => self.schedule_fcfs(processes),
            Algorithm::Sjf => self.schedule_sjf(processes),
            Algorithm::RoundRobin { quantum } => self.schedule_rr(processes, quantum),
            Algorithm::Priority => self.schedule_priority(processes),
        }
    }

    /// Runs every algorithm in `request`, in order.
    ///
    /// All inputs are validated first; either every run completes or none
    /// starts.
    pub fn run(
        &self,
        request: &SimulationRequest,
    ) -> Result<Vec<AlgorithmRun>, Vec<ValidationError>> {
        let algorithms = request.effective_algorithms();

        let mut errors = validate_processes(&request.processes).err().unwrap_or_default();
        let mut built = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            match algorithm.build() {
                Ok(scheduler) => built.push((algorithm, scheduler)),
                Err(e) => errors.push(e),
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        debug!(
            "running {} algorithms on {} processes",
            built.len(),
            request.processes.len()
        );
        built
            .into_iter()
            .map(|(algorithm, scheduler)| -> Result<AlgorithmRun, Vec<ValidationError>> {
                Ok(AlgorithmRun {
                    algorithm,
                    result: scheduler.schedule(&request.processes)?,
                })
            })
            .collect()
    }

    /// Runs all four algorithms and returns their headline metrics.
    pub fn compare(
        &self,
        processes: &[Process],
        quantum: i64,
    ) -> Result<Vec<MetricsComparison>, Vec<ValidationError>> {
        let request = SimulationRequest::new(processes.to_vec()).with_all_algorithms(quantum);
        let runs = self.run(&request)?;
        Ok(runs.iter().map(MetricsComparison::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Pid};
    use crate::validation::ValidationErrorKind;
    use crate::workload::{self, RandomWorkload};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Checks the invariants every schedule must satisfy.
    fn assert_well_formed(procs: &[Process], r: &ExecutionResult) {
        assert_eq!(r.process_stats.len(), procs.len());

        for (p, s) in procs.iter().zip(&r.process_stats) {
            // Stats in input order
            assert_eq!(p.pid, s.pid);
            assert_eq!(s.turnaround_time, s.completion_time - s.arrival_time);
            assert_eq!(s.wait_time, s.turnaround_time - s.burst_time);
            assert!(s.wait_time >= 0);
            assert_eq!(r.execution.busy_time(p.pid), p.burst_time);

            let ivs = r.execution.intervals_for(p.pid);
            assert!(ivs.iter().all(|iv| iv.start >= p.arrival_time && iv.duration() > 0));
            assert_eq!(ivs.last().map(|iv| iv.end), Some(s.completion_time));
        }

        let chrono = r.execution.chronological();
        for w in chrono.windows(2) {
            assert!(!w[0].1.overlaps(&w[1].1), "overlap: {:?}", w);
        }
    }

    #[test]
    fn test_sample_all_algorithms() {
        let scheduler = CpuScheduler::new();
        let procs = workload::sample();

        let runs = scheduler
            .run(&SimulationRequest::new(procs.clone()).with_all_algorithms(4))
            .unwrap();
        assert_eq!(runs.len(), 4);
        for run in &runs {
            assert_well_formed(&procs, &run.result);
            // Never idle on this sample
            assert!((run.result.metrics.cpu_utilization - 100.0).abs() < 1e-10);
            assert_eq!(run.result.metrics.total_time, 15);
        }
    }

    #[test]
    fn test_random_workloads_well_formed() {
        let scheduler = CpuScheduler::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let config = RandomWorkload::default().with_count(8);

        for _ in 0..50 {
            let procs = workload::random(&mut rng, &config);
            for quantum in [1, 2, 5] {
                for algo in Algorithm::all(quantum) {
                    let r = scheduler.schedule(algo, &procs).unwrap();
                    assert_well_formed(&procs, &r);
                }
            }
        }
    }

    #[test]
    fn test_non_preemptive_one_interval_each() {
        let scheduler = CpuScheduler::new();
        let mut rng = SmallRng::seed_from_u64(7);
        let procs = workload::random(&mut rng, &RandomWorkload::default());

        for algo in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
            let r = scheduler.schedule(algo, &procs).unwrap();
            for p in &procs {
                assert_eq!(r.execution.intervals_for(p.pid).len(), 1);
            }
            // One switch per process after the first
            assert_eq!(r.metrics.context_switches, procs.len() - 1);
        }
    }

    #[test]
    fn test_no_cross_run_interference() {
        let scheduler = CpuScheduler::new();
        let procs = workload::varying_load();
        let before = procs.clone();

        let fcfs_first = scheduler.schedule_fcfs(&procs).unwrap();
        scheduler.schedule_rr(&procs, 2).unwrap();
        scheduler.schedule_sjf(&procs).unwrap();
        scheduler.schedule_priority(&procs).unwrap();
        let fcfs_again = scheduler.schedule_fcfs(&procs).unwrap();

        assert_eq!(fcfs_first, fcfs_again);
        assert_eq!(procs, before);
    }

    #[test]
    fn test_utilization_invariant_across_algorithms() {
        // Same idle structure for every algorithm: one gap of 4 ticks.
        let procs = vec![
            Process::new(1, 0, 3).unwrap(),
            Process::new(2, 1, 2).unwrap(),
            Process::new(3, 9, 1).unwrap(),
        ];
        let cmp = CpuScheduler::new().compare(&procs, 1).unwrap();
        for row in &cmp {
            assert!((row.cpu_utilization - 60.0).abs() < 1e-10, "{row:?}");
        }
    }

    #[test]
    fn test_compare_sample() {
        let cmp = CpuScheduler::new().compare(&workload::sample(), 4).unwrap();
        let names: Vec<&str> = cmp.iter().map(|c| c.algorithm.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Round Robin", "Priority"]);
        assert!((cmp[0].avg_wait_time - 7.0).abs() < 1e-10);
        assert!((cmp[1].avg_wait_time - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_equal_bursts_tie_order() {
        let scheduler = CpuScheduler::new();
        let procs = workload::equal_bursts();
        for algo in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
            let r = scheduler.schedule(algo, &procs).unwrap();
            let order: Vec<Pid> = r.execution.chronological().iter().map(|&(p, _)| p).collect();
            assert_eq!(order, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_empty_input() {
        let scheduler = CpuScheduler::new();
        let runs = scheduler.run(&SimulationRequest::new(vec![])).unwrap();
        assert_eq!(runs.len(), 4);
        for run in runs {
            assert_eq!(run.result, ExecutionResult::empty());
        }
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let scheduler = CpuScheduler::new();
        let errors = scheduler.schedule_rr(&workload::sample(), 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);

        // Batch runs fail before any algorithm starts
        let req = SimulationRequest::new(workload::sample())
            .with_algorithm(Algorithm::Fcfs)
            .with_algorithm(Algorithm::RoundRobin { quantum: -2 });
        assert!(scheduler.run(&req).is_err());
    }

    #[test]
    fn test_time_overflow_rejected() {
        let scheduler = CpuScheduler::new();
        let procs = vec![
            Process::new(1, 0, i64::MAX).unwrap(),
            Process::new(2, 0, 1).unwrap(),
        ];
        for algorithm in Algorithm::all(i64::MAX) {
            let errors = scheduler.schedule(algorithm, &procs).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        }

        let errors = scheduler
            .run(&SimulationRequest::new(procs.clone()))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert!(scheduler.compare(&procs, 4).is_err());
    }

    #[test]
    fn test_run_matches_direct_calls() {
        let scheduler = CpuScheduler::new();
        let procs = workload::varying_load();
        let runs = scheduler
            .run(&SimulationRequest::new(procs.clone()).with_all_algorithms(3))
            .unwrap();
        for run in &runs {
            assert_eq!(run.result, scheduler.schedule(run.algorithm, &procs).unwrap());
        }
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let procs = vec![
            Process::new(1, 0, 3).unwrap(),
            Process::new(1, 2, 1).unwrap(),
        ];
        let errors = CpuScheduler::new().schedule_sjf(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePid);
    }

    #[test]
    fn test_rr_fairness_through_coordinator() {
        let procs = vec![
            Process::new(1, 0, 5).unwrap(),
            Process::new(2, 0, 5).unwrap(),
        ];
        let r = CpuScheduler::new().schedule_rr(&procs, 2).unwrap();
        assert_eq!(
            r.execution.intervals_for(2),
            &[Interval::new(2, 4), Interval::new(6, 8), Interval::new(9, 10)]
        );
    }

    #[test]
    fn test_run_serializes() {
        let runs = CpuScheduler::new()
            .run(&SimulationRequest::new(workload::sample()).with_algorithm(Algorithm::Fcfs))
            .unwrap();
        let json = serde_json::to_value(&runs[0]).unwrap();
        assert_eq!(json["algorithm"]["type"], "fcfs");
        assert_eq!(json["result"]["metrics"]["total_time"], 15);
        assert_eq!(json["result"]["execution"]["1"][0]["end"], 8);
    }
}
