//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use super::{Fcfs, Priority, RoundRobin, SchedulingAlgorithm, Sjf};
use crate::models::Process;
use crate::validation::ValidationError;

/// Round Robin quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 4;

/// Which scheduling discipline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin { quantum: i64 },
    /// Priority (lower value first).
    Priority,
}

impl Algorithm {
    /// All four disciplines in display order.
    pub fn all(quantum: i64) -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum },
            Algorithm::Priority,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin { .. } => "Round Robin",
            Algorithm::Priority => "Priority",
        }
    }

    /// Instantiates the algorithm.
    ///
    /// # Errors
    /// Fails for a Round Robin quantum of zero or below.
    pub fn build(&self) -> Result<Box<dyn SchedulingAlgorithm>, ValidationError> {
        let algorithm: Box<dyn SchedulingAlgorithm> = match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf::new()),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
            Algorithm::Priority => Box::new(Priority::new()),
        };
        Ok(algorithm)
    }
}

/// Input container for a simulation run.
///
/// With no algorithms listed, all four run with [`DEFAULT_QUANTUM`].
///
/// # Example
/// ```
/// use cpu_sched::scheduler::{Algorithm, SimulationRequest};
/// use cpu_sched::workload;
///
/// let request = SimulationRequest::new(workload::sample())
///     .with_algorithm(Algorithm::Sjf)
///     .with_algorithm(Algorithm::RoundRobin { quantum: 2 });
/// assert_eq!(request.effective_algorithms().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Algorithms to run, in order.
    #[serde(default)]
    pub algorithms: Vec<Algorithm>,
}

impl SimulationRequest {
    /// Creates a request with no algorithms selected.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithms: Vec::new(),
        }
    }

    /// Adds an algorithm to run.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Selects all four algorithms.
    pub fn with_all_algorithms(mut self, quantum: i64) -> Self {
        self.algorithms = Algorithm::all(quantum);
        self
    }

    /// Algorithms that will actually run.
    pub fn effective_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::all(DEFAULT_QUANTUM)
        } else {
            self.algorithms.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_algorithm_names() {
        let names: Vec<&str> = Algorithm::all(2).iter().map(Algorithm::name).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Round Robin", "Priority"]);
    }

    #[test]
    fn test_build_matches_name() {
        for algo in Algorithm::all(3) {
            assert_eq!(algo.build().unwrap().name(), algo.name());
        }
    }

    #[test]
    fn test_build_invalid_quantum() {
        let err = Algorithm::RoundRobin { quantum: 0 }.build().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_request_defaults_to_all() {
        let req = SimulationRequest::new(vec![]);
        assert_eq!(req.effective_algorithms(), Algorithm::all(DEFAULT_QUANTUM));

        let req = req.with_all_algorithms(7);
        assert_eq!(req.algorithms[2], Algorithm::RoundRobin { quantum: 7 });
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"pid": 1, "arrival_time": 0, "burst_time": 5, "priority": 2},
                {"pid": 2, "arrival_time": 1, "burst_time": 3}
            ],
            "algorithms": [{"type": "fcfs"}, {"type": "round_robin", "quantum": 2}]
        }"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.processes.len(), 2);
        assert_eq!(req.processes[0].priority, 2);
        assert_eq!(
            req.algorithms,
            vec![Algorithm::Fcfs, Algorithm::RoundRobin { quantum: 2 }]
        );
    }

    #[test]
    fn test_request_json_rejects_bad_process() {
        let json = r#"{"processes": [{"pid": 1, "arrival_time": -1, "burst_time": 5}]}"#;
        assert!(serde_json::from_str::<SimulationRequest>(json).is_err());
    }
}
