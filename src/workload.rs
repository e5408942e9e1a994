//! Preset and generated process sets.
//!
//! Convenience inputs for demos and tests. None of these are required by
//! the schedulers themselves.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process};

/// Builds a process from values known to be valid.
fn preset(pid: Pid, arrival: i64, burst: i64, priority: i32) -> Process {
    Process {
        pid,
        arrival_time: arrival,
        burst_time: burst,
        priority,
        remaining_time: burst,
        wait_time: 0,
        turnaround_time: 0,
        completion_time: 0,
    }
}

/// Classic four-process textbook sample.
///
/// | PID | Arrival | Burst | Priority |
/// |-----|---------|-------|----------|
/// | 1 | 0 | 8 | 2 |
/// | 2 | 1 | 4 | 1 |
/// | 3 | 2 | 2 | 3 |
/// | 4 | 3 | 1 | 2 |
pub fn sample() -> Vec<Process> {
    vec![
        preset(1, 0, 8, 2),
        preset(2, 1, 4, 1),
        preset(3, 2, 2, 3),
        preset(4, 3, 1, 2),
    ]
}

/// Three identical jobs arriving together.
pub fn equal_bursts() -> Vec<Process> {
    (1..=3).map(|pid| preset(pid, 0, 5, 1)).collect()
}

/// Staggered arrivals with mixed burst lengths.
pub fn varying_load() -> Vec<Process> {
    vec![
        preset(1, 0, 10, 2),
        preset(2, 1, 2, 1),
        preset(3, 3, 8, 3),
        preset(4, 5, 4, 1),
    ]
}

/// Parameters for [`random`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWorkload {
    /// Number of processes (pids 1..=count), capped at `Pid::MAX`.
    pub count: usize,
    /// Arrivals drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Priorities drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 10,
        }
    }
}

impl RandomWorkload {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }
}

/// Generates a random valid process set.
///
/// Out-of-range bounds are clamped (arrival ≥ 0, burst ≥ 1, priority ≥ 0).
/// A count above `Pid::MAX` yields `Pid::MAX` processes so pids stay unique.
///
/// # Example
/// ```
/// use cpu_sched::workload::{random, RandomWorkload};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let procs = random(&mut rng, &RandomWorkload::default().with_count(3));
/// assert_eq!(procs.len(), 3);
/// assert!(procs.iter().all(|p| p.burst_time >= 1));
/// ```
pub fn random<R: Rng>(rng: &mut R, config: &RandomWorkload) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let max_burst = config.max_burst.max(1);
    let max_priority = config.max_priority.max(0);
    let count = pid_count(config.count);

    (1..=count)
        .map(|pid| {
            preset(
                pid,
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
                rng.random_range(0..=max_priority),
            )
        })
        .collect()
}

fn pid_count(count: usize) -> Pid {
    Pid::try_from(count).unwrap_or(Pid::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_presets_valid() {
        assert!(validate_processes(&sample()).is_ok());
        assert!(validate_processes(&equal_bursts()).is_ok());
        assert!(validate_processes(&varying_load()).is_ok());
    }

    #[test]
    fn test_presets_match_constructor() {
        let built = Process::new(2, 1, 4).unwrap().with_priority(1);
        assert_eq!(sample()[1], built);
    }

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = SmallRng::seed_from_u64(99);
        let config = RandomWorkload::default()
            .with_count(20)
            .with_max_arrival(3)
            .with_max_burst(2);
        let procs = random(&mut rng, &config);

        assert_eq!(procs.len(), 20);
        assert!(validate_processes(&procs).is_ok());
        for p in &procs {
            assert!((0..=3).contains(&p.arrival_time));
            assert!((1..=2).contains(&p.burst_time));
            assert!((0..=10).contains(&p.priority));
            assert_eq!(p.remaining_time, p.burst_time);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let config = RandomWorkload::default();
        let a = random(&mut SmallRng::seed_from_u64(5), &config);
        let b = random(&mut SmallRng::seed_from_u64(5), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pid_count_saturates() {
        assert_eq!(pid_count(0), 0);
        assert_eq!(pid_count(7), 7);
        assert_eq!(pid_count(Pid::MAX as usize), Pid::MAX);
        assert_eq!(pid_count(usize::MAX), Pid::MAX);
    }

    #[test]
    fn test_random_zero_count() {
        let config = RandomWorkload::default().with_count(0);
        assert!(random(&mut SmallRng::seed_from_u64(3), &config).is_empty());
    }

    #[test]
    fn test_random_clamps_bounds() {
        let config = RandomWorkload {
            count: 4,
            max_arrival: -5,
            max_burst: 0,
            max_priority: -1,
        };
        let procs = random(&mut SmallRng::seed_from_u64(0), &config);
        assert!(procs
            .iter()
            .all(|p| p.arrival_time == 0 && p.burst_time == 1 && p.priority == 0));
    }
}
