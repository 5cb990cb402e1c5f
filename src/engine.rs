/*!
 * Simulation Engine
 * Validates a request, runs a policy on a registry snapshot and derives metrics
 */

use crate::config::SimConfig;
use crate::core::{SimError, SimResult};
use crate::metrics::{MetricsSummary, ResultRow};
use crate::monitoring::SimulationSpan;
use crate::process::{ProcessInfo, ProcessRegistry, SharedRegistry};
use crate::scheduler::{algorithm_for, Policy, PolicySpec, TimeQuantum};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quantum: Option<TimeQuantum>,
    pub timeline: Timeline,
    pub results: Vec<ResultRow>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl SimulationReport {
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            avg_waiting: self.avg_waiting,
            avg_turnaround: self.avg_turnaround,
        }
    }
}

/// Pid and burst of every registered process
pub fn list_processes(registry: &ProcessRegistry) -> Vec<ProcessInfo> {
    registry.list()
}

/// Stateless simulation entry point
///
/// Holds configuration only; every run reads a fresh snapshot of the
/// registry it is given, so runs never influence each other.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run a policy selected by name
    ///
    /// `quantum` only matters for Round-Robin and is ignored (not
    /// validated) for the other policies. Round-Robin without a quantum
    /// uses the configured default.
    pub fn run(
        &self,
        registry: &ProcessRegistry,
        policy: &str,
        quantum: Option<i64>,
    ) -> SimResult<SimulationReport> {
        let spec = PolicySpec::resolve(policy, quantum, self.config.default_quantum)?;
        self.run_policy(registry, spec)
    }

    /// Run an already validated policy selection
    pub fn run_policy(
        &self,
        registry: &ProcessRegistry,
        spec: PolicySpec,
    ) -> SimResult<SimulationReport> {
        let policy = spec.policy();
        let span = SimulationSpan::new(policy.as_str(), registry.len());
        let _entered = span.enter();
        if let Some(quantum) = spec.quantum() {
            span.record_quantum(quantum.ticks());
        }

        if registry.is_empty() {
            span.record_error("empty registry");
            return Err(SimError::EmptyRegistry);
        }

        let snapshot = registry.snapshot();
        debug!(processes = snapshot.len(), "running {} on snapshot", policy);

        let schedule = algorithm_for(spec).schedule(snapshot);
        let summary = MetricsSummary::from_rows(&schedule.results)?;
        span.record_success(schedule.timeline.len());

        Ok(SimulationReport {
            policy,
            quantum: spec.quantum(),
            timeline: schedule.timeline,
            results: schedule.results,
            avg_waiting: summary.avg_waiting,
            avg_turnaround: summary.avg_turnaround,
        })
    }

    /// Run against a shared registry using one atomic snapshot
    pub fn run_shared(
        &self,
        registry: &SharedRegistry,
        spec: PolicySpec,
    ) -> SimResult<SimulationReport> {
        let snapshot = registry.snapshot();
        self.run_policy(&snapshot, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(processes: &[(&str, u64)]) -> ProcessRegistry {
        let mut registry = ProcessRegistry::new();
        for (pid, burst) in processes {
            registry.add(pid, *burst).unwrap();
        }
        registry
    }

    #[test]
    fn test_empty_registry_rejected() {
        let sim = Simulator::default();
        assert_eq!(
            sim.run(&ProcessRegistry::new(), "fcfs", None),
            Err(SimError::EmptyRegistry)
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let sim = Simulator::default();
        let reg = registry(&[("A", 1)]);
        assert_eq!(
            sim.run(&reg, "priority", None),
            Err(SimError::UnknownPolicy("priority".into()))
        );
    }

    #[test]
    fn test_quantum_validated_only_for_round_robin() {
        let sim = Simulator::default();
        let reg = registry(&[("A", 1)]);

        assert!(matches!(
            sim.run(&reg, "rr", Some(0)),
            Err(SimError::InvalidQuantum(_))
        ));
        assert!(matches!(
            sim.run(&reg, "rr", Some(-4)),
            Err(SimError::InvalidQuantum(_))
        ));
        let report = sim.run(&reg, "fcfs", Some(0)).unwrap();
        assert_eq!(report.quantum, None);
    }

    #[test]
    fn test_round_robin_uses_default_quantum() {
        let sim = Simulator::default();
        let reg = registry(&[("A", 5), ("B", 3)]);
        let report = sim.run(&reg, "round_robin", None).unwrap();
        assert_eq!(report.quantum.map(|q| q.ticks()), Some(2));
        assert_eq!(report.timeline.len(), 5);
    }

    #[test]
    fn test_registry_untouched_by_run() {
        let sim = Simulator::default();
        let reg = registry(&[("A", 5), ("B", 3)]);
        let before = reg.snapshot();
        sim.run(&reg, "rr", Some(1)).unwrap();
        assert_eq!(reg.snapshot(), before);
    }

    #[test]
    fn test_list_processes() {
        let reg = registry(&[("A", 5), ("B", 3)]);
        let listed: Vec<(String, u64)> = list_processes(&reg)
            .into_iter()
            .map(|p| (p.pid.into(), p.burst))
            .collect();
        assert_eq!(listed, vec![("A".into(), 5), ("B".into(), 3)]);
    }
}
