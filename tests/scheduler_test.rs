/*!
 * Scheduler Tests
 * End-to-end scenarios for FCFS, SJF and Round-Robin
 */

use pretty_assertions::assert_eq;
use sched_sim::{ProcessRegistry, SimError, SimulationReport, Simulator};

fn registry(processes: &[(&str, u64)]) -> ProcessRegistry {
    let mut registry = ProcessRegistry::new();
    for (pid, burst) in processes {
        registry.add(pid, *burst).unwrap();
    }
    registry
}

fn spans(report: &SimulationReport) -> Vec<(String, u64, u64)> {
    report
        .timeline
        .iter()
        .map(|s| (s.pid.to_string(), s.start, s.end))
        .collect()
}

fn span(pid: &str, start: u64, end: u64) -> (String, u64, u64) {
    (pid.to_string(), start, end)
}

fn waiting(report: &SimulationReport) -> Vec<(String, u64)> {
    report
        .results
        .iter()
        .map(|r| (r.pid.to_string(), r.waiting))
        .collect()
}

#[test]
fn test_fcfs_scenario() {
    let reg = registry(&[("A", 5), ("B", 3), ("C", 8)]);
    let report = Simulator::default().run(&reg, "FCFS", None).unwrap();

    assert_eq!(
        spans(&report),
        vec![span("A", 0, 5), span("B", 5, 8), span("C", 8, 16)]
    );
    assert_eq!(
        waiting(&report),
        vec![("A".into(), 0), ("B".into(), 5), ("C".into(), 8)]
    );
    assert_eq!(report.summary().rounded_waiting(), 4.33);
}

#[test]
fn test_sjf_scenario() {
    let reg = registry(&[("A", 5), ("B", 3), ("C", 8)]);
    let report = Simulator::default().run(&reg, "SJF", None).unwrap();

    assert_eq!(
        spans(&report),
        vec![span("B", 0, 3), span("A", 3, 8), span("C", 8, 16)]
    );
    // Rows stay in execution order
    assert_eq!(
        waiting(&report),
        vec![("B".into(), 0), ("A".into(), 3), ("C".into(), 8)]
    );
    assert_eq!(report.summary().rounded_waiting(), 3.67);
}

#[test]
fn test_round_robin_scenario() {
    let reg = registry(&[("A", 5), ("B", 3)]);
    let report = Simulator::default().run(&reg, "Round Robin", Some(2)).unwrap();

    assert_eq!(
        spans(&report),
        vec![
            span("A", 0, 2),
            span("B", 2, 4),
            span("A", 4, 6),
            span("B", 6, 7),
            span("A", 7, 8),
        ]
    );

    let completions: Vec<(String, u64)> = report
        .results
        .iter()
        .map(|r| (r.pid.to_string(), r.completion))
        .collect();
    assert_eq!(completions, vec![("A".into(), 8), ("B".into(), 7)]);
    assert_eq!(waiting(&report), vec![("A".into(), 3), ("B".into(), 4)]);
}

#[test]
fn test_fcfs_and_round_robin_sort_rows_by_pid() {
    let reg = registry(&[("C", 2), ("A", 4), ("B", 1)]);
    let sim = Simulator::default();

    for (policy, quantum) in [("fcfs", None), ("rr", Some(1))] {
        let report = sim.run(&reg, policy, quantum).unwrap();
        let pids: Vec<String> = report.results.iter().map(|r| r.pid.to_string()).collect();
        assert_eq!(pids, vec!["A", "B", "C"], "policy {}", policy);
    }

    let sjf = sim.run(&reg, "sjf", None).unwrap();
    let pids: Vec<String> = sjf.results.iter().map(|r| r.pid.to_string()).collect();
    assert_eq!(pids, vec!["B", "C", "A"]);
}

#[test]
fn test_sjf_tie_break_by_pid() {
    let reg = registry(&[("P3", 4), ("P1", 4), ("P2", 4)]);
    let report = Simulator::default().run(&reg, "sjf", None).unwrap();
    let order: Vec<String> = report.timeline.iter().map(|s| s.pid.to_string()).collect();
    assert_eq!(order, vec!["P1", "P2", "P3"]);
}

#[test]
fn test_single_process() {
    let reg = registry(&[("only", 7)]);
    for policy in ["fcfs", "sjf", "rr"] {
        let report = Simulator::default().run(&reg, policy, Some(3)).unwrap();
        assert_eq!(report.results[0].completion, 7);
        assert_eq!(report.results[0].waiting, 0);
        assert_eq!(report.avg_waiting, 0.0);
        assert_eq!(report.avg_turnaround, 7.0);
    }
}

#[test]
fn test_engine_usable_after_errors() {
    let sim = Simulator::default();
    let mut reg = ProcessRegistry::new();

    assert_eq!(sim.run(&reg, "fcfs", None), Err(SimError::EmptyRegistry));
    assert!(reg.add("", 3).is_err());
    assert!(reg.add("A", 0).is_err());

    reg.add("A", 3).unwrap();
    assert!(sim.run(&reg, "rr", Some(0)).is_err());
    assert!(sim.run(&reg, "mlfq", None).is_err());
    assert!(sim.run(&reg, "rr", Some(1)).is_ok());
}

#[test]
fn test_rerun_after_clear_and_refill() {
    let sim = Simulator::default();
    let mut reg = registry(&[("A", 5), ("B", 3)]);
    let first = sim.run(&reg, "rr", Some(2)).unwrap();

    reg.clear();
    reg.add("A", 5).unwrap();
    reg.add("B", 3).unwrap();
    let second = sim.run(&reg, "rr", Some(2)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_bursts_overflowing_the_clock_are_rejected() {
    let max = i64::MAX.to_string();
    let mut reg = ProcessRegistry::new();
    reg.add_parsed("A", &max).unwrap();
    reg.add_parsed("B", &max).unwrap();

    assert!(matches!(
        reg.add_parsed("C", "5"),
        Err(SimError::InvalidProcess(_))
    ));

    let report = Simulator::default().run(&reg, "sjf", None).unwrap();
    assert_eq!(report.timeline.makespan(), u64::MAX - 1);
    assert_eq!(
        spans(&report),
        vec![
            span("A", 0, i64::MAX as u64),
            span("B", i64::MAX as u64, u64::MAX - 1)
        ]
    );
}

#[test]
fn test_averages_over_huge_bursts() {
    let big = 1u64 << 62;
    let reg = registry(&[("A", big), ("B", big), ("C", big)]);
    let report = Simulator::default().run(&reg, "fcfs", None).unwrap();

    assert_eq!(report.timeline.makespan(), 3 * big);
    assert_eq!(report.avg_turnaround, 2.0 * big as f64);
    assert_eq!(report.avg_waiting, big as f64);
}
