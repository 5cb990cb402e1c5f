/*!
 * sched-sim Library
 * Deterministic simulation of single-CPU scheduling policies
 *
 * Processes are registered in a caller-owned [`ProcessRegistry`]; a
 * [`Simulator`] runs FCFS, SJF or Round-Robin on a snapshot of it and
 * returns the execution timeline together with per-process metrics.
 * Every process is treated as arriving at time 0.
 */

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod timeline;

// Re-exports
pub use config::{OutputFormat, SimConfig};
pub use crate::core::{ProcessId, SimError, SimResult, Ticks};
pub use engine::{list_processes, SimulationReport, Simulator};
pub use metrics::{MetricsSummary, ResultRow};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessInfo, ProcessRegistry, SharedRegistry};
pub use scheduler::{Policy, PolicySpec, SchedulingAlgorithm, TimeQuantum};
pub use timeline::{Segment, Timeline};
