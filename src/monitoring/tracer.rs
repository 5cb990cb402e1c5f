/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 *
 * Features:
 * - Run ID generation for log correlation
 * - JSON-formatted logs for structured parsing
 * - Duration and outcome recorded when a run finishes
 */

use crate::config::SimConfig;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing on stderr
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_SIM_TRACE_JSON: Enable JSON output (read into `SimConfig`)
///
/// Returns false when a global subscriber was already installed.
pub fn init_tracing(config: &SimConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.trace_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        debug!(json = config.trace_json, "structured tracing initialized");
    }
    installed
}

/// Generate a unique ID for correlating the logs of one run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    policy: &'static str,
    run_id: String,
}

impl SimulationSpan {
    pub fn new(policy: &'static str, processes: usize) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            policy = policy,
            processes = processes,
            quantum = tracing::field::Empty,
            segments = tracing::field::Empty,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            policy,
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_quantum(&self, quantum: u64) {
        self.span.record("quantum", quantum);
    }

    /// Record a completed run
    pub fn record_success(&self, segments: usize) {
        self.span.record("segments", segments);
        self.span.record("result", "success");
    }

    /// Record a rejected run
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > 100 {
            warn!(
                run_id = %self.run_id,
                policy = self.policy,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow simulation run"
            );
        } else {
            info!(
                run_id = %self.run_id,
                policy = self.policy,
                duration_us = duration.as_micros() as u64,
                "simulation finished"
            );
        }
    }
}
