/*!
 * Metrics Calculator
 * Per-process completion, turnaround and waiting times plus averages
 */

use crate::core::limits::AVERAGE_PRECISION;
use crate::core::types::Ticks;
use crate::core::{ProcessId, SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Metrics for one finished process
///
/// The simulated clock starts at 0 and every process arrives at 0, so
/// turnaround equals completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResultRow {
    pub pid: ProcessId,
    pub burst: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

impl ResultRow {
    /// Derive a row from the moment the process finished
    pub fn new(pid: ProcessId, burst: Ticks, completion: Ticks) -> Self {
        debug_assert!(completion >= burst, "{} completed before its burst", pid);
        let turnaround = completion;
        Self {
            pid,
            burst,
            completion,
            turnaround,
            waiting: turnaround - burst,
        }
    }
}

/// Aggregate metrics over a result set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsSummary {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl MetricsSummary {
    /// Average the rows; fails on an empty set
    pub fn from_rows(rows: &[ResultRow]) -> SimResult<Self> {
        if rows.is_empty() {
            return Err(SimError::EmptyRegistry);
        }

        // Per-row values fit in Ticks but their sum may not
        let n = rows.len() as f64;
        let total_waiting: u128 = rows.iter().map(|r| u128::from(r.waiting)).sum();
        let total_turnaround: u128 = rows.iter().map(|r| u128::from(r.turnaround)).sum();

        Ok(Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
        })
    }

    #[inline]
    pub fn rounded_waiting(&self) -> f64 {
        round_to(self.avg_waiting, AVERAGE_PRECISION)
    }

    #[inline]
    pub fn rounded_turnaround(&self) -> f64 {
        round_to(self.avg_turnaround, AVERAGE_PRECISION)
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Sort rows by pid, keeping execution order among equal pids
pub fn sort_by_pid(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| a.pid.cmp(&b.pid));
}
