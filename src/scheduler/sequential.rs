/*!
 * Non-Preemptive Execution
 * Runs processes back to back in a fixed order
 */

use super::traits::Schedule;
use crate::core::types::Ticks;
use crate::metrics::ResultRow;
use crate::process::Process;
use crate::timeline::Timeline;
use tracing::trace;

/// Execute `ordered` one after another, each for its full burst
///
/// Produces one segment per process; rows come out in execution order.
/// The clock saturates instead of wrapping; registries keep the total
/// burst within [`Ticks`](crate::core::Ticks) so it never does.
pub(super) fn run_to_completion(ordered: Vec<Process>) -> Schedule {
    let mut timeline = Timeline::with_capacity(ordered.len());
    let mut results = Vec::with_capacity(ordered.len());
    let mut clock: Ticks = 0;

    for process in ordered {
        let start = clock;
        clock = clock.saturating_add(process.burst);
        trace!(pid = %process.pid, start, end = clock, "dispatch");

        timeline.record(process.pid.clone(), start, clock);
        results.push(ResultRow::new(process.pid, process.burst, clock));
    }

    Schedule { timeline, results }
}
