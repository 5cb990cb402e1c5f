/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults and display constants.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING DEFAULTS
// =============================================================================

/// Round-Robin quantum used when the caller does not supply one
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Upper bound on timeline segments reserved before a run starts
pub const MAX_PREALLOCATED_SEGMENTS: usize = 1 << 16;

// =============================================================================
// DISPLAY
// =============================================================================

/// Decimal places kept when averages are shown
pub const AVERAGE_PRECISION: i32 = 2;

/// Column width of the pid in the process list
pub const PID_COLUMN_WIDTH: usize = 10;

/// Column width of the burst in the process list
pub const BURST_COLUMN_WIDTH: usize = 3;

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_DEFAULT_QUANTUM: &str = "SCHED_SIM_DEFAULT_QUANTUM";
pub const ENV_TRACE_JSON: &str = "SCHED_SIM_TRACE_JSON";
pub const ENV_OUTPUT: &str = "SCHED_SIM_OUTPUT";
