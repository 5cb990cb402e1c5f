/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated clock value and CPU time, in abstract ticks
pub type Ticks = u64;

/// Insertion index of a process within its registry
pub type ArrivalOrder = usize;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
