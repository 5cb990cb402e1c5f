/*!
 * Process Types
 * Input entities fed into the scheduling policies
 */

use crate::core::types::{ArrivalOrder, Ticks};
use crate::core::ProcessId;
use serde::{Deserialize, Serialize};

/// A process as registered by the caller
///
/// Every process is considered present at time 0. `arrival_order` is the
/// registry insertion index and only ever acts as a tie-breaking sort key,
/// never as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: ProcessId,
    pub arrival_order: ArrivalOrder,
    pub burst: Ticks,
}

impl Process {
    /// Lightweight view used for listings
    pub fn info(&self) -> ProcessInfo {
        ProcessInfo {
            pid: self.pid.clone(),
            burst: self.burst,
        }
    }
}

/// Process listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: ProcessId,
    pub burst: Ticks,
}
