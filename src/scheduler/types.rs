/*!
 * Scheduler Types
 * Policy names, time quantum and typed policy selection
 */

use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::Ticks;
use crate::core::{SimError, SimResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported scheduling policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive
    Fcfs,
    /// Shortest-Job-First, non-preemptive, ordered once up front
    Sjf,
    /// Round-robin with fixed time quantum
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::RoundRobin];

    /// Canonical machine-readable name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Name shown in chart titles
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "Round Robin",
        }
    }

    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownPolicy(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time slice, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub fn new(ticks: Ticks) -> Result<Self, SimError> {
        if ticks == 0 {
            return Err(SimError::InvalidQuantum(
                "quantum must be a positive integer".to_string(),
            ));
        }
        Ok(Self(ticks))
    }

    /// Validate a signed value as handed over by an input boundary
    pub fn from_signed(value: i64) -> Result<Self, SimError> {
        if value <= 0 {
            return Err(SimError::InvalidQuantum(format!(
                "quantum {} must be positive",
                value
            )));
        }
        Self::new(value as Ticks)
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl FromStr for TimeQuantum {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            SimError::InvalidQuantum(format!("'{}' is not an integer", trimmed))
        })?;
        Self::from_signed(value)
    }
}

impl TryFrom<i64> for TimeQuantum {
    type Error = SimError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value)
    }
}

impl TryFrom<&str> for TimeQuantum {
    type Error = SimError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::from_signed(value).map_err(serde::de::Error::custom)
    }
}

/// A policy together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicySpec {
    Fcfs,
    Sjf,
    RoundRobin { quantum: TimeQuantum },
}

impl PolicySpec {
    /// Combine a policy with an optional quantum
    ///
    /// The quantum is ignored by non-preemptive policies; Round-Robin
    /// falls back to `default_quantum` when none is given.
    pub fn new(
        policy: Policy,
        quantum: Option<TimeQuantum>,
        default_quantum: TimeQuantum,
    ) -> Self {
        match policy {
            Policy::Fcfs => Self::Fcfs,
            Policy::Sjf => Self::Sjf,
            Policy::RoundRobin => Self::RoundRobin {
                quantum: quantum.unwrap_or(default_quantum),
            },
        }
    }

    /// Resolve a policy name and an unvalidated quantum
    ///
    /// The quantum is only validated for Round-Robin; other policies
    /// ignore it, whatever its value.
    pub fn resolve<Q>(
        policy: &str,
        quantum: Option<Q>,
        default_quantum: TimeQuantum,
    ) -> SimResult<Self>
    where
        Q: TryInto<TimeQuantum, Error = SimError>,
    {
        let policy: Policy = policy.parse()?;
        let quantum = match (policy.needs_quantum(), quantum) {
            (true, Some(raw)) => Some(raw.try_into()?),
            _ => None,
        };
        Ok(Self::new(policy, quantum, default_quantum))
    }

    pub const fn policy(&self) -> Policy {
        match self {
            Self::Fcfs => Policy::Fcfs,
            Self::Sjf => Policy::Sjf,
            Self::RoundRobin { .. } => Policy::RoundRobin,
        }
    }

    pub const fn quantum(&self) -> Option<TimeQuantum> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}
