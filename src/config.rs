/*!
 * Simulator Configuration
 *
 * Runtime defaults, optionally overridden from the environment
 */

use crate::core::limits::{ENV_DEFAULT_QUANTUM, ENV_OUTPUT, ENV_TRACE_JSON};
use crate::core::ConfigError;
use crate::scheduler::TimeQuantum;
use std::str::FromStr;

/// How the CLI prints a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Process list, Gantt strip, results table and averages
    #[default]
    Text,
    /// The serialized report
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimConfig {
    /// Round-Robin quantum used when a run does not specify one
    pub default_quantum: TimeQuantum,
    /// Emit JSON logs instead of compact text
    pub trace_json: bool,
    pub output: OutputFormat,
}

impl SimConfig {
    /// Defaults overlaid with `SCHED_SIM_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_QUANTUM) {
            config.default_quantum = raw.parse::<TimeQuantum>()?;
        }

        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: ENV_TRACE_JSON,
                value: raw,
            })?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_OUTPUT,
                value: raw,
            })?;
        }

        Ok(config)
    }

    pub fn with_default_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.default_quantum = quantum;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
