/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
///
/// Every variant is a validation failure detected before a run starts.
/// A running simulation cannot fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("No processes to schedule")]
    #[diagnostic(
        code(sim::empty_registry),
        help("Add at least one process before running a simulation.")
    )]
    EmptyRegistry,

    #[error("Invalid process: {0}")]
    #[diagnostic(
        code(sim::invalid_process),
        help("A process needs a non-empty id and a positive integer burst time.")
    )]
    InvalidProcess(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(sim::invalid_quantum),
        help("Round Robin needs a positive integer time quantum.")
    )]
    InvalidQuantum(String),

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(sim::unknown_policy),
        help("Use one of: fcfs, sjf, round_robin (rr).")
    )]
    UnknownPolicy(String),
}

/// Configuration errors raised while reading the environment
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Unset the variable or give it a supported value.")
    )]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid default quantum: {0}")]
    #[diagnostic(code(config::invalid_quantum))]
    Quantum(#[from] SimError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization_is_tagged() {
        let err = SimError::InvalidQuantum("0".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error_type":"invalid_quantum","details":"0"}"#);

        let back: SimError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&SimError::EmptyRegistry).unwrap();
        assert_eq!(json, r#"{"error_type":"empty_registry"}"#);
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = SimError::UnknownPolicy("lottery".into())
            .code()
            .map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sim::unknown_policy"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SimError::UnknownPolicy("lottery".into()).to_string(),
            "Unknown scheduling policy 'lottery'"
        );
        assert_eq!(
            SimError::InvalidProcess("burst must be positive".into()).to_string(),
            "Invalid process: burst must be positive"
        );
    }
}
