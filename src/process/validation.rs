/*!
 * Process Input Validation
 * Checks applied before a process enters the registry
 */

use crate::core::types::Ticks;
use crate::core::{SimError, SimResult};

/// Validate a burst time
pub(super) fn validate_burst(burst: Ticks) -> SimResult<Ticks> {
    if burst == 0 {
        return Err(SimError::InvalidProcess(
            "burst time must be a positive integer".to_string(),
        ));
    }
    Ok(burst)
}

/// Parse a burst time entered as text
///
/// Negative numbers, zero, decimals and anything else that is not a
/// positive integer are rejected.
pub(super) fn parse_burst(text: &str) -> SimResult<Ticks> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        SimError::InvalidProcess(format!("burst time '{}' is not an integer", trimmed))
    })?;

    if value <= 0 {
        return Err(SimError::InvalidProcess(format!(
            "burst time {} must be positive",
            value
        )));
    }

    validate_burst(value as Ticks)
}
