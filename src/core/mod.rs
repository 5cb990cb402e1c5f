/*!
 * Core Module
 * Fundamental simulator types and error handling
 */

pub mod errors;
pub mod limits;
pub mod pid;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use pid::ProcessId;
pub use types::*;
