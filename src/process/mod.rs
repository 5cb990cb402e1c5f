/*!
 * Process Module
 * Process registry and input validation
 */

pub mod registry;
pub mod shared;
pub mod types;
mod validation;

pub use registry::ProcessRegistry;
pub use shared::SharedRegistry;
pub use types::{Process, ProcessInfo};
