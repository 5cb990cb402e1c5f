/*!
 * Monitoring
 * Structured logging for simulation runs
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing, SimulationSpan};
