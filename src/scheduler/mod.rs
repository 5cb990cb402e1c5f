/*!
 * Scheduler Module
 * Single-CPU scheduling policies
 */

mod entry;
pub mod fcfs;
pub mod round_robin;
mod sequential;
pub mod sjf;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use traits::{Schedule, SchedulingAlgorithm};
pub use types::{Policy, PolicySpec, TimeQuantum};

/// Build the algorithm for a policy selection
pub fn algorithm_for(spec: PolicySpec) -> Box<dyn SchedulingAlgorithm + Send + Sync> {
    match spec {
        PolicySpec::Fcfs => Box::new(Fcfs),
        PolicySpec::Sjf => Box::new(Sjf),
        PolicySpec::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
    }
}
