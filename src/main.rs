/*!
 * sched-sim - Main Entry Point
 *
 * Terminal front-end for the scheduling simulator:
 * - Parses processes and a policy from the command line
 * - Runs the simulation
 * - Prints a text or JSON report on stdout, logs on stderr
 */

use miette::Report;
use sched_sim::cli::{self, CliError, Command};
use sched_sim::config::{OutputFormat, SimConfig};
use sched_sim::engine::{list_processes, Simulator};
use sched_sim::report;
use sched_sim::scheduler::PolicySpec;
use sched_sim::{init_tracing, ProcessRegistry};
use tracing::{error, info};

fn main() {
    if let Err(err) = run() {
        let code = err.exit_code();
        error!(error = %err, "sched-sim failed");
        eprintln!("{:?}", Report::new(err));
        std::process::exit(code);
    }
}

fn run() -> Result<(), CliError> {
    let config = SimConfig::from_env()?;
    init_tracing(&config);

    match cli::parse_args()? {
        Command::Help => {
            cli::print_usage();
            Ok(())
        }
        Command::List { processes } => {
            let registry = cli::build_registry(&processes)?;
            print!("{}", report::format_process_list(&list_processes(&registry)));
            Ok(())
        }
        Command::Run {
            policy,
            quantum,
            format,
            processes,
        } => {
            let registry = cli::build_registry(&processes)?;
            let spec =
                PolicySpec::resolve(&policy, quantum.as_deref(), config.default_quantum)?;
            let output = format.unwrap_or(config.output);

            simulate(&Simulator::new(config), &registry, spec, output)
        }
    }
}

fn simulate(
    simulator: &Simulator,
    registry: &ProcessRegistry,
    spec: PolicySpec,
    output: OutputFormat,
) -> Result<(), CliError> {
    let report = simulator.run_policy(registry, spec)?;
    info!(
        policy = %report.policy,
        segments = report.timeline.len(),
        makespan = report.timeline.makespan(),
        "simulation complete"
    );

    match output {
        OutputFormat::Text => {
            print!("{}", report::render_text(&list_processes(registry), &report));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
