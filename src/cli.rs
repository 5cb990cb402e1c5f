//! Command-line parser for the `sched-sim` binary.
//!
//! Hand-rolled (no clap dependency); the grammar is small.
//!
//! # Grammar
//!
//! ```text
//! sched-sim run <fcfs|sjf|rr> [--quantum N] [--format text|json] PID=BURST...
//! sched-sim list PID=BURST...
//! sched-sim --help | -h
//! ```

use crate::config::OutputFormat;
use crate::core::{ConfigError, SimError};
use crate::process::ProcessRegistry;
use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the binary
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("missing command")]
    #[diagnostic(code(cli::usage), help("Run `sched-sim --help` for usage."))]
    MissingCommand,

    #[error("unknown command '{0}'")]
    #[diagnostic(code(cli::usage), help("Expected 'run' or 'list'."))]
    UnknownCommand(String),

    #[error("'run' requires a policy")]
    #[diagnostic(code(cli::usage), help("Choose one of: fcfs, sjf, rr."))]
    MissingPolicy,

    #[error("flag '{0}' requires a value")]
    #[diagnostic(code(cli::usage))]
    MissingValue(&'static str),

    #[error("unknown flag '{0}'")]
    #[diagnostic(code(cli::usage), help("Run `sched-sim --help` for usage."))]
    UnknownFlag(String),

    #[error("invalid output format '{0}'")]
    #[diagnostic(code(cli::usage), help("Use 'text' or 'json'."))]
    InvalidFormat(String),

    #[error("invalid process '{0}'")]
    #[diagnostic(code(cli::usage), help("Processes are given as PID=BURST, e.g. P1=5."))]
    InvalidProcessSpec(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    #[diagnostic(code(cli::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Sim(_) | Self::Config(_) | Self::Serialize(_) => 1,
            _ => 2,
        }
    }
}

/// A process as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: String,
    pub burst: String,
}

impl ProcessSpec {
    /// Split `PID=BURST` at the last '='
    pub fn parse(arg: &str) -> Result<Self, CliError> {
        let (pid, burst) = arg
            .rsplit_once('=')
            .ok_or_else(|| CliError::InvalidProcessSpec(arg.to_string()))?;
        Ok(Self {
            pid: pid.to_string(),
            burst: burst.to_string(),
        })
    }
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List {
        processes: Vec<ProcessSpec>,
    },
    Run {
        policy: String,
        /// Raw text; validated only when the policy uses it
        quantum: Option<String>,
        format: Option<OutputFormat>,
        processes: Vec<ProcessSpec>,
    },
}

/// Parse `std::env::args()` (skipping the executable name)
pub fn parse_args() -> Result<Command, CliError> {
    parse_args_from(std::env::args().skip(1))
}

/// Parse an argument list that excludes the executable name
pub fn parse_args_from<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);

    let command = args.next().ok_or(CliError::MissingCommand)?;
    match command.as_str() {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "list" => {
            let mut processes = Vec::new();
            for arg in args {
                if arg == "--help" || arg == "-h" {
                    return Ok(Command::Help);
                }
                processes.push(ProcessSpec::parse(&arg)?);
            }
            Ok(Command::List { processes })
        }
        "run" => parse_run_args(args),
        _ => Err(CliError::UnknownCommand(command)),
    }
}

fn parse_run_args(mut args: impl Iterator<Item = String>) -> Result<Command, CliError> {
    let mut policy = None;
    let mut quantum = None;
    let mut format = None;
    let mut processes = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--quantum" | "-q" => {
                quantum = Some(args.next().ok_or(CliError::MissingValue("--quantum"))?);
            }
            "--format" | "-f" => {
                let value = args.next().ok_or(CliError::MissingValue("--format"))?;
                format = Some(
                    value
                        .parse::<OutputFormat>()
                        .map_err(|_| CliError::InvalidFormat(value.clone()))?,
                );
            }
            "--json" => format = Some(OutputFormat::Json),
            flag if flag.starts_with('-') && !flag.contains('=') => {
                return Err(CliError::UnknownFlag(arg));
            }
            _ if policy.is_none() => policy = Some(arg),
            _ => processes.push(ProcessSpec::parse(&arg)?),
        }
    }

    Ok(Command::Run {
        policy: policy.ok_or(CliError::MissingPolicy)?,
        quantum,
        format,
        processes,
    })
}

/// Register the command-line processes in order
pub fn build_registry(processes: &[ProcessSpec]) -> Result<ProcessRegistry, CliError> {
    let mut registry = ProcessRegistry::new();
    for spec in processes {
        registry.add_parsed(&spec.pid, &spec.burst)?;
    }
    Ok(registry)
}

/// Print usage to stdout
pub fn print_usage() {
    println!(
        "\
sched-sim - CPU scheduling simulator

USAGE:
    sched-sim run <POLICY> [OPTIONS] PID=BURST...
    sched-sim list PID=BURST...

POLICIES:
    fcfs    First-Come-First-Served
    sjf     Shortest-Job-First (non-preemptive)
    rr      Round Robin (preemptive, fixed quantum)

OPTIONS:
    -q, --quantum <N>      Round Robin time quantum (default: 2)
    -f, --format <FMT>     Output format: text | json
        --json             Shorthand for --format json
    -h, --help             Print this help

ENVIRONMENT:
    SCHED_SIM_DEFAULT_QUANTUM    Default Round Robin quantum
    SCHED_SIM_OUTPUT             Default output format
    SCHED_SIM_TRACE_JSON         Emit JSON logs on stderr
    RUST_LOG                     Log filter (default: info)"
    );
}
