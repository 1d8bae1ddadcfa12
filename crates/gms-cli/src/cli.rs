use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use gms_core::AvailabilityPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Power plant maintenance scheduler", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Optional TOML file providing run defaults
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the maintenance schedule for a forecast input
    Solve {
        /// CSV series directory or .xlsx workbook
        #[arg(value_hint = ValueHint::AnyPath)]
        input: PathBuf,
        /// Engineer availability policy to solve under
        #[arg(long, value_enum, default_value_t = PolicyArg::Unrestricted)]
        policy: PolicyArg,
        /// MILP backend name (see `--help` of the build for available ones)
        #[arg(long)]
        solver: Option<String>,
        /// Write the solved schedule as JSON to this path
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        /// Print a per-day production/price/outage table
        #[arg(long)]
        show_days: bool,
    },
    /// Validate a forecast input without solving
    Validate {
        /// CSV series directory or .xlsx workbook
        #[arg(value_hint = ValueHint::AnyPath)]
        input: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Availability policy selection, including the run-both mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// External personnel hired, any start day
    Unrestricted,
    /// Plant engineers only, start days 300-365
    Restricted,
    /// Solve and report both policies
    Both,
}

impl PolicyArg {
    /// Policies to solve, in reporting order.
    pub fn policies(&self) -> &'static [AvailabilityPolicy] {
        match self {
            PolicyArg::Unrestricted => &[AvailabilityPolicy::Unrestricted],
            PolicyArg::Restricted => &[AvailabilityPolicy::EngineerWindow],
            PolicyArg::Both => &[
                AvailabilityPolicy::Unrestricted,
                AvailabilityPolicy::EngineerWindow,
            ],
        }
    }
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_solve_defaults() {
        let cli = Cli::try_parse_from(["gms", "solve", "forecasts"]).unwrap();
        match cli.command {
            Commands::Solve {
                policy,
                solver,
                out,
                show_days,
                ..
            } => {
                assert_eq!(policy, PolicyArg::Unrestricted);
                assert!(solver.is_none());
                assert!(out.is_none());
                assert!(!show_days);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_policy_both_expands_in_order() {
        assert_eq!(
            PolicyArg::Both.policies(),
            &[
                AvailabilityPolicy::Unrestricted,
                AvailabilityPolicy::EngineerWindow
            ]
        );
        assert_eq!(
            PolicyArg::Restricted.policies(),
            &[AvailabilityPolicy::EngineerWindow]
        );
    }

    #[test]
    fn test_cli_command_builds() {
        build_cli_command().debug_assert();
    }
}
