use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_complete::{generate, Shell};
use gms_algo::{
    solve_schedule, MilpSolverKind, ScheduleProblem, ScheduleSolution, ScheduleSolverConfig,
    ScheduleStatus,
};
use gms_cli::{build_cli_command, Cli, Commands, PolicyArg, RunConfig};
use gms_core::{AvailabilityPolicy, DailySeries};
use gms_io::{load_forecasts, write_report, ScheduleReport};
use tabwriter::TabWriter;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = run(&cli);
    if let Err(e) = result {
        error!("Command failed: {e:?}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    match &cli.command {
        Commands::Solve {
            input,
            policy,
            solver,
            out,
            show_days,
        } => handle_solve(input, *policy, solver.as_deref(), out.as_deref(), *show_days, &config),
        Commands::Validate { input } => handle_validate(input),
        Commands::Completions { shell, out } => generate_completions(*shell, out.as_deref()),
    }
}

fn handle_solve(
    input: &Path,
    policy: PolicyArg,
    solver: Option<&str>,
    out: Option<&Path>,
    show_days: bool,
    config: &RunConfig,
) -> Result<()> {
    let forecast = load_forecasts(input)
        .with_context(|| format!("loading forecasts from '{}'", input.display()))?;
    println!("Forecast loaded: {} days", forecast.horizon().n_days());

    let solver_name = solver.or(config.solver.as_deref());
    let solver_kind = match solver_name {
        Some(name) => name.parse::<MilpSolverKind>()?,
        None => MilpSolverKind::default(),
    };
    let solver_config = ScheduleSolverConfig {
        solver: solver_kind,
    };

    let mut report = ScheduleReport::new(forecast.horizon().n_days());
    for &availability in policy.policies() {
        info!("Solving under policy: {availability}");
        let problem = ScheduleProblem::new(forecast.clone()).with_policy(availability);
        let solution = solve_schedule(&problem, &solver_config);

        println!("\nPolicy: {}", availability.description());
        print!("{}", solution.summary());
        if show_days && solution.is_optimal() {
            print_day_table(&problem, &solution)?;
        }

        if solution.status == ScheduleStatus::SolverError {
            bail!("solver backend failed: {}", solution.status_message);
        }
        report.push_run(availability, &solution);
    }

    if let Some(path) = out.or(config.out.as_deref()) {
        write_report(path, &report)?;
        println!("\nResults written to {}", path.display());
    }

    Ok(())
}

fn print_day_table(problem: &ScheduleProblem, solution: &ScheduleSolution) -> Result<()> {
    let down: Vec<usize> = solution.outage_days.iter().map(|d| d.value()).collect();
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "DAY\tPRODUCTION\tPRICE\tSTATE\tREVENUE")?;
    for day in problem.horizon().days() {
        let outage = down.contains(&day.value());
        writeln!(
            writer,
            "{}\t{:.1}\t{:.2}\t{}\t{:.2}",
            day.value(),
            problem.forecast.production_mw().value(day),
            problem.forecast.price_eur_mwh().value(day),
            if outage { "down" } else { "run" },
            if outage { 0.0 } else { problem.gross_revenue(day) },
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_validate(input: &Path) -> Result<()> {
    let forecast = load_forecasts(input)
        .with_context(|| format!("loading forecasts from '{}'", input.display()))?;
    let n = forecast.horizon().n_days();

    println!("Forecast input is valid");
    println!("  {} days, 3 aligned series", n);
    print_series_stats(forecast.production_mw());
    print_series_stats(forecast.price_eur_mwh());
    print_series_stats(forecast.maintenance_coeff());

    for policy in [
        AvailabilityPolicy::Unrestricted,
        AvailabilityPolicy::EngineerWindow,
    ] {
        let eligible = forecast
            .horizon()
            .days()
            .filter(|d| policy.is_available(*d))
            .count();
        println!("  Policy {policy}: {eligible} eligible start days");
        if eligible == 0 {
            println!("  Warning: no eligible start day under {policy}; a solve will be infeasible");
        }
    }

    let idle_days = forecast
        .production_mw()
        .values()
        .iter()
        .filter(|v| **v == 0.0)
        .count();
    if idle_days > 0 {
        println!("  Warning: {idle_days} days forecast zero production");
    }
    let negative_prices = forecast
        .price_eur_mwh()
        .values()
        .iter()
        .filter(|v| **v < 0.0)
        .count();
    if negative_prices > 0 {
        println!("  Warning: {negative_prices} days have negative prices");
    }

    Ok(())
}

fn print_series_stats(series: &DailySeries) {
    let values = series.values();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    println!(
        "  Series '{}': min {min:.2}, mean {mean:.2}, max {max:.2}",
        series.name()
    );
}

fn generate_completions(shell: Shell, out: Option<&Path>) -> Result<()> {
    let mut cmd = build_cli_command();
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        generate(shell, &mut cmd, "gms", &mut file);
        println!("Wrote {shell:?} completion to {}", path.display());
    } else {
        let stdout = &mut io::stdout();
        generate(shell, &mut cmd, "gms", stdout);
    }
    Ok(())
}
