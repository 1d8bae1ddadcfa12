//! Maintenance schedule MILP solver
//!
//! Builds the mixed-integer model for one planning run and dispatches it to
//! the selected backend.

use std::time::Instant;

#[cfg(feature = "solver-coin_cbc")]
use good_lp::solvers::coin_cbc::coin_cbc as coin_cbc_solver;
#[cfg(feature = "solver-highs")]
use good_lp::solvers::highs::highs as highs_solver;
use good_lp::solvers::microlp::microlp as microlp_solver;
use good_lp::{
    constraint, variable, variables, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use gms_core::Horizon;
use tracing::{debug, info};

use super::{
    MaintenanceStrategy, ScheduleProblem, ScheduleSolution, ScheduleStatus, StartEligibility,
    WindowKind, WindowPlacement,
};
use crate::backend::MilpSolverKind;

/// Schedule solver configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleSolverConfig {
    /// MILP backend used for this run
    pub solver: MilpSolverKind,
}

/// Decision variables of one planning model.
struct ModelVars {
    use_split: Variable,
    start5: Vec<Variable>,
    start3: Vec<Variable>,
    start2: Vec<Variable>,
    maintenance: Vec<Variable>,
}

/// Solve one maintenance planning run.
///
/// The run is pure: it reads the problem, builds a fresh model, and returns
/// a value. Every terminal outcome is encoded in [`ScheduleStatus`]; an
/// infeasible model (for example the engineer-window policy on a horizon
/// that ends before day 300) is a normal result, not an error.
///
/// # Example
///
/// ```no_run
/// use gms_algo::schedule::{solve_schedule, ScheduleProblem, ScheduleSolverConfig};
/// use gms_core::{DailySeries, ForecastSet};
///
/// let forecast = ForecastSet::new(
///     DailySeries::new("production", vec![100.0; 365])?,
///     DailySeries::new("price", vec![50.0; 365])?,
///     DailySeries::new("coeff", vec![1.0; 365])?,
/// )?;
/// let problem = ScheduleProblem::new(forecast);
/// let solution = solve_schedule(&problem, &ScheduleSolverConfig::default());
/// println!("{}", solution.summary());
/// # Ok::<(), gms_core::GmsError>(())
/// ```
pub fn solve_schedule(
    problem: &ScheduleProblem,
    config: &ScheduleSolverConfig,
) -> ScheduleSolution {
    let start = Instant::now();
    let horizon = problem.horizon();
    let eligibility = problem.start_eligibility();

    // === MILP Formulation ===
    // Variables:
    // - u: strategy selector (binary; 0 = single 5-day, 1 = split 3+2)
    // - s5[d], s3[d], s2[d]: window start on day d (binary, pinned to zero
    //   on ineligible days)
    // - m[d]: plant down on day d (binary)

    debug!(
        days = horizon.n_days(),
        policy = %problem.policy,
        backend = config.solver.as_str(),
        "building maintenance schedule model"
    );

    let mut vars = variables!();
    let model_vars = build_variables(&mut vars, &eligibility, horizon);

    // Objective: revenue over delivered days,
    // Σ_d factor · production_d · price_d · (1 - m_d)
    let mut revenue = Expression::from(0.0);
    for day in horizon.days() {
        let gross = problem.gross_revenue(day);
        revenue += gross;
        revenue -= gross * model_vars.maintenance[day.value() - 1];
    }

    let unsolved = vars.maximise(revenue);
    let outcome: Result<Box<dyn Solution>, ResolutionError> = match config.solver {
        MilpSolverKind::Microlp => {
            let model =
                add_schedule_constraints(unsolved.using(microlp_solver), horizon, &model_vars);
            model.solve().map(|s| Box::new(s) as Box<dyn Solution>)
        }
        #[cfg(feature = "solver-coin_cbc")]
        MilpSolverKind::CoinCbc => {
            let model =
                add_schedule_constraints(unsolved.using(coin_cbc_solver), horizon, &model_vars);
            model.solve().map(|s| Box::new(s) as Box<dyn Solution>)
        }
        #[cfg(feature = "solver-highs")]
        MilpSolverKind::Highs => {
            let model =
                add_schedule_constraints(unsolved.using(highs_solver), horizon, &model_vars);
            model.solve().map(|s| Box::new(s) as Box<dyn Solution>)
        }
    };

    let mut result = ScheduleSolution::new();
    result.solve_time = start.elapsed();
    result.backend = config.solver.as_str();

    match outcome {
        Ok(solution) => {
            decode_schedule(problem, solution.as_ref(), &model_vars, &mut result);
            info!(
                revenue = result.revenue_eur,
                outage_days = result.outage_day_count(),
                elapsed = ?result.solve_time,
                "optimal maintenance schedule found"
            );
        }
        Err(ResolutionError::Infeasible) => {
            result.status = ScheduleStatus::Infeasible;
            result.status_message =
                "no schedule satisfies the strategy and start-day constraints".to_string();
        }
        Err(e) => {
            result.status = ScheduleStatus::SolverError;
            result.status_message = e.to_string();
        }
    }

    result
}

fn build_variables(
    vars: &mut ProblemVariables,
    eligibility: &StartEligibility,
    horizon: Horizon,
) -> ModelVars {
    ModelVars {
        use_split: vars.add(variable().binary()),
        start5: add_start_vars(vars, eligibility, WindowKind::FiveDay, horizon),
        start3: add_start_vars(vars, eligibility, WindowKind::ThreeDay, horizon),
        start2: add_start_vars(vars, eligibility, WindowKind::TwoDay, horizon),
        maintenance: horizon
            .days()
            .map(|_| vars.add(variable().binary()))
            .collect(),
    }
}

fn add_start_vars(
    vars: &mut ProblemVariables,
    eligibility: &StartEligibility,
    kind: WindowKind,
    horizon: Horizon,
) -> Vec<Variable> {
    horizon
        .days()
        .map(|day| {
            // Ineligible start days keep their variable but pinned to zero.
            let definition = variable().binary();
            let definition = if eligibility.allowed(kind, day) {
                definition
            } else {
                definition.max(0.0)
            };
            vars.add(definition)
        })
        .collect()
}

fn add_schedule_constraints<M>(mut model: M, horizon: Horizon, vars: &ModelVars) -> M
where
    M: SolverModel,
{
    // Exactly one 5-day window, or exactly one 3-day plus one 2-day window.
    model = model.with(constraint!(sum_of(&vars.start5) + vars.use_split == 1.0));
    model = model.with(constraint!(sum_of(&vars.start3) == vars.use_split));
    model = model.with(constraint!(sum_of(&vars.start2) == vars.use_split));

    // Tie each outage day to the window starts covering it. Equality plus
    // the binary domain of m[d] also rules out overlapping windows.
    for day in horizon.days() {
        let d = day.value();
        let mut coverage = Expression::from(0.0);
        for k in covering_starts(d, WindowKind::FiveDay) {
            coverage += vars.start5[k - 1];
        }
        for k in covering_starts(d, WindowKind::ThreeDay) {
            coverage += vars.start3[k - 1];
        }
        for k in covering_starts(d, WindowKind::TwoDay) {
            coverage += vars.start2[k - 1];
        }
        model = model.with(constraint!(vars.maintenance[d - 1] == coverage));
    }

    model
}

/// Start days whose `kind` window covers day `d`: `max(1, d-L+1)..=d`.
fn covering_starts(d: usize, kind: WindowKind) -> std::ops::RangeInclusive<usize> {
    d.saturating_sub(kind.length() - 1).max(1)..=d
}

fn sum_of(vars: &[Variable]) -> Expression {
    let mut total = Expression::from(0.0);
    for var in vars {
        total += *var;
    }
    total
}

fn decode_schedule(
    problem: &ScheduleProblem,
    solution: &dyn Solution,
    vars: &ModelVars,
    result: &mut ScheduleSolution,
) {
    let horizon = problem.horizon();
    result.status = ScheduleStatus::Optimal;
    result.status_message = "optimal solution found".to_string();

    let split = solution.value(vars.use_split) > 0.5;
    result.strategy = Some(if split {
        MaintenanceStrategy::SplitThreePlusTwo
    } else {
        MaintenanceStrategy::SingleFiveDay
    });

    for day in horizon.days() {
        let i = day.value() - 1;
        if !split && solution.value(vars.start5[i]) > 0.5 {
            result.windows.push(WindowPlacement {
                kind: WindowKind::FiveDay,
                start_day: day,
            });
        }
        if split {
            if solution.value(vars.start3[i]) > 0.5 {
                result.windows.push(WindowPlacement {
                    kind: WindowKind::ThreeDay,
                    start_day: day,
                });
            }
            if solution.value(vars.start2[i]) > 0.5 {
                result.windows.push(WindowPlacement {
                    kind: WindowKind::TwoDay,
                    start_day: day,
                });
            }
        }
    }

    let mut down = vec![false; horizon.n_days()];
    for day in horizon.days() {
        if solution.value(vars.maintenance[day.value() - 1]) > 0.5 {
            down[day.value() - 1] = true;
            result.outage_days.push(day);
        }
    }

    result.revenue_eur = horizon
        .days()
        .filter(|day| !down[day.value() - 1])
        .map(|day| problem.gross_revenue(day))
        .sum();
}
