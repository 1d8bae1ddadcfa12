//! Solution-level properties of the maintenance schedule model
//!
//! These tests only look at solved schedules through the public API and
//! check invariants that must hold for every optimal solution, independent
//! of which equally-good schedule the backend happens to return.

use gms_algo::{
    solve_schedule, MaintenanceStrategy, ScheduleProblem, ScheduleSolverConfig, ScheduleStatus,
    WindowKind,
};
use gms_core::{AvailabilityPolicy, DailySeries, ForecastSet};

fn forecast(production: Vec<f64>, price: Vec<f64>) -> ForecastSet {
    let coeff = vec![1.0; production.len()];
    ForecastSet::new(
        DailySeries::new("production", production).unwrap(),
        DailySeries::new("price", price).unwrap(),
        DailySeries::new("coeff", coeff).unwrap(),
    )
    .unwrap()
}

fn solve(problem: &ScheduleProblem) -> gms_algo::ScheduleSolution {
    solve_schedule(problem, &ScheduleSolverConfig::default())
}

/// Deterministic price series with enough structure to make optima unique
/// in practice.
fn wavy_price(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 40.0 + 30.0 * ((i as f64 * 0.37).sin() + (i as f64 * 0.11).cos()))
        .collect()
}

/// Re-derive the outage days from the placed windows; the solver's
/// `maintenance` decode must agree with the pure coverage formula.
fn coverage_from_windows(solution: &gms_algo::ScheduleSolution, n: usize) -> Vec<usize> {
    let mut down = vec![false; n];
    for window in &solution.windows {
        for day in window.start_day.value()..=window.end_day().value() {
            assert!(day <= n, "window overruns the horizon");
            assert!(!down[day - 1], "two windows cover day {day}");
            down[day - 1] = true;
        }
    }
    (1..=n).filter(|d| down[d - 1]).collect()
}

#[test]
fn strategy_counts_match_the_selector() {
    for price in [
        vec![50.0; 30],
        wavy_price(30),
        {
            let mut p = vec![80.0; 30];
            p[3] = 1.0;
            p[4] = 1.0;
            p[5] = 1.0;
            p[20] = 1.0;
            p[21] = 1.0;
            p
        },
    ] {
        let problem = ScheduleProblem::new(forecast(vec![100.0; 30], price));
        let solution = solve(&problem);
        assert_eq!(solution.status, ScheduleStatus::Optimal);

        let strategy = solution.strategy.unwrap();
        let five = solution
            .windows
            .iter()
            .filter(|w| w.kind == WindowKind::FiveDay)
            .count();
        let three = solution
            .windows
            .iter()
            .filter(|w| w.kind == WindowKind::ThreeDay)
            .count();
        let two = solution
            .windows
            .iter()
            .filter(|w| w.kind == WindowKind::TwoDay)
            .count();

        match strategy {
            MaintenanceStrategy::SingleFiveDay => {
                assert_eq!((five, three, two), (1, 0, 0));
            }
            MaintenanceStrategy::SplitThreePlusTwo => {
                assert_eq!((five, three, two), (0, 1, 1));
            }
        }
    }
}

#[test]
fn outage_days_equal_window_coverage() {
    let n = 60;
    let problem = ScheduleProblem::new(forecast(vec![100.0; n], wavy_price(n)));
    let solution = solve(&problem);
    assert_eq!(solution.status, ScheduleStatus::Optimal);

    let expected = coverage_from_windows(&solution, n);
    let actual: Vec<usize> = solution.outage_days.iter().map(|d| d.value()).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 5);
}

#[test]
fn starts_respect_the_engineer_window() {
    let n = 365;
    let problem = ScheduleProblem::new(forecast(vec![100.0; n], wavy_price(n)))
        .with_policy(AvailabilityPolicy::EngineerWindow);
    let solution = solve(&problem);
    assert_eq!(solution.status, ScheduleStatus::Optimal);

    for window in &solution.windows {
        let start = window.start_day.value();
        assert!((300..=365).contains(&start), "start day {start} is ineligible");
        assert!(window.end_day().value() <= n);
    }
}

#[test]
fn repeated_solves_agree_on_the_objective() {
    let n = 90;
    let problem = ScheduleProblem::new(forecast(vec![100.0; n], wavy_price(n)));

    let first = solve(&problem);
    let second = solve(&problem);

    assert_eq!(first.status, ScheduleStatus::Optimal);
    assert_eq!(second.status, ScheduleStatus::Optimal);
    assert!((first.revenue_eur - second.revenue_eur).abs() < 1e-9);
}

#[test]
fn restricting_availability_never_raises_the_optimum() {
    let n = 365;
    let base = forecast(vec![100.0; n], wavy_price(n));

    let unrestricted = solve(&ScheduleProblem::new(base.clone()));
    let restricted = solve(
        &ScheduleProblem::new(base).with_policy(AvailabilityPolicy::EngineerWindow),
    );

    assert_eq!(unrestricted.status, ScheduleStatus::Optimal);
    assert_eq!(restricted.status, ScheduleStatus::Optimal);
    assert!(restricted.revenue_eur <= unrestricted.revenue_eur + 1e-9);
}

#[test]
fn revenue_is_gross_minus_outage_losses() {
    let n = 45;
    let production: Vec<f64> = (0..n).map(|i| 80.0 + (i % 7) as f64 * 5.0).collect();
    let price = wavy_price(n);
    let problem = ScheduleProblem::new(forecast(production.clone(), price.clone()));
    let solution = solve(&problem);
    assert_eq!(solution.status, ScheduleStatus::Optimal);

    let lost: f64 = solution
        .outage_days
        .iter()
        .map(|d| 20.0 * production[d.value() - 1] * price[d.value() - 1])
        .sum();
    let expected = problem.total_gross_revenue() - lost;
    assert!((solution.revenue_eur - expected).abs() < 1e-6);
}

#[test]
fn boundary_between_feasible_and_infeasible_horizons() {
    // Day 300 is the first eligible start; a 5-day window then needs the
    // horizon to reach day 304, and the split needs 300..=304 as well.
    let feasible = ScheduleProblem::new(forecast(vec![100.0; 304], vec![50.0; 304]))
        .with_policy(AvailabilityPolicy::EngineerWindow);
    assert_eq!(solve(&feasible).status, ScheduleStatus::Optimal);

    let infeasible = ScheduleProblem::new(forecast(vec![100.0; 303], vec![50.0; 303]))
        .with_policy(AvailabilityPolicy::EngineerWindow);
    assert_eq!(solve(&infeasible).status, ScheduleStatus::Infeasible);
}
