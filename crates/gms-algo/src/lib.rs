//! # gms-algo: Maintenance Schedule Optimization
//!
//! This crate provides the MILP formulation and solver for yearly power
//! plant maintenance scheduling: choose between one continuous 5-day outage
//! and a split 3-day + 2-day campaign, and place the windows so revenue
//! over the planning horizon is maximal.
//!
//! ## Strategies
//!
//! | Strategy | Windows | Selector |
//! |----------|---------|----------|
//! | [`MaintenanceStrategy::SingleFiveDay`] | one 5-day | `u = 0` |
//! | [`MaintenanceStrategy::SplitThreePlusTwo`] | one 3-day + one 2-day | `u = 1` |
//!
//! The solver decides the strategy and the start days in one model; see
//! [`schedule`] for the formulation.
//!
//! ## Backends
//!
//! [`MilpSolverKind`] selects the `good_lp` backend. The default `microlp`
//! is pure Rust; `coin_cbc` and `highs` are available behind the
//! `solver-coin_cbc` / `solver-highs` features.
//!
//! ## Example
//!
//! ```ignore
//! use gms_algo::{solve_schedule, ScheduleProblem, ScheduleSolverConfig};
//! use gms_core::AvailabilityPolicy;
//!
//! let problem = ScheduleProblem::new(forecast)
//!     .with_policy(AvailabilityPolicy::EngineerWindow);
//! let solution = solve_schedule(&problem, &ScheduleSolverConfig::default());
//! println!("{}", solution.summary());
//! ```

pub mod backend;
pub mod schedule;

pub use backend::MilpSolverKind;
pub use schedule::{
    solve_schedule, MaintenanceStrategy, ScheduleProblem, ScheduleSolution, ScheduleSolverConfig,
    ScheduleStatus, StartEligibility, WindowKind, WindowPlacement, DAILY_REVENUE_FACTOR,
};
