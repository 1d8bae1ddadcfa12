//! Yearly maintenance scheduling
//!
//! This module implements a Mixed-Integer Linear Programming (MILP)
//! formulation for placing the annual maintenance outage of a single
//! power plant.
//!
//! ## Problem Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MAINTENANCE SCHEDULING                                                  │
//! │  ───────────────────────                                                 │
//! │                                                                          │
//! │  Given:                                                                  │
//! │    • Daily production forecast over the planning horizon (MW)           │
//! │    • Daily electricity prices (EUR/MWh)                                 │
//! │    • An engineer availability policy for start days                     │
//! │                                                                          │
//! │  Decide:                                                                 │
//! │    • One continuous 5-day outage, OR one 3-day plus one 2-day outage    │
//! │    • The start day of each chosen window                                │
//! │                                                                          │
//! │  Maximize:                                                               │
//! │    Revenue from production on all non-outage days                       │
//! │                                                                          │
//! │  Subject to:                                                             │
//! │    • Exactly one strategy is executed in full                           │
//! │    • Windows fit inside the horizon                                     │
//! │    • Starts only on policy-eligible days                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## MILP Formulation
//!
//! ```text
//! maximize    Σ_d 20 · production_d · price_d · (1 - m_d)
//!
//! subject to:
//!   Σ_d s5_d = 1 - u                         One 5-day window unless split
//!   Σ_d s3_d = u                             One 3-day window when split
//!   Σ_d s2_d = u                             One 2-day window when split
//!   m_d = Σ_{k=max(1,d-4)}^{d} s5_k
//!       + Σ_{k=max(1,d-2)}^{d} s3_k
//!       + Σ_{k=max(1,d-1)}^{d} s2_k          Outage day ⇔ covering start
//!   s5_d = s3_d = s2_d = 0                   On ineligible start days
//!   u, s5_d, s3_d, s2_d, m_d ∈ {0,1}
//! ```
//!
//! Window overlap needs no dedicated constraint: `m_d` is binary and equals
//! the coverage sum, so any day covered twice makes the model infeasible.
//! Start days whose window would run past the horizon are fixed to zero the
//! same way policy-ineligible days are, so every placed window runs its
//! full length inside the horizon.

mod problem;
mod solution;
mod solver;

pub use problem::{ScheduleProblem, StartEligibility, WindowKind, DAILY_REVENUE_FACTOR};
pub use solution::{MaintenanceStrategy, ScheduleSolution, ScheduleStatus, WindowPlacement};
pub use solver::{solve_schedule, ScheduleSolverConfig};
