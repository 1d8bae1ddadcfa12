//! Maintenance scheduling problem data structures
//!
//! Defines the input data for one yearly maintenance planning run.

use gms_core::{AvailabilityPolicy, DayId, ForecastSet, Horizon};

/// Revenue earned on a delivered day is
/// `DAILY_REVENUE_FACTOR * production_mw * price_eur_mwh`.
pub const DAILY_REVENUE_FACTOR: f64 = 20.0;

/// Length classes for maintenance windows.
///
/// The plant runs exactly one of two campaigns per year: a single
/// [`FiveDay`](WindowKind::FiveDay) window, or a
/// [`ThreeDay`](WindowKind::ThreeDay) plus a [`TwoDay`](WindowKind::TwoDay)
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    FiveDay,
    ThreeDay,
    TwoDay,
}

impl WindowKind {
    pub const ALL: [WindowKind; 3] =
        [WindowKind::FiveDay, WindowKind::ThreeDay, WindowKind::TwoDay];

    /// Number of consecutive outage days in this window.
    pub fn length(&self) -> usize {
        match self {
            WindowKind::FiveDay => 5,
            WindowKind::ThreeDay => 3,
            WindowKind::TwoDay => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindowKind::FiveDay => "5-day",
            WindowKind::ThreeDay => "3-day",
            WindowKind::TwoDay => "2-day",
        }
    }
}

/// Maintenance planning problem: one plant, one horizon, one staffing policy.
#[derive(Debug, Clone)]
pub struct ScheduleProblem {
    /// Validated production / price / coefficient series
    pub forecast: ForecastSet,
    /// Start-day eligibility policy
    pub policy: AvailabilityPolicy,
}

impl ScheduleProblem {
    /// Create a planning problem with the default (unrestricted) policy.
    pub fn new(forecast: ForecastSet) -> Self {
        Self {
            forecast,
            policy: AvailabilityPolicy::default(),
        }
    }

    /// Set the start-day availability policy.
    pub fn with_policy(mut self, policy: AvailabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn horizon(&self) -> Horizon {
        self.forecast.horizon()
    }

    /// Gross revenue earned on `day` when the plant runs.
    pub fn gross_revenue(&self, day: DayId) -> f64 {
        DAILY_REVENUE_FACTOR
            * self.forecast.production_mw().value(day)
            * self.forecast.price_eur_mwh().value(day)
    }

    /// Revenue over the whole horizon with no outage at all.
    pub fn total_gross_revenue(&self) -> f64 {
        self.horizon().days().map(|d| self.gross_revenue(d)).sum()
    }

    /// Compute the per-day start eligibility for every window kind.
    ///
    /// A start is forced to zero on days the policy rules out and on days
    /// where the window would run past the end of the horizon.
    pub fn start_eligibility(&self) -> StartEligibility {
        StartEligibility::build(self.horizon(), self.policy)
    }
}

/// Per-day, per-window table of which start variables stay free.
///
/// This is the declarative form of variable fixing: computed once from the
/// policy and the horizon, then applied verbatim when variables are created.
#[derive(Debug, Clone)]
pub struct StartEligibility {
    horizon: Horizon,
    allowed: [Vec<bool>; 3],
}

impl StartEligibility {
    fn build(horizon: Horizon, policy: AvailabilityPolicy) -> Self {
        let n = horizon.n_days();
        let allowed = WindowKind::ALL.map(|kind| {
            horizon
                .days()
                .map(|day| policy.is_available(day) && day.value() + kind.length() - 1 <= n)
                .collect()
        });
        StartEligibility { horizon, allowed }
    }

    fn slot(kind: WindowKind) -> usize {
        match kind {
            WindowKind::FiveDay => 0,
            WindowKind::ThreeDay => 1,
            WindowKind::TwoDay => 2,
        }
    }

    /// Whether a `kind` window may start on `day`.
    pub fn allowed(&self, kind: WindowKind, day: DayId) -> bool {
        self.allowed[Self::slot(kind)][day.value() - 1]
    }

    /// Days on which a `kind` window may start, ascending.
    pub fn allowed_days(&self, kind: WindowKind) -> Vec<DayId> {
        self.horizon
            .days()
            .filter(|day| self.allowed(kind, *day))
            .collect()
    }

    /// True when some window kind has no eligible start day at all.
    ///
    /// Either strategy then fails its exact-count constraint, so the run is
    /// guaranteed infeasible before the solver is even invoked.
    pub fn any_kind_blocked(&self) -> bool {
        WindowKind::ALL
            .iter()
            .any(|kind| self.allowed_days(*kind).is_empty())
    }
}
