//! Maintenance schedule solution data structures
//!
//! Defines the output from one planning run.

use std::time::Duration;

use gms_core::DayId;

use super::WindowKind;

/// Terminal state of one planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// Proven-optimal integer schedule
    Optimal,
    /// No schedule satisfies the strategy and start-day constraints
    Infeasible,
    /// The backend failed before reaching a verdict
    SolverError,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Optimal => "optimal",
            ScheduleStatus::Infeasible => "infeasible",
            ScheduleStatus::SolverError => "solver-error",
        }
    }
}

/// Which maintenance campaign the optimizer chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStrategy {
    /// One continuous 5-day outage
    SingleFiveDay,
    /// One 3-day plus one 2-day outage
    SplitThreePlusTwo,
}

impl MaintenanceStrategy {
    /// Window kinds this strategy places, in reporting order.
    pub fn windows(&self) -> &'static [WindowKind] {
        match self {
            MaintenanceStrategy::SingleFiveDay => &[WindowKind::FiveDay],
            MaintenanceStrategy::SplitThreePlusTwo => {
                &[WindowKind::ThreeDay, WindowKind::TwoDay]
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStrategy::SingleFiveDay => "5-day maintenance",
            MaintenanceStrategy::SplitThreePlusTwo => "3-day + 2-day maintenance",
        }
    }
}

/// One placed maintenance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub kind: WindowKind,
    pub start_day: DayId,
}

impl WindowPlacement {
    /// Last outage day of this window.
    pub fn end_day(&self) -> DayId {
        DayId::new(self.start_day.value() + self.kind.length() - 1)
    }
}

/// Complete result of one maintenance planning run.
#[derive(Debug, Clone)]
pub struct ScheduleSolution {
    /// Terminal solver state
    pub status: ScheduleStatus,
    /// Chosen strategy (present when optimal)
    pub strategy: Option<MaintenanceStrategy>,
    /// Placed windows in day order (empty unless optimal)
    pub windows: Vec<WindowPlacement>,
    /// Every plant-down day, ascending
    pub outage_days: Vec<DayId>,
    /// Objective value: revenue over all delivered days
    pub revenue_eur: f64,
    /// Wall-clock solve time
    pub solve_time: Duration,
    /// Name of the MILP backend that produced this result
    pub backend: &'static str,
    /// Short diagnostic message from the solver layer
    pub status_message: String,
}

impl ScheduleSolution {
    /// Create a new empty solution
    pub fn new() -> Self {
        Self {
            status: ScheduleStatus::SolverError,
            strategy: None,
            windows: Vec::new(),
            outage_days: Vec::new(),
            revenue_eur: 0.0,
            solve_time: Duration::ZERO,
            backend: "",
            status_message: String::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == ScheduleStatus::Optimal
    }

    pub fn outage_day_count(&self) -> usize {
        self.outage_days.len()
    }

    /// Format a human-readable summary
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Maintenance Schedule Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Status: {}\n", self.status.as_str()));

        if self.is_optimal() {
            if let Some(strategy) = self.strategy {
                s.push_str(&format!("Chosen strategy: {}.\n", strategy.label()));
            }
            for window in &self.windows {
                s.push_str(&format!(
                    "  {} window starts on day {} (days {}-{})\n",
                    window.kind.label(),
                    window.start_day.value(),
                    window.start_day.value(),
                    window.end_day().value()
                ));
            }
            s.push_str(&format!("Outage Days: {}\n", self.outage_day_count()));
            s.push_str(&format!("Total Revenue: {:.2}\n", self.revenue_eur));
        } else {
            s.push_str("No feasible solution or solver error.\n");
            if !self.status_message.is_empty() {
                s.push_str(&format!("  {}\n", self.status_message));
            }
        }

        if !self.backend.is_empty() {
            s.push_str(&format!("Backend: {}\n", self.backend));
        }
        s.push_str(&format!("Solve Time: {:.2?}\n", self.solve_time));
        s
    }
}

impl Default for ScheduleSolution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_placement_end_day() {
        let window = WindowPlacement {
            kind: WindowKind::FiveDay,
            start_day: DayId::new(300),
        };
        assert_eq!(window.end_day(), DayId::new(304));

        let window = WindowPlacement {
            kind: WindowKind::TwoDay,
            start_day: DayId::new(1),
        };
        assert_eq!(window.end_day(), DayId::new(2));
    }

    #[test]
    fn test_strategy_window_order() {
        assert_eq!(
            MaintenanceStrategy::SingleFiveDay.windows(),
            &[WindowKind::FiveDay]
        );
        assert_eq!(
            MaintenanceStrategy::SplitThreePlusTwo.windows(),
            &[WindowKind::ThreeDay, WindowKind::TwoDay]
        );
    }

    #[test]
    fn test_optimal_summary() {
        let mut solution = ScheduleSolution::new();
        solution.status = ScheduleStatus::Optimal;
        solution.strategy = Some(MaintenanceStrategy::SplitThreePlusTwo);
        solution.windows.push(WindowPlacement {
            kind: WindowKind::ThreeDay,
            start_day: DayId::new(1),
        });
        solution.windows.push(WindowPlacement {
            kind: WindowKind::TwoDay,
            start_day: DayId::new(6),
        });
        solution.outage_days = vec![1, 2, 3, 6, 7].into_iter().map(DayId::new).collect();
        solution.revenue_eur = 990_000.0;

        let summary = solution.summary();
        assert!(summary.contains("Chosen strategy: 3-day + 2-day maintenance."));
        assert!(summary.contains("3-day window starts on day 1"));
        assert!(summary.contains("2-day window starts on day 6"));
        assert!(summary.contains("Outage Days: 5"));
        assert!(summary.contains("Total Revenue: 990000.00"));
    }

    #[test]
    fn test_infeasible_summary() {
        let mut solution = ScheduleSolution::new();
        solution.status = ScheduleStatus::Infeasible;
        solution.status_message = "model is infeasible".to_string();

        let summary = solution.summary();
        assert!(summary.contains("Status: infeasible"));
        assert!(summary.contains("No feasible solution or solver error."));
        assert!(!solution.is_optimal());
    }
}
