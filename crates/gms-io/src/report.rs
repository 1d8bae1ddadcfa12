//! Solved-schedule JSON reports.
//!
//! A report bundles the outcome of one or more planning runs (one per
//! availability policy) into a single pretty-printed JSON document for
//! downstream tooling.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gms_algo::ScheduleSolution;
use gms_core::AvailabilityPolicy;
use serde::{Deserialize, Serialize};

/// Top-level report document: one entry per solved policy.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub generated_at: DateTime<Utc>,
    pub horizon_days: usize,
    pub runs: Vec<PolicyRun>,
}

impl ScheduleReport {
    pub fn new(horizon_days: usize) -> Self {
        ScheduleReport {
            generated_at: Utc::now(),
            horizon_days,
            runs: Vec::new(),
        }
    }

    pub fn push_run(&mut self, policy: AvailabilityPolicy, solution: &ScheduleSolution) {
        self.runs.push(PolicyRun::from_solution(policy, solution));
    }
}

/// Outcome of one planning run under one availability policy.
#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyRun {
    pub policy: String,
    pub status: String,
    /// Chosen strategy label, absent unless the run was optimal
    pub strategy: Option<String>,
    pub windows: Vec<WindowReport>,
    pub outage_days: Vec<usize>,
    pub total_revenue: f64,
    pub backend: String,
    pub solve_time_ms: u64,
}

impl PolicyRun {
    pub fn from_solution(policy: AvailabilityPolicy, solution: &ScheduleSolution) -> Self {
        PolicyRun {
            policy: policy.as_str().to_string(),
            status: solution.status.as_str().to_string(),
            strategy: solution.strategy.map(|s| s.label().to_string()),
            windows: solution.windows.iter().map(WindowReport::from).collect(),
            outage_days: solution.outage_days.iter().map(|d| d.value()).collect(),
            total_revenue: solution.revenue_eur,
            backend: solution.backend.to_string(),
            solve_time_ms: solution.solve_time.as_millis() as u64,
        }
    }
}

/// One placed maintenance window.
#[derive(Debug, Serialize, Deserialize)]
pub struct WindowReport {
    pub kind: String,
    pub start_day: usize,
    pub end_day: usize,
    pub length: usize,
}

impl From<&gms_algo::WindowPlacement> for WindowReport {
    fn from(window: &gms_algo::WindowPlacement) -> Self {
        WindowReport {
            kind: window.kind.label().to_string(),
            start_day: window.start_day.value(),
            end_day: window.end_day().value(),
            length: window.kind.length(),
        }
    }
}

/// Writes the report as pretty JSON to `path`.
pub fn write_report(path: &Path, report: &ScheduleReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing schedule report")?;
    let mut file = File::create(path)
        .with_context(|| format!("creating report file '{}'", path.display()))?;
    file.write_all(json.as_bytes()).context("writing report")?;
    file.write_all(b"\n").context("writing report")?;
    Ok(())
}
