//! Engineer availability policies
//!
//! Maintenance can only start on a day with engineers on site. Two staffing
//! policies exist: the plant's own engineers are on site only during a fixed
//! late-year window, while hired external personnel make every day of the
//! horizon eligible.
//!
//! A policy never becomes a solver constraint; it is applied up front by
//! fixing the start variables of unavailable days to zero.

use serde::{Deserialize, Serialize};

use crate::DayId;

/// First day of the on-site engineer window.
pub const ENGINEER_WINDOW_FIRST_DAY: usize = 300;
/// Last day of the on-site engineer window.
pub const ENGINEER_WINDOW_LAST_DAY: usize = 365;

/// Which days maintenance is allowed to start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityPolicy {
    /// External personnel hired: every day of the horizon is eligible.
    #[default]
    Unrestricted,
    /// Plant engineers only: starts are limited to days
    /// [`ENGINEER_WINDOW_FIRST_DAY`]..=[`ENGINEER_WINDOW_LAST_DAY`].
    EngineerWindow,
}

impl AvailabilityPolicy {
    /// Whether maintenance may start on `day` under this policy.
    ///
    /// The engineer window is a fixed calendar range; days past the horizon
    /// simply never come up because start variables only exist for horizon
    /// days.
    pub fn is_available(&self, day: DayId) -> bool {
        match self {
            AvailabilityPolicy::Unrestricted => true,
            AvailabilityPolicy::EngineerWindow => {
                (ENGINEER_WINDOW_FIRST_DAY..=ENGINEER_WINDOW_LAST_DAY).contains(&day.value())
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityPolicy::Unrestricted => "unrestricted",
            AvailabilityPolicy::EngineerWindow => "engineer-window",
        }
    }

    /// Short human description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            AvailabilityPolicy::Unrestricted => "external personnel hired, any start day",
            AvailabilityPolicy::EngineerWindow => "plant engineers only, start days 300-365",
        }
    }
}

impl std::fmt::Display for AvailabilityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AvailabilityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unrestricted" | "extra" => Ok(AvailabilityPolicy::Unrestricted),
            "engineer-window" | "restricted" => Ok(AvailabilityPolicy::EngineerWindow),
            other => Err(format!(
                "unknown availability policy '{other}' (expected 'unrestricted' or 'restricted')"
            )),
        }
    }
}
