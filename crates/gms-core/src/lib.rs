//! # gms-core: Maintenance Scheduling Core
//!
//! Provides the fundamental data structures for power plant maintenance
//! scheduling: the planning horizon, day-indexed forecast series, engineer
//! availability policies, and the unified error type.
//!
//! ## Design Philosophy
//!
//! Inputs are **validated once at the boundary**:
//! - [`DailySeries`] rejects empty and non-finite data at construction
//! - [`ForecastSet`] guarantees production, price and coefficient series
//!   cover the same horizon
//! - downstream code indexes by [`DayId`] without re-checking
//!
//! Everything here is a plain value type; a planning run owns its inputs
//! and two runs never share state.
//!
//! ## Quick Start
//!
//! ```rust
//! use gms_core::{AvailabilityPolicy, DailySeries, DayId, ForecastSet};
//!
//! let production = DailySeries::new("production", vec![100.0; 10])?;
//! let price = DailySeries::new("price", vec![50.0; 10])?;
//! let coeff = DailySeries::new("coeff", vec![1.0; 10])?;
//!
//! let forecast = ForecastSet::new(production, price, coeff)?;
//! assert_eq!(forecast.horizon().n_days(), 10);
//!
//! let policy = AvailabilityPolicy::EngineerWindow;
//! assert!(!policy.is_available(DayId::new(10)));
//! # Ok::<(), gms_core::GmsError>(())
//! ```
//!
//! ## Modules
//!
//! - [`availability`] - Start-day eligibility policies
//! - [`error`] - Unified [`GmsError`] / [`GmsResult`]
//! - [`series`] - Validated day-indexed input series

use serde::{Deserialize, Serialize};

pub mod availability;
pub mod error;
pub mod series;

pub use availability::{
    AvailabilityPolicy, ENGINEER_WINDOW_FIRST_DAY, ENGINEER_WINDOW_LAST_DAY,
};
pub use error::{GmsError, GmsResult};
pub use series::{DailySeries, ForecastSet};

// Newtype wrapper for day indices for type safety
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayId(usize);

impl DayId {
    #[inline]
    pub fn new(value: usize) -> Self {
        DayId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// A planning horizon of `n_days` consecutive days, numbered 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    n_days: usize,
}

impl Horizon {
    pub fn new(n_days: usize) -> GmsResult<Self> {
        if n_days == 0 {
            return Err(GmsError::Validation(
                "planning horizon must contain at least one day".into(),
            ));
        }
        Ok(Horizon { n_days })
    }

    pub fn n_days(&self) -> usize {
        self.n_days
    }

    pub fn last_day(&self) -> DayId {
        DayId::new(self.n_days)
    }

    pub fn contains(&self, day: DayId) -> bool {
        (1..=self.n_days).contains(&day.value())
    }

    /// Iterates day 1 through day `n_days`.
    pub fn days(&self) -> impl Iterator<Item = DayId> {
        (1..=self.n_days).map(DayId::new)
    }
}
