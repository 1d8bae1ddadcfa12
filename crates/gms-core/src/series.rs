//! Day-indexed forecast series
//!
//! The planner consumes three daily series over one planning horizon:
//! forecast production, electricity price, and a maintenance cost
//! coefficient. [`DailySeries`] holds one validated series; [`ForecastSet`]
//! bundles the three and guarantees they cover the same horizon.
//!
//! Validation is fail-fast: empty series, non-finite values, and length
//! mismatches are rejected at construction, so downstream code can index
//! by day without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::{GmsError, GmsResult};
use crate::{DayId, Horizon};

/// A named series with one value per day, indexed 1-based by [`DayId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    name: String,
    values: Vec<f64>,
}

impl DailySeries {
    /// Builds a series, rejecting empty input and non-finite values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> GmsResult<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(GmsError::Validation(format!(
                "series '{name}' is empty; the planning horizon needs at least one day"
            )));
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(GmsError::Validation(format!(
                    "series '{name}' has a non-finite value ({v}) on day {}",
                    i + 1
                )));
            }
        }
        Ok(DailySeries { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for `day`. The day must lie within the series horizon.
    pub fn value(&self, day: DayId) -> f64 {
        self.values[day.value() - 1]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// The three aligned input series for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSet {
    horizon: Horizon,
    production_mw: DailySeries,
    price_eur_mwh: DailySeries,
    maintenance_coeff: DailySeries,
}

impl ForecastSet {
    /// Bundles the three series, rejecting horizon mismatches and negative
    /// production. Prices may go negative; electricity markets do.
    ///
    /// The maintenance coefficient is validated alongside the other series
    /// but the schedule model does not consume it; it rides along for
    /// reporting.
    pub fn new(
        production_mw: DailySeries,
        price_eur_mwh: DailySeries,
        maintenance_coeff: DailySeries,
    ) -> GmsResult<Self> {
        let n = production_mw.len();
        for series in [&price_eur_mwh, &maintenance_coeff] {
            if series.len() != n {
                return Err(GmsError::Validation(format!(
                    "series '{}' covers {} days but series '{}' covers {} days",
                    production_mw.name(),
                    n,
                    series.name(),
                    series.len()
                )));
            }
        }
        if let Some((i, v)) = production_mw
            .values()
            .iter()
            .enumerate()
            .find(|(_, v)| **v < 0.0)
        {
            return Err(GmsError::Validation(format!(
                "series '{}' has a negative production value ({v}) on day {}",
                production_mw.name(),
                i + 1
            )));
        }
        let horizon = Horizon::new(n)?;
        Ok(ForecastSet {
            horizon,
            production_mw,
            price_eur_mwh,
            maintenance_coeff,
        })
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn production_mw(&self) -> &DailySeries {
        &self.production_mw
    }

    pub fn price_eur_mwh(&self) -> &DailySeries {
        &self.price_eur_mwh
    }

    pub fn maintenance_coeff(&self) -> &DailySeries {
        &self.maintenance_coeff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, values: Vec<f64>) -> DailySeries {
        DailySeries::new(name, values).unwrap()
    }

    #[test]
    fn test_series_rejects_empty() {
        let err = DailySeries::new("production", vec![]).unwrap_err();
        assert!(err.to_string().contains("production"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_series_rejects_non_finite() {
        let err = DailySeries::new("price", vec![10.0, f64::NAN, 30.0]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("price"));
        assert!(msg.contains("day 2"));
    }

    #[test]
    fn test_series_is_one_based() {
        let s = series("production", vec![10.0, 20.0, 30.0]);
        assert_eq!(s.value(DayId::new(1)), 10.0);
        assert_eq!(s.value(DayId::new(3)), 30.0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_forecast_set_rejects_length_mismatch() {
        let err = ForecastSet::new(
            series("production", vec![1.0, 2.0]),
            series("price", vec![1.0, 2.0, 3.0]),
            series("coeff", vec![1.0, 2.0]),
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("production"));
        assert!(msg.contains("price"));
    }

    #[test]
    fn test_forecast_set_rejects_negative_production() {
        let err = ForecastSet::new(
            series("production", vec![100.0, -5.0, 100.0]),
            series("price", vec![50.0; 3]),
            series("coeff", vec![1.0; 3]),
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("negative production"));
        assert!(msg.contains("day 2"));
    }

    #[test]
    fn test_forecast_set_allows_negative_price() {
        let set = ForecastSet::new(
            series("production", vec![100.0; 3]),
            series("price", vec![50.0, -12.0, 50.0]),
            series("coeff", vec![1.0; 3]),
        );
        assert!(set.is_ok());
    }

    #[test]
    fn test_forecast_set_horizon() {
        let set = ForecastSet::new(
            series("production", vec![1.0; 5]),
            series("price", vec![2.0; 5]),
            series("coeff", vec![3.0; 5]),
        )
        .unwrap();
        assert_eq!(set.horizon().n_days(), 5);
        assert_eq!(set.price_eur_mwh().value(DayId::new(5)), 2.0);
    }
}
