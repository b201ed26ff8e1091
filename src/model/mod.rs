//! Per-row forecasting: the monthly series container, the model contract,
//! and the entry point the file processor calls.

pub mod holt;

use chrono::NaiveDate;

use crate::error::ForecastError;
pub use holt::HoltLinearTrend;

/// One row's historical observations at monthly granularity.
///
/// Built by the reshaper from the non-missing, parseable cells of a single
/// row; private to that row's processing. Empty is valid and means the row
/// has nothing to forecast.
#[derive(Debug, Clone, Default)]
pub struct MonthlySeries {
    months: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl MonthlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, month: NaiveDate, value: f64) {
        self.months.push(month);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Common interface for forecasting models.
///
/// Object-safe so the file processor can stay model-agnostic; any conforming
/// implementation is substitutable.
pub trait Forecaster {
    /// Fit the model to the series.
    fn fit(&mut self, series: &MonthlySeries) -> Result<(), ForecastError>;

    /// Point predictions for the `horizon` periods past the series end.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>, ForecastError>;

    /// Model name, for logging.
    fn name(&self) -> &str;
}

/// Forecast `horizon` months past the end of `series`.
///
/// An empty series is not an error: it yields `horizon` empty cells without
/// fitting anything. Model failures come back as `Err` so the caller decides
/// how to log and default them.
pub fn forecast_months(
    series: &MonthlySeries,
    horizon: usize,
) -> Result<Vec<Option<f64>>, ForecastError> {
    if series.is_empty() {
        return Ok(vec![None; horizon]);
    }
    let mut model = HoltLinearTrend::auto();
    model.fit(series)?;
    Ok(model.predict(horizon)?.into_iter().map(Some).collect())
}
