//! Holt's linear trend model (double exponential smoothing).
//!
//! Suited to series with a drifting level and a roughly linear trend, which
//! is what monthly rent histories look like.

use crate::error::ForecastError;
use crate::model::{Forecaster, MonthlySeries};

/// Holt's linear trend forecaster.
///
/// The model equations are:
/// - Level:    `l_t = alpha * y_t + (1 - alpha) * (l_{t-1} + b_{t-1})`
/// - Trend:    `b_t = beta * (l_t - l_{t-1}) + (1 - beta) * b_{t-1}`
/// - Forecast: `y_{t+h} = l_t + h * b_t`
#[derive(Debug, Clone)]
pub struct HoltLinearTrend {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: f64,
    /// Whether fit() picks the parameters itself.
    optimize: bool,
    /// Level state after fitting.
    level: Option<f64>,
    /// Trend state after fitting.
    trend: Option<f64>,
}

impl HoltLinearTrend {
    /// Model with fixed smoothing parameters.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.01, 0.99),
            beta: beta.clamp(0.01, 0.99),
            optimize: false,
            level: None,
            trend: None,
        }
    }

    /// Model that picks `(alpha, beta)` by one-step-ahead SSE over a fixed
    /// coarse grid. The grid keeps fitting deterministic, which the batch
    /// relies on for reproducible output files.
    pub fn auto() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.1,
            optimize: true,
            level: None,
            trend: None,
        }
    }

    /// Level after fitting.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Trend after fitting.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Initial state: first value as level, first difference as trend.
    fn initial_state(values: &[f64]) -> (f64, f64) {
        (values[0], values[1] - values[0])
    }

    /// One-step-ahead sum of squared errors for a parameter pair.
    fn sse(values: &[f64], alpha: f64, beta: f64) -> f64 {
        let (mut l, mut b) = Self::initial_state(values);
        let mut sse = 0.0;
        for &y in &values[1..] {
            let err = y - (l + b);
            sse += err * err;
            let prev = l;
            l = alpha * y + (1.0 - alpha) * (prev + b);
            b = beta * (l - prev) + (1.0 - beta) * b;
        }
        sse
    }

    fn grid_search(values: &[f64]) -> (f64, f64) {
        let mut best = (0.5, 0.1);
        let mut best_sse = f64::INFINITY;
        for ai in 1..10 {
            for bi in 1..10 {
                let (alpha, beta) = (ai as f64 / 10.0, bi as f64 / 10.0);
                let sse = Self::sse(values, alpha, beta);
                if sse.is_finite() && sse < best_sse {
                    best_sse = sse;
                    best = (alpha, beta);
                }
            }
        }
        best
    }
}

impl Default for HoltLinearTrend {
    fn default() -> Self {
        Self::auto()
    }
}

impl Forecaster for HoltLinearTrend {
    fn fit(&mut self, series: &MonthlySeries) -> Result<(), ForecastError> {
        let values = series.values();
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        if self.optimize {
            let (alpha, beta) = Self::grid_search(values);
            self.alpha = alpha;
            self.beta = beta;
        }

        let (mut l, mut b) = Self::initial_state(values);
        for &y in &values[1..] {
            let prev = l;
            l = self.alpha * y + (1.0 - self.alpha) * (prev + b);
            b = self.beta * (l - prev) + (1.0 - self.beta) * b;
        }

        if !l.is_finite() || !b.is_finite() {
            return Err(ForecastError::Computation(
                "non-finite smoothing state".to_string(),
            ));
        }
        self.level = Some(l);
        self.trend = Some(b);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>, ForecastError> {
        let l = self.level.ok_or(ForecastError::FitRequired)?;
        let b = self.trend.ok_or(ForecastError::FitRequired)?;

        let predictions: Vec<f64> = (1..=horizon).map(|h| l + h as f64 * b).collect();
        if predictions.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::Computation(
                "non-finite prediction".to_string(),
            ));
        }
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "HoltLinearTrend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_series(values: &[f64]) -> MonthlySeries {
        let mut s = MonthlySeries::new();
        for (i, &v) in values.iter().enumerate() {
            let month = NaiveDate::from_ymd_opt(2020 + i as i32 / 12, 1 + i as u32 % 12, 1)
                .expect("valid test month");
            s.push(month, v);
        }
        s
    }

    #[test]
    fn exact_on_perfect_linear_trend() {
        // With level = y_0 and trend = y_1 - y_0, a perfectly linear series
        // keeps the one-step error at zero, so predictions continue the line.
        let values: Vec<f64> = (0..12).map(|i| 10.0 + 2.0 * i as f64).collect();
        let mut model = HoltLinearTrend::new(0.9, 0.9);
        model.fit(&make_series(&values)).unwrap();

        assert_relative_eq!(model.trend().unwrap(), 2.0, epsilon = 1e-9);
        let preds = model.predict(3).unwrap();
        assert_relative_eq!(preds[0], 34.0, epsilon = 1e-9);
        assert_relative_eq!(preds[2], 38.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_series_stays_flat() {
        let mut model = HoltLinearTrend::new(0.3, 0.1);
        model.fit(&make_series(&[10.0; 10])).unwrap();

        assert_relative_eq!(model.trend().unwrap(), 0.0, epsilon = 1e-9);
        for pred in model.predict(12).unwrap() {
            assert_relative_eq!(pred, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn auto_fit_is_deterministic() {
        let values: Vec<f64> = (0..24)
            .map(|i| 100.0 + 1.5 * i as f64 + (i as f64 * 0.7).sin())
            .collect();
        let series = make_series(&values);

        let mut a = HoltLinearTrend::auto();
        let mut b = HoltLinearTrend::auto();
        a.fit(&series).unwrap();
        b.fit(&series).unwrap();

        assert_eq!(a.predict(12).unwrap(), b.predict(12).unwrap());
    }

    #[test]
    fn insufficient_data() {
        let mut model = HoltLinearTrend::new(0.3, 0.1);
        assert_eq!(
            model.fit(&make_series(&[10.0])),
            Err(ForecastError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn requires_fit_before_predict() {
        let model = HoltLinearTrend::new(0.3, 0.1);
        assert_eq!(model.predict(5), Err(ForecastError::FitRequired));
    }

    #[test]
    fn overflow_is_a_computation_error() {
        let mut model = HoltLinearTrend::auto();
        let result = model.fit(&make_series(&[f64::MAX, f64::MIN]));
        assert!(matches!(result, Err(ForecastError::Computation(_))));
    }

    #[test]
    fn horizon_length_matches_request() {
        let mut model = HoltLinearTrend::new(0.3, 0.1);
        model
            .fit(&make_series(&[1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        assert_eq!(model.predict(12).unwrap().len(), 12);
        assert!(model.predict(0).unwrap().is_empty());
    }
}
