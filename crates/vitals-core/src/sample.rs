// File: crates/vitals-core/src/sample.rs
// Summary: Sampling domain and per-series functions of x.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::Series;

/// Upper bound on samples per series.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Half-open sampling domain `[start, end)` walked in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    start: f64,
    end: f64,
    step: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(ChartError::InvalidDomain(format!("non-finite bounds [{start}, {end}) step {step}")));
        }
        if step <= 0.0 {
            return Err(ChartError::InvalidDomain(format!("step must be positive, got {step}")));
        }
        if end < start {
            return Err(ChartError::InvalidDomain(format!("end {end} is before start {start}")));
        }
        let count = ((end - start) / step).ceil();
        if !count.is_finite() || count > MAX_SAMPLES as f64 {
            return Err(ChartError::InvalidDomain(format!(
                "[{start}, {end}) step {step} needs more than {MAX_SAMPLES} samples"
            )));
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> f64 { self.start }
    pub fn end(&self) -> f64 { self.end }
    pub fn step(&self) -> f64 { self.step }

    /// Sample positions `start + i * step` strictly below `end`.
    ///
    /// Positions are computed from the index so long domains do not
    /// accumulate rounding error.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        // Tolerance keeps e.g. [0, 1) step 0.1 at ten samples.
        let limit = self.end - self.step * 1e-9;
        (0u64..)
            .map(move |i| self.start + self.step * i as f64)
            .take_while(move |&x| x < limit)
    }

    pub fn len(&self) -> usize { self.xs().count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Default for Domain {
    /// `[0, 10)` in steps of 0.5: twenty samples.
    fn default() -> Self {
        Self { start: 0.0, end: 10.0, step: 0.5 }
    }
}

/// A function of x that yields one series.
pub trait SeriesFn {
    fn eval(&self, x: f64) -> Result<f64>;
}

impl<F> SeriesFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> Result<f64> {
        Ok(self(x))
    }
}

/// Evaluate `f` over `domain` into a labeled series.
///
/// Fails on the first non-finite value.
pub fn sample(label: impl Into<String>, domain: &Domain, f: &dyn SeriesFn) -> Result<Series> {
    let label = label.into();
    let mut series = Series::new(label.clone());
    for x in domain.xs() {
        let y = f.eval(x)?;
        if !y.is_finite() {
            return Err(ChartError::NonFinite { label, x });
        }
        series.push(x, y);
    }
    debug!(label = %series.label, points = series.len(), "sampled series");
    Ok(series)
}
