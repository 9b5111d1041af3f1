mod aggregate;
pub use aggregate::{aggregate, aggregate_all, Aggregate, TaskStat};

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Error, Result};

pub const CONFIDENCE: f64 = 0.95;

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard error of the mean, with one degree of freedom removed.
pub fn sem(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1.0);
    (var / n).sqrt()
}

/// Distance from the mean to the lower bound of the Student's-t interval at [`CONFIDENCE`].
///
/// NaN when the mean is exactly zero, when there is a single value, or when all
/// values coincide; the interval is undefined or degenerate there.
pub fn confidence_half_width(values: &[f64]) -> Result<f64> {
    let m = mean(values);
    if m == 0.0 || values.len() < 2 {
        return Ok(f64::NAN);
    }
    let scale = sem(values);
    if scale == 0.0 {
        return Ok(f64::NAN);
    }
    let dof = (values.len() - 1) as f64;
    let dist = StudentsT::new(m, scale, dof).map_err(|e| Error::Distribution(e.to_string()))?;
    let lower = dist.inverse_cdf((1.0 - CONFIDENCE) / 2.0);
    Ok(m - lower)
}
