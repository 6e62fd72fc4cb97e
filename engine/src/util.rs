//! Small numeric utilities: sample normalization and summary statistics.

/// Errors from rescaling a sample to the unit interval.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NormalizeError {
    /// The sample contains no values.
    #[error("cannot normalize an empty sample")]
    Empty,
    /// Every value in the sample is identical, so the scale is undefined.
    #[error("sample has zero variance (all values = {0})")]
    ZeroVariance(f64),
}

/// Min-max rescale `values` to [0, 1].
///
/// The minimum maps to 0 and the maximum to 1. A constant sample has no
/// defined scale and is rejected rather than allowed to divide by zero.
pub fn min_max_normalize(values: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    let (min, max) = sample_bounds(values).ok_or(NormalizeError::Empty)?;
    if max == min {
        return Err(NormalizeError::ZeroVariance(min));
    }
    Ok(values.iter().map(|&v| (v - min) / (max - min)).collect())
}

/// Minimum and maximum of a sample, or `None` when empty.
pub fn sample_bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

/// Arithmetic mean; 0.0 for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor n); 0.0 for an empty sample.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Pearson correlation coefficient of two equal-length samples.
///
/// Returns 0.0 when either sample has zero variance; the coefficient is
/// undefined there and callers treat it as "no linear relationship".
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return 0.0;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut cov = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        sx += dx * dx;
        sy += dy * dy;
    }
    let denom = (sx * sy).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}
