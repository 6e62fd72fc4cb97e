//! Planar stress-field helpers over paired (x, y) sample coordinates.
//!
//! These operate on flattened coordinate arrays: element i of every input
//! refers to the same sample point. They feed the external visualizers and
//! the CLI's exceedance summaries; the time-stepping simulator lives in
//! [`crate::canyon`].

use crate::util;

/// Default stress threshold (Pa) above which a cell is flagged as a canyon
/// formation site.
pub const DEFAULT_CANYON_STRESS_THRESHOLD_PA: f64 = 50.0e6;

/// Gaussian falloff length-squared scale for the planar stress bump.
const STRESS_FALLOFF: f64 = 2.0 * 1.0e6;

/// Errors from planar field construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    /// Paired input arrays differ in length.
    #[error("field arrays differ in length ({0} vs {1})")]
    LengthMismatch(usize, usize),
    /// The field contains no samples.
    #[error("field is empty")]
    Empty,
    /// The field maximum is not positive, so rescaling by it is undefined.
    #[error("field maximum is not positive; cannot rescale")]
    NonPositiveMax,
}

/// Simplified planar stress field: a Gaussian bump of height
/// `stress_magnitude` centered on the coordinate centroid.
pub fn planar_stress_field(
    x: &[f64],
    y: &[f64],
    stress_magnitude: f64,
) -> Result<Vec<f64>, FieldError> {
    if x.len() != y.len() {
        return Err(FieldError::LengthMismatch(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(FieldError::Empty);
    }
    let mx = util::mean(x);
    let my = util::mean(y);
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let dx = xi - mx;
            let dy = yi - my;
            stress_magnitude * (-(dx * dx + dy * dy) / STRESS_FALLOFF).exp()
        })
        .collect())
}

/// Flag cells whose stress exceeds `threshold`.
pub fn canyon_mask(stress_field: &[f64], threshold: f64) -> Vec<bool> {
    stress_field.iter().map(|&s| s > threshold).collect()
}

/// Formation probability per cell: the elementwise product of stress and
/// activity rescaled by its own maximum, so values lie in [0, 1].
pub fn formation_probability_map(
    stress_field: &[f64],
    seismic_activity: &[f64],
) -> Result<Vec<f64>, FieldError> {
    if stress_field.len() != seismic_activity.len() {
        return Err(FieldError::LengthMismatch(stress_field.len(), seismic_activity.len()));
    }
    if stress_field.is_empty() {
        return Err(FieldError::Empty);
    }
    let product: Vec<f64> =
        stress_field.iter().zip(seismic_activity.iter()).map(|(&s, &a)| s * a).collect();
    let max = product.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max.is_nan() || max <= 0.0 {
        return Err(FieldError::NonPositiveMax);
    }
    Ok(product.iter().map(|&p| p / max).collect())
}
