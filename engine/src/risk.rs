//! Per-record seismic risk scoring and canyon-formation risk classification.
//!
//! Stress intensity is a von Mises-style scalar built from the in-plane
//! stress tensor components. The composite risk score combines normalized
//! stress intensity, magnitude, and (inverted) depth with fixed 0.4/0.3/0.3
//! weights, so every score lies in [0, 1] for non-degenerate catalogs.

use crate::seismic::SeismicRecord;
use crate::util::{self, NormalizeError};

/// Weight of the normalized stress-intensity term in the composite score.
const W_STRESS: f64 = 0.4;
/// Weight of the normalized magnitude term.
const W_MAGNITUDE: f64 = 0.3;
/// Weight of the inverted normalized depth term (shallower = riskier).
const W_DEPTH: f64 = 0.3;

/// Default composite-score threshold for predicting canyon formation.
pub const DEFAULT_CANYON_RISK_THRESHOLD: f64 = 0.6;

/// Discrete risk label for one composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Score >= 0.8.
    VeryHigh,
    /// Score in [0.6, 0.8).
    High,
    /// Score in [0.4, 0.6).
    Moderate,
    /// Score in [0.2, 0.4).
    Low,
    /// Score < 0.2.
    VeryLow,
}

impl RiskLevel {
    /// Classify a composite score. Thresholds are evaluated high-to-low and
    /// are inclusive on the lower bound.
    pub fn classify(score: f64) -> Self {
        if score >= 0.8 {
            RiskLevel::VeryHigh
        } else if score >= 0.6 {
            RiskLevel::High
        } else if score >= 0.4 {
            RiskLevel::Moderate
        } else if score >= 0.2 {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
            RiskLevel::VeryLow => "Very Low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full risk assessment for one catalog; sequences are parallel to the
/// input records, order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Composite risk score per record, in [0, 1].
    pub risk_scores: Vec<f64>,
    /// Discrete label per record.
    pub risk_levels: Vec<RiskLevel>,
    /// Maximum raw stress intensity across the catalog.
    pub max_stress: f64,
    /// Mean raw stress intensity.
    pub avg_stress: f64,
    /// Population standard deviation of the raw stress intensity.
    pub stress_std: f64,
}

/// Tally of records per risk label. Categories with no members stay at 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RiskCounts {
    /// Records labeled Very High.
    pub very_high: usize,
    /// Records labeled High.
    pub high: usize,
    /// Records labeled Moderate.
    pub moderate: usize,
    /// Records labeled Low.
    pub low: usize,
    /// Records labeled Very Low.
    pub very_low: usize,
}

impl RiskCounts {
    /// Count labels across an assessment.
    pub fn tally(levels: &[RiskLevel]) -> Self {
        let mut counts = RiskCounts::default();
        for &level in levels {
            match level {
                RiskLevel::VeryHigh => counts.very_high += 1,
                RiskLevel::High => counts.high += 1,
                RiskLevel::Moderate => counts.moderate += 1,
                RiskLevel::Low => counts.low += 1,
                RiskLevel::VeryLow => counts.very_low += 1,
            }
        }
        counts
    }

    /// Records counted across all five categories.
    pub fn total(&self) -> usize {
        self.very_high + self.high + self.moderate + self.low + self.very_low
    }

    /// Print a one-line summary of the tally.
    pub fn print_summary(&self, label: &str) {
        println!(
            "[risk] {}: n={} very_high={} high={} moderate={} low={} very_low={}",
            label,
            self.total(),
            self.very_high,
            self.high,
            self.moderate,
            self.low,
            self.very_low
        );
    }
}

/// Errors from risk assessment.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RiskError {
    /// The catalog contains no records.
    #[error("no seismic records to assess")]
    Empty,
    /// A column has zero variance; min-max normalization is undefined.
    #[error("column '{0}' has zero variance; risk normalization undefined")]
    DegenerateColumn(&'static str),
}

/// Von Mises-style stress intensity for one set of tensor components:
/// `sqrt(0.5*((xx-yy)^2 + 4*xy^2) + (xx+yy)^2/4)`.
///
/// The divisor on the second term is 4, not 2. Always non-negative, and
/// symmetric under swapping xx and yy.
pub fn stress_intensity_one(xx: f64, yy: f64, xy: f64) -> f64 {
    let deviatoric = 0.5 * ((xx - yy) * (xx - yy) + 4.0 * xy * xy);
    let mean_sq = (xx + yy) * (xx + yy) / 4.0;
    (deviatoric + mean_sq).sqrt()
}

/// Stress intensity per record, order preserved.
pub fn stress_intensity(records: &[SeismicRecord]) -> Vec<f64> {
    records.iter().map(|r| stress_intensity_one(r.stress_xx, r.stress_yy, r.stress_xy)).collect()
}

fn normalize_column(values: &[f64], name: &'static str) -> Result<Vec<f64>, RiskError> {
    util::min_max_normalize(values).map_err(|e| match e {
        NormalizeError::Empty => RiskError::Empty,
        NormalizeError::ZeroVariance(_) => RiskError::DegenerateColumn(name),
    })
}

/// Assess seismic risk for a catalog.
///
/// Normalizes magnitude, depth, and stress intensity independently, combines
/// them into a composite score per record (deeper events lower the score),
/// labels each score, and aggregates statistics over the raw intensities.
pub fn assess_seismic_risk(records: &[SeismicRecord]) -> Result<RiskAssessment, RiskError> {
    if records.is_empty() {
        return Err(RiskError::Empty);
    }
    let intensity = stress_intensity(records);
    let magnitude: Vec<f64> = records.iter().map(|r| r.magnitude).collect();
    let depth: Vec<f64> = records.iter().map(|r| r.depth_km).collect();

    let norm_mag = normalize_column(&magnitude, "magnitude")?;
    let norm_depth = normalize_column(&depth, "depth_km")?;
    let norm_stress = normalize_column(&intensity, "stress_intensity")?;

    let risk_scores: Vec<f64> = (0..records.len())
        .map(|i| {
            W_STRESS * norm_stress[i] + W_MAGNITUDE * norm_mag[i] + W_DEPTH * (1.0 - norm_depth[i])
        })
        .collect();
    let risk_levels: Vec<RiskLevel> = risk_scores.iter().map(|&s| RiskLevel::classify(s)).collect();

    let (_, max_stress) = util::sample_bounds(&intensity).ok_or(RiskError::Empty)?;
    Ok(RiskAssessment {
        risk_scores,
        risk_levels,
        max_stress,
        avg_stress: util::mean(&intensity),
        stress_std: util::std_dev(&intensity),
    })
}

/// Predict canyon formation per record by thresholding the composite score
/// (inclusive `>=`), and tally labels across the catalog.
pub fn assess_canyon_risk(
    records: &[SeismicRecord],
    threshold: f64,
) -> Result<(Vec<bool>, RiskCounts), RiskError> {
    let assessment = assess_seismic_risk(records)?;
    let predictions: Vec<bool> = assessment.risk_scores.iter().map(|&s| s >= threshold).collect();
    let counts = RiskCounts::tally(&assessment.risk_levels);
    Ok((predictions, counts))
}
