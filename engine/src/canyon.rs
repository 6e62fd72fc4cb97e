//! Canyon formation simulator.
//!
//! Couples a stress summary with a seismic-activity time series: activity is
//! normalized to [0, 1], scaled by stress and strain-rate terms, perturbed
//! with seeded Gaussian noise, clipped, and fed into a saturating depth
//! recurrence where growth scales with remaining capacity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::stress::StressSummary;
use crate::util::{self, NormalizeError};

/// Parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanyonParams {
    /// Number of depth-recurrence steps. Must not exceed the activity length.
    pub time_steps: usize,
    /// Seed for the noise generator.
    pub noise_seed: u64,
    /// Standard deviation of the Gaussian noise added to the probability.
    pub noise_std: f64,
    /// Per-step growth-rate constant in the depth recurrence.
    pub growth_rate: f64,
    /// Saturation depth in meters; growth stops as depth approaches it.
    pub max_depth_m: f64,
}

impl Default for CanyonParams {
    fn default() -> Self {
        Self { time_steps: 100, noise_seed: 42, noise_std: 0.1, growth_rate: 0.1, max_depth_m: 1000.0 }
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Step indices 0..time_steps.
    pub time_steps: Vec<u32>,
    /// Per-sample formation probability in [0, 1]; one entry per activity
    /// sample (may be longer than the depth sequence).
    pub formation_probability: Vec<f64>,
    /// Accumulated canyon depth in meters, length = time_steps,
    /// non-decreasing and bounded by the saturation depth.
    pub canyon_depth: Vec<f64>,
    /// Maximum of the formation-probability sequence.
    pub peak_formation_probability: f64,
    /// Depth at the final step.
    pub final_depth: f64,
}

/// Errors from the simulator.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SimError {
    /// The depth recurrence needs at least one step.
    #[error("time_steps must be at least 1")]
    ZeroTimeSteps,
    /// The activity series is empty.
    #[error("seismic activity series is empty")]
    EmptyActivity,
    /// The activity series is constant; normalization is undefined.
    #[error("seismic activity has zero variance; normalization undefined")]
    DegenerateActivity,
    /// The recurrence would index past the end of the probability sequence.
    #[error("time_steps ({time_steps}) exceeds seismic activity samples ({samples})")]
    LengthMismatch {
        /// Requested number of recurrence steps.
        time_steps: usize,
        /// Available activity samples.
        samples: usize,
    },
    /// The noise standard deviation is negative or non-finite.
    #[error("invalid noise standard deviation {0}")]
    InvalidNoiseStd(f64),
}

/// Run the simulation with a generator seeded from `params.noise_seed`.
///
/// The same seed and inputs produce bit-identical output across runs.
pub fn simulate(
    stress: &StressSummary,
    seismic_activity: &[f64],
    params: &CanyonParams,
) -> Result<SimulationResult, SimError> {
    let mut rng = StdRng::seed_from_u64(params.noise_seed);
    simulate_with_rng(stress, seismic_activity, params, &mut rng)
}

/// Run the simulation with a caller-supplied noise generator.
///
/// Injecting the generator keeps concurrent callers independent and lets
/// tests supply a stub source.
pub fn simulate_with_rng<R: Rng>(
    stress: &StressSummary,
    seismic_activity: &[f64],
    params: &CanyonParams,
    rng: &mut R,
) -> Result<SimulationResult, SimError> {
    if params.time_steps == 0 {
        return Err(SimError::ZeroTimeSteps);
    }
    if seismic_activity.is_empty() {
        return Err(SimError::EmptyActivity);
    }
    if params.time_steps > seismic_activity.len() {
        return Err(SimError::LengthMismatch {
            time_steps: params.time_steps,
            samples: seismic_activity.len(),
        });
    }
    let normalized = util::min_max_normalize(seismic_activity).map_err(|e| match e {
        NormalizeError::Empty => SimError::EmptyActivity,
        NormalizeError::ZeroVariance(_) => SimError::DegenerateActivity,
    })?;

    // Floor clamps keep the ratio terms finite near zero. The guards differ
    // (1e-10 vs 1e-15) because stress sits at Pa scale while strain rate is
    // orders of magnitude smaller.
    let stress_term = stress.maximum_stress / stress.maximum_stress.max(1.0e-10);
    let strain_term = stress.strain_rate / stress.strain_rate.max(1.0e-15);

    let noise = Normal::new(0.0, params.noise_std)
        .map_err(|_| SimError::InvalidNoiseStd(params.noise_std))?;
    let formation_probability: Vec<f64> = normalized
        .iter()
        .map(|&s| {
            let base = stress_term * (s + 0.1) * strain_term;
            (base + noise.sample(rng)).clamp(0.0, 1.0)
        })
        .collect();

    let mut canyon_depth = vec![0.0f64; params.time_steps];
    for i in 1..params.time_steps {
        let prev = canyon_depth[i - 1];
        let grown =
            prev + formation_probability[i] * (1.0 - prev / params.max_depth_m) * params.growth_rate;
        canyon_depth[i] = grown.min(params.max_depth_m);
    }

    let peak_formation_probability = formation_probability.iter().copied().fold(0.0, f64::max);
    let final_depth = canyon_depth[params.time_steps - 1];
    Ok(SimulationResult {
        time_steps: (0..params.time_steps as u32).collect(),
        formation_probability,
        canyon_depth,
        peak_formation_probability,
        final_depth,
    })
}
