//! Plate-kinematic stress model for oceanic plates.
//!
//! Converts plate velocity and lithosphere thicknesses into a scalar stress
//! and strain-rate summary using a simplified elastic formulation. The
//! numbers are illustrative, not engineering-grade; see the project notes.

use crate::units;

/// Default Poisson's ratio for oceanic crustal material.
pub const DEFAULT_POISSONS_RATIO: f64 = 0.25;

/// Scalar stress/strain-rate summary for one set of plate kinematics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressSummary {
    /// Maximum stress (Pa-scale in this simplified model).
    pub maximum_stress: f64,
    /// Strain rate (1/s).
    pub strain_rate: f64,
    /// Normal stress along x.
    pub normal_stress_x: f64,
    /// Normal stress along y. Identical to x by construction; the model
    /// assumes isotropic in-plane stress.
    pub normal_stress_y: f64,
    /// Shear stress.
    pub shear_stress: f64,
}

/// Errors from the stress model.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StressError {
    /// Elastic thickness must be strictly positive; it is the divisor in
    /// both the stress and strain-rate formulas.
    #[error("elastic thickness must be positive, got {0} km")]
    NonPositiveElasticThickness(f64),
}

/// Compute the stress distribution for a plate moving at
/// `plate_velocity_cm_per_yr` with the given thicknesses (km) and
/// Poisson's ratio.
///
/// `stress = v * h_crust / h_elastic` with both thicknesses in meters and
/// the velocity converted to m/s; `strain_rate = v / h_elastic`. Normal
/// stresses are `stress * (1 - nu)` on both axes and shear is `stress * nu`.
pub fn compute_stress_distribution(
    plate_velocity_cm_per_yr: f64,
    crustal_thickness_km: f64,
    elastic_thickness_km: f64,
    poissons_ratio: f64,
) -> Result<StressSummary, StressError> {
    if elastic_thickness_km <= 0.0 {
        return Err(StressError::NonPositiveElasticThickness(elastic_thickness_km));
    }
    let velocity_m_s = units::cm_per_yr_to_m_per_s(plate_velocity_cm_per_yr);
    let elastic_thickness_m = units::km_to_m(elastic_thickness_km);
    let stress = velocity_m_s * units::km_to_m(crustal_thickness_km) / elastic_thickness_m;
    let strain_rate = velocity_m_s / elastic_thickness_m;
    Ok(StressSummary {
        maximum_stress: stress,
        strain_rate,
        normal_stress_x: stress * (1.0 - poissons_ratio),
        normal_stress_y: stress * (1.0 - poissons_ratio),
        shear_stress: stress * poissons_ratio,
    })
}
