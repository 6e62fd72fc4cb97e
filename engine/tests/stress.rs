use engine::stress::{compute_stress_distribution, StressError, DEFAULT_POISSONS_RATIO};
use engine::units;

#[test]
fn scenario_matches_closed_form() {
    let s = compute_stress_distribution(5.0, 7.0, 50.0, DEFAULT_POISSONS_RATIO)
        .expect("valid kinematics");
    let velocity_m_s = units::cm_per_yr_to_m_per_s(5.0);
    let expected_stress = velocity_m_s * 7000.0 / 50_000.0;
    let expected_strain = velocity_m_s / 50_000.0;
    assert!((s.maximum_stress - expected_stress).abs() < 1e-24, "stress = {}", s.maximum_stress);
    assert!((s.strain_rate - expected_strain).abs() < 1e-28, "strain = {}", s.strain_rate);
}

#[test]
fn stress_components_follow_poissons_ratio() {
    let s = compute_stress_distribution(5.0, 7.0, 50.0, 0.25).expect("valid kinematics");
    assert!((s.shear_stress - 0.25 * s.maximum_stress).abs() < 1e-24);
    assert!((s.normal_stress_x - 0.75 * s.maximum_stress).abs() < 1e-24);
    // The model is isotropic in-plane: both normal components are equal.
    assert_eq!(s.normal_stress_x, s.normal_stress_y);
}

#[test]
fn non_positive_elastic_thickness_is_rejected() {
    assert_eq!(
        compute_stress_distribution(5.0, 7.0, 0.0, DEFAULT_POISSONS_RATIO),
        Err(StressError::NonPositiveElasticThickness(0.0))
    );
    assert_eq!(
        compute_stress_distribution(5.0, 7.0, -10.0, DEFAULT_POISSONS_RATIO),
        Err(StressError::NonPositiveElasticThickness(-10.0))
    );
}

#[test]
fn faster_plates_carry_more_stress() {
    let slow = compute_stress_distribution(2.0, 7.0, 50.0, 0.25).expect("valid kinematics");
    let fast = compute_stress_distribution(8.0, 7.0, 50.0, 0.25).expect("valid kinematics");
    assert!(fast.maximum_stress > slow.maximum_stress);
    assert!(fast.strain_rate > slow.strain_rate);
}
