//! CSV snapshot writers for archiving analysis results.
//!
//! Each file starts with a `#` metadata line, then a header, then one row
//! per entry. Non-finite values are clamped to 0 to avoid CSV pollution.
//! Errors are bubbled up from the filesystem.

use std::io::Write;
use std::path::Path;

use crate::canyon::SimulationResult;
use crate::risk::RiskAssessment;
use crate::topography::TopoGrid;

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Write a simulation result as `time_step,formation_probability,canyon_depth_m`.
pub fn write_csv_simulation(path: &Path, result: &SimulationResult) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "# peak_formation_probability={:.6} final_depth_m={:.6}",
        finite_or_zero(result.peak_formation_probability),
        finite_or_zero(result.final_depth)
    )?;
    writeln!(file, "time_step,formation_probability,canyon_depth_m")?;
    for (i, &t) in result.time_steps.iter().enumerate() {
        let p = finite_or_zero(result.formation_probability[i]);
        let d = finite_or_zero(result.canyon_depth[i]);
        writeln!(file, "{},{},{}", t, p, d)?;
    }
    Ok(())
}

/// Write a risk assessment as `index,risk_score,risk_level`.
pub fn write_csv_risk(path: &Path, assessment: &RiskAssessment) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "# records={} max_stress={:.6} avg_stress={:.6} stress_std={:.6}",
        assessment.risk_scores.len(),
        finite_or_zero(assessment.max_stress),
        finite_or_zero(assessment.avg_stress),
        finite_or_zero(assessment.stress_std)
    )?;
    writeln!(file, "index,risk_score,risk_level")?;
    for (i, (&score, level)) in
        assessment.risk_scores.iter().zip(assessment.risk_levels.iter()).enumerate()
    {
        writeln!(file, "{},{},{}", i, finite_or_zero(score), level.as_str())?;
    }
    Ok(())
}

/// Write a topography grid as `x_km,y_km,elevation_m`, row-major.
pub fn write_csv_topography(path: &Path, grid: &TopoGrid) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# nx={} ny={}", grid.nx, grid.ny)?;
    writeln!(file, "x_km,y_km,elevation_m")?;
    for (row, &y) in grid.y_km.iter().enumerate() {
        for (col, &x) in grid.x_km.iter().enumerate() {
            writeln!(file, "{},{},{}", x, y, finite_or_zero(grid.at(row, col)))?;
        }
    }
    Ok(())
}
