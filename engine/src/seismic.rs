//! Seismic catalog records and summary statistics.
//!
//! A catalog is an ordered slice of [`SeismicRecord`]; parsing and column
//! validation happen at the ingestion boundary (the CLI), so the engine only
//! ever sees well-formed numeric records.

use crate::util;

/// One row of a seismic catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeismicRecord {
    /// Event magnitude.
    pub magnitude: f64,
    /// Hypocenter depth in km (positive down).
    pub depth_km: f64,
    /// Distance from the nearest plate boundary in km.
    pub distance_from_boundary_km: f64,
    /// In-plane stress tensor component sigma_xx.
    pub stress_xx: f64,
    /// In-plane stress tensor component sigma_yy.
    pub stress_yy: f64,
    /// In-plane stress tensor component sigma_xy.
    pub stress_xy: f64,
}

/// Aggregate statistics over a seismic catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    /// Mean event magnitude.
    pub mean_magnitude: f64,
    /// Largest event magnitude.
    pub max_magnitude: f64,
    /// Number of events in the catalog.
    pub total_events: usize,
    /// Depth spread (max - min) in km.
    pub depth_range_km: f64,
    /// Pearson correlation between magnitude and depth; 0.0 when either
    /// column has zero variance.
    pub magnitude_depth_correlation: f64,
}

/// Errors from catalog-level operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SeismicError {
    /// The catalog contains no records.
    #[error("no seismic records loaded")]
    Empty,
}

/// Summarize activity patterns across a catalog.
pub fn catalog_stats(records: &[SeismicRecord]) -> Result<CatalogStats, SeismicError> {
    if records.is_empty() {
        return Err(SeismicError::Empty);
    }
    let magnitude: Vec<f64> = records.iter().map(|r| r.magnitude).collect();
    let depth: Vec<f64> = records.iter().map(|r| r.depth_km).collect();
    let (depth_min, depth_max) = util::sample_bounds(&depth).ok_or(SeismicError::Empty)?;
    let (_, max_magnitude) = util::sample_bounds(&magnitude).ok_or(SeismicError::Empty)?;
    Ok(CatalogStats {
        mean_magnitude: util::mean(&magnitude),
        max_magnitude,
        total_events: records.len(),
        depth_range_km: depth_max - depth_min,
        magnitude_depth_correlation: util::pearson(&magnitude, &depth),
    })
}
