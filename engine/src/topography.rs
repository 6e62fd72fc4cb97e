//! Synthetic seafloor topography for demonstrations and profile extraction.
//!
//! The grid covers [-100, 100] km on both axes with two Gaussian canyon
//! depressions, matching the sample surface the visualizers render.
//! Elevation is in meters, negative below sea level.

/// A row-major elevation grid with its axis coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TopoGrid {
    /// Columns (x samples).
    pub nx: usize,
    /// Rows (y samples).
    pub ny: usize,
    /// X coordinates in km, length nx.
    pub x_km: Vec<f64>,
    /// Y coordinates in km, length ny.
    pub y_km: Vec<f64>,
    /// Elevation in meters, row-major (ny rows of nx), all <= 0.
    pub elevation_m: Vec<f64>,
}

impl TopoGrid {
    /// Elevation at (row, col); panics on out-of-range indices like any
    /// slice access.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.elevation_m[row * self.nx + col]
    }
}

/// Uniformly spaced samples from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n as f64 - 1.0);
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Build an nx-by-ny synthetic seafloor with two canyon depressions:
/// 1000 m deep near (20, 30) km and 500 m deep near (-30, -20) km.
pub fn synthetic_canyon_topography(nx: usize, ny: usize) -> TopoGrid {
    let x_km = linspace(-100.0, 100.0, nx);
    let y_km = linspace(-100.0, 100.0, ny);
    let mut elevation_m = Vec::with_capacity(nx * ny);
    for &y in &y_km {
        for &x in &x_km {
            let main = -1000.0 * (-((x - 20.0).powi(2) + (y - 30.0).powi(2)) / 2000.0).exp();
            let side = -500.0 * (-((x + 30.0).powi(2) + (y + 20.0).powi(2)) / 1500.0).exp();
            elevation_m.push(main + side);
        }
    }
    TopoGrid { nx, ny, x_km, y_km, elevation_m }
}

/// Extract a cross-section along grid row `row`: distance along the profile
/// (km, from the row's west end) paired with elevation (m). `None` when the
/// row is out of range.
pub fn canyon_cross_section(grid: &TopoGrid, row: usize) -> Option<(Vec<f64>, Vec<f64>)> {
    if row >= grid.ny {
        return None;
    }
    let start = grid.x_km.first().copied()?;
    let distance_km: Vec<f64> = grid.x_km.iter().map(|&x| x - start).collect();
    let elevation_m: Vec<f64> =
        (0..grid.nx).map(|col| grid.elevation_m[row * grid.nx + col]).collect();
    Some((distance_km, elevation_m))
}
