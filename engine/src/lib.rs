//! Seafloor tectonic analysis engine.
//!
//! Computes simplified plate-kinematic stress summaries, per-record seismic
//! risk scores, and a probabilistic canyon-formation simulation, plus the
//! text-report and CSV-snapshot writers that archive their results.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod canyon;
pub mod fields;
pub mod report;
pub mod risk;
pub mod seismic;
pub mod snapshots;
pub mod stress;
pub mod topography;
pub mod units;
pub mod util;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
