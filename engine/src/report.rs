//! Fixed-template plain-text geological reports.
//!
//! The engine stays clock-free: the caller supplies the `generated_at`
//! timestamp along with the rest of the section content.

use std::io::Write;
use std::path::Path;

/// Content for one report. All fields are plain strings or string lists;
/// the template does no further interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInputs<'a> {
    /// Kind of analysis performed, e.g. "Seismic Risk Assessment".
    pub analysis_type: &'a str,
    /// Overall summary paragraph.
    pub summary: &'a str,
    /// Important findings, one bullet each.
    pub key_findings: &'a [String],
    /// Summary of the analyzed data.
    pub data_summary: &'a str,
    /// Recommendations, one bullet each.
    pub recommendations: &'a [String],
    /// Analysis parameters as key/value pairs, rendered `key: value`.
    pub parameters: &'a [(String, String)],
    /// Timestamp string, supplied by the caller.
    pub generated_at: &'a str,
}

/// Render the fixed report template to a string.
pub fn render_report(inputs: &ReportInputs<'_>) -> String {
    let findings: String =
        inputs.key_findings.iter().map(|f| format!("\u{2022} {f}\n")).collect();
    let recommendations: String =
        inputs.recommendations.iter().map(|r| format!("\u{2022} {r}\n")).collect();
    let parameters: String =
        inputs.parameters.iter().map(|(k, v)| format!("{k}: {v}\n")).collect();
    format!(
        "GEOLOGICAL ANALYSIS REPORT\n\
         ==========================\n\
         \n\
         Project: seafloor-tectonic-analyzer\n\
         Generated: {generated_at}\n\
         Analysis Type: {analysis_type}\n\
         \n\
         SUMMARY\n\
         -------\n\
         {summary}\n\
         \n\
         KEY FINDINGS\n\
         ------------\n\
         {findings}\
         \n\
         DATA SUMMARY\n\
         ------------\n\
         {data_summary}\n\
         \n\
         RECOMMENDATIONS\n\
         ---------------\n\
         {recommendations}\
         \n\
         ANALYSIS PARAMETERS\n\
         -------------------\n\
         {parameters}",
        generated_at = inputs.generated_at,
        analysis_type = inputs.analysis_type,
        summary = inputs.summary,
        findings = findings,
        data_summary = inputs.data_summary,
        recommendations = recommendations,
        parameters = parameters,
    )
}

/// Render the report and write it to `path`, creating parent directories.
pub fn write_report(path: &Path, inputs: &ReportInputs<'_>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = std::fs::File::create(path)?;
    file.write_all(render_report(inputs).as_bytes())
}
