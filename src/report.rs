// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for accessibility diagnostics.
//!
//! Supports multiple output formats:
//! - Text: human-readable diagnostics with WCAG criterion references
//! - JSON: structured diagnostics for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::diagnostics::{DiagnosticSet, Severity};
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from diagnostics
pub fn generate_report(diagnostics: &DiagnosticSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(diagnostics),
        OutputFormat::Json => generate_json_report(diagnostics),
        OutputFormat::Sarif => generate_sarif_report(diagnostics),
    }
}

/// Generate human-readable text report
fn generate_text_report(diagnostics: &DiagnosticSet) -> String {
    let mut output = String::new();

    output.push_str("=== a11ylint Accessibility Report ===\n\n");

    if diagnostics.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    let errors = diagnostics.errors().len();
    let warnings = diagnostics.warnings().len();
    let total = diagnostics.len();

    output.push_str(&format!(
        "Found {} issue(s): {} error(s), {} warning(s), {} info/hint(s)\n\n",
        total,
        errors,
        warnings,
        total - errors - warnings
    ));

    // Group by severity
    for severity in &[Severity::Error, Severity::Warning, Severity::Info, Severity::Hint] {
        let sev_diagnostics = diagnostics.by_severity(*severity);
        if sev_diagnostics.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", severity, sev_diagnostics.len()));

        for diagnostic in sev_diagnostics {
            output.push_str(&format!("[{}] {}\n", diagnostic.rule_id, diagnostic.message));

            if diagnostic.file.is_some() {
                output.push_str(&format!("  Location: {}\n", diagnostic.location_string()));
            }

            if let Some(ref criterion) = diagnostic.wcag_criterion {
                output.push_str(&format!("  WCAG: {}\n", criterion));
            }

            if let Some(ref suggestion) = diagnostic.suggestion {
                output.push_str(&format!("  Fix: {}\n", suggestion));
            }

            output.push('\n');
        }
    }

    if diagnostics.has_errors() {
        output.push_str("RESULT: FAIL (errors found)\n");
    } else if warnings > 0 {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

/// Generate JSON report
fn generate_json_report(diagnostics: &DiagnosticSet) -> String {
    serde_json::to_string_pretty(diagnostics)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize diagnostics: {}\"}}", e))
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(rename = "informationUri")]
    information_uri: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: Option<SarifRegion>,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

/// Generate SARIF report
fn generate_sarif_report(diagnostics: &DiagnosticSet) -> String {
    let results: Vec<SarifResult> = diagnostics
        .diagnostics
        .iter()
        .map(|d| {
            let level = match d.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "note",
                Severity::Hint => "note",
            };

            let mut locations = Vec::new();
            if let Some(ref file) = d.file {
                locations.push(SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: file.display().to_string(),
                        },
                        region: d.line.map(|l| SarifRegion { start_line: l }),
                    },
                });
            }

            SarifResult {
                rule_id: d.rule_id.clone(),
                level: level.to_string(),
                message: SarifMessage {
                    text: d.message.clone(),
                },
                locations,
            }
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11ylint".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    information_uri: "https://github.com/a11ylint/a11ylint".to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e))
}
