// SPDX-License-Identifier: PMPL-1.0-or-later
//! Diagnostic types produced by accessibility rules.
//!
//! A [`Diagnostic`] is one reported finding with severity, message, and
//! best-effort source location. Rules build diagnostics; the report module
//! renders them. Severity policy lives entirely here and in the rules —
//! the landmark core never assigns severities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed - drives a non-zero exit
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
    /// Suggestion for improvement
    Hint,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
            Severity::Hint => write!(f, "HINT"),
        }
    }
}

/// A single accessibility finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique identifier
    pub id: Uuid,
    /// Source tool identifier
    pub source: String,
    /// Rule/check identifier (e.g., "images-missing-alt")
    pub rule_id: String,
    /// Severity level
    pub severity: Severity,
    /// Detailed message
    pub message: String,
    /// File where the issue was found
    pub file: Option<PathBuf>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed)
    pub column: Option<usize>,
    /// Offending HTML element
    pub element: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
    /// WCAG criterion reference (e.g., "1.1.1")
    pub wcag_criterion: Option<String>,
    /// When this diagnostic was created
    pub created_at: DateTime<Utc>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: "a11ylint".to_string(),
            rule_id: rule_id.to_string(),
            severity,
            message: message.to_string(),
            file: None,
            line: None,
            column: None,
            element: None,
            suggestion: None,
            wcag_criterion: None,
            created_at: Utc::now(),
        }
    }

    /// Set file location
    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    /// Set line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set column number
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Set the offending HTML element
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }

    /// Set suggestion
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    /// Set the WCAG criterion
    pub fn with_wcag(mut self, criterion: &str) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self
    }

    /// Get location string for display
    pub fn location_string(&self) -> String {
        match (&self.file, self.line) {
            (Some(f), Some(l)) => format!("{}:{}", f.display(), l),
            (Some(f), None) => f.display().to_string(),
            _ => "<unknown>".to_string(),
        }
    }
}

/// A collection of diagnostics with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticSet {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Extend with diagnostics from an iterator
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Get diagnostics by severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == severity).collect()
    }

    /// Get all errors
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.by_severity(Severity::Error)
    }

    /// Get all warnings
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
