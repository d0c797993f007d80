// SPDX-License-Identifier: PMPL-1.0-or-later
//! Focus order rule - WCAG 2.4.3 Focus Order
//!
//! A positive tabindex overrides the document's natural tab order and
//! almost always produces a confusing focus sequence. tabindex="0" and
//! tabindex="-1" are fine.

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::path::Path;

/// Positive-tabindex rule
pub struct FocusRule;

impl Rule for FocusRule {
    fn id(&self) -> &str {
        "focus"
    }

    fn description(&self) -> &str {
        "Checks for positive tabindex values (WCAG 2.4.3)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let selector = Selector::parse("[tabindex]").expect("valid selector");
        let mut diagnostics = Vec::new();

        for element in document.select(&selector) {
            let raw = element.value().attr("tabindex").unwrap_or("");
            let Ok(index) = raw.trim().parse::<i32>() else {
                continue;
            };
            if index <= 0 {
                continue;
            }

            let mut diagnostic = Diagnostic::new(
                "focus-positive-tabindex",
                Severity::Warning,
                &format!(
                    "tabindex=\"{}\" overrides the natural focus order. Positive values create unpredictable tab sequences.",
                    index
                ),
            )
            .with_wcag("2.4.3")
            .with_file(path.to_path_buf())
            .with_element(&element.html())
            .with_suggestion("Use tabindex=\"0\" and rely on document order, or reorder the markup");
            if let Some(line) = find_line(source, "tabindex") {
                diagnostic = diagnostic.with_line(line);
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}
