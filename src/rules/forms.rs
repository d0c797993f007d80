// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labelling rule - WCAG 3.3.2 Labels or Instructions
//!
//! Every user-facing input needs a programmatic label: a `<label for>`
//! association, `aria-label`/`aria-labelledby`, or a `title`. A
//! placeholder is not a label; it disappears on input and is skipped by
//! many screen readers.

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::path::Path;

/// Input types that render no user-facing field needing a label
const UNLABELLED_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

/// Form input labelling rule
pub struct FormRule;

impl Rule for FormRule {
    fn id(&self) -> &str {
        "forms"
    }

    fn description(&self) -> &str {
        "Checks that form inputs are programmatically labelled (WCAG 3.3.2)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let input_selector = Selector::parse("input").expect("valid selector");
        let label_selector = Selector::parse("label[for]").expect("valid selector");
        let mut diagnostics = Vec::new();

        // ids referenced by <label for="..."> anywhere in the document
        let labelled_ids: HashSet<&str> = document
            .select(&label_selector)
            .filter_map(|label| label.value().attr("for"))
            .collect();

        for element in document.select(&input_selector) {
            let value = element.value();
            let input_type = value.attr("type").unwrap_or("text").to_lowercase();
            if UNLABELLED_TYPES.contains(&input_type.as_str()) {
                continue;
            }

            let has_label = value
                .attr("id")
                .map(|id| labelled_ids.contains(id))
                .unwrap_or(false)
                || value.attr("aria-label").is_some()
                || value.attr("aria-labelledby").is_some()
                || value.attr("title").is_some();

            if has_label {
                continue;
            }

            let element_html = element.html();
            let locate = value
                .attr("name")
                .or(value.attr("id"))
                .and_then(|needle| find_line(source, needle))
                .or_else(|| find_line(source, "<input"));

            let mut diagnostic = if value.attr("placeholder").is_some() {
                Diagnostic::new(
                    "forms-placeholder-label",
                    Severity::Warning,
                    "Input relies on a placeholder as its only label. Placeholders vanish on input and are not reliable labels.",
                )
                .with_suggestion("Add a <label for> association or an aria-label in addition to the placeholder")
            } else {
                Diagnostic::new(
                    "forms-missing-label",
                    Severity::Error,
                    "Input has no programmatic label. Screen reader users cannot tell what to enter.",
                )
                .with_suggestion("Associate a <label for=\"...\"> with the input, or add aria-label")
            };

            diagnostic = diagnostic
                .with_wcag("3.3.2")
                .with_file(path.to_path_buf())
                .with_element(&element_html);
            if let Some(line) = locate {
                diagnostic = diagnostic.with_line(line);
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}
